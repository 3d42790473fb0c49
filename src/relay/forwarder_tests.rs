//! Tests for `WebhookRelay` forwarding behavior.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use super::{
    Flow, HttpClient, HttpError, HttpRequest, HttpResponse, RelayError, RelayOutcome, RelayTargets,
    WebhookRelay,
};

/// Mock HTTP client that returns a configurable sequence of responses
/// and records every request it receives.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        })
    }

    fn json_ok(body: &str) -> Arc<Self> {
        Self::new(vec![Ok(HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        ))])
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

fn both_targets() -> RelayTargets {
    RelayTargets {
        pipeline: Some(url::Url::parse("https://n8n.example.com/webhook/screen").unwrap()),
        scheduling: Some(url::Url::parse("https://n8n.example.com/webhook/schedule").unwrap()),
    }
}

mod target_selection {
    use super::*;

    #[test]
    fn url_for_picks_the_flow_url() {
        let targets = both_targets();

        assert_eq!(
            targets.url_for(Flow::Pipeline).unwrap().path(),
            "/webhook/screen"
        );
        assert_eq!(
            targets.url_for(Flow::Scheduling).unwrap().path(),
            "/webhook/schedule"
        );
    }

    #[test]
    fn default_targets_are_unconfigured() {
        let targets = RelayTargets::default();
        assert!(targets.url_for(Flow::Pipeline).is_none());
        assert!(targets.url_for(Flow::Scheduling).is_none());
    }
}

mod unconfigured_flow {
    use super::*;

    #[tokio::test]
    async fn missing_pipeline_url_short_circuits_without_network() {
        let client = MockClient::json_ok("{}");
        let relay = WebhookRelay::new(Arc::clone(&client), RelayTargets::default());

        let result = relay.forward(Flow::Pipeline, &json!({})).await;

        assert!(matches!(
            result,
            Err(RelayError::NotConfigured(Flow::Pipeline))
        ));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn missing_scheduling_url_names_the_scheduling_endpoint() {
        let client = MockClient::json_ok("{}");
        let targets = RelayTargets {
            scheduling: None,
            ..both_targets()
        };
        let relay = WebhookRelay::new(Arc::clone(&client), targets);

        let error = relay
            .forward(Flow::Scheduling, &json!({}))
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "N8N scheduling webhook URL not configured"
        );
        assert_eq!(client.calls(), 0);
    }
}

mod forwarding {
    use super::*;

    #[tokio::test]
    async fn issues_exactly_one_json_post_to_the_target() {
        let client = MockClient::json_ok(r#"{"ok":true}"#);
        let relay = WebhookRelay::new(Arc::clone(&client), both_targets());
        let body = json!({
            "resume_text": "text",
            "job_description": "desc",
            "interviewer_calendar_id": "primary",
        });

        let outcome = relay.forward(Flow::Pipeline, &body).await.unwrap();

        assert_eq!(outcome, RelayOutcome::Success(json!({"ok": true})));
        assert_eq!(client.calls(), 1);

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(
            requests[0].url.as_str(),
            "https://n8n.example.com/webhook/screen"
        );
        assert_eq!(
            requests[0].headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let sent: serde_json::Value =
            serde_json::from_slice(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, body);
    }

    #[tokio::test]
    async fn scheduling_flow_hits_the_scheduling_url() {
        let client = MockClient::json_ok("{}");
        let relay = WebhookRelay::new(Arc::clone(&client), both_targets());

        relay
            .forward(Flow::Scheduling, &json!({"candidate_email": "a@b.c"}))
            .await
            .unwrap();

        let requests = client.captured_requests();
        assert_eq!(
            requests[0].url.as_str(),
            "https://n8n.example.com/webhook/schedule"
        );
    }

    #[tokio::test]
    async fn transport_failure_is_classified_not_propagated() {
        let client = MockClient::new(vec![Err(HttpError::Timeout)]);
        let relay = WebhookRelay::new(Arc::clone(&client), both_targets());

        let outcome = relay.forward(Flow::Pipeline, &json!({})).await.unwrap();

        assert!(matches!(outcome, RelayOutcome::TransportFailure { .. }));
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_outcomes() {
        let fixed = || {
            Ok(HttpResponse::new(
                http::StatusCode::OK,
                http::HeaderMap::new(),
                br#"{"score":87}"#.to_vec(),
            ))
        };
        let client = MockClient::new(vec![fixed(), fixed()]);
        let relay = WebhookRelay::new(Arc::clone(&client), both_targets());
        let body = json!({"resume_text": "text"});

        let first = relay.forward(Flow::Pipeline, &body).await.unwrap();
        let second = relay.forward(Flow::Pipeline, &body).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.calls(), 2);
    }
}
