//! Tests for HTTP request/response value types.

use super::{HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://n8n.example.com/webhook/screen").unwrap()
}

mod request_building {
    use super::*;

    #[test]
    fn post_sets_method_and_url() {
        let req = HttpRequest::post(test_url());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url.as_str(), "https://n8n.example.com/webhook/screen");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_json_sets_content_type_and_body() {
        let req = HttpRequest::post_json(test_url(), b"{\"ok\":true}".to_vec());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(req.body.as_deref(), Some(b"{\"ok\":true}".as_slice()));
    }

    #[test]
    fn with_header_appends_duplicate_names() {
        let req = HttpRequest::post(test_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            );

        let values: Vec<_> = req.headers.get_all(http::header::ACCEPT).iter().collect();
        assert_eq!(values.len(), 2);
    }
}

mod response_inspection {
    use super::*;

    #[test]
    fn is_success_covers_the_2xx_range() {
        let ok = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![]);
        let created = HttpResponse::new(http::StatusCode::CREATED, http::HeaderMap::new(), vec![]);
        let not_found =
            HttpResponse::new(http::StatusCode::NOT_FOUND, http::HeaderMap::new(), vec![]);

        assert!(ok.is_success());
        assert!(created.is_success());
        assert!(!not_found.is_success());
    }

    #[test]
    fn body_text_decodes_utf8() {
        let response = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            "héllo".as_bytes().to_vec(),
        );
        assert_eq!(response.body_text(), "héllo");
    }

    #[test]
    fn body_text_replaces_invalid_sequences() {
        let response = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xff, 0xfe],
        );
        assert_eq!(response.body_text(), "\u{fffd}\u{fffd}");
    }
}
