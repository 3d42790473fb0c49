//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::TomlConfig;
use super::toml::default_config_template;

mod parsing {
    use super::*;

    #[test]
    fn empty_content_parses_with_all_sections_defaulted() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.server.listen.is_none());
        assert!(config.server.request_timeout.is_none());
        assert!(!config.server.verbose);
        assert!(config.webhook.pipeline_url.is_none());
        assert!(config.webhook.scheduling_url.is_none());
    }

    #[test]
    fn full_configuration_parses() {
        let config = TomlConfig::parse(
            r#"
            [server]
            listen = "0.0.0.0:9000"
            request_timeout = 10
            verbose = true

            [webhook]
            pipeline_url = "https://n8n.example.com/webhook/screen"
            scheduling_url = "https://n8n.example.com/webhook/schedule"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.listen.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(config.server.request_timeout, Some(10));
        assert!(config.server.verbose);
        assert_eq!(
            config.webhook.pipeline_url.as_deref(),
            Some("https://n8n.example.com/webhook/screen")
        );
        assert_eq!(
            config.webhook.scheduling_url.as_deref(),
            Some("https://n8n.example.com/webhook/schedule")
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = TomlConfig::parse(
            r"
            [server]
            port = 9000
            ",
        );

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        assert!(matches!(
            TomlConfig::parse("[server"),
            Err(ConfigError::TomlParse(_))
        ));
    }
}

mod file_loading {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_file_is_a_read_error() {
        let result = TomlConfig::load(Path::new("/nonexistent/n8n-relay.toml"));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relay.toml");
        std::fs::write(&path, "[server]\nrequest_timeout = 5\n").unwrap();

        let config = TomlConfig::load(&path).unwrap();
        assert_eq!(config.server.request_timeout, Some(5));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses_as_valid_configuration() {
        let config = TomlConfig::parse(default_config_template()).unwrap();

        assert_eq!(config.server.listen.as_deref(), Some("127.0.0.1:8787"));
        assert_eq!(config.server.request_timeout, Some(30));
        // The secret URLs stay commented out in the template.
        assert!(config.webhook.pipeline_url.is_none());
        assert!(config.webhook.scheduling_url.is_none());
    }
}
