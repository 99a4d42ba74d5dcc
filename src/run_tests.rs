//! Tests for the run module.

use std::sync::Mutex;

use pushover::config::{Cli, TomlConfig};
use pushover::notify::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::*;

/// Mock HTTP client that records requests and answers with a fixed status.
struct RecordingClient {
    status: http::StatusCode,
    body: &'static str,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingClient {
    fn new(status: http::StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn sent_bodies(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| String::from_utf8(r.body.clone().unwrap_or_default()).unwrap())
            .collect()
    }
}

impl HttpClient for RecordingClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        Ok(HttpResponse::new(self.status, self.body.as_bytes().to_vec()))
    }
}

fn make_config(args: &[&str], file: &str) -> ValidatedConfig {
    let mut full_args = vec!["pushover"];
    full_args.extend(args);
    let cli = Cli::parse_from_iter(full_args);
    let toml = TomlConfig::parse(file).unwrap();
    ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap()
}

const CREDENTIALS: &str = r#"
    AppToken = "app"
    DestKey = "dest"
"#;

fn api(client: RecordingClient) -> PushoverApi<RecordingClient> {
    PushoverApi::new(
        client,
        url::Url::parse(MESSAGES_URL).unwrap(),
        std::time::Duration::from_secs(30),
    )
}

mod run_error {
    use super::*;

    #[test]
    fn endpoint_error_mentions_request() {
        let error = RunError::Endpoint(url::ParseError::EmptyHost);
        assert!(error.to_string().starts_with("making request: "));
    }

    #[test]
    fn notify_error_is_transparent() {
        let error = RunError::from(NotifyError::Http(HttpError::Timeout));
        assert_eq!(error.to_string(), "api request: Request timed out");
    }
}

mod build {
    use super::*;

    #[test]
    fn normal_priority_request_has_only_required_fields() {
        let config = make_config(&["Bad", "stuff", "happened"], CREDENTIALS);
        let request = build_request(&config);

        assert_eq!(request.token, "app");
        assert_eq!(request.user, "dest");
        assert_eq!(request.message, "Bad stuff happened");
        assert_eq!(request.priority, None);
        assert_eq!(request.retry, None);
        assert_eq!(request.expire, None);
        assert_eq!(request.title, None);
    }

    #[test]
    fn highest_priority_carries_retry_and_expire() {
        let config = make_config(
            &["--priority", "highest", "--retry", "30", "--expire", "90", "msg"],
            CREDENTIALS,
        );
        let request = build_request(&config);

        assert_eq!(request.priority, Some(2));
        assert_eq!(request.retry, Some(30));
        assert_eq!(request.expire, Some(90));
    }

    #[test]
    fn high_priority_drops_retry_and_expire() {
        let config = make_config(&["--priority", "high", "--retry", "30", "msg"], CREDENTIALS);
        let request = build_request(&config);

        assert_eq!(request.priority, Some(1));
        assert_eq!(request.retry, None);
        assert_eq!(request.expire, None);
    }

    #[test]
    fn config_title_is_used() {
        let file = format!("{CREDENTIALS}\nTitle = \"nightly\"");
        let config = make_config(&["msg"], &file);

        assert_eq!(build_request(&config).title.as_deref(), Some("nightly"));
    }
}

mod deliver {
    use super::*;

    #[tokio::test]
    async fn message_words_reach_the_form_body() {
        let config = make_config(&["Bad", "stuff", "happened"], CREDENTIALS);
        let api = api(RecordingClient::new(http::StatusCode::OK, ""));

        deliver(&api, &config).await.unwrap();

        assert_eq!(
            api.client().sent_bodies(),
            vec!["token=app&user=dest&message=Bad+stuff+happened"]
        );
    }

    #[tokio::test]
    async fn server_error_fails_with_status_and_body() {
        let config = make_config(&["msg"], CREDENTIALS);
        let api = api(RecordingClient::new(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            "error",
        ));

        let err = deliver(&api, &config).await.unwrap_err();
        let message = err.to_string();

        assert!(matches!(err, RunError::Notify(NotifyError::NonSuccessStatus { .. })));
        assert!(message.contains("500"));
        assert!(message.contains("error"));
        assert_eq!(api.client().sent_bodies().len(), 1);
    }
}
