//! Tests for `Notifier` and `PushoverApi`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{
    HttpClient, HttpError, HttpRequest, HttpResponse, MESSAGES_URL, NotificationRequest,
    Notifier, NotifyError, Priority, PushoverApi,
};

/// Mock HTTP client that replays a single outcome after an optional delay.
#[derive(Debug)]
struct MockClient {
    outcome: Mutex<Option<Result<HttpResponse, HttpError>>>,
    delay: Duration,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(outcome: Result<HttpResponse, HttpError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn status(status: http::StatusCode, body: &str) -> Self {
        Self::new(Ok(HttpResponse::new(status, body.as_bytes().to_vec())))
    }

    fn ok() -> Self {
        Self::status(http::StatusCode::OK, "")
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
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
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome
            .lock()
            .unwrap()
            .take()
            .expect("mock called more than once")
    }
}

fn endpoint() -> url::Url {
    url::Url::parse(MESSAGES_URL).unwrap()
}

fn api(client: MockClient) -> PushoverApi<MockClient> {
    PushoverApi::new(client, endpoint(), Duration::from_secs(30))
}

fn notification() -> NotificationRequest {
    NotificationRequest::new("app-token", "user-key", "Bad stuff happened")
}

mod builder {
    use super::*;

    #[test]
    fn new_keeps_endpoint_and_timeout() {
        let api = PushoverApi::new(MockClient::ok(), endpoint(), Duration::from_secs(5));

        assert_eq!(api.timeout(), Duration::from_secs(5));
        assert_eq!(api.endpoint().as_str(), MESSAGES_URL);
    }
}

mod send {
    use super::*;

    #[tokio::test]
    async fn ok_response_succeeds_with_single_post() {
        let api = api(MockClient::ok());

        api.send(&notification()).await.unwrap();

        assert_eq!(api.client().calls(), 1);
        let requests = api.client().captured_requests();
        let request = &requests[0];
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.url.as_str(), MESSAGES_URL);
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }

    #[tokio::test]
    async fn body_is_form_encoded_request() {
        let api = api(MockClient::ok());
        let notification = notification().with_priority(Priority::Highest, 120, 600);

        api.send(&notification).await.unwrap();

        let body = api.client().captured_requests()[0].body.clone().unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "token=app-token&user=user-key&message=Bad+stuff+happened\
             &priority=2&retry=120&expire=600"
        );
    }

    #[tokio::test]
    async fn server_error_reports_status_and_body() {
        let client = MockClient::status(http::StatusCode::INTERNAL_SERVER_ERROR, "error");
        let api = api(client);

        let err = api.send(&notification()).await.unwrap_err();

        assert!(matches!(
            err,
            NotifyError::NonSuccessStatus { status, ref body }
                if status == http::StatusCode::INTERNAL_SERVER_ERROR && body == "error"
        ));
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("\"error\""));
        assert!(message.contains("expected 200 ok"));
    }

    #[tokio::test]
    async fn non_200_success_status_is_rejected() {
        let client = MockClient::status(http::StatusCode::NO_CONTENT, "");
        let api = api(client);

        let err = api.send(&notification()).await.unwrap_err();

        assert!(matches!(err, NotifyError::NonSuccessStatus { .. }));
    }

    #[tokio::test]
    async fn transport_error_is_wrapped() {
        let client = MockClient::new(Err(HttpError::Connection("connection refused".into())));
        let api = api(client);

        let err = api.send(&notification()).await.unwrap_err();

        assert!(matches!(err, NotifyError::Http(HttpError::Connection(_))));
        assert!(err.to_string().starts_with("api request: "));
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(api.client().calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_response_times_out() {
        let client = MockClient::ok().with_delay(Duration::from_secs(60));
        let api = PushoverApi::new(client, endpoint(), Duration::from_secs(2));

        let err = api.send(&notification()).await.unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "api request: Request timed out");
    }

    #[tokio::test(start_paused = true)]
    async fn response_within_timeout_succeeds() {
        let client = MockClient::ok().with_delay(Duration::from_secs(1));
        let api = PushoverApi::new(client, endpoint(), Duration::from_secs(2));

        api.send(&notification()).await.unwrap();
    }
}
