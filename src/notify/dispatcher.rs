//! Notifier trait and the Pushover messages API implementation.

use std::time::Duration;

use http::HeaderValue;
use http::header::CONTENT_TYPE;

use super::{HttpClient, HttpError, HttpRequest, NotificationRequest, NotifyError};

/// Messages endpoint of the Pushover API.
pub const MESSAGES_URL: &str = "https://api.pushover.net/1/messages.json";

/// Trait for delivering a notification to a remote service.
pub trait Notifier: Send + Sync {
    /// Delivers one notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the request fails or the remote service
    /// rejects it. No retry is attempted.
    fn send(
        &self,
        request: &NotificationRequest,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;
}

/// Posts notifications to the Pushover messages endpoint.
///
/// Each call issues exactly one form-encoded POST, bounded by the
/// configured timeout.
///
/// # Example
///
/// ```
/// use pushover::notify::{PushoverApi, ReqwestClient, MESSAGES_URL};
/// use std::time::Duration;
/// use url::Url;
///
/// let endpoint = Url::parse(MESSAGES_URL).unwrap();
/// let api = PushoverApi::new(ReqwestClient::new(), endpoint, Duration::from_secs(10));
/// assert_eq!(api.timeout(), Duration::from_secs(10));
/// ```
#[derive(Debug)]
pub struct PushoverApi<H> {
    client: H,
    endpoint: url::Url,
    timeout: Duration,
}

impl<H> PushoverApi<H> {
    /// Creates a new API handle.
    ///
    /// `timeout` bounds the whole request/response cycle.
    #[must_use]
    pub const fn new(client: H, endpoint: url::Url, timeout: Duration) -> Self {
        Self {
            client,
            endpoint,
            timeout,
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<H: HttpClient> PushoverApi<H> {
    fn build_request(&self, request: &NotificationRequest) -> HttpRequest {
        HttpRequest::post(self.endpoint.clone())
            .with_header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .with_body(request.encode().into_bytes())
    }
}

impl<H: HttpClient> Notifier for PushoverApi<H> {
    async fn send(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let http_request = self.build_request(request);

        let response = tokio::time::timeout(self.timeout, self.client.request(http_request))
            .await
            .map_err(|_| HttpError::Timeout)??;

        if response.is_ok() {
            tracing::debug!(status = %response.status, "Notification accepted");
            return Ok(());
        }

        Err(NotifyError::NonSuccessStatus {
            status: response.status,
            body: response.body_text(),
        })
    }
}
