//! Application execution logic.
//!
//! Turns the validated configuration into a notification and posts it
//! once to the Pushover API.

use thiserror::Error;

use pushover::config::ValidatedConfig;
use pushover::notify::{
    MESSAGES_URL, NotificationRequest, Notifier, NotifyError, PushoverApi, ReqwestClient,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The request could not be constructed.
    #[error("making request: {0}")]
    Endpoint(#[source] url::ParseError),

    /// Delivery failed or was rejected.
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Builds the notification described by the configuration.
fn build_request(config: &ValidatedConfig) -> NotificationRequest {
    NotificationRequest::new(&config.app_token, &config.dest_key, &config.message)
        .with_priority(config.priority, config.retry, config.expire)
        .with_title(config.title.as_deref())
}

/// Sends the notification through the given notifier.
async fn deliver<N: Notifier>(notifier: &N, config: &ValidatedConfig) -> Result<(), RunError> {
    let request = build_request(config);

    tracing::debug!(
        priority = %config.priority,
        title = config.title.as_deref().unwrap_or(""),
        "Sending notification"
    );

    notifier.send(&request).await?;
    Ok(())
}

/// Executes a single notification delivery.
///
/// # Errors
///
/// Returns [`RunError`] if the endpoint is invalid, the request fails or
/// times out, or the API does not answer with 200 OK.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let endpoint = url::Url::parse(MESSAGES_URL).map_err(RunError::Endpoint)?;
    let api = PushoverApi::new(ReqwestClient::new(), endpoint, config.timeout);

    deliver(&api, &config).await
}
