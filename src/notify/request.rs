//! Notification request assembly and form encoding.

use url::form_urlencoded;

use super::Priority;

/// A single notification ready to be posted to the messages endpoint.
///
/// Optional fields are `None` when they must not appear in the form body:
/// - `priority` is set only for non-zero codes (absence means normal).
/// - `retry` and `expire` are set only for [`Priority::Highest`].
/// - `title` is set only when non-empty (the API then uses the app name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Application token
    pub token: String,
    /// Destination user or group key
    pub user: String,
    /// Message text
    pub message: String,
    /// Priority code, omitted for normal priority
    pub priority: Option<i8>,
    /// Seconds between re-deliveries of an unacknowledged notification
    pub retry: Option<u32>,
    /// Seconds after which re-delivery stops
    pub expire: Option<u32>,
    /// Title shown instead of the application name
    pub title: Option<String>,
}

impl NotificationRequest {
    /// Creates a normal-priority request without a title.
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        user: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            user: user.into(),
            message: message.into(),
            priority: None,
            retry: None,
            expire: None,
            title: None,
        }
    }

    /// Sets the priority along with the re-delivery parameters.
    ///
    /// `retry` and `expire` are only kept when `priority` requires
    /// acknowledgement; otherwise they are cleared.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority, retry: u32, expire: u32) -> Self {
        let code = priority.code();
        self.priority = if code == 0 { None } else { Some(code) };

        if priority.requires_acknowledgement() {
            self.retry = Some(retry);
            self.expire = Some(expire);
        } else {
            self.retry = None;
            self.expire = None;
        }
        self
    }

    /// Sets the title. An empty or missing title is omitted.
    #[must_use]
    pub fn with_title(mut self, title: Option<impl Into<String>>) -> Self {
        self.title = title.map(Into::into).filter(|t| !t.is_empty());
        self
    }

    /// Returns the form fields in the order they are sent.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("token", self.token.clone()),
            ("user", self.user.clone()),
            ("message", self.message.clone()),
        ];

        if let Some(priority) = self.priority {
            fields.push(("priority", priority.to_string()));
        }
        if let Some(retry) = self.retry {
            fields.push(("retry", retry.to_string()));
        }
        if let Some(expire) = self.expire {
            fields.push(("expire", expire.to_string()));
        }
        if let Some(title) = &self.title {
            fields.push(("title", title.clone()));
        }

        fields
    }

    /// Encodes the request as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields())
            .finish()
    }
}
