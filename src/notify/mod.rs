//! Notification layer for the Pushover messages API.
//!
//! This module provides types and traits for:
//! - Priority tiers and their API codes ([`Priority`])
//! - Assembling and form-encoding a notification ([`NotificationRequest`])
//! - Abstracting HTTP clients ([`HttpClient`], [`HttpRequest`], [`HttpResponse`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Posting the notification with a deadline ([`Notifier`], [`PushoverApi`])

mod client;
mod dispatcher;
mod error;
mod http;
mod priority;
mod request;

#[cfg(test)]
mod dispatcher_tests;

pub use client::ReqwestClient;
pub use dispatcher::{MESSAGES_URL, Notifier, PushoverApi};
pub use error::{HttpError, NotifyError};
pub use self::http::{HttpClient, HttpRequest, HttpResponse, MAX_ERROR_BODY};
pub use priority::{ParsePriorityError, Priority};
pub use request::NotificationRequest;
