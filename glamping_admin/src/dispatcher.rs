//! Create/update/delete/enable/disable with user-facing notifications.
//!
//! Every mutation ends in exactly one of two ways. On success a success
//! notification is emitted, the list is refetched from page 1 and the view
//! returns to the list. On failure the error is classified by
//! [`classify_error`], one notification per message is emitted and the view
//! is left as it was so the form can be corrected and resubmitted.

use std::sync::{Mutex, PoisonError};

use glamping_api::payload::Payload;
use glamping_api::types::{MutationResponse, Resource};
use glamping_api::{Client, Error};
use serde::Deserialize;

use crate::list_controller::{ListController, ResourceSource, ViewMode};
use crate::validation::{FormState, Validate};

/// Message keys of the generic notifications.
pub mod messages {
    pub const CREATED: &str = "notification.created";
    pub const UPDATED: &str = "notification.updated";
    pub const DELETED: &str = "notification.deleted";
    pub const ENABLED: &str = "notification.enabled";
    pub const DISABLED: &str = "notification.disabled";
    pub const INVALID_FORM: &str = "notification.invalid_form";
    pub const NETWORK: &str = "notification.network";
    pub const UNKNOWN: &str = "notification.unknown";
}

/// User-visible classification of a failed backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The backend rejected the payload field by field.
    Validation(Vec<String>),
    /// The backend answered with an error status and a single message.
    Business { status: u16, message: String },
    /// The backend could not be reached.
    Network,
    Unknown(String),
}

impl FailureKind {
    /// Notification texts for this failure, one per validation message.
    pub fn messages(&self) -> Vec<String> {
        match self {
            FailureKind::Validation(msgs) => msgs.clone(),
            FailureKind::Business { status, message } if message.is_empty() => {
                vec![format!("HTTP {}", status)]
            }
            FailureKind::Business { status, message } => {
                vec![format!("HTTP {}: {}", status, message)]
            }
            FailureKind::Network => vec![messages::NETWORK.to_string()],
            FailureKind::Unknown(_) => vec![messages::UNKNOWN.to_string()],
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Unknown(detail) => write!(f, "unexpected error: {}", detail),
            other => write!(f, "{}", other.messages().join("; ")),
        }
    }
}

/// Longest slice of a non-JSON error body shown to the user.
const MAX_RAW_MESSAGE: usize = 200;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<FieldError>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct FieldError {
    msg: String,
}

/// Maps an API error to the failure the user is told about.
///
/// Error bodies of the form `{"errors": [{"msg": ...}]}` become
/// [`FailureKind::Validation`]; any other error status becomes
/// [`FailureKind::Business`] with the body's `message` or, failing that, the
/// start of the raw body text.
pub fn classify_error(error: &Error) -> FailureKind {
    match error {
        Error::HttpStatus { status, body } => match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if !parsed.errors.is_empty() => {
                FailureKind::Validation(parsed.errors.into_iter().map(|e| e.msg).collect())
            }
            Ok(parsed) => FailureKind::Business {
                status: *status,
                message: parsed.message.unwrap_or_default(),
            },
            Err(_) => FailureKind::Business {
                status: *status,
                message: body.trim().chars().take(MAX_RAW_MESSAGE).collect(),
            },
        },
        Error::Network(_) => FailureKind::Network,
        other => FailureKind::Unknown(other.to_string()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Self {
            level: Level::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            level: Level::Error,
            message: message.to_string(),
        }
    }
}

/// Sink for transient notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Records notifications in order of emission.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        tracing::debug!("notify {:?}: {}", notification.level, notification.message);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

/// Sends mutations and reports their outcome.
pub struct MutationDispatcher<N> {
    client: Client,
    notifier: N,
}

impl<N: Notifier> MutationDispatcher<N> {
    pub fn new(client: Client, notifier: N) -> Self {
        Self { client, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub async fn create<P, S>(&self, list: &ListController<P::Target, S>, payload: &P) -> bool
    where
        P: Payload,
        P::Target: Clone,
        S: ResourceSource<P::Target>,
    {
        let result = self.client.create(payload).await;
        self.finish(list, messages::CREATED, result).await
    }

    pub async fn update<P, S>(
        &self,
        list: &ListController<P::Target, S>,
        id: i64,
        payload: &P,
    ) -> bool
    where
        P: Payload,
        P::Target: Clone,
        S: ResourceSource<P::Target>,
    {
        let result = self.client.update(id, payload).await;
        self.finish(list, messages::UPDATED, result).await
    }

    pub async fn delete<R, S>(&self, list: &ListController<R, S>, id: i64) -> bool
    where
        R: Resource + Clone,
        S: ResourceSource<R>,
    {
        let result = self.client.delete::<R>(id).await;
        self.finish(list, messages::DELETED, result).await
    }

    pub async fn enable<R, S>(&self, list: &ListController<R, S>, id: i64) -> bool
    where
        R: Resource + Clone,
        S: ResourceSource<R>,
    {
        let result = self.client.enable::<R>(id).await;
        self.finish(list, messages::ENABLED, result).await
    }

    pub async fn disable<R, S>(&self, list: &ListController<R, S>, id: i64) -> bool
    where
        R: Resource + Clone,
        S: ResourceSource<R>,
    {
        let result = self.client.disable::<R>(id).await;
        self.finish(list, messages::DISABLED, result).await
    }

    /// Validates the form and sends it. While editing a selected record the
    /// form updates that record; otherwise it creates a new one.
    ///
    /// A form that fails validation keeps its field errors and nothing is sent.
    pub async fn submit_form<F, S>(
        &self,
        list: &ListController<<F::Payload as Payload>::Target, S>,
        form: &mut FormState<F>,
    ) -> bool
    where
        F: Validate,
        F::Payload: Payload,
        <F::Payload as Payload>::Target: Clone,
        S: ResourceSource<<F::Payload as Payload>::Target>,
    {
        let Some(payload) = form.submit() else {
            tracing::debug!("form rejected with {} field error(s)", form.errors().len());
            self.notifier.notify(Notification {
                level: Level::Warning,
                message: messages::INVALID_FORM.to_string(),
            });
            return false;
        };
        let editing = match list.mode() {
            ViewMode::Edit => list.selected().map(|item| item.id()),
            _ => None,
        };
        match editing {
            Some(id) => self.update(list, id, &payload).await,
            None => self.create(list, &payload).await,
        }
    }

    async fn finish<R, S>(
        &self,
        list: &ListController<R, S>,
        success_key: &str,
        result: Result<MutationResponse, Error>,
    ) -> bool
    where
        R: Resource + Clone,
        S: ResourceSource<R>,
    {
        match result {
            Ok(response) => {
                let message = response.message.as_deref().unwrap_or(success_key);
                self.notifier.notify(Notification::success(message));
                list.back_to_list();
                list.refresh_first_page().await;
                true
            }
            Err(err) => {
                let failure = classify_error(&err);
                if let FailureKind::Unknown(detail) = &failure {
                    tracing::error!("unclassified mutation failure: {}", detail);
                } else {
                    tracing::warn!("mutation failed: {}", failure);
                }
                for message in failure.messages() {
                    self.notifier.notify(Notification::error(&message));
                }
                false
            }
        }
    }
}
