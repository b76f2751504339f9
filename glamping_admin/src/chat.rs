//! Live support chat.
//!
//! Sessions exchange [`ChatEvent`]s on a named channel through a
//! [`ChatTransport`]. [`LocalChatHub`] is an in-process transport that fans
//! events out to every session joined to the same channel, including the
//! sender.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use glamping_api::types::{ChatEvent, SUPPORT_CHANNEL};
use thiserror::Error;
use tokio::sync::broadcast;

pub const MAX_MESSAGE_LENGTH: usize = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("not joined to a channel")]
    NotJoined,
    #[error("chat connection closed")]
    Closed,
    #[error("message is empty")]
    EmptyMessage,
    #[error("message exceeds {0} characters")]
    TooLong(usize),
}

/// Bidirectional event stream bound to one channel at a time.
pub trait ChatTransport {
    fn join(&mut self, channel: &str) -> impl Future<Output = Result<(), ChatError>> + Send;

    fn send(&self, event: ChatEvent) -> impl Future<Output = Result<(), ChatError>> + Send;

    /// Next event on the joined channel; `None` once the channel is closed.
    fn receive(&mut self) -> impl Future<Output = Option<ChatEvent>> + Send;
}

/// In-process channel registry backed by `tokio::sync::broadcast`.
#[derive(Clone)]
pub struct LocalChatHub {
    capacity: usize,
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<ChatEvent>>>>,
}

impl LocalChatHub {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn sender(&self, channel: &str) -> broadcast::Sender<ChatEvent> {
        let mut channels = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        channels
            .entry(channel.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }

    pub fn connect(&self) -> LocalTransport {
        LocalTransport {
            hub: self.clone(),
            joined: None,
        }
    }
}

impl Default for LocalChatHub {
    fn default() -> Self {
        Self::new(64)
    }
}

pub struct LocalTransport {
    hub: LocalChatHub,
    joined: Option<(broadcast::Sender<ChatEvent>, broadcast::Receiver<ChatEvent>)>,
}

impl ChatTransport for LocalTransport {
    async fn join(&mut self, channel: &str) -> Result<(), ChatError> {
        let sender = self.hub.sender(channel);
        let receiver = sender.subscribe();
        self.joined = Some((sender, receiver));
        tracing::debug!("joined chat channel {}", channel);
        Ok(())
    }

    async fn send(&self, event: ChatEvent) -> Result<(), ChatError> {
        let (sender, _) = self.joined.as_ref().ok_or(ChatError::NotJoined)?;
        sender.send(event).map(|_| ()).map_err(|_| ChatError::Closed)
    }

    async fn receive(&mut self) -> Option<ChatEvent> {
        let (_, receiver) = self.joined.as_mut()?;
        loop {
            match receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("chat receiver lagged, skipped {} event(s)", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// One user's view of the support channel.
pub struct ChatSession<T> {
    transport: T,
    user: String,
    history: Vec<ChatEvent>,
}

impl<T: ChatTransport> ChatSession<T> {
    /// Joins the support channel as `user`.
    pub async fn open(mut transport: T, user: &str) -> Result<Self, ChatError> {
        transport.join(SUPPORT_CHANNEL).await?;
        Ok(Self {
            transport,
            user: user.to_string(),
            history: Vec::new(),
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn history(&self) -> &[ChatEvent] {
        &self.history
    }

    /// Sends `message` stamped with the current time.
    pub async fn send(&self, message: &str) -> Result<ChatEvent, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(ChatError::TooLong(MAX_MESSAGE_LENGTH));
        }
        let event = ChatEvent {
            user: self.user.clone(),
            message: message.to_string(),
            timestamp: Utc::now(),
        };
        self.transport.send(event.clone()).await?;
        Ok(event)
    }

    /// Waits for the next event and records it in the history.
    pub async fn next_event(&mut self) -> Option<&ChatEvent> {
        let event = self.transport.receive().await?;
        self.history.push(event);
        self.history.last()
    }
}
