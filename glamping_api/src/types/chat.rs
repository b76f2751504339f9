use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel every admin session joins for live support chat.
pub const SUPPORT_CHANNEL: &str = "admin-support";

/// A single chat message exchanged over the support channel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatEvent {
    pub user: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
