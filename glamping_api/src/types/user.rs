//! User accounts and sign-in payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::ResourceStatus;
use super::meta::Resource;

/// Access role of an account.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Supervisor,
    #[default]
    Client,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Role::Admin => "ADMIN",
                Role::Supervisor => "SUPERVISOR",
                Role::Client => "CLIENT",
            }
        )
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "supervisor" => Ok(Role::Supervisor),
            "client" => Ok(Role::Client),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for User {
    const BASE_PATH: &'static str = "users";
    const LIST_KEY: &'static str = "users";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /auth/signin`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Profile and bearer token returned by a successful sign-in.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Session {
    pub user: User,
    pub token: String,
}
