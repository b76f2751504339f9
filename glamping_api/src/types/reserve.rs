//! Reservations placed by customers or by staff on their behalf.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::Resource;
use super::promotion::{ExperienceItem, GlampingItem, ProductItem};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PaymentStatus::Unpaid => "UNPAID",
                PaymentStatus::Paid => "PAID",
            }
        )
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UNPAID" => Ok(PaymentStatus::Unpaid),
            "PAID" => Ok(PaymentStatus::Paid),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReserveStatus {
    #[default]
    New,
    Confirmed,
    Complete,
    Canceled,
}

impl std::fmt::Display for ReserveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReserveStatus::New => "NEW",
                ReserveStatus::Confirmed => "CONFIRMED",
                ReserveStatus::Complete => "COMPLETE",
                ReserveStatus::Canceled => "CANCELED",
            }
        )
    }
}

impl std::str::FromStr for ReserveStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NEW" => Ok(ReserveStatus::New),
            "CONFIRMED" => Ok(ReserveStatus::Confirmed),
            "COMPLETE" => Ok(ReserveStatus::Complete),
            "CANCELED" => Ok(ReserveStatus::Canceled),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reserve {
    pub id: i64,
    pub user_id: i64,
    pub gross_import: f64,
    pub discount: f64,
    pub net_import: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub reserve_status: ReserveStatus,
    pub date_sale: DateTime<Utc>,
    #[serde(default)]
    pub glampings: Vec<GlampingItem>,
    #[serde(default)]
    pub products: Vec<ProductItem>,
    #[serde(default)]
    pub experiences: Vec<ExperienceItem>,
}

impl Resource for Reserve {
    const BASE_PATH: &'static str = "reserves";
    const LIST_KEY: &'static str = "reserves";

    fn id(&self) -> i64 {
        self.id
    }
}
