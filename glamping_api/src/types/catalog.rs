//! Bookable catalog entities: glampings (tents), products and experiences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::meta::Resource;

/// Whether a resource is offered to customers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResourceStatus::Active => "ACTIVE",
                ResourceStatus::Inactive => "INACTIVE",
            }
        )
    }
}

impl std::str::FromStr for ResourceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(ResourceStatus::Active),
            "INACTIVE" => Ok(ResourceStatus::Inactive),
            _ => Err(()),
        }
    }
}

/// A price override for a date window (e.g. high season).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomPrice {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub price: f64,
}

/// A tent or cabin that can be booked per night.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Glamping {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Base price per night.
    pub price: f64,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub custom_prices: Vec<CustomPrice>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: ResourceStatus,
}

impl Resource for Glamping {
    const BASE_PATH: &'static str = "glampings";
    const LIST_KEY: &'static str = "glampings";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A sellable product (firewood, breakfast basket, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub custom_prices: Vec<CustomPrice>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: ResourceStatus,
}

impl Resource for Product {
    const BASE_PATH: &'static str = "products";
    const LIST_KEY: &'static str = "products";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A guided activity booked per person.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Duration in minutes.
    pub duration: u32,
    /// Minimum participant age.
    pub limit_age: u32,
    pub qty_people: u32,
    #[serde(default)]
    pub custom_prices: Vec<CustomPrice>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: ResourceStatus,
}

impl Resource for Experience {
    const BASE_PATH: &'static str = "experiences";
    const LIST_KEY: &'static str = "experiences";

    fn id(&self) -> i64 {
        self.id
    }
}
