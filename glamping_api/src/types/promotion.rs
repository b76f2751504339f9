//! Promotions, discount codes and the nested line items they carry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::ResourceStatus;
use super::meta::Resource;

/// A glamping attached to a promotion or reservation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlampingItem {
    pub id_glamping: i64,
    #[serde(default)]
    pub name: String,
    pub nights: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

/// A product attached to a promotion or reservation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub id_product: i64,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// An experience attached to a promotion or reservation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id_experience: i64,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<NaiveDate>,
}

/// A bundle of glampings, products and experiences sold at a discount.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub expired_date: NaiveDate,
    pub qty_people: u32,
    pub stock: u32,
    pub gross_import: f64,
    /// Discount percentage applied to `gross_import`.
    pub discount: f64,
    pub net_import: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub glampings: Vec<GlampingItem>,
    #[serde(default)]
    pub products: Vec<ProductItem>,
    #[serde(default)]
    pub experiences: Vec<ExperienceItem>,
}

impl Resource for Promotion {
    const BASE_PATH: &'static str = "promotions";
    const LIST_KEY: &'static str = "promotions";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A redeemable code granting a percentage off a reservation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    pub id: i64,
    pub code: String,
    pub discount: u8,
    pub expired_date: NaiveDate,
    pub stock: u32,
    #[serde(default)]
    pub status: ResourceStatus,
}

impl Resource for DiscountCode {
    const BASE_PATH: &'static str = "discounts";
    const LIST_KEY: &'static str = "discounts";

    fn id(&self) -> i64 {
        self.id
    }
}
