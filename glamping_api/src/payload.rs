//! Request bodies for create/update calls.
//!
//! Plain entities are sent as JSON. Entities that carry images are sent as
//! `multipart/form-data`: scalar fields become text parts, nested structures
//! (price windows, line items, kept image URLs) become JSON-string parts and
//! new images become file parts named `images`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{
    CustomPrice, DiscountCode, Experience, ExperienceItem, Faq, Glamping, GlampingItem,
    PaymentStatus, Product, ProductItem, Promotion, Reserve, ReserveStatus, Resource, Review,
    Role, User,
};
use crate::Error;

/// A validated request body ready to be sent to a resource endpoint.
pub trait Payload {
    /// Resource the payload creates or updates.
    type Target: Resource;

    fn to_body(&self) -> Result<RequestBody, Error>;
}

pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

/// A newly attached file.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// Text and file parts of a multipart request, kept as plain data so the
/// body can be inspected and rebuilt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, Upload)>,
}

impl MultipartBody {
    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds `value` serialized as a JSON string part.
    pub fn json<T: Serialize>(mut self, name: &str, value: &T) -> Result<Self, Error> {
        let encoded = serde_json::to_string(value).map_err(|e| Error::Encode(e.to_string()))?;
        self.fields.push((name.to_string(), encoded));
        Ok(self)
    }

    pub fn files(mut self, name: &str, uploads: &[Upload]) -> Self {
        for upload in uploads {
            self.files.push((name.to_string(), upload.clone()));
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form, Error> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for (name, upload) in self.files {
            let mut part = reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
            if let Some(mime) = upload.mime {
                part = part
                    .mime_str(&mime)
                    .map_err(|e| Error::Encode(format!("invalid mime type '{}': {}", mime, e)))?;
            }
            form = form.part(name, part);
        }
        Ok(form)
    }
}

fn json_body<T: Serialize>(value: &T) -> Result<RequestBody, Error> {
    serde_json::to_value(value)
        .map(RequestBody::Json)
        .map_err(|e| Error::Encode(e.to_string()))
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    /// Only sent when creating an account or resetting its password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Payload for UserPayload {
    type Target = User;

    fn to_body(&self) -> Result<RequestBody, Error> {
        json_body(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlampingPayload {
    pub title: String,
    pub description: String,
    pub capacity: u32,
    pub price: f64,
    pub services: Vec<String>,
    pub custom_prices: Vec<CustomPrice>,
    /// Previously uploaded image URLs to keep.
    pub images: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Payload for GlampingPayload {
    type Target = Glamping;

    fn to_body(&self) -> Result<RequestBody, Error> {
        let body = MultipartBody::default()
            .text("title", &self.title)
            .text("description", &self.description)
            .text("capacity", self.capacity)
            .text("price", self.price)
            .json("services", &self.services)?
            .json("customPrices", &self.custom_prices)?
            .json("images", &self.images)?
            .files("images", &self.uploads);
        Ok(RequestBody::Multipart(body))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub custom_prices: Vec<CustomPrice>,
    pub images: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Payload for ProductPayload {
    type Target = Product;

    fn to_body(&self) -> Result<RequestBody, Error> {
        let body = MultipartBody::default()
            .text("name", &self.name)
            .text("description", &self.description)
            .text("price", self.price)
            .text("stock", self.stock)
            .json("customPrices", &self.custom_prices)?
            .json("images", &self.images)?
            .files("images", &self.uploads);
        Ok(RequestBody::Multipart(body))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperiencePayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32,
    pub limit_age: u32,
    pub qty_people: u32,
    pub custom_prices: Vec<CustomPrice>,
    pub images: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Payload for ExperiencePayload {
    type Target = Experience;

    fn to_body(&self) -> Result<RequestBody, Error> {
        let body = MultipartBody::default()
            .text("name", &self.name)
            .text("description", &self.description)
            .text("price", self.price)
            .text("duration", self.duration)
            .text("limitAge", self.limit_age)
            .text("qtyPeople", self.qty_people)
            .json("customPrices", &self.custom_prices)?
            .json("images", &self.images)?
            .files("images", &self.uploads);
        Ok(RequestBody::Multipart(body))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PromotionPayload {
    pub title: String,
    pub description: String,
    pub expired_date: NaiveDate,
    pub qty_people: u32,
    pub stock: u32,
    pub gross_import: f64,
    pub discount: f64,
    pub net_import: f64,
    pub glampings: Vec<GlampingItem>,
    pub products: Vec<ProductItem>,
    pub experiences: Vec<ExperienceItem>,
    pub images: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Payload for PromotionPayload {
    type Target = Promotion;

    fn to_body(&self) -> Result<RequestBody, Error> {
        let body = MultipartBody::default()
            .text("title", &self.title)
            .text("description", &self.description)
            .text("expiredDate", self.expired_date)
            .text("qtyPeople", self.qty_people)
            .text("stock", self.stock)
            .text("grossImport", self.gross_import)
            .text("discount", self.discount)
            .text("netImport", self.net_import)
            .json("glampings", &self.glampings)?
            .json("products", &self.products)?
            .json("experiences", &self.experiences)?
            .json("images", &self.images)?
            .files("images", &self.uploads);
        Ok(RequestBody::Multipart(body))
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCodePayload {
    pub code: String,
    pub discount: u8,
    pub expired_date: NaiveDate,
    pub stock: u32,
}

impl Payload for DiscountCodePayload {
    type Target = DiscountCode;

    fn to_body(&self) -> Result<RequestBody, Error> {
        json_body(self)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservePayload {
    pub user_id: i64,
    pub gross_import: f64,
    pub discount: f64,
    pub net_import: f64,
    pub payment_status: PaymentStatus,
    pub reserve_status: ReserveStatus,
    pub glampings: Vec<GlampingItem>,
    pub products: Vec<ProductItem>,
    pub experiences: Vec<ExperienceItem>,
}

impl Payload for ReservePayload {
    type Target = Reserve;

    fn to_body(&self) -> Result<RequestBody, Error> {
        json_body(self)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReviewPayload {
    pub name: String,
    pub title: String,
    pub review: String,
    pub stars: u8,
    pub date: NaiveDate,
}

impl Payload for ReviewPayload {
    type Target = Review;

    fn to_body(&self) -> Result<RequestBody, Error> {
        json_body(self)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FaqPayload {
    pub question: String,
    pub answer: String,
}

impl Payload for FaqPayload {
    type Target = Faq;

    fn to_body(&self) -> Result<RequestBody, Error> {
        json_body(self)
    }
}
