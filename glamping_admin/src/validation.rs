//! Form validation for every editable entity.
//!
//! Each form is a plain struct of raw control values (`Option<String>` for
//! text inputs, selects and dates). Validation either produces the typed
//! payload the API client sends, or a [`FormErrors`] map keyed by field name
//! holding a message key per field. Only the first violation of a field is
//! kept, and a required field that is absent counts as a violation.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use glamping_api::payload::{
    DiscountCodePayload, ExperiencePayload, FaqPayload, GlampingPayload, ProductPayload,
    PromotionPayload, ReservePayload, ReviewPayload, Upload, UserPayload,
};
use glamping_api::types::{CustomPrice, PaymentStatus, ReserveStatus, Role, SignInRequest};
use regex::Regex;

use crate::line_items::{apply_discount, LineItemComposer};

/// Message keys rendered next to the offending field.
pub mod keys {
    pub const REQUIRED: &str = "validation.required";
    pub const TOO_LONG: &str = "validation.too_long";
    pub const EMAIL: &str = "validation.email";
    pub const PASSWORD: &str = "validation.password";
    pub const NUMBER: &str = "validation.number";
    pub const POSITIVE: &str = "validation.positive";
    pub const INTEGER: &str = "validation.integer";
    pub const RANGE: &str = "validation.range";
    pub const DATE: &str = "validation.date";
    pub const DATE_ORDER: &str = "validation.date_order";
    pub const OPTION: &str = "validation.option";
    pub const IMAGES: &str = "validation.images";
    pub const ITEMS: &str = "validation.items";
    pub const CODE: &str = "validation.code";
}

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_TEXT_LENGTH: usize = 2000;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Field name → message key. Rebuilt from scratch on every validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Records `key` for `field` unless the field already has an error.
    fn record(&mut self, field: &str, key: &str) {
        self.entries
            .entry(field.to_string())
            .or_insert_with(|| key.to_string());
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(field, key)| format!("{}: {}", field, key))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// A form that can be turned into a typed request payload.
pub trait Validate {
    type Payload;

    fn validate(&self) -> Result<Self::Payload, FormErrors>;
}

/// Whether a form creates a record or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// A form's values together with the errors of its last validation pass.
#[derive(Clone, Debug, Default)]
pub struct FormState<F> {
    pub values: F,
    errors: FormErrors,
}

impl<F: Validate> FormState<F> {
    pub fn new(values: F) -> Self {
        Self {
            values,
            errors: FormErrors::default(),
        }
    }

    /// Clears the previous errors, validates, and keeps the new errors.
    pub fn submit(&mut self) -> Option<F::Payload> {
        self.errors = FormErrors::default();
        match self.values.validate() {
            Ok(payload) => Some(payload),
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z0-9_-]{3,20}$").expect("code pattern is valid"))
}

fn password_rules() -> &'static [Regex; 3] {
    static RULES: OnceLock<[Regex; 3]> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            Regex::new(r"[A-Z]").expect("uppercase pattern is valid"),
            Regex::new(r"[a-z]").expect("lowercase pattern is valid"),
            Regex::new(r"[0-9]").expect("digit pattern is valid"),
        ]
    })
}

/// Accumulates field errors while extracting typed values.
///
/// Extractors return a placeholder on failure so a form can build its payload
/// unconditionally; [`FieldChecker::finish`] discards it if anything failed.
#[derive(Default)]
pub struct FieldChecker {
    errors: FormErrors,
}

impl FieldChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &str, key: &str) {
        self.errors.record(field, key);
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains(field)
    }

    pub fn finish<P>(self, payload: P) -> Result<P, FormErrors> {
        if self.errors.is_empty() {
            Ok(payload)
        } else {
            Err(self.errors)
        }
    }

    fn present<'a>(&mut self, field: &str, raw: &'a Option<String>) -> Option<&'a str> {
        match raw.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Some(value),
            _ => {
                self.fail(field, keys::REQUIRED);
                None
            }
        }
    }

    pub fn required_text(&mut self, field: &str, raw: &Option<String>, max_len: usize) -> String {
        match self.present(field, raw) {
            Some(value) if value.chars().count() > max_len => {
                self.fail(field, keys::TOO_LONG);
                String::new()
            }
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }

    pub fn email(&mut self, field: &str, raw: &Option<String>) -> String {
        let value = self.required_text(field, raw, MAX_TITLE_LENGTH);
        if !value.is_empty() && !email_regex().is_match(&value) {
            self.fail(field, keys::EMAIL);
        }
        value.to_lowercase()
    }

    /// At least 8 characters with an uppercase letter, a lowercase letter and a digit.
    pub fn password(&mut self, field: &str, raw: &Option<String>) -> String {
        let Some(value) = raw.as_deref().filter(|v| !v.is_empty()) else {
            self.fail(field, keys::REQUIRED);
            return String::new();
        };
        let complex = value.chars().count() >= MIN_PASSWORD_LENGTH
            && password_rules().iter().all(|re| re.is_match(value));
        if !complex {
            self.fail(field, keys::PASSWORD);
        }
        value.to_string()
    }

    /// A number strictly greater than zero.
    pub fn positive_number(&mut self, field: &str, raw: &Option<String>) -> f64 {
        let Some(value) = self.present(field, raw) else {
            return 0.0;
        };
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => n,
            Ok(n) if n.is_finite() => {
                self.fail(field, keys::POSITIVE);
                0.0
            }
            _ => {
                self.fail(field, keys::NUMBER);
                0.0
            }
        }
    }

    /// An integer within `min..=max`.
    pub fn integer_in_range(&mut self, field: &str, raw: &Option<String>, min: i64, max: i64) -> i64 {
        let Some(value) = self.present(field, raw) else {
            return min;
        };
        match value.parse::<i64>() {
            Ok(n) if (min..=max).contains(&n) => n,
            Ok(_) => {
                self.fail(field, keys::RANGE);
                min
            }
            Err(_) => {
                self.fail(field, keys::INTEGER);
                min
            }
        }
    }

    pub fn positive_integer(&mut self, field: &str, raw: &Option<String>) -> u32 {
        let n = self.integer_in_range(field, raw, 1, i64::from(u32::MAX));
        u32::try_from(n).unwrap_or(0)
    }

    pub fn non_negative_integer(&mut self, field: &str, raw: &Option<String>) -> u32 {
        let n = self.integer_in_range(field, raw, 0, i64::from(u32::MAX));
        u32::try_from(n).unwrap_or(0)
    }

    /// A date in `YYYY-MM-DD` form.
    pub fn date(&mut self, field: &str, raw: &Option<String>) -> NaiveDate {
        let Some(value) = self.present(field, raw) else {
            return NaiveDate::default();
        };
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_else(|_| {
            self.fail(field, keys::DATE);
            NaiveDate::default()
        })
    }

    pub fn select<T: std::str::FromStr + Default>(&mut self, field: &str, raw: &Option<String>) -> T {
        let Some(value) = self.present(field, raw) else {
            return T::default();
        };
        value.parse::<T>().unwrap_or_else(|_| {
            self.fail(field, keys::OPTION);
            T::default()
        })
    }

    /// At least one image, either kept from earlier uploads or newly attached.
    pub fn images(&mut self, field: &str, existing: &[String], uploads: &[Upload]) {
        let kept = existing.iter().any(|url| !url.trim().is_empty());
        if !kept && uploads.is_empty() {
            self.fail(field, keys::IMAGES);
        }
    }

    /// Validates price windows; every window error is reported on `field`.
    pub fn price_windows(&mut self, field: &str, windows: &[PriceWindowInput]) -> Vec<CustomPrice> {
        let mut prices = Vec::with_capacity(windows.len());
        for window in windows {
            let mut inner = FieldChecker::new();
            let date_from = inner.date("dateFrom", &window.date_from);
            let date_to = inner.date("dateTo", &window.date_to);
            let price = inner.positive_number("price", &window.price);
            if !inner.has_error("dateFrom") && !inner.has_error("dateTo") && date_from > date_to {
                inner.fail("dateTo", keys::DATE_ORDER);
            }
            match inner.finish(CustomPrice {
                date_from,
                date_to,
                price,
            }) {
                Ok(price) => prices.push(price),
                Err(errors) => {
                    if let Some((_, key)) = errors.iter().next() {
                        self.fail(field, key);
                    }
                }
            }
        }
        prices
    }
}

/// Raw inputs of one custom price window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceWindowInput {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub price: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct SignInForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Validate for SignInForm {
    type Payload = SignInRequest;

    fn validate(&self) -> Result<SignInRequest, FormErrors> {
        let mut c = FieldChecker::new();
        let email = c.email("email", &self.email);
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => {
                c.fail("password", keys::REQUIRED);
                String::new()
            }
        };
        c.finish(SignInRequest { email, password })
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserForm {
    pub mode: FormMode,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    /// Required when creating; optional on edit, where it resets the password.
    pub password: Option<String>,
}

impl Validate for UserForm {
    type Payload = UserPayload;

    fn validate(&self) -> Result<UserPayload, FormErrors> {
        let mut c = FieldChecker::new();
        let name = c.required_text("name", &self.name, MAX_TITLE_LENGTH);
        let last_name = c.required_text("lastName", &self.last_name, MAX_TITLE_LENGTH);
        let email = c.email("email", &self.email);
        let role: Role = c.select("role", &self.role);
        let wants_password = self.mode == FormMode::Create
            || self.password.as_deref().is_some_and(|p| !p.is_empty());
        let password = wants_password.then(|| c.password("password", &self.password));
        c.finish(UserPayload {
            name,
            last_name,
            email,
            role,
            password,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct GlampingForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<String>,
    pub price: Option<String>,
    pub services: Vec<String>,
    pub custom_prices: Vec<PriceWindowInput>,
    pub existing_images: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Validate for GlampingForm {
    type Payload = GlampingPayload;

    fn validate(&self) -> Result<GlampingPayload, FormErrors> {
        let mut c = FieldChecker::new();
        let title = c.required_text("title", &self.title, MAX_TITLE_LENGTH);
        let description = c.required_text("description", &self.description, MAX_TEXT_LENGTH);
        let capacity = c.positive_integer("capacity", &self.capacity);
        let price = c.positive_number("price", &self.price);
        let custom_prices = c.price_windows("customPrices", &self.custom_prices);
        c.images("images", &self.existing_images, &self.uploads);
        c.finish(GlampingPayload {
            title,
            description,
            capacity,
            price,
            services: clean_list(&self.services),
            custom_prices,
            images: clean_list(&self.existing_images),
            uploads: self.uploads.clone(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub custom_prices: Vec<PriceWindowInput>,
    pub existing_images: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Validate for ProductForm {
    type Payload = ProductPayload;

    fn validate(&self) -> Result<ProductPayload, FormErrors> {
        let mut c = FieldChecker::new();
        let name = c.required_text("name", &self.name, MAX_TITLE_LENGTH);
        let description = c.required_text("description", &self.description, MAX_TEXT_LENGTH);
        let price = c.positive_number("price", &self.price);
        let stock = c.non_negative_integer("stock", &self.stock);
        let custom_prices = c.price_windows("customPrices", &self.custom_prices);
        c.images("images", &self.existing_images, &self.uploads);
        c.finish(ProductPayload {
            name,
            description,
            price,
            stock,
            custom_prices,
            images: clean_list(&self.existing_images),
            uploads: self.uploads.clone(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExperienceForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub limit_age: Option<String>,
    pub qty_people: Option<String>,
    pub custom_prices: Vec<PriceWindowInput>,
    pub existing_images: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Validate for ExperienceForm {
    type Payload = ExperiencePayload;

    fn validate(&self) -> Result<ExperiencePayload, FormErrors> {
        let mut c = FieldChecker::new();
        let name = c.required_text("name", &self.name, MAX_TITLE_LENGTH);
        let description = c.required_text("description", &self.description, MAX_TEXT_LENGTH);
        let price = c.positive_number("price", &self.price);
        let duration = c.positive_integer("duration", &self.duration);
        let limit_age = c.integer_in_range("limitAge", &self.limit_age, 0, 120) as u32;
        let qty_people = c.positive_integer("qtyPeople", &self.qty_people);
        let custom_prices = c.price_windows("customPrices", &self.custom_prices);
        c.images("images", &self.existing_images, &self.uploads);
        c.finish(ExperiencePayload {
            name,
            description,
            price,
            duration,
            limit_age,
            qty_people,
            custom_prices,
            images: clean_list(&self.existing_images),
            uploads: self.uploads.clone(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct PromotionForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub expired_date: Option<String>,
    pub qty_people: Option<String>,
    pub stock: Option<String>,
    /// Percentage off the summed line items, 1 to 100.
    pub discount: Option<String>,
    pub items: LineItemComposer,
    pub existing_images: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Validate for PromotionForm {
    type Payload = PromotionPayload;

    fn validate(&self) -> Result<PromotionPayload, FormErrors> {
        let mut c = FieldChecker::new();
        let title = c.required_text("title", &self.title, MAX_TITLE_LENGTH);
        let description = c.required_text("description", &self.description, MAX_TEXT_LENGTH);
        let expired_date = c.date("expiredDate", &self.expired_date);
        let qty_people = c.positive_integer("qtyPeople", &self.qty_people);
        let stock = c.non_negative_integer("stock", &self.stock);
        let discount = c.integer_in_range("discount", &self.discount, 1, 100) as f64;
        if self.items.is_empty() {
            c.fail("items", keys::ITEMS);
        }
        c.images("images", &self.existing_images, &self.uploads);
        let gross_import = self.items.total();
        c.finish(PromotionPayload {
            title,
            description,
            expired_date,
            qty_people,
            stock,
            gross_import,
            discount,
            net_import: apply_discount(gross_import, discount),
            glampings: self.items.glamping_items(),
            products: self.items.product_items(),
            experiences: self.items.experience_items(),
            images: clean_list(&self.existing_images),
            uploads: self.uploads.clone(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct DiscountCodeForm {
    pub code: Option<String>,
    pub discount: Option<String>,
    pub expired_date: Option<String>,
    pub stock: Option<String>,
}

impl Validate for DiscountCodeForm {
    type Payload = DiscountCodePayload;

    fn validate(&self) -> Result<DiscountCodePayload, FormErrors> {
        let mut c = FieldChecker::new();
        let code = c.required_text("code", &self.code, MAX_TITLE_LENGTH).to_uppercase();
        if !c.has_error("code") && !code_regex().is_match(&code) {
            c.fail("code", keys::CODE);
        }
        let discount = c.integer_in_range("discount", &self.discount, 1, 100) as u8;
        let expired_date = c.date("expiredDate", &self.expired_date);
        let stock = c.non_negative_integer("stock", &self.stock);
        c.finish(DiscountCodePayload {
            code,
            discount,
            expired_date,
            stock,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReserveForm {
    pub user_id: Option<String>,
    /// Optional percentage; absent or empty means no discount.
    pub discount: Option<String>,
    pub payment_status: Option<String>,
    pub reserve_status: Option<String>,
    pub items: LineItemComposer,
}

impl Validate for ReserveForm {
    type Payload = ReservePayload;

    fn validate(&self) -> Result<ReservePayload, FormErrors> {
        let mut c = FieldChecker::new();
        let user_id = i64::from(c.positive_integer("userId", &self.user_id));
        let discount = match self.discount.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                c.integer_in_range("discount", &self.discount, 0, 100) as f64
            }
            _ => 0.0,
        };
        let payment_status: PaymentStatus = c.select("paymentStatus", &self.payment_status);
        let reserve_status: ReserveStatus = c.select("reserveStatus", &self.reserve_status);
        if self.items.is_empty() {
            c.fail("items", keys::ITEMS);
        }
        let gross_import = self.items.total();
        c.finish(ReservePayload {
            user_id,
            gross_import,
            discount,
            net_import: apply_discount(gross_import, discount),
            payment_status,
            reserve_status,
            glampings: self.items.glamping_items(),
            products: self.items.product_items(),
            experiences: self.items.experience_items(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReviewForm {
    pub name: Option<String>,
    pub title: Option<String>,
    pub review: Option<String>,
    pub stars: Option<String>,
    pub date: Option<String>,
}

impl Validate for ReviewForm {
    type Payload = ReviewPayload;

    fn validate(&self) -> Result<ReviewPayload, FormErrors> {
        let mut c = FieldChecker::new();
        let name = c.required_text("name", &self.name, MAX_TITLE_LENGTH);
        let title = c.required_text("title", &self.title, MAX_TITLE_LENGTH);
        let review = c.required_text("review", &self.review, MAX_TEXT_LENGTH);
        let stars = c.integer_in_range("stars", &self.stars, 1, 5) as u8;
        let date = c.date("date", &self.date);
        c.finish(ReviewPayload {
            name,
            title,
            review,
            stars,
            date,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct FaqForm {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl Validate for FaqForm {
    type Payload = FaqPayload;

    fn validate(&self) -> Result<FaqPayload, FormErrors> {
        let mut c = FieldChecker::new();
        let question = c.required_text("question", &self.question, MAX_TEXT_LENGTH);
        let answer = c.required_text("answer", &self.answer, MAX_TEXT_LENGTH);
        c.finish(FaqPayload { question, answer })
    }
}

fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_items::{ItemCategory, LineOption};

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn upload() -> Upload {
        Upload {
            file_name: "dome.jpg".to_string(),
            mime: Some("image/jpeg".to_string()),
            bytes: vec![0xFF, 0xD8],
        }
    }

    // -- FAQ round trip --

    #[test]
    fn faq_empty_question_is_an_error() {
        let form = FaqForm {
            question: some(""),
            answer: some("Yes"),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("question"), Some(keys::REQUIRED));
        assert!(!errors.contains("answer"));
    }

    #[test]
    fn faq_valid_payload() {
        let form = FaqForm {
            question: some("x"),
            answer: some("Yes"),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.question, "x");
    }

    #[test]
    fn absent_field_is_invalid() {
        let errors = FaqForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("answer"), Some(keys::REQUIRED));
    }

    #[test]
    fn whitespace_only_is_required_error() {
        let form = FaqForm {
            question: some("   "),
            answer: some("ok"),
        };
        assert_eq!(form.validate().unwrap_err().get("question"), Some(keys::REQUIRED));
    }

    // -- Sign-in and users --

    #[test]
    fn sign_in_checks_email_format() {
        let form = SignInForm {
            email: some("not-an-email"),
            password: some("whatever"),
        };
        assert_eq!(form.validate().unwrap_err().get("email"), Some(keys::EMAIL));
    }

    #[test]
    fn sign_in_lowercases_email() {
        let form = SignInForm {
            email: some("Ana@Example.com"),
            password: some("x"),
        };
        assert_eq!(form.validate().unwrap().email, "ana@example.com");
    }

    #[test]
    fn user_create_requires_complex_password() {
        let mut form = UserForm {
            mode: FormMode::Create,
            name: some("Ana"),
            last_name: some("Diaz"),
            email: some("ana@example.com"),
            role: some("admin"),
            password: None,
        };
        assert_eq!(form.validate().unwrap_err().get("password"), Some(keys::REQUIRED));

        for weak in ["short1A", "alllowercase1", "ALLUPPERCASE1", "NoDigitsHere"] {
            form.password = some(weak);
            assert_eq!(
                form.validate().unwrap_err().get("password"),
                Some(keys::PASSWORD),
                "{} should be rejected",
                weak
            );
        }

        form.password = some("Glamping2024");
        let payload = form.validate().unwrap();
        assert_eq!(payload.role, Role::Admin);
        assert_eq!(payload.password.as_deref(), Some("Glamping2024"));
    }

    #[test]
    fn user_edit_password_is_optional() {
        let form = UserForm {
            mode: FormMode::Edit,
            name: some("Ana"),
            last_name: some("Diaz"),
            email: some("ana@example.com"),
            role: some("client"),
            password: some(""),
        };
        assert!(form.validate().unwrap().password.is_none());
    }

    #[test]
    fn user_unknown_role() {
        let form = UserForm {
            mode: FormMode::Edit,
            name: some("Ana"),
            last_name: some("Diaz"),
            email: some("ana@example.com"),
            role: some("owner"),
            password: None,
        };
        assert_eq!(form.validate().unwrap_err().get("role"), Some(keys::OPTION));
    }

    // -- Catalog entities --

    fn glamping_form() -> GlampingForm {
        GlampingForm {
            title: some("Geodesic Dome"),
            description: some("Transparent dome"),
            capacity: some("2"),
            price: some("120.5"),
            services: vec!["wifi".to_string(), " ".to_string()],
            custom_prices: vec![],
            existing_images: vec![],
            uploads: vec![upload()],
        }
    }

    #[test]
    fn glamping_valid() {
        let payload = glamping_form().validate().unwrap();
        assert_eq!(payload.capacity, 2);
        assert_eq!(payload.price, 120.5);
        assert_eq!(payload.services, vec!["wifi"]);
        assert_eq!(payload.uploads.len(), 1);
    }

    #[test]
    fn glamping_requires_some_image() {
        let mut form = glamping_form();
        form.uploads.clear();
        assert_eq!(form.validate().unwrap_err().get("images"), Some(keys::IMAGES));

        form.existing_images = vec!["https://cdn.example.com/a.jpg".to_string()];
        assert!(form.validate().is_ok());
    }

    #[test]
    fn glamping_numeric_rules() {
        let mut form = glamping_form();
        form.price = some("-5");
        form.capacity = some("abc");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("price"), Some(keys::POSITIVE));
        assert_eq!(errors.get("capacity"), Some(keys::INTEGER));

        form.price = some("free");
        form.capacity = some("0");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("price"), Some(keys::NUMBER));
        assert_eq!(errors.get("capacity"), Some(keys::RANGE));
    }

    #[test]
    fn title_length_is_bounded() {
        let mut form = glamping_form();
        form.title = Some("x".repeat(MAX_TITLE_LENGTH + 1));
        assert_eq!(form.validate().unwrap_err().get("title"), Some(keys::TOO_LONG));
    }

    #[test]
    fn price_windows_are_checked() {
        let mut form = glamping_form();
        form.custom_prices = vec![PriceWindowInput {
            date_from: some("2024-08-31"),
            date_to: some("2024-07-01"),
            price: some("150"),
        }];
        assert_eq!(
            form.validate().unwrap_err().get("customPrices"),
            Some(keys::DATE_ORDER)
        );

        form.custom_prices[0].date_to = some("2024-09-30");
        let payload = form.validate().unwrap();
        assert_eq!(payload.custom_prices.len(), 1);
        assert_eq!(payload.custom_prices[0].price, 150.0);
    }

    #[test]
    fn only_first_error_per_field_is_kept() {
        let mut form = glamping_form();
        form.custom_prices = vec![
            PriceWindowInput {
                date_from: None,
                date_to: some("2024-07-01"),
                price: some("1"),
            },
            PriceWindowInput {
                date_from: some("2024-08-31"),
                date_to: some("2024-07-01"),
                price: some("1"),
            },
        ];
        assert_eq!(
            form.validate().unwrap_err().get("customPrices"),
            Some(keys::REQUIRED)
        );
    }

    #[test]
    fn product_stock_may_be_zero() {
        let form = ProductForm {
            name: some("Firewood"),
            description: some("A bundle"),
            price: some("15"),
            stock: some("0"),
            custom_prices: vec![],
            existing_images: vec!["https://cdn.example.com/w.jpg".to_string()],
            uploads: vec![],
        };
        assert_eq!(form.validate().unwrap().stock, 0);
    }

    #[test]
    fn experience_age_limit_range() {
        let form = ExperienceForm {
            name: some("Kayak tour"),
            description: some("Two hours on the lake"),
            price: some("40"),
            duration: some("120"),
            limit_age: some("150"),
            qty_people: some("6"),
            custom_prices: vec![],
            existing_images: vec![],
            uploads: vec![upload()],
        };
        assert_eq!(form.validate().unwrap_err().get("limitAge"), Some(keys::RANGE));
    }

    // -- Discounts and promotions --

    #[test]
    fn discount_code_percentage_bounds() {
        let mut form = DiscountCodeForm {
            code: some("summer24"),
            discount: some("0"),
            expired_date: some("2024-12-31"),
            stock: some("10"),
        };
        assert_eq!(form.validate().unwrap_err().get("discount"), Some(keys::RANGE));
        form.discount = some("101");
        assert_eq!(form.validate().unwrap_err().get("discount"), Some(keys::RANGE));
        form.discount = some("100");
        let payload = form.validate().unwrap();
        assert_eq!(payload.code, "SUMMER24");
        assert_eq!(payload.discount, 100);
    }

    #[test]
    fn discount_code_format() {
        let form = DiscountCodeForm {
            code: some("no spaces!"),
            discount: some("10"),
            expired_date: some("2024-12-31"),
            stock: some("10"),
        };
        assert_eq!(form.validate().unwrap_err().get("code"), Some(keys::CODE));
    }

    #[test]
    fn discount_code_bad_date() {
        let form = DiscountCodeForm {
            code: some("WINTER"),
            discount: some("10"),
            expired_date: some("31/12/2024"),
            stock: some("10"),
        };
        assert_eq!(form.validate().unwrap_err().get("expiredDate"), Some(keys::DATE));
    }

    fn composer() -> LineItemComposer {
        let options = vec![LineOption {
            id: 7,
            name: "Geodesic Dome".to_string(),
            price: 50.0,
        }];
        let mut items = LineItemComposer::new();
        items
            .add(ItemCategory::Glamping, &options, "7", "4")
            .unwrap();
        items
    }

    #[test]
    fn promotion_derives_imports_from_items() {
        let form = PromotionForm {
            title: some("Summer pack"),
            description: some("Four nights in the dome"),
            expired_date: some("2024-09-01"),
            qty_people: some("2"),
            stock: some("5"),
            discount: some("25"),
            items: composer(),
            existing_images: vec![],
            uploads: vec![upload()],
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.gross_import, 200.0);
        assert_eq!(payload.net_import, 150.0);
        assert_eq!(payload.glampings.len(), 1);
    }

    #[test]
    fn promotion_without_items_fails() {
        let form = PromotionForm {
            title: some("Empty"),
            description: some("Nothing inside"),
            expired_date: some("2024-09-01"),
            qty_people: some("2"),
            stock: some("5"),
            discount: some("10"),
            items: LineItemComposer::new(),
            existing_images: vec![],
            uploads: vec![upload()],
        };
        assert_eq!(form.validate().unwrap_err().get("items"), Some(keys::ITEMS));
    }

    // -- Reserves, reviews --

    #[test]
    fn reserve_defaults_and_statuses() {
        let mut form = ReserveForm {
            user_id: some("1"),
            discount: None,
            payment_status: some("paid"),
            reserve_status: some("confirmed"),
            items: composer(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.discount, 0.0);
        assert_eq!(payload.net_import, 200.0);
        assert_eq!(payload.payment_status, PaymentStatus::Paid);
        assert_eq!(payload.reserve_status, ReserveStatus::Confirmed);

        form.reserve_status = some("lost");
        assert_eq!(
            form.validate().unwrap_err().get("reserveStatus"),
            Some(keys::OPTION)
        );
    }

    #[test]
    fn review_stars_range() {
        let form = ReviewForm {
            name: some("Luis"),
            title: some("Great stay"),
            review: some("Loved the stars at night"),
            stars: some("6"),
            date: some("2024-03-10"),
        };
        assert_eq!(form.validate().unwrap_err().get("stars"), Some(keys::RANGE));
    }

    // -- FormState --

    #[test]
    fn form_state_replaces_errors_each_pass() {
        let mut state = FormState::new(FaqForm::default());
        assert!(state.submit().is_none());
        assert_eq!(state.errors().len(), 2);

        state.values.question = some("Check-in?");
        assert!(state.submit().is_none());
        assert_eq!(state.errors().len(), 1);
        assert!(state.error("question").is_none());

        state.values.answer = some("3pm");
        assert!(state.submit().is_some());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn form_errors_display() {
        let errors = FaqForm::default().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "answer: validation.required, question: validation.required"
        );
    }
}
