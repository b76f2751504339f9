//! Search filters for the list pages.
//!
//! Every page has a small filter form. The form values are cleaned by
//! [`FilterBuilder`]: text is stripped of control characters and trimmed,
//! empty values are dropped and dates are rendered as `YYYY-MM-DD`. The
//! result is a [`FilterMap`] that the list controller forwards as-is.

use chrono::NaiveDate;
use glamping_api::types::{PaymentStatus, ReserveStatus, ResourceStatus, Role};
use glamping_api::FilterMap;

use crate::error::AdminError;

pub const MAX_FILTER_LENGTH: usize = 100;

#[derive(Default)]
pub struct FilterBuilder {
    map: FilterMap,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a free-text value. Control characters are removed and the value
    /// is trimmed and cut to [`MAX_FILTER_LENGTH`] characters.
    pub fn text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            let cleaned: String = value
                .chars()
                .filter(|c| !c.is_control())
                .collect::<String>()
                .trim()
                .chars()
                .take(MAX_FILTER_LENGTH)
                .collect();
            if !cleaned.is_empty() {
                self.map.insert(key, &cleaned);
            }
        }
        self
    }

    pub fn date(mut self, key: &str, value: Option<NaiveDate>) -> Self {
        if let Some(date) = value {
            self.map.insert(key, &date.format("%Y-%m-%d").to_string());
        }
        self
    }

    /// Adds any displayable value, e.g. an enum rendered in its wire form.
    pub fn value<T: std::fmt::Display>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.map.insert(key, &value.to_string());
        }
        self
    }

    pub fn build(self) -> FilterMap {
        self.map
    }
}

/// A page's filter form.
pub trait ToFilterMap {
    fn to_filter_map(&self) -> FilterMap;
}

impl ToFilterMap for FilterMap {
    fn to_filter_map(&self) -> FilterMap {
        self.clone()
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserFilters {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl ToFilterMap for UserFilters {
    fn to_filter_map(&self) -> FilterMap {
        FilterBuilder::new()
            .text("name", self.name.as_deref())
            .text("email", self.email.as_deref())
            .value("role", self.role)
            .build()
    }
}

/// Text search plus status, shared by the catalog-like pages. The search key
/// differs per resource (`title` for glampings and promotions, `name` for
/// products and experiences, `code` for discount codes).
#[derive(Clone, Debug)]
pub struct CatalogFilters {
    search_key: &'static str,
    pub search: Option<String>,
    pub status: Option<ResourceStatus>,
}

impl CatalogFilters {
    pub fn new(search_key: &'static str) -> Self {
        Self {
            search_key,
            search: None,
            status: None,
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_status(mut self, status: ResourceStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl ToFilterMap for CatalogFilters {
    fn to_filter_map(&self) -> FilterMap {
        FilterBuilder::new()
            .text(self.search_key, self.search.as_deref())
            .value("status", self.status)
            .build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReserveFilters {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub payment_status: Option<PaymentStatus>,
    pub reserve_status: Option<ReserveStatus>,
}

impl ToFilterMap for ReserveFilters {
    fn to_filter_map(&self) -> FilterMap {
        FilterBuilder::new()
            .date("dateFrom", self.date_from)
            .date("dateTo", self.date_to)
            .value("paymentStatus", self.payment_status)
            .value("reserveStatus", self.reserve_status)
            .build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReviewFilters {
    pub stars: Option<u8>,
}

impl ToFilterMap for ReviewFilters {
    fn to_filter_map(&self) -> FilterMap {
        FilterBuilder::new().value("stars", self.stars).build()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FaqFilters {
    pub question: Option<String>,
}

impl ToFilterMap for FaqFilters {
    fn to_filter_map(&self) -> FilterMap {
        FilterBuilder::new()
            .text("question", self.question.as_deref())
            .build()
    }
}

/// Parses a `key=value` pair as given on the command line.
pub fn parse_filter_pair(input: &str) -> Result<(String, String), AdminError> {
    let (key, value) = input.split_once('=').ok_or_else(|| {
        AdminError::InvalidInput(format!("filter '{}' must look like key=value", input))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AdminError::InvalidInput(format!(
            "filter '{}' has an empty key",
            input
        )));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parses a `YYYY-MM-DD` filter date.
pub fn parse_filter_date(input: &str) -> Result<NaiveDate, AdminError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        AdminError::InvalidInput(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            input
        ))
    })
}

/// Star filter must be 1..=5.
pub fn validate_stars(stars: u8) -> Result<u8, AdminError> {
    if !(1..=5).contains(&stars) {
        return Err(AdminError::InvalidInput(
            "stars must be between 1 and 5".to_string(),
        ));
    }
    Ok(stars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_drops_empty_and_trims() {
        let map = FilterBuilder::new()
            .text("title", Some("  Dome  "))
            .text("name", Some("   "))
            .text("email", None)
            .build();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("title"), Some("Dome"));
    }

    #[test]
    fn builder_strips_control_characters() {
        let map = FilterBuilder::new()
            .text("question", Some("pets\u{0007}?\n"))
            .build();
        assert_eq!(map.get("question"), Some("pets?"));
    }

    #[test]
    fn builder_truncates_long_text() {
        let long = "a".repeat(MAX_FILTER_LENGTH + 20);
        let map = FilterBuilder::new().text("name", Some(&long)).build();
        assert_eq!(map.get("name").map(str::len), Some(MAX_FILTER_LENGTH));
    }

    #[test]
    fn reserve_filters_format_dates_and_statuses() {
        let filters = ReserveFilters {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 5),
            date_to: None,
            payment_status: Some(PaymentStatus::Paid),
            reserve_status: Some(ReserveStatus::Canceled),
        };
        let map = filters.to_filter_map();
        assert_eq!(map.get("dateFrom"), Some("2024-01-05"));
        assert!(map.get("dateTo").is_none());
        assert_eq!(map.get("paymentStatus"), Some("PAID"));
        assert_eq!(map.get("reserveStatus"), Some("CANCELED"));
    }

    #[test]
    fn catalog_filters_use_resource_key() {
        let map = CatalogFilters::new("name")
            .with_search("Firewood")
            .with_status(ResourceStatus::Inactive)
            .to_filter_map();
        assert_eq!(map.get("name"), Some("Firewood"));
        assert_eq!(map.get("status"), Some("INACTIVE"));
        assert!(map.get("title").is_none());
    }

    #[test]
    fn user_filters_role_is_wire_form() {
        let filters = UserFilters {
            role: Some(Role::Supervisor),
            ..Default::default()
        };
        assert_eq!(filters.to_filter_map().get("role"), Some("SUPERVISOR"));
    }

    #[test]
    fn empty_forms_produce_empty_maps() {
        assert!(FaqFilters::default().to_filter_map().is_empty());
        assert!(ReviewFilters::default().to_filter_map().is_empty());
        assert!(UserFilters::default().to_filter_map().is_empty());
    }

    #[test]
    fn filter_pair_parsing() {
        assert_eq!(
            parse_filter_pair("title=Dome=2").unwrap(),
            ("title".to_string(), "Dome=2".to_string())
        );
        assert!(parse_filter_pair("title").is_err());
        assert!(parse_filter_pair("=x").is_err());
    }

    #[test]
    fn filter_date_and_stars() {
        assert!(parse_filter_date("2024-02-30").is_err());
        assert_eq!(
            parse_filter_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(validate_stars(0).is_err());
        assert_eq!(validate_stars(5).unwrap(), 5);
    }
}
