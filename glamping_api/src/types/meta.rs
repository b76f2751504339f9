use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A backend-owned entity type reachable under its own base path.
pub trait Resource: DeserializeOwned + Serialize {
    /// Path segment under the API root, e.g. `glampings`.
    const BASE_PATH: &'static str;
    /// Key holding the item array in list responses, e.g. `glampings`.
    const LIST_KEY: &'static str;

    /// Backend identifier of this record.
    fn id(&self) -> i64;
}

/// One page of a resource list, replaced wholesale on every fetch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePage<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<T> Default for ResourcePage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    current_page: u32,
    total_pages: u32,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl<T: Resource> ResourcePage<T> {
    /// Parses a list response shaped as `{ <plural>: [...], currentPage, totalPages }`.
    ///
    /// Empty result sets report `totalPages = 0`; both page numbers are
    /// normalized to at least 1 so the pagination guard always holds.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let mut raw: RawPage = serde_json::from_str(body)?;
        let items = match raw.rest.remove(T::LIST_KEY) {
            Some(value) => serde_json::from_value(value)?,
            None => {
                return Err(<serde_json::Error as serde::de::Error>::missing_field(
                    T::LIST_KEY,
                ))
            }
        };
        let total_pages = raw.total_pages.max(1);
        Ok(Self {
            items,
            current_page: raw.current_page.clamp(1, total_pages),
            total_pages,
        })
    }
}

impl<T> ResourcePage<T> {
    /// Whether the "previous" control is enabled.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control is enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Body returned by mutation endpoints. Some endpoints answer with an empty
/// body, in which case both fields are `None`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}
