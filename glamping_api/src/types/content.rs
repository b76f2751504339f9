use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::meta::Resource;

/// A guest review shown on the public site.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub review: String,
    /// Rating from 1 to 5.
    pub stars: u8,
    pub date: NaiveDate,
    #[serde(default, rename = "href_picture")]
    pub href_picture: Option<String>,
}

impl Resource for Review {
    const BASE_PATH: &'static str = "reviews";
    const LIST_KEY: &'static str = "reviews";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

impl Resource for Faq {
    const BASE_PATH: &'static str = "faqs";
    const LIST_KEY: &'static str = "faqs";

    fn id(&self) -> i64 {
        self.id
    }
}
