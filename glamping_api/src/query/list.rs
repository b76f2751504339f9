use url::Url;

use super::common::{FilterMap, Query};

/// Query for a paginated list endpoint: a 1-based page plus optional filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
    pub filters: FilterMap,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filters: FilterMap::default(),
        }
    }
}

impl Query for ListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        self.filters.add_to_url(&url)
    }
}

impl ListQuery {
    /// Sets the page number. Zero is treated as the first page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        self.filters.insert(key, value);
        self
    }

    /// Replaces all filters at once.
    pub fn with_filters(mut self, filters: FilterMap) -> Self {
        self.filters = filters;
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ListQuery, Query};

    #[test]
    fn test_list_query() {
        let url = Url::parse("https://example.com/glampings").unwrap();

        insta::assert_snapshot!(
            ListQuery::default()
                .with_page(3)
                .with_filter("title", "Dome")
                .with_filter("status", "ACTIVE")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/glampings?page=3&status=ACTIVE&title=Dome"
        );

        insta::assert_snapshot!(
            ListQuery::default().with_page(0).add_to_url(&url).to_string(),
            @"https://example.com/glampings?page=1"
        );
    }
}
