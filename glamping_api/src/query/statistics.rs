use url::Url;

use crate::types::{StatisticsStep, StatisticsType};

use super::common::Query;

/// Parameters shared by both statistics endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatisticsQuery {
    pub step: StatisticsStep,
    pub kind: StatisticsType,
}

impl Query for StatisticsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("step", &self.step.to_string())
            .append_pair("type", &self.kind.to_string());
        url
    }
}

impl StatisticsQuery {
    pub fn with_step(mut self, step: StatisticsStep) -> Self {
        self.step = step;
        self
    }

    pub fn with_type(mut self, kind: StatisticsType) -> Self {
        self.kind = kind;
        self
    }
}
