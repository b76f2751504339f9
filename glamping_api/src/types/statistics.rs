//! Time-series returned by the statistics endpoints.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Bucket width of a statistics series.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatisticsStep {
    Week,
    #[default]
    Month,
    Year,
}

impl std::fmt::Display for StatisticsStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StatisticsStep::Week => "week",
                StatisticsStep::Month => "month",
                StatisticsStep::Year => "year",
            }
        )
    }
}

impl FromStr for StatisticsStep {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(StatisticsStep::Week),
            "month" => Ok(StatisticsStep::Month),
            "year" => Ok(StatisticsStep::Year),
            _ => Err(()),
        }
    }
}

/// Whether each bucket holds its own value or the running sum.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatisticsType {
    Accumulated,
    #[default]
    Period,
}

impl std::fmt::Display for StatisticsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StatisticsType::Accumulated => "accumulated",
                StatisticsType::Period => "period",
            }
        )
    }
}

impl FromStr for StatisticsType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accumulated" => Ok(StatisticsType::Accumulated),
            "period" => Ok(StatisticsType::Period),
            _ => Err(()),
        }
    }
}

/// Net sales for one bucket.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Number of reservations for one bucket.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuantityPoint {
    pub date: NaiveDate,
    pub quantity: u64,
}
