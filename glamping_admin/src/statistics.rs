//! Dashboard statistics: net sales and reservation counts.
//!
//! The board owns at most one chart per series. Loading a series builds a new
//! chart and drops the previous one; dropping the board releases both.

use chrono::{Datelike, NaiveDate};
use glamping_api::types::{QuantityPoint, SalesPoint, StatisticsStep, StatisticsType};
use glamping_api::{Client, StatisticsQuery};

use crate::error::AdminError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    NetSales,
    ReserveQuantity,
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Series::NetSales => "net-sales",
                Series::ReserveQuantity => "reserve-quantity",
            }
        )
    }
}

/// Labels and values ready to be drawn.
#[derive(Debug)]
pub struct Chart {
    id: u64,
    series: Series,
    step: StatisticsStep,
    kind: StatisticsType,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Chart {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn series(&self) -> Series {
        self.series
    }

    pub fn step(&self) -> StatisticsStep {
        self.step
    }

    pub fn kind(&self) -> StatisticsType {
        self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Sum of a period series, or the last value of an accumulated one.
    pub fn total(&self) -> f64 {
        match self.kind {
            StatisticsType::Period => self.values.iter().sum(),
            StatisticsType::Accumulated => self.values.last().copied().unwrap_or(0.0),
        }
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

impl Drop for Chart {
    fn drop(&mut self) {
        tracing::debug!("released {} chart #{}", self.series, self.id);
    }
}

/// Bucket label for `date` at the given step: `2024-W05`, `2024-01` or `2024`.
pub fn bucket_label(date: NaiveDate, step: StatisticsStep) -> String {
    match step {
        StatisticsStep::Week => {
            let week = date.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        StatisticsStep::Month => date.format("%Y-%m").to_string(),
        StatisticsStep::Year => date.year().to_string(),
    }
}

#[derive(Debug, Default)]
pub struct StatisticsBoard {
    next_id: u64,
    net_sales: Option<Chart>,
    reserve_quantity: Option<Chart>,
}

impl StatisticsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn net_sales(&self) -> Option<&Chart> {
        self.net_sales.as_ref()
    }

    pub fn reserve_quantity(&self) -> Option<&Chart> {
        self.reserve_quantity.as_ref()
    }

    fn build(
        &mut self,
        series: Series,
        query: &StatisticsQuery,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Chart {
        self.next_id += 1;
        tracing::debug!("building {} chart #{}", series, self.next_id);
        Chart {
            id: self.next_id,
            series,
            step: query.step,
            kind: query.kind,
            labels,
            values,
        }
    }

    /// Replaces the net sales chart.
    pub fn show_net_sales(&mut self, query: &StatisticsQuery, points: &[SalesPoint]) -> &Chart {
        let labels = points
            .iter()
            .map(|p| bucket_label(p.date, query.step))
            .collect();
        let values = points.iter().map(|p| p.amount).collect();
        let chart = self.build(Series::NetSales, query, labels, values);
        self.net_sales.insert(chart)
    }

    /// Replaces the reservation count chart.
    pub fn show_reserve_quantity(
        &mut self,
        query: &StatisticsQuery,
        points: &[QuantityPoint],
    ) -> &Chart {
        let labels = points
            .iter()
            .map(|p| bucket_label(p.date, query.step))
            .collect();
        let values = points.iter().map(|p| p.quantity as f64).collect();
        let chart = self.build(Series::ReserveQuantity, query, labels, values);
        self.reserve_quantity.insert(chart)
    }

    /// Fetches both series and replaces both charts. On error the previous
    /// charts are kept.
    pub async fn load(&mut self, client: &Client, query: &StatisticsQuery) -> Result<(), AdminError> {
        let (sales, quantities) =
            tokio::try_join!(client.net_sales(query), client.reserve_quantity(query))?;
        self.show_net_sales(query, &sales);
        self.show_reserve_quantity(query, &quantities);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn labels_follow_step() {
        let d = date(2024, 1, 31);
        assert_eq!(bucket_label(d, StatisticsStep::Week), "2024-W05");
        assert_eq!(bucket_label(d, StatisticsStep::Month), "2024-01");
        assert_eq!(bucket_label(d, StatisticsStep::Year), "2024");
        // ISO week years differ from calendar years around new year.
        assert_eq!(bucket_label(date(2024, 12, 30), StatisticsStep::Week), "2025-W01");
    }

    #[test]
    fn new_chart_replaces_previous() {
        let mut board = StatisticsBoard::new();
        let query = StatisticsQuery::default();
        let points = vec![
            SalesPoint {
                date: date(2024, 1, 1),
                amount: 100.0,
            },
            SalesPoint {
                date: date(2024, 2, 1),
                amount: 250.0,
            },
        ];
        let first = board.show_net_sales(&query, &points).id();
        let second = board.show_net_sales(&query, &points[..1]).id();
        assert_ne!(first, second);
        let chart = board.net_sales().unwrap();
        assert_eq!(chart.id(), second);
        assert_eq!(chart.labels(), ["2024-01"]);
        assert!(board.reserve_quantity().is_none());
    }

    #[test]
    fn totals_depend_on_type() {
        let mut board = StatisticsBoard::new();
        let points = vec![
            QuantityPoint {
                date: date(2024, 1, 1),
                quantity: 3,
            },
            QuantityPoint {
                date: date(2024, 2, 1),
                quantity: 7,
            },
        ];
        let period = StatisticsQuery::default();
        assert_eq!(board.show_reserve_quantity(&period, &points).total(), 10.0);

        let accumulated = StatisticsQuery::default().with_type(StatisticsType::Accumulated);
        let chart = board.show_reserve_quantity(&accumulated, &points);
        assert_eq!(chart.total(), 7.0);
        assert_eq!(chart.max(), 7.0);
    }
}
