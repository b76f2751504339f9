use anyhow::{anyhow, Result};
use clap::Args;
use glamping_admin::types::{StatisticsStep, StatisticsType};
use glamping_admin::{Client, StatisticsBoard, StatisticsQuery};

use crate::output::{build_chart_rows, format_amount, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct StatsArgs {
    /// Bucket width: week, month or year
    #[arg(long, default_value = "month")]
    pub step: String,

    /// Series type: period or accumulated
    #[arg(long = "type", default_value = "period")]
    pub kind: String,
}

pub async fn run(args: &StatsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let step: StatisticsStep = args
        .step
        .to_lowercase()
        .parse()
        .map_err(|_| anyhow!("unknown step '{}'. Valid values: week, month, year", args.step))?;
    let kind: StatisticsType = args.kind.to_lowercase().parse().map_err(|_| {
        anyhow!(
            "unknown type '{}'. Valid values: period, accumulated",
            args.kind
        )
    })?;
    let query = StatisticsQuery::default().with_step(step).with_type(kind);

    let mut board = StatisticsBoard::new();
    board.load(client, &query).await?;

    let mut rows = Vec::new();
    let mut summary = serde_json::Map::new();
    for chart in [board.net_sales(), board.reserve_quantity()].into_iter().flatten() {
        rows.extend(build_chart_rows(chart));
        summary.insert(
            chart.series().to_string(),
            serde_json::json!({
                "labels": chart.labels(),
                "values": chart.values(),
                "total": chart.total(),
            }),
        );
    }

    match format {
        OutputFormat::Json => print_json(&summary),
        _ => {
            print_rows(rows, &summary, format)?;
            if let Some(sales) = board.net_sales() {
                eprintln!("Net sales total: {}", format_amount(sales.total()));
            }
            if let Some(quantity) = board.reserve_quantity() {
                eprintln!("Reservations total: {:.0}", quantity.total());
            }
        }
    }
    Ok(())
}
