use anyhow::{bail, Result};
use glamping_admin::line_items::{ItemCategory, LineItemComposer, PriceBreakdown};
use glamping_admin::statistics::Chart;
use glamping_admin::types::{
    DiscountCode, Experience, Faq, Glamping, Product, Promotion, Reserve, Review, User,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => bail!("unknown output format '{}'. Valid values: table, json, csv, markdown", other),
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    #[serde(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

/// Shared shape of glampings, products and experiences.
#[derive(Tabled, Serialize)]
pub struct CatalogRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Detail")]
    #[serde(rename = "Detail")]
    detail: String,
    #[tabled(rename = "Seasons")]
    #[serde(rename = "Seasons")]
    seasons: usize,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
pub struct PromotionRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Expires")]
    #[serde(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Items")]
    #[serde(rename = "Items")]
    items: usize,
    #[tabled(rename = "Gross")]
    #[serde(rename = "Gross")]
    gross: String,
    #[tabled(rename = "Discount")]
    #[serde(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Net")]
    #[serde(rename = "Net")]
    net: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
pub struct DiscountRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Discount")]
    #[serde(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Expires")]
    #[serde(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Stock")]
    #[serde(rename = "Stock")]
    stock: u32,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
pub struct ReserveRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "User")]
    #[serde(rename = "User")]
    user_id: i64,
    #[tabled(rename = "Net")]
    #[serde(rename = "Net")]
    net: String,
    #[tabled(rename = "Payment")]
    #[serde(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
pub struct ReviewRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Stars")]
    #[serde(rename = "Stars")]
    stars: String,
}

#[derive(Tabled, Serialize)]
pub struct FaqRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Question")]
    #[serde(rename = "Question")]
    question: String,
    #[tabled(rename = "Answer")]
    #[serde(rename = "Answer")]
    answer: String,
}

#[derive(Tabled, Serialize)]
pub struct LineItemRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Qty")]
    #[serde(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Unit")]
    #[serde(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Subtotal")]
    #[serde(rename = "Subtotal")]
    subtotal: String,
}

#[derive(Tabled, Serialize)]
pub struct ChartRow {
    #[tabled(rename = "Series")]
    #[serde(rename = "Series")]
    series: String,
    #[tabled(rename = "Bucket")]
    #[serde(rename = "Bucket")]
    bucket: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: f64,
}

// -- Row builders --

pub fn build_user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id,
            name: format!("{} {}", u.name, u.last_name).trim().to_string(),
            email: u.email.clone(),
            role: u.role.to_string(),
            status: u.status.to_string(),
        })
        .collect()
}

pub fn build_glamping_rows(glampings: &[Glamping]) -> Vec<CatalogRow> {
    glampings
        .iter()
        .map(|g| CatalogRow {
            id: g.id,
            name: g.title.clone(),
            price: format_price(g.price),
            detail: format!("sleeps {}", g.capacity),
            seasons: g.custom_prices.len(),
            status: g.status.to_string(),
        })
        .collect()
}

pub fn build_product_rows(products: &[Product]) -> Vec<CatalogRow> {
    products
        .iter()
        .map(|p| CatalogRow {
            id: p.id,
            name: p.name.clone(),
            price: format_price(p.price),
            detail: format!("{} in stock", p.stock),
            seasons: p.custom_prices.len(),
            status: p.status.to_string(),
        })
        .collect()
}

pub fn build_experience_rows(experiences: &[Experience]) -> Vec<CatalogRow> {
    experiences
        .iter()
        .map(|e| CatalogRow {
            id: e.id,
            name: e.name.clone(),
            price: format_price(e.price),
            detail: format!("{} min, up to {} people", e.duration, e.qty_people),
            seasons: e.custom_prices.len(),
            status: e.status.to_string(),
        })
        .collect()
}

pub fn build_promotion_rows(promotions: &[Promotion]) -> Vec<PromotionRow> {
    promotions
        .iter()
        .map(|p| PromotionRow {
            id: p.id,
            title: p.title.clone(),
            expires: p.expired_date.to_string(),
            items: p.glampings.len() + p.products.len() + p.experiences.len(),
            gross: format_price(p.gross_import),
            discount: format_percent(p.discount),
            net: format_price(p.net_import),
            status: p.status.to_string(),
        })
        .collect()
}

pub fn build_discount_rows(codes: &[DiscountCode]) -> Vec<DiscountRow> {
    codes
        .iter()
        .map(|d| DiscountRow {
            id: d.id,
            code: d.code.clone(),
            discount: format_percent(f64::from(d.discount)),
            expires: d.expired_date.to_string(),
            stock: d.stock,
            status: d.status.to_string(),
        })
        .collect()
}

pub fn build_reserve_rows(reserves: &[Reserve]) -> Vec<ReserveRow> {
    reserves
        .iter()
        .map(|r| ReserveRow {
            id: r.id,
            date: r.date_sale.format("%Y-%m-%d").to_string(),
            user_id: r.user_id,
            net: format_price(r.net_import),
            payment: r.payment_status.to_string(),
            status: r.reserve_status.to_string(),
        })
        .collect()
}

pub fn build_review_rows(reviews: &[Review]) -> Vec<ReviewRow> {
    reviews
        .iter()
        .map(|r| ReviewRow {
            id: r.id,
            date: r.date.to_string(),
            name: r.name.clone(),
            title: r.title.clone(),
            stars: "*".repeat(usize::from(r.stars.min(5))),
        })
        .collect()
}

pub fn build_faq_rows(faqs: &[Faq]) -> Vec<FaqRow> {
    faqs.iter()
        .map(|f| FaqRow {
            id: f.id,
            question: f.question.clone(),
            answer: f.answer.clone(),
        })
        .collect()
}

pub fn build_line_item_rows(composer: &LineItemComposer) -> Vec<LineItemRow> {
    ItemCategory::ALL
        .iter()
        .flat_map(|category| {
            composer.items(*category).iter().map(move |item| LineItemRow {
                category: category.to_string(),
                id: item.reference_id,
                name: item.display_name.clone(),
                quantity: item.quantity,
                unit: format_price(item.unit_price),
                subtotal: format_price(item.subtotal()),
            })
        })
        .collect()
}

pub fn build_chart_rows(chart: &Chart) -> Vec<ChartRow> {
    chart
        .points()
        .map(|(bucket, value)| ChartRow {
            series: chart.series().to_string(),
            bucket: bucket.to_string(),
            value,
        })
        .collect()
}

// -- Printing --

/// Prints `rows` in the chosen format. JSON output uses `raw` instead so it
/// keeps every field of the original records.
pub fn print_rows<R, T>(rows: Vec<R>, raw: &T, format: OutputFormat) -> Result<()>
where
    R: Tabled + Serialize,
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(raw),
    }
    Ok(())
}

fn print_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_breakdown(breakdown: &PriceBreakdown, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(breakdown),
        _ => {
            println!("Total:      {}", format_price(breakdown.gross_import));
            println!("Discount:   {}", format_percent(breakdown.discount));
            println!("Discounted: {}", format_price(breakdown.net_import));
        }
    }
}

pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Compact amount for chart totals: `$15.0M`, `$50.0K`, `$500`.
pub fn format_amount(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}
