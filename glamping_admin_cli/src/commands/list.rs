use anyhow::{anyhow, bail, Result};
use clap::Args;
use glamping_admin::filters::{
    parse_filter_date, parse_filter_pair, validate_stars, CatalogFilters, FaqFilters,
    ReserveFilters, ReviewFilters, ToFilterMap, UserFilters,
};
use glamping_admin::types::{
    DiscountCode, Experience, Faq, Glamping, PaymentStatus, Product, Promotion, Reserve,
    ReserveStatus, Resource, ResourcePage, ResourceStatus, Review, Role, User,
};
use glamping_admin::{Client, FilterMap, ListController};

use super::ResourceKind;
use crate::output::{
    build_discount_rows, build_experience_rows, build_faq_rows, build_glamping_rows,
    build_product_rows, build_promotion_rows, build_reserve_rows, build_review_rows,
    build_user_rows, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct ListArgs {
    /// Resource to list
    #[arg(value_enum)]
    pub resource: ResourceKind,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Search text: user name, title, name, code or question depending on the resource
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status: active or inactive
    #[arg(long)]
    pub status: Option<String>,

    /// Filter users by email
    #[arg(long)]
    pub email: Option<String>,

    /// Filter users by role: admin, supervisor, client
    #[arg(long)]
    pub role: Option<String>,

    /// Reservations sold on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub date_from: Option<String>,

    /// Reservations sold on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub date_to: Option<String>,

    /// Filter reservations by payment status: paid, unpaid
    #[arg(long)]
    pub payment_status: Option<String>,

    /// Filter reservations by status: new, confirmed, complete, canceled
    #[arg(long)]
    pub reserve_status: Option<String>,

    /// Filter reviews by star rating (1-5)
    #[arg(long)]
    pub stars: Option<u8>,

    /// Extra key=value filter sent as-is (repeatable)
    #[arg(long = "filter")]
    pub filters: Vec<String>,
}

pub async fn run(args: &ListArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let filters = build_filters(args)?;
    match args.resource {
        ResourceKind::Users => {
            let page = fetch_page::<User>(client, args.page, filters).await?;
            show(&page, build_user_rows(&page.items), format)
        }
        ResourceKind::Glampings => {
            let page = fetch_page::<Glamping>(client, args.page, filters).await?;
            show(&page, build_glamping_rows(&page.items), format)
        }
        ResourceKind::Products => {
            let page = fetch_page::<Product>(client, args.page, filters).await?;
            show(&page, build_product_rows(&page.items), format)
        }
        ResourceKind::Experiences => {
            let page = fetch_page::<Experience>(client, args.page, filters).await?;
            show(&page, build_experience_rows(&page.items), format)
        }
        ResourceKind::Promotions => {
            let page = fetch_page::<Promotion>(client, args.page, filters).await?;
            show(&page, build_promotion_rows(&page.items), format)
        }
        ResourceKind::Discounts => {
            let page = fetch_page::<DiscountCode>(client, args.page, filters).await?;
            show(&page, build_discount_rows(&page.items), format)
        }
        ResourceKind::Reserves => {
            let page = fetch_page::<Reserve>(client, args.page, filters).await?;
            show(&page, build_reserve_rows(&page.items), format)
        }
        ResourceKind::Reviews => {
            let page = fetch_page::<Review>(client, args.page, filters).await?;
            show(&page, build_review_rows(&page.items), format)
        }
        ResourceKind::Faqs => {
            let page = fetch_page::<Faq>(client, args.page, filters).await?;
            show(&page, build_faq_rows(&page.items), format)
        }
    }
}

fn show<T, R>(page: &ResourcePage<T>, rows: Vec<R>, format: OutputFormat) -> Result<()>
where
    T: serde::Serialize,
    R: tabled::Tabled + serde::Serialize,
{
    eprintln!(
        "Page {}/{} ({} shown)",
        page.current_page,
        page.total_pages,
        page.items.len()
    );
    print_rows(rows, &page.items[..], format)
}

/// Loads one page through a list controller.
pub async fn fetch_page<T>(client: &Client, page: u32, filters: FilterMap) -> Result<ResourcePage<T>>
where
    T: Resource + Clone + Send,
{
    let controller: ListController<T, Client> = ListController::new(client.clone());
    if !controller.fetch(page, filters).await {
        let reason = controller
            .failure()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "no response".to_string());
        bail!("failed to list {}: {}", T::BASE_PATH, reason);
    }
    Ok(controller.page())
}

fn parse_with<T: std::str::FromStr>(value: &str, what: &str, valid: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("unknown {} '{}'. Valid values: {}", what, value, valid))
}

fn parse_status(value: Option<&String>) -> Result<Option<ResourceStatus>> {
    value
        .map(|s| parse_with(s, "status", "active, inactive"))
        .transpose()
}

fn catalog_filters(
    search_key: &'static str,
    search: Option<String>,
    status: Option<&String>,
) -> Result<FilterMap> {
    let mut filters = CatalogFilters::new(search_key);
    filters.search = search;
    filters.status = parse_status(status)?;
    Ok(filters.to_filter_map())
}

pub fn build_filters(args: &ListArgs) -> Result<FilterMap> {
    let search = args.search.clone();
    let mut map = match args.resource {
        ResourceKind::Users => UserFilters {
            name: search,
            email: args.email.clone(),
            role: args
                .role
                .as_ref()
                .map(|r| parse_with::<Role>(r, "role", "admin, supervisor, client"))
                .transpose()?,
        }
        .to_filter_map(),
        ResourceKind::Glampings | ResourceKind::Promotions => {
            catalog_filters("title", search, args.status.as_ref())?
        }
        ResourceKind::Products | ResourceKind::Experiences => {
            catalog_filters("name", search, args.status.as_ref())?
        }
        ResourceKind::Discounts => {
            catalog_filters("code", search, args.status.as_ref())?
        }
        ResourceKind::Reserves => ReserveFilters {
            date_from: args.date_from.as_deref().map(parse_filter_date).transpose()?,
            date_to: args.date_to.as_deref().map(parse_filter_date).transpose()?,
            payment_status: args
                .payment_status
                .as_ref()
                .map(|s| parse_with::<PaymentStatus>(s, "payment status", "paid, unpaid"))
                .transpose()?,
            reserve_status: args
                .reserve_status
                .as_ref()
                .map(|s| {
                    parse_with::<ReserveStatus>(
                        s,
                        "reservation status",
                        "new, confirmed, complete, canceled",
                    )
                })
                .transpose()?,
        }
        .to_filter_map(),
        ResourceKind::Reviews => ReviewFilters {
            stars: args.stars.map(validate_stars).transpose()?,
        }
        .to_filter_map(),
        ResourceKind::Faqs => FaqFilters { question: search }.to_filter_map(),
    };

    for raw in &args.filters {
        let (key, value) = parse_filter_pair(raw)?;
        map.insert(&key, &value);
    }
    Ok(map)
}
