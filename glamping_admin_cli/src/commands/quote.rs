use anyhow::{bail, Context, Result};
use clap::Args;
use glamping_admin::line_items::{ItemCategory, LineItemComposer, LineOption};
use glamping_admin::types::{Experience, Glamping, Product, Resource};
use glamping_admin::{AdminError, Client, FilterMap};

use super::list::fetch_page;
use crate::output::{build_line_item_rows, print_breakdown, print_rows, OutputFormat};

/// Upper bound on catalog pages read while loading options.
const MAX_OPTION_PAGES: u32 = 50;

#[derive(Args)]
pub struct QuoteArgs {
    /// Glamping and nights as ID:NIGHTS (repeatable)
    #[arg(long = "glamping")]
    pub glampings: Vec<String>,

    /// Product and quantity as ID:QTY (repeatable)
    #[arg(long = "product")]
    pub products: Vec<String>,

    /// Experience and quantity as ID:QTY (repeatable)
    #[arg(long = "experience")]
    pub experiences: Vec<String>,

    /// Percentage discount applied to the total
    #[arg(long, default_value = "0")]
    pub discount: f64,
}

pub async fn run(args: &QuoteArgs, client: &Client, format: OutputFormat) -> Result<()> {
    if args.glampings.is_empty() && args.products.is_empty() && args.experiences.is_empty() {
        bail!("nothing to quote: pass at least one --glamping, --product or --experience");
    }

    let mut composer = LineItemComposer::new();
    if !args.glampings.is_empty() {
        let options = load_options::<Glamping>(client).await?;
        add_all(&mut composer, ItemCategory::Glamping, &options, &args.glampings)?;
    }
    if !args.products.is_empty() {
        let options = load_options::<Product>(client).await?;
        add_all(&mut composer, ItemCategory::Product, &options, &args.products)?;
    }
    if !args.experiences.is_empty() {
        let options = load_options::<Experience>(client).await?;
        add_all(&mut composer, ItemCategory::Experience, &options, &args.experiences)?;
    }

    let breakdown = composer.breakdown(args.discount);
    if format != OutputFormat::Json {
        print_rows(build_line_item_rows(&composer), &breakdown, format)?;
    }
    print_breakdown(&breakdown, format);
    Ok(())
}

/// Reads every page of the catalog and turns it into line options.
async fn load_options<T>(client: &Client) -> Result<Vec<LineOption>>
where
    T: Resource + Clone + Send,
    for<'a> LineOption: From<&'a T>,
{
    let mut options = Vec::new();
    let mut page = 1;
    loop {
        let resp = fetch_page::<T>(client, page, FilterMap::new()).await?;
        options.extend(resp.items.iter().map(LineOption::from));
        if !resp.has_next() || page >= MAX_OPTION_PAGES {
            break;
        }
        page += 1;
    }
    tracing::debug!("loaded {} {} option(s)", options.len(), T::BASE_PATH);
    Ok(options)
}

fn add_all(
    composer: &mut LineItemComposer,
    category: ItemCategory,
    options: &[LineOption],
    entries: &[String],
) -> Result<()> {
    for entry in entries {
        let (id, quantity) = split_item(entry)?;
        composer
            .add(category, options, id, quantity)
            .map_err(AdminError::from)
            .with_context(|| format!("{} '{}'", category, entry))?;
    }
    Ok(())
}

/// Splits `ID:QTY`; a bare `ID` means a quantity of one.
pub fn split_item(entry: &str) -> Result<(&str, &str)> {
    match entry.split_once(':') {
        Some((id, qty)) if !id.trim().is_empty() => Ok((id, qty)),
        Some(_) => bail!("'{}' must look like ID:QTY", entry),
        None => Ok((entry, "1")),
    }
}
