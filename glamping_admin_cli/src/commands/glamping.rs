use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use glamping_admin::glamping_api::payload::Upload;
use glamping_admin::uploads::load_upload;
use glamping_admin::validation::{GlampingForm, PriceWindowInput};
use glamping_admin::Client;

#[derive(Args)]
pub struct GlampingArgs {
    #[command(subcommand)]
    pub command: GlampingCommand,
}

#[derive(Subcommand)]
pub enum GlampingCommand {
    /// Create a glamping with images and seasonal prices
    Create(GlampingFields),
}

#[derive(Args)]
pub struct GlampingFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Number of guests
    #[arg(long)]
    pub capacity: Option<String>,

    /// Base price per night
    #[arg(long)]
    pub price: Option<String>,

    /// Included service, e.g. wifi (repeatable)
    #[arg(long = "service")]
    pub services: Vec<String>,

    /// Seasonal price as FROM:TO:PRICE, e.g. 2024-07-01:2024-08-31:160 (repeatable)
    #[arg(long = "price-window")]
    pub price_windows: Vec<String>,

    /// Image file to upload (repeatable, at least one)
    #[arg(long = "image")]
    pub images: Vec<String>,
}

pub async fn run(args: &GlampingArgs, client: &Client) -> Result<()> {
    match &args.command {
        GlampingCommand::Create(fields) => {
            let form = GlampingForm {
                title: fields.title.clone(),
                description: fields.description.clone(),
                capacity: fields.capacity.clone(),
                price: fields.price.clone(),
                services: fields.services.clone(),
                custom_prices: fields
                    .price_windows
                    .iter()
                    .map(|w| parse_price_window(w))
                    .collect::<Result<_>>()?,
                existing_images: Vec::new(),
                uploads: load_uploads(&fields.images)?,
            };
            super::save(client, form, None).await
        }
    }
}

pub fn parse_price_window(input: &str) -> Result<PriceWindowInput> {
    let parts: Vec<&str> = input.split(':').collect();
    let [from, to, price] = parts.as_slice() else {
        bail!(
            "price window '{}' must look like FROM:TO:PRICE (e.g. 2024-07-01:2024-08-31:160)",
            input
        );
    };
    Ok(PriceWindowInput {
        date_from: Some(from.to_string()),
        date_to: Some(to.to_string()),
        price: Some(price.to_string()),
    })
}

fn load_uploads(paths: &[String]) -> Result<Vec<Upload>> {
    paths
        .iter()
        .map(|p| {
            load_upload(Path::new(p)).with_context(|| format!("failed to read image {}", p))
        })
        .collect()
}
