mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use glamping_admin::AdminConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "glamping-admin")]
#[command(about = "Administer glampings, promotions, reservations and users")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Backend base URL (overrides GLAMPING_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Locale sent as Accept-Language (overrides GLAMPING_LOCALE)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and print the session token
    Signin(commands::signin::SigninArgs),
    /// List one page of a resource
    List(commands::list::ListArgs),
    /// Enable a resource
    Enable(commands::status::TargetArgs),
    /// Disable a resource
    Disable(commands::status::TargetArgs),
    /// Delete a resource
    Delete(commands::status::TargetArgs),
    /// Create or update FAQs
    Faq(commands::faq::FaqArgs),
    /// Create or update discount codes
    Discount(commands::discount::DiscountArgs),
    /// Create or update user accounts
    User(commands::user::UserArgs),
    /// Create glampings
    Glamping(commands::glamping::GlampingArgs),
    /// Price a set of line items against the live catalog
    Quote(commands::quote::QuoteArgs),
    /// Show net sales and reservation statistics
    Stats(commands::stats::StatsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("glamping_admin=info".parse::<tracing_subscriber::filter::Directive>()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output)?;

    let mut config = AdminConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url);
    }
    if let Some(locale) = &cli.locale {
        config = config.with_locale(locale);
    }
    let client = config.client()?;

    match &cli.command {
        Commands::Signin(args) => commands::signin::run(args, &client, format).await?,
        Commands::List(args) => commands::list::run(args, &client, format).await?,
        Commands::Enable(args) => {
            commands::status::run(args, commands::status::Action::Enable, &client).await?
        }
        Commands::Disable(args) => {
            commands::status::run(args, commands::status::Action::Disable, &client).await?
        }
        Commands::Delete(args) => {
            commands::status::run(args, commands::status::Action::Delete, &client).await?
        }
        Commands::Faq(args) => commands::faq::run(args, &client).await?,
        Commands::Discount(args) => commands::discount::run(args, &client).await?,
        Commands::User(args) => commands::user::run(args, &client).await?,
        Commands::Glamping(args) => commands::glamping::run(args, &client).await?,
        Commands::Quote(args) => commands::quote::run(args, &client, format).await?,
        Commands::Stats(args) => commands::stats::run(args, &client, format).await?,
    }

    Ok(())
}
