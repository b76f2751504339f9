use anyhow::Result;
use clap::{Args, Subcommand};
use glamping_admin::validation::DiscountCodeForm;
use glamping_admin::Client;

#[derive(Args)]
pub struct DiscountArgs {
    #[command(subcommand)]
    pub command: DiscountCommand,
}

#[derive(Subcommand)]
pub enum DiscountCommand {
    /// Create a discount code
    Create(DiscountFields),
    /// Replace an existing discount code
    Update {
        /// Discount code ID
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        fields: DiscountFields,
    },
}

#[derive(Args)]
pub struct DiscountFields {
    /// Code customers type at checkout (uppercased)
    #[arg(long)]
    pub code: Option<String>,

    /// Percentage off, 1-100
    #[arg(long)]
    pub discount: Option<String>,

    /// Last valid day (YYYY-MM-DD)
    #[arg(long)]
    pub expired_date: Option<String>,

    /// How many times the code can be redeemed
    #[arg(long)]
    pub stock: Option<String>,
}

impl DiscountFields {
    fn to_form(&self) -> DiscountCodeForm {
        DiscountCodeForm {
            code: self.code.clone(),
            discount: self.discount.clone(),
            expired_date: self.expired_date.clone(),
            stock: self.stock.clone(),
        }
    }
}

pub async fn run(args: &DiscountArgs, client: &Client) -> Result<()> {
    match &args.command {
        DiscountCommand::Create(fields) => super::save(client, fields.to_form(), None).await,
        DiscountCommand::Update { id, fields } => {
            super::save(client, fields.to_form(), Some(*id)).await
        }
    }
}
