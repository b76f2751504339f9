use anyhow::Result;
use clap::{Args, Subcommand};
use glamping_admin::validation::FaqForm;
use glamping_admin::Client;

#[derive(Args)]
pub struct FaqArgs {
    #[command(subcommand)]
    pub command: FaqCommand,
}

#[derive(Subcommand)]
pub enum FaqCommand {
    /// Create a FAQ entry
    Create(FaqFields),
    /// Replace an existing FAQ entry
    Update {
        /// FAQ ID
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        fields: FaqFields,
    },
}

#[derive(Args)]
pub struct FaqFields {
    #[arg(long)]
    pub question: Option<String>,

    #[arg(long)]
    pub answer: Option<String>,
}

impl FaqFields {
    fn to_form(&self) -> FaqForm {
        FaqForm {
            question: self.question.clone(),
            answer: self.answer.clone(),
        }
    }
}

pub async fn run(args: &FaqArgs, client: &Client) -> Result<()> {
    match &args.command {
        FaqCommand::Create(fields) => super::save(client, fields.to_form(), None).await,
        FaqCommand::Update { id, fields } => super::save(client, fields.to_form(), Some(*id)).await,
    }
}
