use anyhow::Result;
use clap::{Args, Subcommand};
use glamping_admin::validation::{FormMode, UserForm};
use glamping_admin::Client;

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Create an account (password required)
    Create(UserFields),
    /// Update an account; a password resets it
    Update {
        /// User ID
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        fields: UserFields,
    },
}

#[derive(Args)]
pub struct UserFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// admin, supervisor or client
    #[arg(long)]
    pub role: Option<String>,

    /// At least 8 characters with upper and lower case letters and a digit
    #[arg(long)]
    pub password: Option<String>,
}

impl UserFields {
    fn to_form(&self, mode: FormMode) -> UserForm {
        UserForm {
            mode,
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            password: self.password.clone(),
        }
    }
}

pub async fn run(args: &UserArgs, client: &Client) -> Result<()> {
    match &args.command {
        UserCommand::Create(fields) => {
            super::save(client, fields.to_form(FormMode::Create), None).await
        }
        UserCommand::Update { id, fields } => {
            super::save(client, fields.to_form(FormMode::Edit), Some(*id)).await
        }
    }
}
