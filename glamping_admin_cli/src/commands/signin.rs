use anyhow::Result;
use clap::Args;
use glamping_admin::validation::{SignInForm, Validate};
use glamping_admin::{classify_error, Client};

use super::reject_form;
use crate::output::{build_user_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct SigninArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: &SigninArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let form = SignInForm {
        email: Some(args.email.clone()),
        password: Some(args.password.clone()),
    };
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => return reject_form(&errors),
    };

    let session = client.sign_in(&request).await.map_err(|e| {
        let failure = classify_error(&e);
        anyhow::anyhow!("sign-in failed: {}", failure)
    })?;

    match format {
        OutputFormat::Json => print_json(&session),
        _ => {
            print_rows(
                build_user_rows(std::slice::from_ref(&session.user)),
                &session.user,
                format,
            )?;
            eprintln!("Export GLAMPING_TOKEN to reuse this session:");
            println!("{}", session.token);
        }
    }
    Ok(())
}
