//! CLI subcommand implementations.

pub mod discount;
pub mod faq;
pub mod glamping;
pub mod list;
pub mod quote;
pub mod signin;
pub mod stats;
pub mod status;
pub mod user;

use anyhow::{bail, Result};
use clap::ValueEnum;
use glamping_admin::dispatcher::{Level, MutationDispatcher, NotificationLog};
use glamping_admin::glamping_api::payload::Payload;
use glamping_admin::types::Resource;
use glamping_admin::validation::{FormErrors, FormState, Validate};
use glamping_admin::{AdminError, Client, ListController};

/// Resources exposed by list and status commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    Users,
    Glampings,
    Products,
    Experiences,
    Promotions,
    Discounts,
    Reserves,
    Reviews,
    Faqs,
}

/// Prints every recorded notification to stderr and fails if any of them
/// reported an error.
pub fn report(log: &NotificationLog) -> Result<()> {
    let mut failed = false;
    for note in log.drain() {
        match note.level {
            Level::Success => eprintln!("{}", note.message),
            Level::Warning => eprintln!("warning: {}", note.message),
            Level::Error => {
                failed = true;
                eprintln!("error: {}", note.message);
            }
        }
    }
    if failed {
        bail!("request failed");
    }
    Ok(())
}

/// Fails with the form's field errors.
pub fn reject_form(errors: &FormErrors) -> Result<()> {
    Err(AdminError::from(errors.clone()).into())
}

/// Validates `form` and creates a record, or updates record `id` when given.
pub async fn save<F, T>(client: &Client, form: F, id: Option<i64>) -> Result<()>
where
    F: Validate,
    F::Payload: Payload<Target = T>,
    T: Resource + Clone + Send,
{
    let list: ListController<T, Client> = ListController::new(client.clone());
    let dispatcher = MutationDispatcher::new(client.clone(), NotificationLog::new());
    let mut state = FormState::new(form);
    match id {
        None => {
            list.open_add();
            dispatcher.submit_form(&list, &mut state).await;
        }
        Some(id) => {
            if let Some(payload) = state.submit() {
                dispatcher.update(&list, id, &payload).await;
            }
        }
    }
    if !state.errors().is_empty() {
        return reject_form(state.errors());
    }
    report(dispatcher.notifier())
}
