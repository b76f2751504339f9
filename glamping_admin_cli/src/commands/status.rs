use anyhow::Result;
use clap::Args;
use glamping_admin::dispatcher::{MutationDispatcher, NotificationLog};
use glamping_admin::types::{
    DiscountCode, Experience, Faq, Glamping, Product, Promotion, Reserve, Resource, Review, User,
};
use glamping_admin::{Client, ListController};

use super::{report, ResourceKind};

#[derive(Args)]
pub struct TargetArgs {
    /// Resource the record belongs to
    #[arg(value_enum)]
    pub resource: ResourceKind,

    /// Record ID
    pub id: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Enable,
    Disable,
    Delete,
}

pub async fn run(args: &TargetArgs, action: Action, client: &Client) -> Result<()> {
    match args.resource {
        ResourceKind::Users => apply::<User>(client, action, args.id).await,
        ResourceKind::Glampings => apply::<Glamping>(client, action, args.id).await,
        ResourceKind::Products => apply::<Product>(client, action, args.id).await,
        ResourceKind::Experiences => apply::<Experience>(client, action, args.id).await,
        ResourceKind::Promotions => apply::<Promotion>(client, action, args.id).await,
        ResourceKind::Discounts => apply::<DiscountCode>(client, action, args.id).await,
        ResourceKind::Reserves => apply::<Reserve>(client, action, args.id).await,
        ResourceKind::Reviews => apply::<Review>(client, action, args.id).await,
        ResourceKind::Faqs => apply::<Faq>(client, action, args.id).await,
    }
}

async fn apply<R>(client: &Client, action: Action, id: i64) -> Result<()>
where
    R: Resource + Clone + Send,
{
    let list: ListController<R, Client> = ListController::new(client.clone());
    let dispatcher = MutationDispatcher::new(client.clone(), NotificationLog::new());
    match action {
        Action::Enable => dispatcher.enable(&list, id).await,
        Action::Disable => dispatcher.disable(&list, id).await,
        Action::Delete => dispatcher.delete(&list, id).await,
    };
    report(dispatcher.notifier())
}
