//! Library layer for the glamping admin dashboard.
//!
//! Sits on top of `glamping_api` and holds everything the dashboard does
//! besides drawing: form validation, line-item composition for promotions and
//! reservations, paginated list state, search filters, mutation dispatch with
//! notifications, statistics charts and the support chat.

pub mod chat;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod filters;
pub mod line_items;
pub mod list_controller;
pub mod statistics;
pub mod uploads;
pub mod validation;

pub use glamping_api;
pub use glamping_api::types;
pub use glamping_api::{Client, FilterMap, ListQuery, StatisticsQuery};

pub use config::AdminConfig;
pub use dispatcher::{
    classify_error, FailureKind, MutationDispatcher, Notification, NotificationLog, Notifier,
};
pub use error::AdminError;
pub use filters::{FilterBuilder, ToFilterMap};
pub use line_items::{apply_discount, ItemCategory, LineItem, LineItemComposer, LineOption};
pub use list_controller::{ListController, ResourceSource, ViewMode};
pub use statistics::StatisticsBoard;
pub use validation::{FormErrors, FormState, Validate};
