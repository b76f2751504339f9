mod client;
mod errors;
pub mod payload;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{FilterMap, ListQuery, Query, StatisticsQuery};
