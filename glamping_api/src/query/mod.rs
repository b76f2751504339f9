mod common;
pub use self::common::{FilterMap, Query};

mod list;
pub use self::list::ListQuery;

mod statistics;
pub use self::statistics::StatisticsQuery;
