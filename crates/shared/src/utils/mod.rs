mod logs;
mod query;

pub use self::logs::init_logger;
pub use self::query::{QueryPairs, paginated_query, query_pairs};
