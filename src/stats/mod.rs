//! Stats module - date-range filtering and aggregation

mod query;
mod range;
mod result;

pub use query::{query, round_whole, RangeQueryEngine};
pub use range::{DateRange, QueryError, BOUND_DATE_FORMAT};
pub use result::{CategoryQuantity, DateSales, QueryResult};
