//! Sales Dash - order CSV loading and date-range aggregation
//!
//! Loads the orders file once, then answers "what happened between these two
//! dates" with four headline totals and two chart series.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod stats;
pub mod view;

pub use config::{ConfigError, DashboardConfig};
pub use dashboard::Dashboard;
pub use data::{load, FormatError, LoaderError, OrderRecord, OrdersDataset};
pub use stats::{query, DateRange, QueryError, QueryResult};
pub use view::DashboardView;
