//! Sales Dashboard
//! Boundary between the loaded orders and whatever displays them.

use crate::config::DashboardConfig;
use crate::data::{self, LoaderError, OrdersDataset};
use crate::stats::{DateRange, QueryError, QueryResult, RangeQueryEngine};
use crate::view::DashboardView;
use std::sync::Arc;

/// Loaded-once orders plus the range the dashboard opens with.
///
/// Cloning is cheap and clones share the same dataset, so a front end can
/// hand one to every worker thread.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<OrdersDataset>,
    default_range: DateRange,
}

impl Dashboard {
    /// Load the orders file named in `config`. Failure here is fatal.
    pub fn initialize(config: &DashboardConfig) -> Result<Self, LoaderError> {
        let dataset = data::load(&config.data_path)?;
        Ok(Self::from_dataset(dataset, config.default_range()))
    }

    pub fn from_dataset(dataset: OrdersDataset, default_range: DateRange) -> Self {
        Self {
            dataset: Arc::new(dataset),
            default_range,
        }
    }

    pub fn dataset(&self) -> &OrdersDataset {
        &self.dataset
    }

    pub fn default_range(&self) -> DateRange {
        self.default_range
    }

    /// Recompute every card and series for new date-picker values.
    pub fn recompute(&self, start: &str, end: &str) -> Result<QueryResult, QueryError> {
        RangeQueryEngine::new(&self.dataset).recompute(start, end)
    }

    pub fn recompute_range(&self, range: DateRange) -> QueryResult {
        RangeQueryEngine::new(&self.dataset).query(range)
    }

    /// Result for the opening range.
    pub fn recompute_default(&self) -> QueryResult {
        self.recompute_range(self.default_range)
    }

    pub fn view(&self, result: &QueryResult) -> DashboardView {
        DashboardView::from_result(result)
    }
}
