//! Order Record Module
//! Typed rows of the normalized orders table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One normalized row of the orders CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub order_id: Option<String>,
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub customer_id: String,
    pub category: String,
    pub quantity: u64,
    /// Sales amount with currency formatting removed.
    pub sales: Decimal,
    /// Profit amount, may be negative.
    pub profit: Decimal,
}

/// The normalized orders table.
///
/// Built once by the loader and never mutated afterwards: there are no
/// `&mut` accessors, so it can be shared freely behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct OrdersDataset {
    records: Vec<OrderRecord>,
    source: Option<PathBuf>,
}

impl OrdersDataset {
    /// Build a dataset from already normalized records (source order is kept).
    ///
    /// Amounts are expected below `MAX_AMOUNT_UNITS` in magnitude, as the
    /// normalizer guarantees for loaded files.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File the dataset was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Earliest and latest order date, `None` for an empty dataset.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.order_date;
        Some(self.records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.order_date), hi.max(r.order_date))
        }))
    }
}
