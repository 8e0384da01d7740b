//! Range Query Module
//! Filters the orders table by order date and computes dashboard aggregates.

use super::range::{DateRange, QueryError};
use super::result::{CategoryQuantity, DateSales, QueryResult};
use crate::data::{OrderRecord, OrdersDataset};
use chrono::NaiveDate;
use rayon::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Smallest slice of records handed to one rayon task.
const MIN_RECORDS_PER_TASK: usize = 4096;

/// Round a money total to whole units, ties to even.
pub fn round_whole(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    // Keep -0.4 from printing as "-0"
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Aggregate every order whose order date lies in `range`.
///
/// Sums are exact decimals, so the parallel reduction returns the same
/// result no matter how rayon splits the work. Loaded amounts are bounded by
/// `MAX_AMOUNT_UNITS` and quantities by `u32::MAX`, which keeps every sum far
/// from `Decimal::MAX`; records built by hand must respect the same bounds.
pub fn query(dataset: &OrdersDataset, range: DateRange) -> QueryResult {
    if range.is_empty() {
        debug!(%range, "reversed range, nothing to aggregate");
        return QueryResult::empty(range);
    }

    let acc = dataset
        .records()
        .par_iter()
        .with_min_len(MIN_RECORDS_PER_TASK)
        .filter(|record| range.contains(record.order_date))
        .fold(RangeAccumulator::default, RangeAccumulator::add)
        .reduce(RangeAccumulator::default, RangeAccumulator::merge);

    debug!(%range, matched = acc.orders, total = dataset.len(), "range query");
    acc.finish(range)
}

/// Runs range queries against a loaded dataset.
#[derive(Debug, Clone, Copy)]
pub struct RangeQueryEngine<'a> {
    dataset: &'a OrdersDataset,
}

impl<'a> RangeQueryEngine<'a> {
    pub fn new(dataset: &'a OrdersDataset) -> Self {
        Self { dataset }
    }

    pub fn query(&self, range: DateRange) -> QueryResult {
        query(self.dataset, range)
    }

    /// Parse raw `YYYY-MM-DD` bounds and run the query.
    ///
    /// A bad bound only fails this call; the dataset is untouched.
    pub fn recompute(&self, start: &str, end: &str) -> Result<QueryResult, QueryError> {
        let range = DateRange::parse(start, end).inspect_err(|e| warn!("{e}"))?;
        Ok(self.query(range))
    }
}

/// Partial aggregates for one chunk of matching records.
#[derive(Debug, Default)]
struct RangeAccumulator<'a> {
    orders: usize,
    sales: Decimal,
    profit: Decimal,
    quantity: u64,
    customers: HashSet<&'a str>,
    sales_by_date: BTreeMap<NaiveDate, Decimal>,
    quantity_by_category: BTreeMap<&'a str, u64>,
}

impl<'a> RangeAccumulator<'a> {
    fn add(mut self, record: &'a OrderRecord) -> Self {
        self.orders += 1;
        self.sales += record.sales;
        self.profit += record.profit;
        self.quantity += record.quantity;
        self.customers.insert(record.customer_id.as_str());
        *self.sales_by_date.entry(record.order_date).or_default() += record.sales;
        *self
            .quantity_by_category
            .entry(record.category.as_str())
            .or_default() += record.quantity;
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.orders += other.orders;
        self.sales += other.sales;
        self.profit += other.profit;
        self.quantity += other.quantity;
        self.customers.extend(other.customers);
        for (date, sales) in other.sales_by_date {
            *self.sales_by_date.entry(date).or_default() += sales;
        }
        for (category, quantity) in other.quantity_by_category {
            *self.quantity_by_category.entry(category).or_default() += quantity;
        }
        self
    }

    fn finish(self, range: DateRange) -> QueryResult {
        QueryResult {
            range,
            matched_orders: self.orders,
            total_sales: round_whole(self.sales),
            total_profit: round_whole(self.profit),
            total_quantity: self.quantity,
            total_customer: self.customers.len(),
            sales_by_date: self
                .sales_by_date
                .into_iter()
                .map(|(date, sales)| DateSales { date, sales })
                .collect(),
            quantity_by_category: self
                .quantity_by_category
                .into_iter()
                .map(|(category, quantity)| CategoryQuantity {
                    category: category.to_string(),
                    quantity,
                })
                .collect(),
        }
    }
}
