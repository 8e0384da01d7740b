//! Query Result Module
//! Aggregates and chart series produced for one date range.

use super::range::DateRange;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Summed sales for one order date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateSales {
    pub date: NaiveDate,
    pub sales: Decimal,
}

/// Summed quantity for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryQuantity {
    pub category: String,
    pub quantity: u64,
}

/// Everything the dashboard displays for a date range.
///
/// Built fresh by every query and never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub range: DateRange,
    /// Number of orders inside the range.
    pub matched_orders: usize,
    /// Sales total rounded to whole units (ties to even).
    pub total_sales: Decimal,
    /// Profit total rounded to whole units (ties to even).
    pub total_profit: Decimal,
    pub total_quantity: u64,
    /// Distinct customer ids inside the range.
    pub total_customer: usize,
    /// Ascending by date, one point per distinct order date.
    pub sales_by_date: Vec<DateSales>,
    /// Alphabetical by category.
    pub quantity_by_category: Vec<CategoryQuantity>,
}

impl QueryResult {
    /// Result for a range that matched no orders.
    pub fn empty(range: DateRange) -> Self {
        Self {
            range,
            matched_orders: 0,
            total_sales: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            total_quantity: 0,
            total_customer: 0,
            sales_by_date: Vec::new(),
            quantity_by_category: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matched_orders == 0
    }
}
