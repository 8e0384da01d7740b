//! Order Normalizer Module
//! Converts the raw string table into typed order records (dates, money, quantities).

use super::record::{OrderRecord, OrdersDataset};
use chrono::NaiveDate;
use polars::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

pub const ORDER_ID_COL: &str = "Order ID";
pub const ORDER_DATE_COL: &str = "Order Date";
pub const SHIP_DATE_COL: &str = "Ship Date";
pub const CUSTOMER_ID_COL: &str = "Customer ID";
pub const CATEGORY_COL: &str = "Category";
pub const QUANTITY_COL: &str = "Quantity";
pub const SALES_COL: &str = "Sales";
pub const PROFIT_COL: &str = "Profit";

/// Columns every orders file must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    ORDER_DATE_COL,
    SHIP_DATE_COL,
    SALES_COL,
    PROFIT_COL,
    QUANTITY_COL,
    CATEGORY_COL,
    CUSTOMER_ID_COL,
];

/// Day/month/year, as exported by the order system.
pub const SOURCE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Currency symbols and thousands separators removed before parsing amounts.
const AMOUNT_NOISE: [char; 5] = ['$', '€', '£', '¥', ','];

/// Largest accepted magnitude for a single money cell (exclusive).
///
/// Keeps every range sum far below `Decimal::MAX`, so aggregation cannot overflow.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("Row {row}: empty value in column '{column}'")]
    MissingValue { column: &'static str, row: usize },
    #[error("Row {row}: invalid date '{value}' in column '{column}' (expected dd/mm/yyyy)")]
    InvalidDate {
        column: &'static str,
        row: usize,
        value: String,
    },
    #[error("Row {row}: invalid amount '{value}' in column '{column}' (not a number or out of range)")]
    InvalidAmount {
        column: &'static str,
        row: usize,
        value: String,
    },
    #[error("Row {row}: invalid quantity '{value}' in column '{column}'")]
    InvalidQuantity {
        column: &'static str,
        row: usize,
        value: String,
    },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Parse a `dd/mm/yyyy` date cell.
pub fn parse_source_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), SOURCE_DATE_FORMAT).ok()
}

/// Parse a formatted money cell such as `"$1,234.50"`, `"$ 99"` or `"-$5.00"`.
///
/// Values at or above `MAX_AMOUNT_UNITS` in magnitude are rejected.
pub fn parse_currency(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.chars().filter(|c| !AMOUNT_NOISE.contains(c)).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned)
        .ok()
        .filter(|amount| amount.abs() < Decimal::from(MAX_AMOUNT_UNITS))
}

/// Parse a non-negative integer quantity.
///
/// Capped at `u32::MAX` per row so range totals fit comfortably in a `u64`.
pub fn parse_quantity(raw: &str) -> Option<u64> {
    raw.trim().parse::<u32>().ok().map(u64::from)
}

/// Turns the string-typed CSV table into an `OrdersDataset`.
pub struct OrderNormalizer;

impl OrderNormalizer {
    /// Normalize every row, rejecting the whole table on the first bad cell.
    pub fn normalize(df: &DataFrame) -> Result<OrdersDataset, FormatError> {
        for name in REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(FormatError::MissingColumn(name.to_string()));
            }
        }

        let order_dates = Self::string_column(df, ORDER_DATE_COL)?;
        let ship_dates = Self::string_column(df, SHIP_DATE_COL)?;
        let customers = Self::string_column(df, CUSTOMER_ID_COL)?;
        let categories = Self::string_column(df, CATEGORY_COL)?;
        let quantities = Self::string_column(df, QUANTITY_COL)?;
        let sales = Self::string_column(df, SALES_COL)?;
        let profits = Self::string_column(df, PROFIT_COL)?;
        let order_ids = match df.column(ORDER_ID_COL) {
            Ok(_) => Some(Self::string_column(df, ORDER_ID_COL)?),
            Err(_) => None,
        };

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            // Data rows are numbered from 1, header excluded
            let row = i + 1;

            let order_id = order_ids
                .as_ref()
                .and_then(|ids| ids[i].as_deref())
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string);

            records.push(OrderRecord {
                order_id,
                order_date: Self::date_cell(&order_dates[i], ORDER_DATE_COL, row)?,
                ship_date: Self::date_cell(&ship_dates[i], SHIP_DATE_COL, row)?,
                customer_id: Self::cell(&customers[i], CUSTOMER_ID_COL, row)?.to_string(),
                category: Self::cell(&categories[i], CATEGORY_COL, row)?.to_string(),
                quantity: Self::quantity_cell(&quantities[i], row)?,
                sales: Self::amount_cell(&sales[i], SALES_COL, row)?,
                profit: Self::amount_cell(&profits[i], PROFIT_COL, row)?,
            });
        }

        Ok(OrdersDataset::from_records(records))
    }

    /// Read a column as optional strings, casting non-string columns first.
    fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, FormatError> {
        let column = df.column(name)?.cast(&DataType::String)?;
        let ca = column.as_materialized_series().str()?;
        Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
    }

    fn cell<'a>(
        value: &'a Option<String>,
        column: &'static str,
        row: usize,
    ) -> Result<&'a str, FormatError> {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(FormatError::MissingValue { column, row }),
        }
    }

    fn date_cell(
        value: &Option<String>,
        column: &'static str,
        row: usize,
    ) -> Result<NaiveDate, FormatError> {
        let raw = Self::cell(value, column, row)?;
        parse_source_date(raw).ok_or_else(|| FormatError::InvalidDate {
            column,
            row,
            value: raw.to_string(),
        })
    }

    fn amount_cell(
        value: &Option<String>,
        column: &'static str,
        row: usize,
    ) -> Result<Decimal, FormatError> {
        let raw = Self::cell(value, column, row)?;
        parse_currency(raw).ok_or_else(|| FormatError::InvalidAmount {
            column,
            row,
            value: raw.to_string(),
        })
    }

    fn quantity_cell(value: &Option<String>, row: usize) -> Result<u64, FormatError> {
        let raw = Self::cell(value, QUANTITY_COL, row)?;
        parse_quantity(raw).ok_or_else(|| FormatError::InvalidQuantity {
            column: QUANTITY_COL,
            row,
            value: raw.to_string(),
        })
    }
}
