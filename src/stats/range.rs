//! Date Range Module
//! Inclusive order-date bounds for a dashboard query.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Format of the date bounds coming from the date pickers.
pub const BOUND_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid {bound} date '{value}' (expected YYYY-MM-DD)")]
    InvalidRange { bound: &'static str, value: String },
}

/// Inclusive `[start, end]` range over order dates.
///
/// `start > end` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, QueryError> {
        Ok(Self {
            start: parse_bound("start", start)?,
            end: parse_bound("end", end)?,
        })
    }

    /// December 2015, the range the dashboard opens with.
    pub fn dashboard_default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2015, 12, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2015, 12, 31).unwrap_or_default(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format(BOUND_DATE_FORMAT),
            self.end.format(BOUND_DATE_FORMAT)
        )
    }
}

fn parse_bound(bound: &'static str, raw: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(raw.trim(), BOUND_DATE_FORMAT).map_err(|_| {
        QueryError::InvalidRange {
            bound,
            value: raw.to_string(),
        }
    })
}
