//! Chart Series Module
//! Describes the two dashboard figures as plain data for an external plotter.

use crate::stats::{QueryResult, BOUND_DATE_FORMAT};
use rust_decimal::Decimal;
use serde::Serialize;

pub const SALES_CHART_ID: &str = "chart1";
pub const SALES_CHART_TITLE: &str = "Sales by Order Date";
pub const CATEGORY_CHART_ID: &str = "chart2";
pub const CATEGORY_CHART_TITLE: &str = "Category Quantity";

/// How the plotting side should draw the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Bars summed per x value.
    Histogram,
    /// One bar per x value, each coloured by its own group.
    GroupedBar,
}

/// A single bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: Decimal,
    /// Colour group, set for grouped bars only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Chart description handed to the plotting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    /// Sales summed per order date.
    pub fn sales_by_order_date(result: &QueryResult) -> Self {
        Self {
            id: SALES_CHART_ID,
            title: SALES_CHART_TITLE,
            x_label: "Order Date",
            y_label: "Sales",
            kind: ChartKind::Histogram,
            points: result
                .sales_by_date
                .iter()
                .map(|p| ChartPoint {
                    x: p.date.format(BOUND_DATE_FORMAT).to_string(),
                    y: p.sales,
                    group: None,
                })
                .collect(),
        }
    }

    /// Quantity summed per category, coloured by category.
    pub fn category_quantity(result: &QueryResult) -> Self {
        Self {
            id: CATEGORY_CHART_ID,
            title: CATEGORY_CHART_TITLE,
            x_label: "Category",
            y_label: "Quantity",
            kind: ChartKind::GroupedBar,
            points: result
                .quantity_by_category
                .iter()
                .map(|p| ChartPoint {
                    x: p.category.clone(),
                    y: Decimal::from(p.quantity),
                    group: Some(p.category.clone()),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
