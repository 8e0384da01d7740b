//! Summary Cards
//! The four headline numbers plus both chart descriptors.

use crate::charts::ChartSpec;
use crate::stats::{DateRange, QueryResult};
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "Sales & Profit Dashboard";

/// One headline number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl SummaryCard {
    fn new(id: &'static str, label: &'static str, value: impl ToString) -> Self {
        Self {
            id,
            label,
            value: value.to_string(),
        }
    }
}

/// Everything a front end needs to draw the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub range: DateRange,
    pub matched_orders: usize,
    pub cards: Vec<SummaryCard>,
    pub charts: Vec<ChartSpec>,
}

impl DashboardView {
    pub fn from_result(result: &QueryResult) -> Self {
        let cards = vec![
            SummaryCard::new("card_TotalSales", "Total Sales", result.total_sales),
            SummaryCard::new("card_TotalProfit", "Total Profit", result.total_profit),
            SummaryCard::new("card_TotalQuantity", "Total Quantity", result.total_quantity),
            SummaryCard::new("card_TotalCustomer", "Customer Count", result.total_customer),
        ];

        Self {
            title: DASHBOARD_TITLE,
            range: result.range,
            matched_orders: result.matched_orders,
            cards,
            charts: vec![
                ChartSpec::sales_by_order_date(result),
                ChartSpec::category_quantity(result),
            ],
        }
    }

    /// Card value by label, e.g. `"Total Sales"`.
    pub fn card(&self, label: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value.as_str())
    }
}
