//! Charts module - chart descriptors (data only, no rendering)

mod series;

pub use series::{
    ChartKind, ChartPoint, ChartSpec, CATEGORY_CHART_ID, CATEGORY_CHART_TITLE, SALES_CHART_ID,
    SALES_CHART_TITLE,
};
