//! View module - what the dashboard shows for one query

mod cards;
mod terminal;

pub use cards::{DashboardView, SummaryCard, DASHBOARD_TITLE};
pub use terminal::render_table;
