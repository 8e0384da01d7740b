//! Terminal Renderer
//! Draws the dashboard view as text tables.

use super::cards::DashboardView;
use crate::charts::ChartSpec;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Render the title, the cards row and one table per chart series.
pub fn render_table(view: &DashboardView) -> String {
    let mut out = format!(
        "{}\n{} ({} orders)\n",
        view.title, view.range, view.matched_orders
    );

    let mut cards = Table::new();
    cards
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(view.cards.iter().map(|c| Cell::new(c.label)))
        .add_row(
            view.cards
                .iter()
                .map(|c| Cell::new(&c.value).set_alignment(CellAlignment::Right)),
        );
    out.push_str(&cards.to_string());

    for chart in &view.charts {
        out.push_str("\n\n");
        out.push_str(&series_table(chart));
    }
    out.push('\n');
    out
}

fn series_table(chart: &ChartSpec) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![chart.x_label, chart.y_label]);

    if chart.is_empty() {
        table.add_row(vec!["(no orders in range)", ""]);
    }
    for point in &chart.points {
        table.add_row(vec![
            Cell::new(&point.x),
            Cell::new(point.y).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n{}", chart.title, table)
}
