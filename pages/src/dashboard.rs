use hearth::{
    dom::{builder::div, Render},
    Bootstrap, DataIslands, Page, RenderResult, Scope,
};
use hearth_ui::{h3_with, EmptyState, StatCard};
use wasm_bindgen::prelude::*;

use crate::bootstrap;

pub const ANCHOR: &str = "dashboard-root";
pub const DASHBOARD_ISLAND: &str = "dashboard-data";

/// Management dashboard. The stats island is required; without it the page
/// fails to render and the error boundary takes over.
pub fn page(scope: &Scope) -> RenderResult {
    let stats: Vec<StatCard> = scope.require::<DataIslands>()?.parse(DASHBOARD_ISLAND)?;

    let body = if stats.is_empty() {
        EmptyState::new("No statistics yet")
            .message("Figures appear once your first property is let.")
            .icon("fas fa-chart-bar")
            .render()
    } else {
        div()
            .classes_raw("columns is-multiline")
            .and_iter(
                stats
                    .into_iter()
                    .map(|stat| div().classes_raw("column is-one-quarter").and(stat)),
            )
            .into_view()
    };

    Ok(div()
        .class("dashboard")
        .and(h3_with("Overview"))
        .and(body)
        .into_view())
}

pub fn bootstrap() -> Bootstrap<impl Page> {
    bootstrap::with_site_styles(Bootstrap::new(ANCHOR, page)).data(DASHBOARD_ISLAND)
}

#[wasm_bindgen]
pub fn mount_dashboard() {
    bootstrap::run(&bootstrap());
}
