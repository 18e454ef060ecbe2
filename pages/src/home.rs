use hearth::{
    dom::{
        builder::{div, section},
        Render,
    },
    Bootstrap, DataIslands, Page, RenderResult, Scope,
};
use hearth_ui::{h3_with, EmptyState, MapCenter, MapPanel, WarningBanner};
use wasm_bindgen::prelude::*;

use crate::{bootstrap, data::Listing};

pub const ANCHOR: &str = "home-root";
pub const FEATURED_ISLAND: &str = "featured-listings";

const AREA: MapCenter = MapCenter {
    lat: 51.5072,
    lng: -0.1276,
};

pub fn page(scope: &Scope) -> RenderResult {
    let banner = (!scope.config().environment.is_production()).then_some(WarningBanner);

    // Featured listings are optional on the home page.
    let islands = scope.require::<DataIslands>()?;
    let featured: Vec<Listing> = match islands.raw(FEATURED_ISLAND) {
        Some(_) => islands.parse(FEATURED_ISLAND)?,
        None => Vec::new(),
    };

    let featured = if featured.is_empty() {
        EmptyState::new("No featured homes right now")
            .message("Check back soon for new listings.")
            .icon("fas fa-home")
            .render()
    } else {
        div()
            .classes_raw("columns is-multiline")
            .and_iter(featured.iter().map(|listing| {
                div()
                    .classes_raw("column is-one-third")
                    .and(listing.card(None))
            }))
            .into_view()
    };

    Ok(div()
        .class("home")
        .and(banner)
        .and(
            section()
                .classes_raw("section featured")
                .and(h3_with("Featured homes"))
                .and(featured),
        )
        .and(
            section()
                .classes_raw("section area")
                .and(h3_with("Explore the area"))
                .and(MapPanel::from_scope(scope, AREA)),
        )
        .into_view())
}

pub fn bootstrap() -> Bootstrap<impl Page> {
    bootstrap::with_site_styles(Bootstrap::new(ANCHOR, page)).data(FEATURED_ISLAND)
}

#[wasm_bindgen]
pub fn mount_home() {
    bootstrap::run(&bootstrap());
}
