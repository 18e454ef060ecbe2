//! Page bundles of the rental site.
//!
//! The host document loads the wasm module and calls one of the exported
//! `mount_*` functions. Each mounts its page into a fixed anchor element.

use hearth::{config::CONFIG_ISLAND, BrowserHost, Host, SiteConfig};
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod dashboard;
pub mod data;
pub mod home;
pub mod inbox;
pub mod listings;
mod telemetry;

#[wasm_bindgen(start)]
pub fn start() {
    let island = BrowserHost::new()
        .ok()
        .and_then(|host| host.data_island(CONFIG_ISLAND));
    let config = SiteConfig::resolve(island.as_deref());
    telemetry::init(config.tracing_level());
}
