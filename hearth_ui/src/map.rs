use hearth::{
    dom::{builder::div, Attr, Render, View},
    MapsConfig, Scope,
};
use serde::Deserialize;

use crate::{notification, Color, LoadingOverlay};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

/// Container for the third-party map widget.
///
/// The SDK finds the container by its class and reads the data attributes.
/// Until it takes over, a loading overlay is shown.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPanel {
    pub center: MapCenter,
    /// Falls back to the configured default zoom.
    pub zoom: Option<u8>,
    pub maps: Option<MapsConfig>,
}

impl MapPanel {
    /// Panel using the map settings of the site configuration.
    pub fn from_scope(scope: &Scope, center: MapCenter) -> Self {
        Self {
            center,
            zoom: None,
            maps: scope.config().maps.clone(),
        }
    }
}

impl Render for MapPanel {
    fn render(self) -> View {
        let Some(maps) = self.maps else {
            return notification(Color::Default, "The map is unavailable right now.")
                .class("map-unavailable")
                .into_view();
        };

        let zoom = self.zoom.unwrap_or(maps.default_zoom);
        div()
            .class("map-panel")
            .attr(Attr::DataLat, self.center.lat.to_string())
            .attr(Attr::DataLng, self.center.lng.to_string())
            .attr(Attr::DataZoom, zoom.to_string())
            .attr(Attr::DataMapStyle, maps.style)
            .and(LoadingOverlay::active("Loading map"))
            .into_view()
    }
}
