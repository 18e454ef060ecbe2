//! Page bootstrap.
//!
//! A [`Bootstrap`] ties a page component to the id of the DOM element it is
//! mounted into. Mounting goes through a [`Host`], which is the live document
//! in the browser and [`MemoryHost`] everywhere else.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::{
    component::Page,
    compose::Composition,
    config::{MapsConfig, SiteConfig, CONFIG_ISLAND},
    context::Scope,
    dom::{render_to_string, View},
    error::{MountError, RenderError},
};

/// Environment a page is mounted into.
pub trait Host {
    type Anchor;

    fn find_anchor(&self, id: &str) -> Option<Self::Anchor>;

    /// Make a stylesheet available. Returns `false` if it already was.
    fn add_stylesheet(&mut self, href: &str) -> Result<bool, MountError>;

    /// Raw text of the data island with the given id.
    fn data_island(&self, id: &str) -> Option<String>;

    /// Expose map settings to third-party SDKs. `None` publishes nothing.
    fn publish_maps(&mut self, maps: Option<&MapsConfig>) -> Result<(), MountError>;

    fn render(&mut self, anchor: &Self::Anchor, view: View) -> Result<(), MountError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// The anchor element does not exist. Nothing was rendered.
    AnchorMissing,
}

/// Raw data islands read for a page, keyed by element id.
///
/// Provided to the page through the [`Scope`]. Parsing happens at render time
/// so that bad data is a render error the error boundary can isolate.
#[derive(Clone, Debug, Default)]
pub struct DataIslands(HashMap<String, String>);

impl DataIslands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, raw: impl Into<String>) {
        self.0.insert(id.into(), raw.into());
    }

    pub fn raw(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn parse<T: DeserializeOwned>(&self, id: &str) -> Result<T, RenderError> {
        let raw = self.raw(id).ok_or_else(|| RenderError::MissingData {
            island: id.to_string(),
        })?;
        serde_json::from_str(raw).map_err(|source| RenderError::InvalidData {
            island: id.to_string(),
            source,
        })
    }
}

pub struct Bootstrap<P> {
    anchor: &'static str,
    stylesheets: Vec<&'static str>,
    islands: Vec<&'static str>,
    page: P,
}

impl<P: Page> Bootstrap<P> {
    pub fn new(anchor: &'static str, page: P) -> Self {
        Self {
            anchor,
            stylesheets: Vec::new(),
            islands: Vec::new(),
            page,
        }
    }

    #[must_use]
    pub fn stylesheet(mut self, href: &'static str) -> Self {
        self.stylesheets.push(href);
        self
    }

    /// Read the data island with this id and provide it to the page.
    #[must_use]
    pub fn data(mut self, island: &'static str) -> Self {
        self.islands.push(island);
        self
    }

    pub fn anchor(&self) -> &'static str {
        self.anchor
    }

    /// Resolve configuration from the host, then [`mount`](Self::mount).
    ///
    /// `compose` builds the decorator stack from the resolved configuration.
    pub fn launch<H, F>(&self, host: &mut H, compose: F) -> Result<MountOutcome, MountError>
    where
        H: Host,
        F: FnOnce(&SiteConfig) -> Composition,
    {
        let config = SiteConfig::resolve(host.data_island(CONFIG_ISLAND).as_deref());
        host.publish_maps(config.maps.as_ref())?;

        let composition = compose(&config);
        let scope = Scope::new(config);
        self.mount(host, &scope, &composition)
    }

    /// Mount the page into its anchor.
    ///
    /// A missing anchor is not an error: the page is simply not present in
    /// this document.
    pub fn mount<H: Host>(
        &self,
        host: &mut H,
        scope: &Scope,
        composition: &Composition,
    ) -> Result<MountOutcome, MountError> {
        for href in &self.stylesheets {
            host.add_stylesheet(href)?;
        }

        let Some(anchor) = host.find_anchor(self.anchor) else {
            tracing::warn!(anchor = self.anchor, "anchor element not found, skipping mount");
            return Ok(MountOutcome::AnchorMissing);
        };

        let mut islands = DataIslands::new();
        for id in &self.islands {
            match host.data_island(id) {
                Some(raw) => islands.insert(*id, raw),
                None => tracing::debug!(island = id, "data island not present"),
            }
        }
        let scope = scope.provide(islands);

        let view = composition.render(&scope, &self.page)?;
        host.render(&anchor, view)?;

        tracing::debug!(
            anchor = self.anchor,
            layers = ?composition.layer_names(),
            "page mounted"
        );
        Ok(MountOutcome::Mounted)
    }
}

/// In-memory [`Host`].
///
/// Keeps rendered views instead of attaching them, so they can be inspected,
/// serialised with [`render_to_string`] or have their callbacks dispatched.
#[derive(Debug, Default)]
pub struct MemoryHost {
    anchors: Vec<String>,
    islands: HashMap<String, String>,
    stylesheets: Vec<String>,
    published: Vec<Option<MapsConfig>>,
    renders: Vec<(String, View)>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_anchor(mut self, id: impl Into<String>) -> Self {
        self.anchors.push(id.into());
        self
    }

    #[must_use]
    pub fn with_island(mut self, id: impl Into<String>, raw: impl Into<String>) -> Self {
        self.islands.insert(id.into(), raw.into());
        self
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Every map publish, in order.
    pub fn published_maps(&self) -> &[Option<MapsConfig>] {
        &self.published
    }

    /// Every render call as `(anchor, view)`, in order.
    pub fn renders(&self) -> &[(String, View)] {
        &self.renders
    }

    pub fn view(&self, anchor: &str) -> Option<&View> {
        self.renders
            .iter()
            .find(|(id, _)| id == anchor)
            .map(|(_, view)| view)
    }

    pub fn html(&self, anchor: &str) -> Option<String> {
        self.view(anchor).map(render_to_string)
    }
}

impl Host for MemoryHost {
    type Anchor = String;

    fn find_anchor(&self, id: &str) -> Option<String> {
        self.anchors.iter().find(|anchor| *anchor == id).cloned()
    }

    fn add_stylesheet(&mut self, href: &str) -> Result<bool, MountError> {
        if self.stylesheets.iter().any(|s| s == href) {
            return Ok(false);
        }
        self.stylesheets.push(href.to_string());
        Ok(true)
    }

    fn data_island(&self, id: &str) -> Option<String> {
        self.islands.get(id).cloned()
    }

    fn publish_maps(&mut self, maps: Option<&MapsConfig>) -> Result<(), MountError> {
        self.published.push(maps.cloned());
        Ok(())
    }

    fn render(&mut self, anchor: &String, view: View) -> Result<(), MountError> {
        if self.view(anchor).is_some() {
            return Err(MountError::AlreadyMounted(anchor.clone()));
        }
        self.renders.push((anchor.clone(), view));
        Ok(())
    }
}

impl<P> std::fmt::Debug for Bootstrap<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap")
            .field("anchor", &self.anchor)
            .field("stylesheets", &self.stylesheets)
            .field("islands", &self.islands)
            .finish()
    }
}
