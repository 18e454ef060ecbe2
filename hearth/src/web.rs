//! Helpers for interacting with the browser environment.

use std::{cell::RefCell, collections::HashMap};

use wasm_bindgen::JsValue;

use crate::{
    config::{MapsConfig, MAPS_GLOBAL},
    dom::{view::RetainedView, Attr, Tag, View},
    error::{DomError, MountError},
    mount::Host,
};

/// Defines an enum that maps to plain string values.
///
/// Used for the tag, attribute and event vocabularies so that the rest of the
/// crate never passes raw strings to the DOM.
#[macro_export]
macro_rules! make_str_enum {
    (
        $enum_name:ident {
            $( $name:ident = $value:literal, )*
        }
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $( $name, )*
        }

        impl $enum_name {
            /// Convert to a string.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(
                        Self::$name => $value,
                    )*
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or_else(|| DomError::new("no global `window` available"))
}

pub fn document() -> Result<web_sys::Document, DomError> {
    window()?
        .document()
        .ok_or_else(|| DomError::new("window has no document"))
}

pub(crate) fn create_element(
    document: &web_sys::Document,
    tag: Tag,
) -> Result<web_sys::Element, DomError> {
    document
        .create_element(tag.as_str())
        .map_err(|err| DomError::js("createElement", err))
}

pub(crate) fn set_attribute(
    elem: &web_sys::Element,
    attr: Attr,
    value: &str,
) -> Result<(), DomError> {
    elem.set_attribute(attr.as_str(), value)
        .map_err(|err| DomError::js("setAttribute", err))
}

/// Set a property on the global `window` object.
pub fn publish_global(name: &str, value: &JsValue) -> Result<(), DomError> {
    let window = window()?;
    js_sys::Reflect::set(&window, &JsValue::from_str(name), value)
        .map_err(|err| DomError::js("Reflect.set", err))?;
    Ok(())
}

thread_local! {
    /// Trees mounted by [`BrowserHost`], keyed by anchor id.
    /// Keeping them here keeps their listeners and effects alive for the
    /// lifetime of the page.
    static MOUNTED: RefCell<HashMap<String, RetainedView>> = RefCell::new(HashMap::new());
}

/// [`Host`] backed by the live browser document.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    document: web_sys::Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self, DomError> {
        Ok(Self {
            document: document()?,
        })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Host for BrowserHost {
    type Anchor = web_sys::Element;

    fn find_anchor(&self, id: &str) -> Option<Self::Anchor> {
        self.document.get_element_by_id(id)
    }

    fn add_stylesheet(&mut self, href: &str) -> Result<bool, MountError> {
        let selector = format!("link[rel=\"stylesheet\"][href=\"{href}\"]");
        let existing = self
            .document
            .query_selector(&selector)
            .map_err(|err| DomError::js("querySelector", err))?;
        if existing.is_some() {
            return Ok(false);
        }

        let link = create_element(&self.document, Tag::Link)?;
        set_attribute(&link, Attr::Rel, "stylesheet")?;
        set_attribute(&link, Attr::Href, href)?;

        let head = self
            .document
            .head()
            .ok_or_else(|| DomError::new("document has no <head>"))?;
        head.append_child(&link)
            .map_err(|err| DomError::js("appendChild", err))?;
        tracing::trace!(%href, "stylesheet registered");
        Ok(true)
    }

    fn data_island(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|elem| elem.text_content())
    }

    fn publish_maps(&mut self, maps: Option<&MapsConfig>) -> Result<(), MountError> {
        let Some(maps) = maps else {
            return Ok(());
        };

        let settings = js_sys::Object::new();
        let entries = [
            ("apiKey", JsValue::from_str(&maps.api_key)),
            ("style", JsValue::from_str(&maps.style)),
            ("defaultZoom", JsValue::from(maps.default_zoom)),
        ];
        for (key, value) in entries {
            js_sys::Reflect::set(&settings, &JsValue::from_str(key), &value)
                .map_err(|err| DomError::js("Reflect.set", err))?;
        }
        publish_global(MAPS_GLOBAL, &settings)?;
        Ok(())
    }

    fn render(&mut self, anchor: &Self::Anchor, view: View) -> Result<(), MountError> {
        let id = anchor.id();
        if MOUNTED.with(|mounted| mounted.borrow().contains_key(&id)) {
            return Err(MountError::AlreadyMounted(id));
        }

        let retained = RetainedView::attach(view, &self.document, anchor, None)?;
        MOUNTED.with(|mounted| {
            mounted.borrow_mut().insert(id, retained);
        });
        Ok(())
    }
}
