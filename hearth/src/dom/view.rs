use std::{cell::RefCell, rc::Rc};

use futures_signals::signal::SignalExt;
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    effect::{spawn_guarded, EffectGuard},
    error::DomError,
    web::{create_element, set_attribute},
};

use super::{signal_view::SignalView, Element};

pub enum View {
    Empty,
    Text(String),
    Element(Element),
    Fragment(Vec<View>),
    Signal(SignalView),
}

impl Default for View {
    fn default() -> Self {
        Self::Empty
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Element(elem) => f.debug_tuple("Element").field(elem).finish(),
            Self::Fragment(items) => f.debug_tuple("Fragment").field(items).finish(),
            Self::Signal(_) => f.write_str("Signal"),
        }
    }
}

impl From<()> for View {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<String> for View {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a str> for View {
    fn from(value: &'a str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<View>> for View {
    fn from(items: Vec<View>) -> Self {
        Self::Fragment(items)
    }
}

impl<V: Into<View>> From<Option<V>> for View {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl View {
    /// Returns `true` if the view is [`Empty`].
    ///
    /// [`Empty`]: View::Empty
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Depth-first search for an element. Dynamic regions are not searched.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Self::Element(elem) => elem.find(pred),
            Self::Fragment(items) => items.iter().find_map(|item| item.find(pred)),
            Self::Empty | Self::Text(_) | Self::Signal(_) => None,
        }
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|elem: &Element| elem.has_class(class))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty | Self::Signal(_) => {}
            Self::Text(text) => out.push_str(text),
            Self::Element(elem) => {
                for child in &elem.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(items) => {
                for item in items {
                    item.collect_text(out);
                }
            }
        }
    }
}

/// A [`View`] that was attached to the live document.
///
/// Owns the JS closures of its listeners and the effects driving its dynamic
/// regions. Dropping it detaches listeners and aborts effects, but leaves the
/// nodes in place; call [`RetainedView::remove`] to take them out.
#[derive(Default)]
pub(crate) struct RetainedView {
    roots: Vec<web_sys::Node>,
    closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,
    regions: Vec<Rc<RefCell<Option<RetainedView>>>>,
    effects: Vec<EffectGuard>,
}

impl RetainedView {
    pub(crate) fn attach(
        view: View,
        document: &web_sys::Document,
        parent: &web_sys::Node,
        before: Option<&web_sys::Node>,
    ) -> Result<Self, DomError> {
        let mut retained = Self::default();
        retained.insert(view, document, parent, before, true)?;
        Ok(retained)
    }

    fn insert(
        &mut self,
        view: View,
        document: &web_sys::Document,
        parent: &web_sys::Node,
        before: Option<&web_sys::Node>,
        is_root: bool,
    ) -> Result<(), DomError> {
        match view {
            View::Empty => {}
            View::Text(text) => {
                let node: web_sys::Node = document.create_text_node(&text).into();
                self.place(parent, &node, before, is_root)?;
            }
            View::Element(elem) => {
                let node = self.build_element(elem, document)?;
                self.place(parent, &node, before, is_root)?;
            }
            View::Fragment(items) => {
                for item in items {
                    self.insert(item, document, parent, before, is_root)?;
                }
            }
            View::Signal(sig) => {
                let marker: web_sys::Node = document.create_comment("").into();
                self.place(parent, &marker, before, is_root)?;
                self.spawn_region(sig, document.clone(), marker);
            }
        }
        Ok(())
    }

    fn place(
        &mut self,
        parent: &web_sys::Node,
        node: &web_sys::Node,
        before: Option<&web_sys::Node>,
        is_root: bool,
    ) -> Result<(), DomError> {
        parent
            .insert_before(node, before)
            .map_err(|err| DomError::js("insertBefore", err))?;
        if is_root {
            self.roots.push(node.clone());
        }
        Ok(())
    }

    fn build_element(
        &mut self,
        elem: Element,
        document: &web_sys::Document,
    ) -> Result<web_sys::Node, DomError> {
        let dom = create_element(document, elem.tag)?;

        for (attr, value) in &elem.attrs {
            set_attribute(&dom, *attr, value)?;
        }
        if !elem.classes.is_empty() {
            dom.set_class_name(&elem.classes.join(" "));
        }

        for listener in elem.listeners {
            let event = listener.event;
            let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                listener.invoke(ev);
            }) as Box<dyn FnMut(web_sys::Event)>);
            dom.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
                .map_err(|err| DomError::js("addEventListener", err))?;
            self.closures.push(closure);
        }

        let node: web_sys::Node = dom.into();
        for child in elem.children {
            self.insert(child, document, &node, None, false)?;
        }
        Ok(node)
    }

    /// Keep the nodes before `marker` in sync with the signal.
    fn spawn_region(&mut self, sig: SignalView, document: web_sys::Document, marker: web_sys::Node) {
        let region: Rc<RefCell<Option<RetainedView>>> = Rc::default();
        self.regions.push(region.clone());

        let f = sig.into_signal().for_each(move |view| {
            if let Some(old) = region.borrow_mut().take() {
                old.remove();
            }

            match marker.parent_node() {
                Some(parent) => match Self::attach(view, &document, &parent, Some(&marker)) {
                    Ok(current) => {
                        *region.borrow_mut() = Some(current);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "could not update dynamic region");
                    }
                },
                None => {
                    tracing::error!("dynamic region received an update but is not attached");
                }
            }
            std::future::ready(())
        });
        self.effects.push(spawn_guarded(f));
    }

    /// Take all nodes of this view out of the document.
    pub(crate) fn remove(&self) {
        for region in &self.regions {
            if let Some(inner) = region.borrow().as_ref() {
                inner.remove();
            }
        }
        for node in &self.roots {
            if let Some(parent) = node.parent_node() {
                parent.remove_child(node).ok();
            }
        }
    }
}
