use std::rc::Rc;

use futures_signals::signal::Signal;

use super::{
    event::{Handler, Listener},
    signal_view::SignalView,
    Attr, Callback, Ev, Tag, View,
};

/// A single element of a [`View`] tree.
///
/// Elements are plain descriptions. Nothing touches the browser until the
/// tree is handed to a renderer.
#[derive(Debug)]
pub struct Element {
    pub(crate) tag: Tag,
    pub(crate) attrs: Vec<(Attr, String)>,
    pub(crate) classes: Vec<String>,
    pub(crate) listeners: Vec<Listener>,
    pub(crate) children: Vec<View>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            classes: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attr(&self, attr: Attr) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == attr)
            .map(|(_, value)| value.as_str())
    }

    pub fn attrs(&self) -> &[(Attr, String)] {
        &self.attrs
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn children(&self) -> &[View] {
        &self.children
    }

    pub fn into_children(self) -> Vec<View> {
        self.children
    }

    /// Run every callback listener registered for `event`.
    ///
    /// Returns the number of handlers that ran.
    pub fn dispatch(&self, event: Ev) -> usize {
        let mut ran = 0;
        for listener in self.listeners.iter().filter(|l| l.event == event) {
            if listener.trigger() {
                ran += 1;
            }
        }
        ran
    }

    /// Depth-first search through this element and its descendants.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|elem: &Element| elem.has_class(class))
    }

    /// Concatenated text of all static descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

pub struct TagBuilder {
    elem: Element,
}

impl TagBuilder {
    pub fn new(tag: Tag) -> Self {
        Self {
            elem: Element::new(tag),
        }
    }

    pub fn element(&self) -> &Element {
        &self.elem
    }

    // Attributes.

    pub fn add_attr<V: Into<String>>(&mut self, attr: Attr, value: V) {
        let value = value.into();
        if let Some(slot) = self.elem.attrs.iter_mut().find(|(key, _)| *key == attr) {
            slot.1 = value;
        } else {
            self.elem.attrs.push((attr, value));
        }
    }

    #[inline]
    pub fn attr<V: Into<String>>(mut self, attr: Attr, value: V) -> Self {
        self.add_attr(attr, value);
        self
    }

    pub fn attr_opt<V: Into<String>>(mut self, attr: Attr, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.add_attr(attr, value);
        }
        self
    }

    pub fn attr_toggle_if(self, flag: bool, attr: Attr) -> Self {
        if flag {
            self.attr(attr, "")
        } else {
            self
        }
    }

    // Class.

    pub fn add_class<I: Into<String>>(&mut self, class: I) {
        let class = class.into();
        if !class.is_empty() && !self.elem.has_class(&class) {
            self.elem.classes.push(class);
        }
    }

    #[inline]
    pub fn class<I: Into<String>>(mut self, class: I) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_classes_raw(&mut self, classes: &str) {
        for cls in classes.split_whitespace() {
            self.add_class(cls);
        }
    }

    pub fn classes_raw(mut self, classes: &str) -> Self {
        self.add_classes_raw(classes);
        self
    }

    pub fn class_if<I: Into<String>>(mut self, flag: bool, class: I) -> Self {
        if flag {
            self.add_class(class);
        }
        self
    }

    // Text.

    pub fn add_text<S: Into<String>>(&mut self, value: S) {
        self.elem.children.push(View::Text(value.into()));
    }

    #[inline]
    pub fn text<S: Into<String>>(mut self, value: S) -> Self {
        self.add_text(value);
        self
    }

    // Events.

    pub fn add_listener(&mut self, event: Ev, handler: Handler) {
        self.elem.listeners.push(Listener { event, handler });
    }

    /// Attach a callback that ignores the event payload.
    pub fn on<C: Into<Callback>>(mut self, event: Ev, callback: C) -> Self {
        self.add_listener(event, Handler::Callback(callback.into()));
        self
    }

    #[inline]
    pub fn on_click<C: Into<Callback>>(self, callback: C) -> Self {
        self.on(Ev::Click, callback)
    }

    pub fn on_dom<F>(mut self, event: Ev, handler: F) -> Self
    where
        F: Fn(web_sys::Event) + 'static,
    {
        self.add_listener(event, Handler::Dom(Rc::new(handler)));
        self
    }

    // Children.

    pub fn add_view(&mut self, view: View) {
        match view {
            View::Empty => {}
            other => self.elem.children.push(other),
        }
    }

    pub fn add_tag(&mut self, child: TagBuilder) {
        self.add_view(View::Element(child.build()));
    }

    #[inline]
    pub fn tag(mut self, child: TagBuilder) -> Self {
        self.add_tag(child);
        self
    }

    pub fn add_signal<V, S>(&mut self, signal: S)
    where
        V: Into<View> + 'static,
        S: Signal<Item = V> + 'static,
    {
        self.add_view(View::Signal(SignalView::new(signal)));
    }

    #[inline]
    pub fn signal<V, S>(mut self, signal: S) -> Self
    where
        V: Into<View> + 'static,
        S: Signal<Item = V> + 'static,
    {
        self.add_signal(signal);
        self
    }

    pub fn and<A: Apply>(mut self, item: A) -> Self {
        item.apply(&mut self);
        self
    }

    pub fn add_iter<A: Apply, I: IntoIterator<Item = A>>(&mut self, iter: I) {
        for item in iter {
            item.apply(self);
        }
    }

    #[inline]
    pub fn and_iter<A: Apply, I: IntoIterator<Item = A>>(mut self, iter: I) -> Self {
        self.add_iter(iter);
        self
    }

    #[inline]
    pub fn build(self) -> Element {
        self.elem
    }

    #[inline]
    pub fn into_view(self) -> View {
        View::Element(self.build())
    }
}

impl From<TagBuilder> for View {
    fn from(t: TagBuilder) -> Self {
        Self::Element(t.build())
    }
}

impl From<Element> for View {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

pub trait Render {
    fn render(self) -> View;
}

impl<R: Render> Apply for R {
    fn apply(self, tag: &mut TagBuilder) {
        tag.add_view(self.render());
    }
}

pub trait Apply {
    fn apply(self, tag: &mut TagBuilder);
}

impl<'a> Apply for &'a str {
    fn apply(self, tag: &mut TagBuilder) {
        tag.add_text(self);
    }
}

impl<'a> Apply for &'a String {
    fn apply(self, tag: &mut TagBuilder) {
        tag.add_text(self.as_str());
    }
}

impl Apply for String {
    fn apply(self, tag: &mut TagBuilder) {
        tag.add_text(self);
    }
}

impl Render for Element {
    fn render(self) -> View {
        View::Element(self)
    }
}

impl Render for TagBuilder {
    fn render(self) -> View {
        self.into_view()
    }
}

impl Render for View {
    fn render(self) -> View {
        self
    }
}

impl<I> Apply for Option<I>
where
    I: Apply,
{
    fn apply(self, tag: &mut TagBuilder) {
        if let Some(inner) = self {
            inner.apply(tag);
        }
    }
}

impl<A1: Apply, A2: Apply> Apply for (A1, A2) {
    fn apply(self, tag: &mut TagBuilder) {
        self.0.apply(tag);
        self.1.apply(tag);
    }
}

impl<A1: Apply, A2: Apply, A3: Apply> Apply for (A1, A2, A3) {
    fn apply(self, tag: &mut TagBuilder) {
        self.0.apply(tag);
        self.1.apply(tag);
        self.2.apply(tag);
    }
}

impl<A1: Apply, A2: Apply, A3: Apply, A4: Apply> Apply for (A1, A2, A3, A4) {
    fn apply(self, tag: &mut TagBuilder) {
        self.0.apply(tag);
        self.1.apply(tag);
        self.2.apply(tag);
        self.3.apply(tag);
    }
}

impl<A1: Apply, A2: Apply, A3: Apply, A4: Apply, A5: Apply> Apply for (A1, A2, A3, A4, A5) {
    fn apply(self, tag: &mut TagBuilder) {
        self.0.apply(tag);
        self.1.apply(tag);
        self.2.apply(tag);
        self.3.apply(tag);
        self.4.apply(tag);
    }
}

pub mod builder {
    use super::{Tag, TagBuilder};

    #[inline]
    pub fn tag(tag: Tag) -> TagBuilder {
        TagBuilder::new(tag)
    }

    #[inline]
    pub fn div() -> TagBuilder {
        TagBuilder::new(Tag::Div)
    }

    #[inline]
    pub fn span() -> TagBuilder {
        TagBuilder::new(Tag::Span)
    }

    #[inline]
    pub fn button() -> TagBuilder {
        TagBuilder::new(Tag::Button).attr(super::Attr::Type, "button")
    }

    #[inline]
    pub fn p() -> TagBuilder {
        TagBuilder::new(Tag::P)
    }

    #[inline]
    pub fn a() -> TagBuilder {
        TagBuilder::new(Tag::A)
    }

    #[inline]
    pub fn img() -> TagBuilder {
        TagBuilder::new(Tag::Img)
    }

    #[inline]
    pub fn section() -> TagBuilder {
        TagBuilder::new(Tag::Section)
    }

    #[inline]
    pub fn ul() -> TagBuilder {
        TagBuilder::new(Tag::Ul)
    }

    #[inline]
    pub fn li() -> TagBuilder {
        TagBuilder::new(Tag::Li)
    }

    #[inline]
    pub fn h1() -> TagBuilder {
        TagBuilder::new(Tag::H1)
    }

    #[inline]
    pub fn h3() -> TagBuilder {
        TagBuilder::new(Tag::H3)
    }

    #[inline]
    pub fn h4() -> TagBuilder {
        TagBuilder::new(Tag::H4)
    }
}
