mod attribute;
mod event;
pub mod html;
mod node;
mod signal_view;
mod tag;
pub(crate) mod view;

pub use self::{
    attribute::Attr,
    event::{Callback, Ev, Handler, Listener},
    html::render_to_string,
    node::{builder, Apply, Element, Render, TagBuilder},
    signal_view::SignalView,
    tag::Tag,
    view::View,
};
