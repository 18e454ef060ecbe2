//! Presentational components for the rental site, using Bulma classes.
//!
//! Components are plain structs implementing [`Render`]. They keep no state
//! between renders and have no side effects beyond the returned view.

mod banner;
mod empty_state;
mod fallback;
mod loading;
mod map;
mod property;
mod select;
mod stat;
mod toast;

pub use self::{
    banner::WarningBanner,
    empty_state::EmptyState,
    fallback::{error_boundary, ErrorFallback},
    loading::LoadingOverlay,
    map::{MapCenter, MapPanel},
    property::{format_rent, PropertyCard},
    select::{Select, SelectOption},
    stat::{StatCard, Trend},
    toast::{toast_provider, ToastStack},
};

use hearth::dom::{
    builder::{self, div, span, tag},
    Apply, Attr, Render, Tag, TagBuilder,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Default,
    Primary,
    Link,
    Info,
    Success,
    Warning,
    Danger,
}

impl Color {
    pub fn as_class(self) -> &'static str {
        match self {
            Color::Default => "",
            Color::Primary => "is-primary",
            Color::Link => "is-link",
            Color::Info => "is-info",
            Color::Success => "is-success",
            Color::Warning => "is-warning",
            Color::Danger => "is-danger",
        }
    }
}

/// Treat empty and whitespace-only text as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn box_() -> TagBuilder {
    div().class("box")
}

pub fn button() -> TagBuilder {
    builder::button().class("button")
}

pub fn buttons() -> TagBuilder {
    div().class("buttons")
}

pub fn h3() -> TagBuilder {
    builder::h3().classes_raw("title is-3")
}

pub fn h3_with<C: Apply>(content: C) -> TagBuilder {
    h3().and(content)
}

pub fn h4() -> TagBuilder {
    builder::h4().classes_raw("title is-4")
}

pub fn h4_with<C: Apply>(content: C) -> TagBuilder {
    h4().and(content)
}

pub fn notification(color: Color, content: impl Apply) -> TagBuilder {
    div()
        .class("notification")
        .class(color.as_class())
        .and(content)
}

pub fn notification_warning(content: impl Apply) -> TagBuilder {
    notification(Color::Warning, content)
}

pub fn notification_error(content: impl Apply) -> TagBuilder {
    notification(Color::Danger, content)
}

pub fn icon_fa(icon: &str) -> TagBuilder {
    span()
        .class("icon")
        .attr(Attr::AriaHidden, "true")
        .and(tag(Tag::I).classes_raw(icon))
}

// Forms.

pub fn field() -> TagBuilder {
    div().class("field")
}

pub fn label_with<C: Apply>(content: C) -> TagBuilder {
    tag(Tag::Label).class("label").and(content)
}

pub fn control_with<C: Apply>(content: C) -> TagBuilder {
    div().class("control").and(content)
}

// Cards.

pub fn card() -> TagBuilder {
    div().class("card")
}

pub fn card_image() -> TagBuilder {
    div().class("card-image")
}

pub fn card_content() -> TagBuilder {
    div().class("card-content")
}

pub fn card_footer() -> TagBuilder {
    tag(Tag::Footer).class("card-footer")
}

/// A labelled form field.
pub struct Field<C> {
    pub label: String,
    pub control: C,
}

impl<C: Apply> Render for Field<C> {
    fn render(self) -> hearth::dom::View {
        field()
            .and(label_with(self.label))
            .and(control_with(self.control))
            .into_view()
    }
}

#[cfg(test)]
mod tests {
    use hearth::dom::render_to_string;

    use super::*;

    #[test]
    fn test_notification_default_color_has_no_modifier() {
        let html = render_to_string(&notification(Color::Default, "hi").into_view());
        assert_eq!(html, r#"<div class="notification">hi</div>"#);
    }

    #[test]
    fn test_icon_fa() {
        let html = render_to_string(&icon_fa("fas fa-home").into_view());
        assert_eq!(
            html,
            r#"<span aria-hidden="true" class="icon"><i class="fas fa-home"></i></span>"#
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
        assert_eq!(non_empty(None), None);
    }
}
