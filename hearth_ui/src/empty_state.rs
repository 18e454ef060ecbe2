use hearth::dom::{
    builder::{p, section},
    Callback, Render, View,
};

use crate::{button, h4_with, icon_fa, non_empty, Color};

const DEFAULT_CLEAR_LABEL: &str = "Clear filters";

/// Placeholder shown when a list has nothing to display.
#[derive(Clone, Debug)]
pub struct EmptyState {
    pub title: String,
    pub message: Option<String>,
    /// Font Awesome classes, e.g. `fas fa-inbox`.
    pub icon: Option<String>,
    pub clear_label: Option<String>,
    /// Without a callback there is no clear-filters button at all.
    pub on_clear_filters: Option<Callback>,
}

impl EmptyState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            icon: None,
            clear_label: None,
            on_clear_filters: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn on_clear_filters(mut self, callback: impl Into<Callback>) -> Self {
        self.on_clear_filters = Some(callback.into());
        self
    }
}

impl Render for EmptyState {
    fn render(self) -> View {
        let icon = non_empty(self.icon).map(|icon| icon_fa(&icon).class("is-large"));
        let message = non_empty(self.message).map(|msg| p().class("empty-state-message").text(msg));

        let clear = self.on_clear_filters.map(|callback| {
            let label = non_empty(self.clear_label).unwrap_or_else(|| DEFAULT_CLEAR_LABEL.into());
            button()
                .class(Color::Link.as_class())
                .class("empty-state-clear")
                .text(label)
                .on_click(callback)
        });

        section()
            .classes_raw("section empty-state has-text-centered")
            .and(icon)
            .and(h4_with(self.title))
            .and(message)
            .and(clear)
            .into_view()
    }
}
