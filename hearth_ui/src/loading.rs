use hearth::dom::{
    builder::{div, p, tag},
    Attr, Render, Tag, View,
};

use crate::non_empty;

/// Covers its parent with a spinner while `active`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingOverlay {
    pub active: bool,
    pub label: Option<String>,
}

impl LoadingOverlay {
    pub fn active(label: impl Into<String>) -> Self {
        Self {
            active: true,
            label: Some(label.into()),
        }
    }
}

impl Render for LoadingOverlay {
    fn render(self) -> View {
        if !self.active {
            return View::Empty;
        }

        let label = non_empty(self.label);
        let spinner = tag(Tag::Progress)
            .classes_raw("progress is-small is-primary")
            .attr_opt(Attr::AriaLabel, label.clone());

        div()
            .class("loading-overlay")
            .attr(Attr::Role, "status")
            .attr(Attr::AriaBusy, "true")
            .and(spinner)
            .and(label.map(|label| p().class("loading-overlay-label").text(label)))
            .into_view()
    }
}

#[cfg(test)]
mod tests {
    use hearth::dom::render_to_string;

    use super::*;

    #[test]
    fn test_inactive_renders_nothing() {
        let overlay = LoadingOverlay {
            active: false,
            label: Some("Loading".into()),
        };
        assert!(overlay.render().is_empty());
    }

    #[test]
    fn test_active_with_label() {
        let html = render_to_string(&LoadingOverlay::active("Loading map").render());
        assert_eq!(
            html,
            concat!(
                r#"<div role="status" aria-busy="true" class="loading-overlay">"#,
                r#"<progress aria-label="Loading map" class="progress is-small is-primary"></progress>"#,
                r#"<p class="loading-overlay-label">Loading map</p>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_active_without_label() {
        let view = LoadingOverlay {
            active: true,
            label: None,
        }
        .render();
        assert!(view.find_by_class("loading-overlay").is_some());
        assert!(view.find_by_class("loading-overlay-label").is_none());
    }
}
