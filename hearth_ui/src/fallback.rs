use hearth::{
    dom::{builder::p, Render, View},
    ErrorBoundary, RenderError,
};

use crate::{h4_with, notification_error};

/// Shown in place of a page section that failed to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorFallback {
    pub message: String,
}

impl Render for ErrorFallback {
    fn render(self) -> View {
        notification_error((
            h4_with("Something went wrong"),
            p().class("error-fallback-message").text(self.message),
        ))
        .class("error-fallback")
        .into_view()
    }
}

/// Error boundary rendering an [`ErrorFallback`].
///
/// The error itself is only logged; visitors see a generic message.
pub fn error_boundary() -> ErrorBoundary {
    ErrorBoundary::new(|_: &RenderError| {
        ErrorFallback {
            message: "This part of the page could not be displayed. Please reload to try again."
                .into(),
        }
        .render()
    })
}
