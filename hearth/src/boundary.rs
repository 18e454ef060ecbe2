use std::rc::Rc;

use crate::{
    component::RenderResult,
    compose::Decorator,
    context::Scope,
    dom::View,
    error::RenderError,
};

/// Isolates render errors of the wrapped subtree.
///
/// On failure the error is logged and the fallback view takes the place of
/// the subtree. Nothing escapes the boundary, so other page bundles and the
/// layers outside it keep working.
#[derive(Clone)]
pub struct ErrorBoundary {
    fallback: Rc<dyn Fn(&RenderError) -> View>,
}

impl ErrorBoundary {
    pub fn new<F>(fallback: F) -> Self
    where
        F: Fn(&RenderError) -> View + 'static,
    {
        Self {
            fallback: Rc::new(fallback),
        }
    }
}

impl Decorator for ErrorBoundary {
    fn name(&self) -> &'static str {
        "error-boundary"
    }

    fn decorate(&self, scope: &Scope, inner: &dyn Fn(&Scope) -> RenderResult) -> RenderResult {
        match inner(scope) {
            Ok(view) => Ok(view),
            Err(err) => {
                tracing::error!(error = %err, "render failed, showing fallback");
                Ok((self.fallback)(&err))
            }
        }
    }
}

impl std::fmt::Debug for ErrorBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ErrorBoundary")
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        compose::Composition,
        config::SiteConfig,
        dom::{builder::p, render_to_string},
    };

    use super::*;

    fn boundary() -> ErrorBoundary {
        ErrorBoundary::new(|err| p().class("fallback").text(err.to_string()).into_view())
    }

    #[test]
    fn test_failure_is_replaced_by_fallback() {
        let scope = Scope::new(SiteConfig::default());
        let failing = |_: &Scope| -> RenderResult { Err(RenderError::failed("boom")) };

        let view = Composition::new()
            .layer(boundary())
            .render(&scope, &failing)
            .expect("boundary must not let the error escape");

        assert_eq!(render_to_string(&view), r#"<p class="fallback">boom</p>"#);
    }

    #[test]
    fn test_success_passes_through() {
        let scope = Scope::new(SiteConfig::default());
        let ok = |_: &Scope| -> RenderResult { Ok(View::Text("fine".into())) };

        let view = Composition::new().layer(boundary()).render(&scope, &ok).unwrap();
        assert_eq!(render_to_string(&view), "fine");
    }

    #[test]
    fn test_errors_outside_the_boundary_propagate() {
        struct Failing;

        impl Decorator for Failing {
            fn name(&self) -> &'static str {
                "failing"
            }

            fn decorate(&self, _: &Scope, _: &dyn Fn(&Scope) -> RenderResult) -> RenderResult {
                Err(RenderError::failed("provider broke"))
            }
        }

        let scope = Scope::new(SiteConfig::default());
        let ok = |_: &Scope| -> RenderResult { Ok(View::Empty) };

        let result = Composition::new()
            .layer(Failing)
            .layer(boundary())
            .render(&scope, &ok);
        assert!(matches!(result, Err(RenderError::Failed(msg)) if msg == "provider broke"));
    }
}
