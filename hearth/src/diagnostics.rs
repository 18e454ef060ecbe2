use crate::{
    component::RenderResult, compose::Decorator, context::Scope, dom::render_to_string,
};

/// Development-only checks on the wrapped subtree.
///
/// Renders the subtree twice and compares the output. Pages must be a pure
/// function of their scope, so any difference points at hidden state.
///
/// Only the static markup is compared. Dynamic regions serialise to a
/// placeholder and are never polled here: taking the first value of a region
/// would leave the mounted tree without its initial content. Pages that keep
/// everything inside a region are therefore not checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct Diagnostics;

impl Decorator for Diagnostics {
    fn name(&self) -> &'static str {
        "diagnostics"
    }

    fn decorate(&self, scope: &Scope, inner: &dyn Fn(&Scope) -> RenderResult) -> RenderResult {
        let first = inner(scope)?;

        match inner(scope) {
            Ok(second) => {
                let expected = render_to_string(&first);
                let actual = render_to_string(&second);
                if expected != actual {
                    tracing::warn!(
                        first = %expected,
                        second = %actual,
                        "render output changed between two passes over the same scope"
                    );
                } else {
                    tracing::trace!(bytes = expected.len(), "render is stable");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "second render pass failed after the first succeeded");
            }
        }

        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures_signals::signal::always;

    use crate::{
        compose::Composition,
        config::SiteConfig,
        dom::{builder::div, View},
        error::RenderError,
    };

    use super::*;

    #[test]
    fn test_renders_twice_and_keeps_first_pass() {
        let passes = Cell::new(0);
        let page = |_: &Scope| -> RenderResult {
            passes.set(passes.get() + 1);
            Ok(View::Text(format!("pass {}", passes.get())))
        };

        let scope = Scope::new(SiteConfig::default());
        let view = Composition::new()
            .layer(Diagnostics)
            .render(&scope, &page)
            .unwrap();

        assert_eq!(passes.get(), 2);
        assert_eq!(render_to_string(&view), "pass 1");
    }

    #[test]
    fn test_regions_are_left_untouched() {
        let passes = Cell::new(0);
        let page = |_: &Scope| -> RenderResult {
            passes.set(passes.get() + 1);
            Ok(div().signal(always(format!("pass {}", passes.get()))).into_view())
        };

        let scope = Scope::new(SiteConfig::default());
        let view = Composition::new()
            .layer(Diagnostics)
            .render(&scope, &page)
            .unwrap();
        assert_eq!(passes.get(), 2);

        let View::Element(root) = view else {
            panic!("page root should be an element");
        };
        let View::Signal(region) = root.into_children().remove(0) else {
            panic!("region should survive the check");
        };
        let current = region.current().unwrap();
        assert_eq!(render_to_string(&current), "pass 1");
    }

    #[test]
    fn test_first_pass_error_propagates() {
        let page = |_: &Scope| -> RenderResult { Err(RenderError::failed("nope")) };
        let scope = Scope::new(SiteConfig::default());

        let result = Composition::new().layer(Diagnostics).render(&scope, &page);
        assert!(result.is_err());
    }
}
