//! Decorators around a page root.
//!
//! A [`Composition`] is an ordered list of [`Decorator`]s. The first layer is
//! the outermost: it fully encloses every layer after it and the page itself.

use crate::{
    boundary::ErrorBoundary,
    component::{Page, RenderResult},
    config::SiteConfig,
    context::Scope,
    diagnostics::Diagnostics,
    toast::ToastProvider,
};

pub trait Decorator {
    /// Stable name, used in logs and for inspecting a composition.
    fn name(&self) -> &'static str;

    /// Render `inner`, wrapped by this decorator.
    ///
    /// Providers call `inner` with a child scope. Boundaries may swallow its
    /// error.
    fn decorate(&self, scope: &Scope, inner: &dyn Fn(&Scope) -> RenderResult) -> RenderResult;
}

#[derive(Default)]
pub struct Composition {
    layers: Vec<Box<dyn Decorator>>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stack every page bundle uses.
    ///
    /// Diagnostics only wrap the tree in development. Error isolation sits
    /// outside the providers so a failing provider is isolated too.
    pub fn standard(config: &SiteConfig, boundary: ErrorBoundary, toasts: ToastProvider) -> Self {
        Self::new()
            .layer_if(config.environment.is_development(), Diagnostics)
            .layer(boundary)
            .layer(toasts)
    }

    /// Add a layer inside all existing ones.
    #[must_use]
    pub fn layer<D: Decorator + 'static>(mut self, decorator: D) -> Self {
        self.layers.push(Box::new(decorator));
        self
    }

    #[must_use]
    pub fn layer_if<D: Decorator + 'static>(self, flag: bool, decorator: D) -> Self {
        if flag {
            self.layer(decorator)
        } else {
            self
        }
    }

    /// Layer names, outermost first.
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    pub fn render(&self, scope: &Scope, page: &dyn Page) -> RenderResult {
        render_layers(&self.layers, scope, page)
    }
}

impl std::fmt::Debug for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composition")
            .field("layers", &self.layer_names())
            .finish()
    }
}

fn render_layers(layers: &[Box<dyn Decorator>], scope: &Scope, page: &dyn Page) -> RenderResult {
    match layers.split_first() {
        None => page.render(scope),
        Some((outer, rest)) => {
            tracing::trace!(layer = outer.name(), "entering decorator");
            outer.decorate(scope, &|scope: &Scope| render_layers(rest, scope, page))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crate::{
        config::Environment,
        dom::{builder::div, render_to_string, View},
        error::RenderError,
    };

    use super::*;

    /// Wraps the inner output in a `<div class="{name}">` and records entry order.
    struct Tracer {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Decorator for Tracer {
        fn name(&self) -> &'static str {
            self.name
        }

        fn decorate(&self, scope: &Scope, inner: &dyn Fn(&Scope) -> RenderResult) -> RenderResult {
            self.log.borrow_mut().push(self.name);
            Ok(div().class(self.name).and(inner(scope)?).into_view())
        }
    }

    fn page(_: &Scope) -> RenderResult {
        Ok(View::Text("page".into()))
    }

    #[test]
    fn test_outer_layers_enclose_inner_ones() {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let composition = Composition::new()
            .layer(Tracer { name: "outer", log: Rc::clone(&log) })
            .layer(Tracer { name: "inner", log: Rc::clone(&log) });

        let scope = Scope::new(SiteConfig::default());
        let view = composition.render(&scope, &page).unwrap();

        assert_eq!(
            render_to_string(&view),
            r#"<div class="outer"><div class="inner">page</div></div>"#
        );
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
        assert_eq!(composition.layer_names(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_empty_composition_renders_page() {
        let scope = Scope::new(SiteConfig::default());
        let view = Composition::new().render(&scope, &page).unwrap();
        assert_eq!(render_to_string(&view), "page");
    }

    #[test]
    fn test_standard_stack_order() {
        let boundary = || ErrorBoundary::new(|_: &RenderError| View::Empty);
        let toasts = || ToastProvider::new(|_, _| View::Empty);

        let dev = SiteConfig {
            environment: Environment::Development,
            ..SiteConfig::default()
        };
        assert_eq!(
            Composition::standard(&dev, boundary(), toasts()).layer_names(),
            vec!["diagnostics", "error-boundary", "toasts"]
        );

        let prod = SiteConfig::default();
        assert_eq!(
            Composition::standard(&prod, boundary(), toasts()).layer_names(),
            vec!["error-boundary", "toasts"]
        );
    }
}
