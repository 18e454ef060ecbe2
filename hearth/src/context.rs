use std::{
    any::{Any, TypeId},
    rc::Rc,
};

use crate::{config::SiteConfig, error::RenderError};

/// Explicit context handed to pages, decorators and providers.
///
/// A scope carries the [`SiteConfig`] and any number of provided values.
/// Providing a value never mutates a scope; it returns a child scope that
/// sees the new value and everything its ancestors provide.
#[derive(Clone)]
pub struct Scope(Rc<Inner>);

struct Inner {
    config: Rc<SiteConfig>,
    value: Option<(TypeId, Rc<dyn Any>)>,
    parent: Option<Scope>,
}

impl Scope {
    pub fn new(config: SiteConfig) -> Self {
        Self(Rc::new(Inner {
            config: Rc::new(config),
            value: None,
            parent: None,
        }))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.0.config
    }

    /// Create a child scope that provides `value`.
    ///
    /// A value of the same type provided further up is shadowed.
    #[must_use]
    pub fn provide<T: 'static>(&self, value: T) -> Self {
        Self(Rc::new(Inner {
            config: self.0.config.clone(),
            value: Some((TypeId::of::<T>(), Rc::new(value))),
            parent: Some(self.clone()),
        }))
    }

    /// Look up the nearest provided value of type `T`.
    pub fn get<T: 'static>(&self) -> Option<Rc<T>> {
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some((id, value)) = &scope.0.value {
                if *id == TypeId::of::<T>() {
                    return value.clone().downcast::<T>().ok();
                }
            }
            current = scope.0.parent.as_ref();
        }
        None
    }

    /// Like [`Scope::get`], but a missing provider is a render error.
    pub fn require<T: 'static>(&self) -> Result<Rc<T>, RenderError> {
        self.get::<T>()
            .ok_or(RenderError::MissingContext(std::any::type_name::<T>()))
    }

    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.0.parent.as_ref();
        while let Some(scope) = current {
            depth += 1;
            current = scope.0.parent.as_ref();
        }
        depth
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("config", &self.0.config)
            .field("depth", &self.depth())
            .finish()
    }
}
