//! Transient notifications.
//!
//! [`ToastProvider`] puts a [`Toaster`] into the scope of everything it wraps
//! and renders the current toasts after the wrapped subtree.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use futures_signals::signal::{Mutable, Signal, SignalExt};

use crate::{
    component::RenderResult,
    compose::Decorator,
    context::Scope,
    dom::{SignalView, View},
    effect::TimeoutGuard,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Dispatcher for toasts. Cheap to clone; clones share the same list.
#[derive(Clone)]
pub struct Toaster(Rc<Inner>);

struct Inner {
    toasts: Mutable<Vec<Toast>>,
    next_id: Cell<u64>,
    timeout: Option<Duration>,
    timers: RefCell<Vec<(u64, TimeoutGuard)>>,
}

impl Toaster {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self(Rc::new(Inner {
            toasts: Mutable::new(Vec::new()),
            next_id: Cell::new(1),
            timeout,
            timers: RefCell::new(Vec::new()),
        }))
    }

    /// Show a toast. Returns its id.
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);

        let toast = Toast {
            id,
            level,
            message: message.into(),
        };
        tracing::debug!(id, ?level, message = %toast.message, "toast");
        self.0.toasts.lock_mut().push(toast);

        self.prune_timers();
        if let Some(timeout) = self.0.timeout {
            self.schedule_expiry(id, timeout);
        }
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message)
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&self, id: u64) -> bool {
        let removed = self.remove(id);
        self.0.timers.borrow_mut().retain(|(timer, _)| *timer != id);
        removed
    }

    fn remove(&self, id: u64) -> bool {
        let mut toasts = self.0.toasts.lock_mut();
        let before = toasts.len();
        toasts.retain(|toast| toast.id != id);
        toasts.len() != before
    }

    /// Current toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.0.toasts.lock_ref().clone()
    }

    pub fn signal(&self) -> impl Signal<Item = Vec<Toast>> {
        self.0.toasts.signal_cloned()
    }

    /// Drop the guards of timers whose toast is gone.
    ///
    /// Expired timers can't drop their own guard while their closure runs,
    /// so they are cleaned up here instead.
    fn prune_timers(&self) {
        let toasts = self.0.toasts.lock_ref();
        self.0
            .timers
            .borrow_mut()
            .retain(|(id, _)| toasts.iter().any(|toast| toast.id == *id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_expiry(&self, id: u64, timeout: Duration) {
        let weak = Rc::downgrade(&self.0);
        let expire = move || {
            if let Some(inner) = weak.upgrade() {
                Toaster(inner).remove(id);
            }
        };
        match crate::effect::set_timeout(timeout, expire) {
            Ok(guard) => self.0.timers.borrow_mut().push((id, guard)),
            Err(err) => tracing::warn!(error = %err, id, "toast will not auto-dismiss"),
        }
    }

    /// Outside the browser there is no event loop to fire timers.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_expiry(&self, id: u64, timeout: Duration) {
        tracing::trace!(id, ?timeout, "auto-dismiss unavailable on this target");
    }
}

impl std::fmt::Debug for Toaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toaster")
            .field("toasts", &*self.0.toasts.lock_ref())
            .field("timeout", &self.0.timeout)
            .finish()
    }
}

type ToastRenderer = Rc<dyn Fn(&[Toast], &Toaster) -> View>;

/// Provides a [`Toaster`] to the wrapped subtree.
#[derive(Clone)]
pub struct ToastProvider {
    renderer: ToastRenderer,
}

impl ToastProvider {
    /// `renderer` turns the current toasts into a view. It runs again on every
    /// change to the list.
    pub fn new<F>(renderer: F) -> Self
    where
        F: Fn(&[Toast], &Toaster) -> View + 'static,
    {
        Self {
            renderer: Rc::new(renderer),
        }
    }
}

impl Decorator for ToastProvider {
    fn name(&self) -> &'static str {
        "toasts"
    }

    fn decorate(&self, scope: &Scope, inner: &dyn Fn(&Scope) -> RenderResult) -> RenderResult {
        let toaster = Toaster::new(scope.config().toast_timeout());
        let page = inner(&scope.provide(toaster.clone()))?;

        let renderer = self.renderer.clone();
        let stack = toaster
            .signal()
            .map(move |toasts| renderer(toasts.as_slice(), &toaster));

        Ok(View::Fragment(vec![page, View::Signal(SignalView::new(stack))]))
    }
}

impl std::fmt::Debug for ToastProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ToastProvider")
    }
}
