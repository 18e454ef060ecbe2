use std::pin::Pin;

use futures::StreamExt;
use futures_signals::signal::{Signal, SignalExt};

use super::View;

/// A region of a [`View`] that is backed by a [`Signal`].
///
/// When attached to the document, a future managing the signal runs on the
/// local executor and replaces the region's nodes on every change.
/// The HTML renderer only emits a placeholder for it.
pub struct SignalView {
    signal: Pin<Box<dyn Signal<Item = View>>>,
}

impl SignalView {
    pub fn new<T, S>(signal: S) -> Self
    where
        T: Into<View> + 'static,
        S: Signal<Item = T> + 'static,
    {
        Self {
            signal: Box::pin(signal.map(|value: T| -> View { value.into() })),
        }
    }

    pub(crate) fn into_signal(self) -> Pin<Box<dyn Signal<Item = View>>> {
        self.signal
    }

    /// Wait for the first value of the signal.
    ///
    /// Signals built from a `Mutable` resolve immediately, which makes this
    /// usable outside the browser.
    pub fn current(self) -> Option<View> {
        futures::executor::block_on(self.signal.to_stream().next())
    }
}
