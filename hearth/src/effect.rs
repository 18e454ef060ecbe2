use std::convert::TryInto;

use futures::{
    future::{AbortHandle, Abortable},
    Future,
};
use wasm_bindgen::{prelude::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;

use crate::{error::DomError, web::window};

/// Aborts the spawned future when dropped.
#[must_use]
pub struct EffectGuard {
    handle: AbortHandle,
}

impl Drop for EffectGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn spawn_guarded<F: Future<Output = ()> + 'static>(f: F) -> EffectGuard {
    let (handle, reg) = AbortHandle::new_pair();
    let f = Abortable::new(f, reg);
    spawn_local(async move {
        f.await.ok();
    });
    EffectGuard { handle }
}

/// Clears the timeout when dropped.
#[must_use]
pub struct TimeoutGuard {
    _closure: Closure<dyn FnMut()>,
    id: i32,
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

impl std::fmt::Debug for TimeoutGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeoutGuard").field("id", &self.id).finish()
    }
}

pub fn set_timeout(
    duration: std::time::Duration,
    f: impl FnOnce() + 'static,
) -> Result<TimeoutGuard, DomError> {
    let millis: i32 = duration
        .as_millis()
        .try_into()
        .map_err(|_| DomError::new(format!("timeout of {duration:?} is out of range")))?;

    let closure = Closure::once(f);
    let id = window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )
        .map_err(|err| DomError::js("setTimeout", err))?;

    Ok(TimeoutGuard {
        _closure: closure,
        id,
    })
}
