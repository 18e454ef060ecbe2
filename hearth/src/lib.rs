//! Page bootstraps and rendering for the hearth site front-end.
//!
//! Pages are plain functions of a [`Scope`] that return a declarative
//! [`View`](dom::View). A [`Bootstrap`] mounts a page into a DOM anchor
//! through a [`Host`], wrapped by the decorators of a [`Composition`].

// NOTE: needs to be on top because it defines macros used elsewhere.
#[macro_use]
pub mod web;

pub mod boundary;
pub mod component;
pub mod compose;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod dom;
pub mod effect;
pub mod error;
pub mod mount;
pub mod toast;

pub use futures_signals as signal;

pub use self::{
    boundary::ErrorBoundary,
    component::{Page, RenderResult},
    compose::{Composition, Decorator},
    config::{Environment, MapsConfig, SiteConfig},
    context::Scope,
    diagnostics::Diagnostics,
    error::{ConfigError, DomError, MountError, RenderError},
    mount::{Bootstrap, DataIslands, Host, MemoryHost, MountOutcome},
    toast::{Toast, ToastLevel, ToastProvider, Toaster},
    web::BrowserHost,
};
