use crate::{context::Scope, dom::View, error::RenderError};

pub type RenderResult = Result<View, RenderError>;

/// The root component of a page bundle.
///
/// Pages read everything they need from the [`Scope`]: configuration,
/// provided services and page data.
pub trait Page {
    fn render(&self, scope: &Scope) -> RenderResult;
}

impl<F> Page for F
where
    F: Fn(&Scope) -> RenderResult,
{
    fn render(&self, scope: &Scope) -> RenderResult {
        self(scope)
    }
}
