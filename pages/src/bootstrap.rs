use hearth::{Bootstrap, BrowserHost, Composition, Page, SiteConfig};
use hearth_ui::{error_boundary, toast_provider};

pub const BULMA_STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";
pub const ICONS_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6.4.2/css/all.min.css";
pub const SITE_STYLESHEET: &str = "/assets/hearth.css";

/// Decorators shared by every page bundle.
pub fn composition(config: &SiteConfig) -> Composition {
    Composition::standard(config, error_boundary(), toast_provider())
}

/// Stylesheets every page needs, in load order.
pub fn with_site_styles<P: Page>(bootstrap: Bootstrap<P>) -> Bootstrap<P> {
    bootstrap
        .stylesheet(BULMA_STYLESHEET)
        .stylesheet(ICONS_STYLESHEET)
        .stylesheet(SITE_STYLESHEET)
}

/// Mount a page into the live document. Failures are logged, never thrown.
pub(crate) fn run<P: Page>(bootstrap: &Bootstrap<P>) {
    let anchor = bootstrap.anchor();
    let mut host = match BrowserHost::new() {
        Ok(host) => host,
        Err(err) => {
            tracing::error!(anchor, error = %err, "no document to mount into");
            return;
        }
    };

    match bootstrap.launch(&mut host, composition) {
        Ok(outcome) => tracing::info!(anchor, ?outcome, "bootstrap finished"),
        Err(err) => tracing::error!(anchor, error = %err, "mount failed"),
    }
}
