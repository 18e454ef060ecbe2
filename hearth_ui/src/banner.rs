use hearth::dom::{builder::tag, Attr, Render, Tag, View};

use crate::{icon_fa, notification_warning};

const WARNING_TEXT: &str =
    "This is a preview environment. Listings, prices and messages are sample data.";

/// Fixed notice shown on non-production deployments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WarningBanner;

impl Render for WarningBanner {
    fn render(self) -> View {
        notification_warning((
            icon_fa("fas fa-exclamation-triangle"),
            tag(Tag::Strong).text(WARNING_TEXT),
        ))
        .class("warning-banner")
        .attr(Attr::Role, "alert")
        .into_view()
    }
}
