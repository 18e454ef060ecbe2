use hearth::dom::{
    builder::{p, span},
    Render, View,
};
use serde::Deserialize;

use crate::{box_, icon_fa};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    fn icon(self) -> &'static str {
        match self {
            Trend::Up => "fas fa-arrow-up",
            Trend::Down => "fas fa-arrow-down",
            Trend::Flat => "fas fa-minus",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Trend::Up => "has-text-success",
            Trend::Down => "has-text-danger",
            Trend::Flat => "has-text-grey",
        }
    }
}

/// A single metric on the management dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub trend: Option<Trend>,
}

impl Render for StatCard {
    fn render(self) -> View {
        let trend = self
            .trend
            .map(|trend| span().class("stat-trend").class(trend.class()).and(icon_fa(trend.icon())));

        box_()
            .class("stat-card")
            .and(p().classes_raw("heading stat-label").text(self.label))
            .and(
                p().classes_raw("title stat-value")
                    .text(self.value)
                    .and(trend),
            )
            .into_view()
    }
}
