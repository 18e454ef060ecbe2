use std::rc::Rc;

use futures_signals::signal::{Mutable, SignalExt};
use hearth::{
    dom::{builder::div, Callback, Render, View},
    Bootstrap, DataIslands, Page, RenderResult, Scope, Toaster,
};
use hearth_ui::{EmptyState, Field, Select, SelectOption};
use wasm_bindgen::prelude::*;

use crate::{bootstrap, data::Listing};

pub const ANCHOR: &str = "listings-root";
pub const LISTINGS_ISLAND: &str = "listings-data";

fn bedroom_options() -> Vec<SelectOption<u8>> {
    [(0, "Studio or larger"), (1, "1+ bedrooms"), (2, "2+ bedrooms"), (3, "3+ bedrooms")]
        .into_iter()
        .map(|(value, label)| SelectOption {
            value,
            label: label.to_string(),
        })
        .collect()
}

/// Everything the results region needs to re-render.
#[derive(Clone)]
struct Listings {
    all: Rc<Vec<Listing>>,
    options: Rc<Vec<SelectOption<u8>>>,
    min_bedrooms: Mutable<Option<u8>>,
    toaster: Option<Toaster>,
}

impl Listings {
    fn render(&self, min_bedrooms: Option<u8>) -> View {
        let filter = {
            let selected = self.min_bedrooms.clone();
            Field {
                label: "Bedrooms".to_string(),
                control: Select {
                    value: min_bedrooms,
                    empty_option_label: Some("Any".into()),
                    options: self.options.clone(),
                    on_select: Rc::new(move |value: Option<u8>| selected.set(value)),
                },
            }
        };

        let matches: Vec<&Listing> = self
            .all
            .iter()
            .filter(|listing| listing.has_bedrooms(min_bedrooms))
            .collect();

        let results = if matches.is_empty() {
            let mut empty = EmptyState::new("No homes match your search").icon("fas fa-search");
            if min_bedrooms.is_some() {
                let filter = self.min_bedrooms.clone();
                empty = empty
                    .message("Try clearing filters")
                    .on_clear_filters(move || filter.set(None));
            }
            empty.render()
        } else {
            div()
                .classes_raw("columns is-multiline listing-results")
                .and_iter(matches.into_iter().map(|listing| {
                    div()
                        .classes_raw("column is-one-third")
                        .and(listing.card(self.enquire(listing)))
                }))
                .into_view()
        };

        div()
            .class("listings")
            .and(div().class("listing-filters").and(filter))
            .and(results)
            .into_view()
    }

    fn enquire(&self, listing: &Listing) -> Option<Callback> {
        let toaster = self.toaster.clone()?;
        let title = listing.title.clone();
        Some(Callback::new(move || {
            toaster.success(format!("Enquiry sent for {title}"));
        }))
    }
}

pub fn page(scope: &Scope) -> RenderResult {
    let all: Vec<Listing> = scope.require::<DataIslands>()?.parse(LISTINGS_ISLAND)?;
    tracing::debug!(count = all.len(), "listings loaded");

    let state = Listings {
        all: Rc::new(all),
        options: Rc::new(bedroom_options()),
        min_bedrooms: Mutable::new(None),
        toaster: scope.get::<Toaster>().map(|toaster| (*toaster).clone()),
    };

    let region = state
        .min_bedrooms
        .signal()
        .map(move |min_bedrooms| state.render(min_bedrooms));
    Ok(div().signal(region).into_view())
}

pub fn bootstrap() -> Bootstrap<impl Page> {
    bootstrap::with_site_styles(Bootstrap::new(ANCHOR, page)).data(LISTINGS_ISLAND)
}

#[wasm_bindgen]
pub fn mount_listings() {
    bootstrap::run(&bootstrap());
}

#[cfg(test)]
mod tests {
    use hearth::{
        dom::{Element, Ev, Tag},
        SiteConfig,
    };

    use super::*;

    fn state(all: Vec<Listing>, toaster: Option<Toaster>) -> Listings {
        Listings {
            all: Rc::new(all),
            options: Rc::new(bedroom_options()),
            min_bedrooms: Mutable::new(None),
            toaster,
        }
    }

    fn listing(id: u64, bedrooms: Option<u8>) -> Listing {
        Listing {
            id,
            title: format!("Home {id}"),
            address: "1 Main St".into(),
            monthly_rent: Some(1200),
            bedrooms,
            image_url: None,
        }
    }

    #[test]
    fn test_filter_hides_smaller_homes() {
        let state = state(vec![listing(1, Some(0)), listing(2, Some(3))], None);

        let all = state.render(None).text_content();
        assert!(all.contains("Home 1") && all.contains("Home 2"));

        let filtered = state.render(Some(2)).text_content();
        assert!(!filtered.contains("Home 1"));
        assert!(filtered.contains("Home 2"));
    }

    #[test]
    fn test_empty_result_offers_clearing_filters() {
        let state = state(vec![listing(1, Some(1))], None);
        state.min_bedrooms.set(Some(3));

        let view = state.render(Some(3));
        let clear = view.find_by_class("empty-state-clear").unwrap();
        assert_eq!(clear.dispatch(Ev::Click), 1);
        assert_eq!(state.min_bedrooms.get(), None);
    }

    #[test]
    fn test_no_listings_without_filter_has_no_clear_button() {
        let state = state(Vec::new(), None);
        let view = state.render(None);

        assert!(view.find_by_class("empty-state").is_some());
        assert!(view.find_by_class("empty-state-clear").is_none());
    }

    #[test]
    fn test_enquire_needs_a_toaster() {
        let without = state(vec![listing(1, Some(1))], None).render(None);
        assert!(without.find_by_class("property-enquire").is_none());

        let toaster = Toaster::new(None);
        let with = state(vec![listing(1, Some(1))], Some(toaster.clone())).render(None);
        let enquire = with
            .find(&|elem: &Element| elem.tag() == Tag::Button && elem.has_class("property-enquire"))
            .unwrap();
        enquire.dispatch(Ev::Click);

        assert_eq!(toaster.toasts()[0].message, "Enquiry sent for Home 1");
    }

    #[test]
    fn test_missing_data_is_a_render_error() {
        let scope = Scope::new(SiteConfig::default()).provide(DataIslands::new());
        assert!(page(&scope).is_err());
    }

    #[test]
    fn test_page_starts_unfiltered() {
        let mut islands = DataIslands::new();
        islands.insert(
            LISTINGS_ISLAND,
            r#"[{ "id": 9, "title": "Canal Flat", "address": "5 Lock Ln", "bedrooms": 1 }]"#,
        );
        let scope = Scope::new(SiteConfig::default()).provide(islands);

        let View::Element(root) = page(&scope).unwrap() else {
            panic!("page root should be an element");
        };
        let View::Signal(region) = root.into_children().remove(0) else {
            panic!("results should be a dynamic region");
        };
        let current = region.current().unwrap();
        assert!(current.text_content().contains("Canal Flat"));
    }
}
