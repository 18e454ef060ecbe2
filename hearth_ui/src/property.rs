use hearth::dom::{
    builder::{a, img, p, span, tag},
    Attr, Callback, Render, Tag, View,
};

use crate::{button, card, card_content, card_footer, card_image, h4_with, non_empty, Color};

/// Listing card for a single rental property.
#[derive(Clone, Debug, Default)]
pub struct PropertyCard {
    pub title: String,
    pub address: String,
    /// Whole currency units. Zero is a valid rent.
    pub monthly_rent: Option<u32>,
    /// Zero bedrooms is a studio.
    pub bedrooms: Option<u8>,
    pub image_url: Option<String>,
    /// Link to the listing details. The title becomes a link when present.
    pub href: Option<String>,
    pub on_enquire: Option<Callback>,
}

/// Format a monthly rent, e.g. `$1,250 / month`.
pub fn format_rent(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped} / month")
}

fn bedrooms_label(bedrooms: u8) -> String {
    match bedrooms {
        0 => "Studio".to_string(),
        1 => "1 bedroom".to_string(),
        n => format!("{n} bedrooms"),
    }
}

impl Render for PropertyCard {
    fn render(self) -> View {
        let image = non_empty(self.image_url).map(|src| {
            card_image().and(
                tag(Tag::Figure).classes_raw("image is-4by3").and(
                    img()
                        .attr(Attr::Src, src)
                        .attr(Attr::Alt, self.title.clone())
                        .attr(Attr::Loading, "lazy"),
                ),
            )
        });

        let title = match non_empty(self.href) {
            Some(href) => h4_with(a().attr(Attr::Href, href).text(self.title)),
            None => h4_with(self.title),
        };

        let rent = self
            .monthly_rent
            .map(|rent| p().classes_raw("property-rent has-text-weight-semibold").text(format_rent(rent)));
        let bedrooms = self
            .bedrooms
            .map(|n| span().classes_raw("tag property-bedrooms").text(bedrooms_label(n)));

        let enquire = self.on_enquire.map(|callback| {
            card_footer().and(
                button()
                    .class(Color::Primary.as_class())
                    .classes_raw("card-footer-item property-enquire")
                    .text("Enquire")
                    .on_click(callback),
            )
        });

        card()
            .class("property-card")
            .and(image)
            .and(
                card_content()
                    .and(title)
                    .and(p().classes_raw("subtitle is-6 property-address").text(self.address))
                    .and(rent)
                    .and(bedrooms),
            )
            .and(enquire)
            .into_view()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use hearth::dom::{render_to_string, Ev};

    use super::*;

    fn card(rent: Option<u32>, bedrooms: Option<u8>) -> PropertyCard {
        PropertyCard {
            title: "Harbour Loft".into(),
            address: "12 Quay St".into(),
            monthly_rent: rent,
            bedrooms,
            ..PropertyCard::default()
        }
    }

    #[test]
    fn test_format_rent() {
        assert_eq!(format_rent(0), "$0 / month");
        assert_eq!(format_rent(950), "$950 / month");
        assert_eq!(format_rent(1250), "$1,250 / month");
        assert_eq!(format_rent(1_000_000), "$1,000,000 / month");
    }

    #[test]
    fn test_zero_values_render() {
        let view = card(Some(0), Some(0)).render();
        assert_eq!(
            view.find_by_class("property-rent").unwrap().text_content(),
            "$0 / month"
        );
        assert_eq!(
            view.find_by_class("property-bedrooms").unwrap().text_content(),
            "Studio"
        );
    }

    #[test]
    fn test_absent_values_are_omitted() {
        let mut input = card(None, None);
        input.image_url = Some(String::new());
        input.href = Some(" ".into());

        let view = input.render();
        let html = render_to_string(&view);
        assert!(view.find_by_class("property-rent").is_none());
        assert!(view.find_by_class("property-bedrooms").is_none());
        assert!(view.find_by_class("card-image").is_none());
        assert!(view.find_by_class("property-enquire").is_none());
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_link_and_enquire() {
        let enquiries = Rc::new(Cell::new(0));
        let counter = enquiries.clone();

        let mut input = card(Some(1800), Some(2));
        input.href = Some("/listings/7".into());
        input.on_enquire = Some(Callback::new(move || counter.set(counter.get() + 1)));

        let view = input.render();
        assert!(render_to_string(&view).contains(r#"<a href="/listings/7">Harbour Loft</a>"#));
        assert_eq!(
            view.find_by_class("property-bedrooms").unwrap().text_content(),
            "2 bedrooms"
        );

        let enquire = view.find_by_class("property-enquire").unwrap();
        assert_eq!(enquire.dispatch(Ev::Click), 1);
        assert_eq!(enquiries.get(), 1);
    }
}
