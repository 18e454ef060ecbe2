//! Page data decoded from JSON data islands.

use hearth::dom::Callback;
use hearth_ui::PropertyCard;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Listing {
    pub id: u64,
    pub title: String,
    pub address: String,
    pub monthly_rent: Option<u32>,
    pub bedrooms: Option<u8>,
    pub image_url: Option<String>,
}

impl Listing {
    pub fn href(&self) -> String {
        format!("/listings/{}", self.id)
    }

    pub fn card(&self, on_enquire: Option<Callback>) -> PropertyCard {
        PropertyCard {
            title: self.title.clone(),
            address: self.address.clone(),
            monthly_rent: self.monthly_rent,
            bedrooms: self.bedrooms,
            image_url: self.image_url.clone(),
            href: Some(self.href()),
            on_enquire,
        }
    }

    /// Whether the listing has at least `min` bedrooms.
    ///
    /// Listings without a bedroom count never match an active filter.
    pub fn has_bedrooms(&self, min: Option<u8>) -> bool {
        match (min, self.bedrooms) {
            (None, _) => true,
            (Some(min), Some(bedrooms)) => bedrooms >= min,
            (Some(_), None) => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Thread {
    pub id: u64,
    pub subject: String,
    pub from: String,
    pub preview: Option<String>,
    #[serde(default)]
    pub unread: bool,
}
