use chrono::NaiveDate;
use serde::Deserialize;

use crate::utils::is_new_shoe_at;

/// One product as shown on a listing card. Prices are in cents.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: u32,
    #[serde(default)]
    pub sale_price: Option<u32>,
    pub release_date: NaiveDate,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Display variant of this shoe as of `today`.
    pub fn variant(&self, today: NaiveDate) -> Variant {
        Variant::resolve(self.sale_price, self.release_date, |date| {
            is_new_shoe_at(date, today)
        })
    }

    /// Sale price when present, otherwise the regular price.
    pub fn effective_price(&self) -> u32 {
        self.sale_price.unwrap_or(self.price)
    }
}

/// Mutually exclusive display mode of a listing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    NewRelease,
    OnSale,
    Default,
}

/// Tag attributes for a variant. Both are absent for [`Variant::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPresentation {
    pub tag_text: Option<&'static str>,
    pub background_color: Option<&'static str>,
}

impl Variant {
    /// Picks the variant for a shoe.
    ///
    /// A sale price always wins, even for a shoe that is also a new release;
    /// `is_new` is only consulted when there is no sale price.
    pub fn resolve<F>(sale_price: Option<u32>, release_date: NaiveDate, is_new: F) -> Self
    where
        F: Fn(NaiveDate) -> bool,
    {
        if sale_price.is_some() {
            Variant::OnSale
        } else if is_new(release_date) {
            Variant::NewRelease
        } else {
            Variant::Default
        }
    }

    pub fn presentation(self) -> VariantPresentation {
        match self {
            Variant::OnSale => VariantPresentation {
                tag_text: Some("Sale"),
                background_color: Some("#C5295D"),
            },
            Variant::NewRelease => VariantPresentation {
                tag_text: Some("Just Released!"),
                background_color: Some("#6868D9"),
            },
            Variant::Default => VariantPresentation {
                tag_text: None,
                background_color: None,
            },
        }
    }

    /// Identifier used as a CSS modifier class on the card.
    pub fn css_class(self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}
