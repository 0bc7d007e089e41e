use chrono::NaiveDate;

use super::shoe::{ShoeListing, Variant};
use crate::utils::{format_price, pluralize};

/// Overlay label shown on cards that are not [`Variant::Default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub text: &'static str,
    pub background_color: &'static str,
}

/// Everything a card displays, computed from one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeCardView {
    pub href: String,
    pub image_src: String,
    pub name: String,
    pub variant: Variant,
    pub price: String,
    pub price_crossed_out: bool,
    pub sale_price: Option<String>,
    pub color_info: String,
    pub tag: Option<Tag>,
}

impl ShoeCardView {
    pub fn new(shoe: &ShoeListing, today: NaiveDate) -> Self {
        let variant = shoe.variant(today);
        let presentation = variant.presentation();

        let tag = match (presentation.tag_text, presentation.background_color) {
            (Some(text), Some(background_color)) => Some(Tag {
                text,
                background_color,
            }),
            _ => None,
        };

        Self {
            href: format!("/shoe/{}", shoe.slug),
            image_src: shoe.image_src.clone(),
            name: shoe.name.clone(),
            variant,
            price: format_price(shoe.price),
            price_crossed_out: variant == Variant::OnSale,
            sale_price: shoe.sale_price.map(format_price),
            color_info: pluralize("Color", shoe.num_of_colors),
            tag,
        }
    }

    /// Inline style for the regular price.
    pub fn price_style(&self) -> &'static str {
        if self.price_crossed_out {
            "text-decoration: line-through; color: var(--color-gray-700);"
        } else {
            "text-decoration: none;"
        }
    }
}
