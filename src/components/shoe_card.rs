use chrono::{Local, NaiveDate};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::spacer::Spacer;
use crate::config::Config;
use crate::models::card::ShoeCardView;
use crate::models::shoe::ShoeListing;

#[derive(Properties, PartialEq)]
pub struct ShoeCardProps {
    pub shoe: Rc<ShoeListing>,

    /// Date the new-release window is measured from; the local date when unset
    #[prop_or_default]
    pub today: Option<NaiveDate>,
}

/// Product card linking to the shoe's detail page
#[function_component(ShoeCard)]
pub fn shoe_card(props: &ShoeCardProps) -> Html {
    let today = props.today.unwrap_or_else(|| Local::now().date_naive());
    let view = use_memo((props.shoe.clone(), today), |(shoe, today)| {
        ShoeCardView::new(shoe, *today)
    });

    let wrapper_class = format!("shoe-card {}", view.variant.css_class());

    html! {
        <a class="shoe-card-link" href={view.href.clone()}>
            <article class={wrapper_class}>
                <div class="shoe-card-image-wrapper">
                    <img class="shoe-card-image" alt="" src={view.image_src.clone()} />
                </div>
                <Spacer size={Config::CARD_IMAGE_SPACING_PX} />
                <div class="shoe-card-row">
                    <h3 class="shoe-card-name">{&view.name}</h3>
                    <span class="shoe-card-price" style={view.price_style()}>
                        {&view.price}
                    </span>
                    if let Some(sale_price) = &view.sale_price {
                        <span class="shoe-card-sale-price">{sale_price}</span>
                    }
                </div>
                <div class="shoe-card-row">
                    <p class="shoe-card-color-info">{&view.color_info}</p>
                </div>
                if let Some(tag) = &view.tag {
                    <span
                        class="shoe-card-tag"
                        style={format!("background-color: {};", tag.background_color)}
                    >
                        {tag.text}
                    </span>
                }
            </article>
        </a>
    }
}
