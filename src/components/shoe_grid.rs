use chrono::NaiveDate;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::shoe_card::ShoeCard;
use crate::models::shoe::ShoeListing;

#[derive(Properties, PartialEq)]
pub struct ShoeGridProps {
    pub shoes: Rc<Vec<ShoeListing>>,
    #[prop_or_default]
    pub today: Option<NaiveDate>,
}

#[function_component(ShoeGrid)]
pub fn shoe_grid(props: &ShoeGridProps) -> Html {
    if props.shoes.is_empty() {
        return html! {
            <div class="shoe-grid empty">
                <p>{"No shoes to show right now."}</p>
            </div>
        };
    }

    html! {
        <div class="shoe-grid">
            {
                props.shoes.iter().map(|shoe| {
                    html! {
                        <div class="shoe-grid-item" key={shoe.slug.clone()}>
                            <ShoeCard shoe={Rc::new(shoe.clone())} today={props.today} />
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
