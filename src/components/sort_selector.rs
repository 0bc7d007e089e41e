use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::catalog::SortOrder;

#[derive(Properties, PartialEq)]
pub struct SortSelectorProps {
    pub order: SortOrder,
    pub on_change: Callback<SortOrder>,
}

/// Sort order dropdown component
#[function_component(SortSelector)]
pub fn sort_selector(props: &SortSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            match target.value().parse::<SortOrder>() {
                Ok(order) => callback.emit(order),
                Err(err) => gloo::console::warn!(err.to_string()),
            }
        })
    };

    html! {
        <label class="sort-selector">
            <span class="sort-selector-label">{"Sort"}</span>
            <select onchange={on_change} aria-label="Sort shoes">
                {
                    SortOrder::all().iter().map(|o| {
                        let selected = *o == props.order;
                        html! {
                            <option value={o.code()} {selected}>{o.label()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </label>
    }
}
