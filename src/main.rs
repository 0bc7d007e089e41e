use std::rc::Rc;
use yew::prelude::*;

use shoe_storefront::components::{ShoeGrid, SortSelector};
use shoe_storefront::hooks::use_sort::use_sort;
use shoe_storefront::models::catalog::Catalog;

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| {
        let catalog = Catalog::embedded();
        match &catalog {
            Ok(c) => gloo::console::log!(format!("Loaded {} shoes", c.len())),
            Err(e) => gloo::console::error!(e.to_string()),
        }
        catalog.map_err(|e| e.to_string())
    });
    let sort = use_sort();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Running"}</h1>
                <SortSelector order={sort.order} on_change={sort.set_order.clone()} />
            </header>

            <main class="app-main">
                {
                    match &*catalog {
                        Ok(catalog) => html! {
                            <ShoeGrid shoes={Rc::new(catalog.sorted(sort.order))} />
                        },
                        Err(msg) => html! {
                            <div class="status error">
                                <p>{"❌ Error: "}{msg}</p>
                            </div>
                        },
                    }
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
