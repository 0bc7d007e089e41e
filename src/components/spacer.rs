use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpacerProps {
    /// Size in pixels along both axes
    pub size: u32,
}

#[function_component(Spacer)]
pub fn spacer(props: &SpacerProps) -> Html {
    let style = format!(
        "display: block; width: {0}px; min-width: {0}px; height: {0}px; min-height: {0}px;",
        props.size
    );

    html! { <span class="spacer" {style}></span> }
}
