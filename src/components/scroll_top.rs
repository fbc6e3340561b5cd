use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub visible: bool,
}

#[function_component(ScrollTop)]
pub fn scroll_top(props: &ScrollTopProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| dom::scroll_to_top());
    html! {
        <button class="scroll-top" {onclick} aria-label="Scroll to top">
            <img src="/Scroll Cursor.gif" alt="Scroll to top" width="32" height="20" />
        </button>
    }
}
