use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off. The portfolio is still right where you left it."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
