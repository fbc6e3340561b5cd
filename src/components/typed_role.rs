use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::typewriter::Typewriter;

#[derive(Properties, PartialEq)]
pub struct TypedRoleProps {
    pub roles: &'static [&'static str],
}

#[function_component(TypedRole)]
pub fn typed_role(props: &TypedRoleProps) -> Html {
    let typewriter = use_state(|| Typewriter::new(props.roles));

    {
        let handle = typewriter.clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let mut next = current.clone();
                let timeout = Timeout::new(current.delay_ms(), move || {
                    next.tick();
                    handle.set(next);
                });
                // Dropping the pending timeout cancels the loop on unmount.
                move || drop(timeout)
            },
            (*typewriter).clone(),
        );
    }

    html! {
        <h2 class="typed-role">
            <span>{ typewriter.displayed() }</span>
            <span class="typed-cursor">{"|"}</span>
        </h2>
    }
}
