use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::reveal::{transition_delay_style, Reveal, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: u32,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or("50px")]
    pub root_margin: &'static str,
}

/// Fades its children in the first time the block scrolls into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let reveal = use_state(Reveal::default);
    let options = RevealOptions {
        threshold: props.threshold,
        root_margin: props.root_margin,
        ..RevealOptions::with_delay(props.delay)
    };
    let style = transition_delay_style(options.delay_ms);

    {
        let node = node.clone();
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, &options, reveal));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(reveal.class(), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    options: &RevealOptions,
    reveal: UseStateHandle<Reveal>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let mut latch = *reveal;
    let setter = reveal.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if latch.observe(intersecting) {
            setter.set(latch);
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            gloo_console::error!("IntersectionObserver unavailable", err);
            // No observer support: show immediately.
            reveal.set(Reveal::revealed());
            None
        }
    }
}
