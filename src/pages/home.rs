use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::project_detail::ProjectDetail;
use crate::components::scroll_top::ScrollTop;
use crate::dom;
use crate::pages::sections::{
    AboutSection, AchievementsSection, BlogSection, ContactSection, HeroSection, ProjectsSection,
    SkillsSection,
};
use crate::state::catalog::ViewMode;
use crate::state::page::{PageAction, PageState};

/// Scroll events are coalesced into one measurement per window.
const SCROLL_THROTTLE_MS: u32 = 50;

#[function_component(Home)]
pub fn home() -> Html {
    let state = use_reducer(PageState::default);
    let on_action = {
        let state = state.clone();
        Callback::from(move |action: PageAction| state.dispatch(action))
    };

    let in_list_view = matches!(state.catalog.view(), ViewMode::List);

    // Scroll tracking is only live while the section page is mounted.
    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |in_list_view: &bool| {
                let listener = in_list_view.then(|| ScrollListener::register(on_action)).flatten();
                move || drop(listener)
            },
            in_list_view,
        );
    }

    match state.catalog.view() {
        ViewMode::Detail(project) => html! {
            <ProjectDetail project={*project} on_action={on_action} />
        },
        ViewMode::List => html! {
            <div class="portfolio">
                <Nav
                    active={state.scroll.active}
                    menu_open={state.mobile_menu_open}
                    on_action={on_action.clone()}
                />
                <HeroSection />
                <AboutSection on_action={on_action.clone()} />
                <SkillsSection />
                <ProjectsSection catalog={state.catalog.clone()} on_action={on_action.clone()} />
                <AchievementsSection />
                <BlogSection />
                <ContactSection />
                <Footer />
                <ScrollTop visible={state.scroll.show_scroll_top} />
            </div>
        },
    }
}

/// Passive window scroll listener feeding throttled samples to the page
/// state. Dropping it removes the listener and any pending measurement.
struct ScrollListener {
    callback: Closure<dyn FnMut()>,
    // A fired timeout stays here until the next scroll replaces it; it must
    // not be dropped from inside its own callback.
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollListener {
    fn register(on_action: Callback<PageAction>) -> Option<Self> {
        let window = web_sys::window()?;
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let scheduled = Rc::new(Cell::new(false));

        let measure = {
            let on_action = on_action.clone();
            move || {
                if let Some(sample) = dom::sample_sections() {
                    on_action.emit(PageAction::Scrolled(sample));
                }
            }
        };

        let callback = {
            let pending = pending.clone();
            let measure = measure.clone();
            Closure::wrap(Box::new(move || {
                if scheduled.replace(true) {
                    return;
                }
                let scheduled = scheduled.clone();
                let measure = measure.clone();
                let timeout = Timeout::new(SCROLL_THROTTLE_MS, move || {
                    scheduled.set(false);
                    measure();
                });
                *pending.borrow_mut() = Some(timeout);
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            gloo_console::error!("failed to register scroll listener", err);
            return None;
        }

        // Initial state before the first scroll.
        measure();

        Some(Self { callback, pending })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
        self.pending.borrow_mut().take();
    }
}
