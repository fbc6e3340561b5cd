use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::site::{nav_items, SectionId, OWNER_NAME};
use crate::dom;
use crate::state::page::PageAction;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: SectionId,
    pub menu_open: bool,
    pub on_action: Callback<PageAction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, menu_open, on_action } = props;

    let go_to = {
        let on_action = on_action.clone();
        move |section: SectionId| {
            let on_action = on_action.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                dom::scroll_to_section(section);
                on_action.emit(PageAction::NavigatedTo(section));
            })
        }
    };

    let toggle_menu = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(PageAction::ToggleMobileMenu);
        })
    };

    let link_class = |section: SectionId| {
        classes!("nav-link", (*active == section).then(|| "active"))
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo" onclick={go_to(SectionId::Home)}>
                    <span>{OWNER_NAME}</span>
                    <div class="nav-logo-underline"></div>
                </div>

                <div class="nav-right">
                    { for nav_items().map(|section| html! {
                        <button key={section.as_str()} class={link_class(section)} onclick={go_to(section)}>
                            {section.nav_label()}
                            if *active == section {
                                <div class="nav-link-indicator"></div>
                            }
                        </button>
                    }) }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    if *menu_open {
                        <span class="icon-close"></span>
                    } else {
                        <>
                            <span></span>
                            <span></span>
                            <span></span>
                        </>
                    }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { for nav_items().map(|section| html! {
                        <button key={section.as_str()} class={link_class(section)} onclick={go_to(section)}>
                            {section.nav_label()}
                        </button>
                    }) }
                </div>
            }
        </nav>
    }
}
