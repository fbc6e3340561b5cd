use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::content::site::SectionId;
use crate::state::scroll_spy::{ScrollSample, SectionBounds};

/// Measures scroll offset and the bounds of every section present in the DOM.
pub fn sample_sections() -> Option<ScrollSample> {
    let window = window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let sections = SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id.as_str())?.get_bounding_client_rect();
            Some((id, SectionBounds { top: rect.top(), bottom: rect.bottom() }))
        })
        .collect();

    Some(ScrollSample { scroll_y, sections })
}

pub fn scroll_to_section(id: SectionId) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id.as_str()));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("section #{} not in the document", id.as_str()),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            log::debug!("failed to open {}: {:?}", url, err);
        }
    }
}
