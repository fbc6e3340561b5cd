use std::rc::Rc;

use yew::prelude::*;

use crate::content::site::SectionId;
use crate::state::catalog::{CategoryFilter, ProjectCatalog};
use crate::state::scroll_spy::{ScrollSample, ScrollTracker};

/// Page-level view state, owned by the home page and handed down as props.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub scroll: ScrollTracker,
    pub mobile_menu_open: bool,
    pub catalog: ProjectCatalog,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Scrolled(ScrollSample),
    NavigatedTo(SectionId),
    ToggleMobileMenu,
    SelectProject(String),
    BackToProjects,
    SetFilter(CategoryFilter),
}

impl PageState {
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Scrolled(sample) => {
                self.scroll.observe(&sample);
            }
            PageAction::NavigatedTo(_) => {
                self.mobile_menu_open = false;
            }
            PageAction::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
            }
            PageAction::SelectProject(id) => {
                if !self.catalog.select(&id) {
                    log::debug!("no project with id {}", id);
                }
            }
            PageAction::BackToProjects => self.catalog.back(),
            PageAction::SetFilter(filter) => self.catalog.set_filter(filter),
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::ViewMode;
    use crate::state::scroll_spy::SectionBounds;

    #[test]
    fn test_select_ovault_then_back() {
        let state = Rc::new(PageState::default());
        let state = state.reduce(PageAction::SelectProject("ovault".to_string()));
        assert_eq!(state.catalog.selected().map(|p| p.id), Some("ovault"));

        let state = state.reduce(PageAction::BackToProjects);
        assert_eq!(state.catalog.view(), &ViewMode::List);
        assert!(state.catalog.selected().is_none());
    }

    #[test]
    fn test_unchanged_state_keeps_same_rc() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::SelectProject("unknown".to_string()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_navigation_closes_mobile_menu() {
        let state = Rc::new(PageState::default());
        let state = state.reduce(PageAction::ToggleMobileMenu);
        assert!(state.mobile_menu_open);
        let state = state.reduce(PageAction::NavigatedTo(SectionId::Contact));
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_scroll_updates_tracker() {
        let state = Rc::new(PageState::default());
        let state = state.reduce(PageAction::Scrolled(ScrollSample {
            scroll_y: 1200.0,
            sections: vec![(SectionId::Skills, SectionBounds { top: -20.0, bottom: 700.0 })],
        }));
        assert_eq!(state.scroll.active, SectionId::Skills);
        assert!(state.scroll.show_scroll_top);
    }
}
