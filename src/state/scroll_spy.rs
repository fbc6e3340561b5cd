//! Scroll-spy: which section is under the viewport reference line, and
//! whether the page has scrolled far enough to offer "back to top".

use crate::content::site::SectionId;

/// Distance from the top of the viewport used to pick the active section.
pub const REFERENCE_OFFSET_PX: f64 = 100.0;
/// Scroll offset above which the scroll-to-top control shows.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Viewport-relative vertical bounds of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// One measurement of the page, taken on a (throttled) scroll event.
/// Sections whose element could not be found are simply absent.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub sections: Vec<(SectionId, SectionBounds)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    pub active: SectionId,
    pub show_scroll_top: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            active: SectionId::Home,
            show_scroll_top: false,
        }
    }
}

/// First section, in page order, whose bounds contain the reference line.
pub fn section_at_reference(sample: &ScrollSample) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|id| {
        sample
            .sections
            .iter()
            .any(|(sid, bounds)| sid == id && bounds.contains(REFERENCE_OFFSET_PX))
    })
}

impl ScrollTracker {
    /// Returns true when anything visible changed.
    pub fn observe(&mut self, sample: &ScrollSample) -> bool {
        let before = self.clone();
        self.show_scroll_top = sample.scroll_y > SCROLL_TOP_THRESHOLD_PX;
        if let Some(section) = section_at_reference(sample) {
            self.active = section;
        }
        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, bottom: f64) -> SectionBounds {
        SectionBounds { top, bottom }
    }

    /// Lays the sections out back to back, each `height` tall, scrolled by `y`.
    fn stacked(y: f64, height: f64) -> ScrollSample {
        let sections = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * height - y;
                (*id, bounds(top, top + height))
            })
            .collect();
        ScrollSample { scroll_y: y, sections }
    }

    #[test]
    fn test_active_section_follows_reference_line() {
        let mut tracker = ScrollTracker::default();
        for step in 0..70 {
            let y = step as f64 * 100.0;
            let sample = stacked(y, 1000.0);
            tracker.observe(&sample);
            let expected = sample
                .sections
                .iter()
                .find(|(_, b)| b.top <= 100.0 && b.bottom >= 100.0)
                .map(|(id, _)| *id)
                .unwrap();
            assert_eq!(tracker.active, expected, "at scroll {}", y);
        }
    }

    #[test]
    fn test_boundary_prefers_earlier_section() {
        // Reference line sits exactly on the about/skills boundary.
        let sample = ScrollSample {
            scroll_y: 900.0,
            sections: vec![
                (SectionId::About, bounds(-400.0, 100.0)),
                (SectionId::Skills, bounds(100.0, 600.0)),
            ],
        };
        assert_eq!(section_at_reference(&sample), Some(SectionId::About));
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(&stacked(3950.0, 1000.0));
        assert_eq!(tracker.active, SectionId::Achievements);

        let gap = ScrollSample {
            scroll_y: 3200.0,
            sections: vec![(SectionId::Blog, bounds(400.0, 900.0))],
        };
        tracker.observe(&gap);
        assert_eq!(tracker.active, SectionId::Achievements);

        let missing = ScrollSample { scroll_y: 3200.0, sections: vec![] };
        tracker.observe(&missing);
        assert_eq!(tracker.active, SectionId::Achievements);
    }

    #[test]
    fn test_scroll_top_threshold_is_strict() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(&ScrollSample { scroll_y: 300.0, sections: vec![] });
        assert!(!tracker.show_scroll_top);
        tracker.observe(&ScrollSample { scroll_y: 300.5, sections: vec![] });
        assert!(tracker.show_scroll_top);
        tracker.observe(&ScrollSample { scroll_y: 0.0, sections: vec![] });
        assert!(!tracker.show_scroll_top);
    }

    #[test]
    fn test_observe_reports_changes_only() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.observe(&stacked(0.0, 1000.0)));
        assert!(tracker.observe(&stacked(1000.0, 1000.0)));
        assert!(!tracker.observe(&stacked(1050.0, 1000.0)));
    }
}
