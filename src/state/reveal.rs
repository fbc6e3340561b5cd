/// Observer settings for a revealable block.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "50px",
            delay_ms: 0,
        }
    }
}

impl RevealOptions {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            ..Default::default()
        }
    }
}

/// One-way hidden -> revealed latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection report. Returns true only on the transition
    /// into the revealed state; the caller can stop observing after that.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn class(&self) -> &'static str {
        if self.revealed {
            "reveal revealed"
        } else {
            "reveal"
        }
    }
}

pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert!(!reveal.is_revealed());
        assert!(reveal.observe(true));
        assert!(reveal.is_revealed());
        // Leaving the viewport does not hide it again.
        assert!(!reveal.observe(false));
        assert!(reveal.is_revealed());
        assert!(!reveal.observe(true));
        assert_eq!(reveal.class(), "reveal revealed");
    }

    #[test]
    fn test_default_options_and_delay() {
        let opts = RevealOptions::with_delay(300);
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, "50px");
        assert_eq!(transition_delay_style(opts.delay_ms), "transition-delay: 300ms;");
    }
}
