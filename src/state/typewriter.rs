//! Typing/holding/deleting loop over a fixed list of role strings.

pub const TYPE_INTERVAL_MS: u32 = 120;
pub const DELETE_INTERVAL_MS: u32 = 80;
pub const HOLD_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    roles: &'static [&'static str],
    index: usize,
    /// Number of chars of the current role on display.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self {
            roles,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.index
    }

    fn role(&self) -> &'static str {
        self.roles.get(self.index).copied().unwrap_or("")
    }

    fn role_len(&self) -> usize {
        self.role().chars().count()
    }

    pub fn displayed(&self) -> &'static str {
        let role = self.role();
        let end = role
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(role.len());
        &role[..end]
    }

    /// Delay before the next `tick`.
    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Typing => TYPE_INTERVAL_MS,
            Phase::Holding => HOLD_MS,
            Phase::Deleting => DELETE_INTERVAL_MS,
        }
    }

    /// Advances one step and returns the delay before the following step.
    pub fn tick(&mut self) -> u32 {
        if self.roles.is_empty() {
            return self.delay_ms();
        }
        match self.phase {
            Phase::Typing => {
                if self.shown < self.role_len() {
                    self.shown += 1;
                }
                if self.shown == self.role_len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        self.delay_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::site::ROLES;

    #[test]
    fn test_full_cycle_sequence() {
        let mut tw = Typewriter::new(ROLES);
        let mut frames = vec![tw.displayed().to_string()];
        // Two full roles plus the start of the third pass.
        let steps: usize = ROLES.iter().map(|r| 2 * r.chars().count() + 1).sum();
        for _ in 0..steps {
            tw.tick();
            if frames.last().map(String::as_str) != Some(tw.displayed()) {
                frames.push(tw.displayed().to_string());
            }
        }

        let mut expected = vec![String::new()];
        for role in ROLES {
            for n in 1..=role.len() {
                expected.push(role[..n].to_string());
            }
            for n in (0..role.len()).rev() {
                expected.push(role[..n].to_string());
            }
        }
        assert_eq!(frames, expected);
        assert_eq!(tw.role_index(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_no_step_skips_a_character() {
        let mut tw = Typewriter::new(ROLES);
        let mut prev = tw.displayed().chars().count() as i64;
        for _ in 0..500 {
            tw.tick();
            let now = tw.displayed().chars().count() as i64;
            assert!((now - prev).abs() <= 1);
            prev = now;
        }
    }

    #[test]
    fn test_delays_per_phase() {
        let mut tw = Typewriter::new(&["ab"]);
        assert_eq!(tw.delay_ms(), TYPE_INTERVAL_MS);
        assert_eq!(tw.tick(), TYPE_INTERVAL_MS);
        // Role complete: hold before deleting.
        assert_eq!(tw.tick(), HOLD_MS);
        assert_eq!(tw.displayed(), "ab");
        assert_eq!(tw.tick(), DELETE_INTERVAL_MS);
        assert_eq!(tw.displayed(), "ab");
        assert_eq!(tw.tick(), DELETE_INTERVAL_MS);
        assert_eq!(tw.displayed(), "a");
        assert_eq!(tw.tick(), TYPE_INTERVAL_MS);
        assert_eq!(tw.displayed(), "");
    }

    #[test]
    fn test_multibyte_roles_are_not_split() {
        let mut tw = Typewriter::new(&["né"]);
        tw.tick();
        assert_eq!(tw.displayed(), "n");
        tw.tick();
        assert_eq!(tw.displayed(), "né");
    }

    #[test]
    fn test_empty_role_list_is_inert() {
        let mut tw = Typewriter::new(&[]);
        assert_eq!(tw.tick(), TYPE_INTERVAL_MS);
        assert_eq!(tw.displayed(), "");
    }
}
