//! Tracks where a trigger element sits relative to its viewport band and
//! turns crossings into play/reverse decisions.

/// Trigger element bounds in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

/// Activation band as fractions of the viewport height measured from the
/// top. The trigger is entered once its top edge rises above `start` and
/// left once its bottom edge rises above `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    pub start: f64,
    pub end: f64,
}

impl ViewportBand {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start: start.clamp(0.0, 1.0), end: end.clamp(0.0, 1.0) }
    }

    fn phase(&self, rect: Rect, viewport_height: f64) -> Phase {
        if rect.top > self.start * viewport_height {
            Phase::Before
        } else if rect.bottom > self.end * viewport_height {
            Phase::Active
        } else {
            Phase::After
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayPolicy {
    /// Play on enter, reverse when scrolled back above the start line.
    #[default]
    Reversible,
    /// Play on the first enter and never again.
    Once,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Before,
    Active,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerWatch {
    band: ViewportBand,
    replay: ReplayPolicy,
    phase: Phase,
    forward: bool,
    spent: bool,
}

impl TriggerWatch {
    pub fn new(band: ViewportBand, replay: ReplayPolicy) -> Self {
        Self { band, replay, phase: Phase::Before, forward: false, spent: false }
    }

    /// True once a play-once watch has fired; it can be dropped.
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Feeds a new trigger position and returns the net playback change.
    /// A jump straight across the band reports both crossings in order.
    pub fn observe(&mut self, rect: Rect, viewport_height: f64) -> Option<Playback> {
        if self.spent {
            return None;
        }

        let next = self.band.phase(rect, viewport_height);
        let crossings: &[Crossing] = match (self.phase, next) {
            (Phase::Before, Phase::Active) => &[Crossing::Enter],
            (Phase::Before, Phase::After) => &[Crossing::Enter, Crossing::Leave],
            (Phase::Active, Phase::After) => &[Crossing::Leave],
            (Phase::After, Phase::Active) => &[Crossing::EnterBack],
            (Phase::After, Phase::Before) => &[Crossing::EnterBack, Crossing::LeaveBack],
            (Phase::Active, Phase::Before) => &[Crossing::LeaveBack],
            _ => &[],
        };
        self.phase = next;

        let mut result = None;
        for crossing in crossings {
            if let Some(playback) = self.action(*crossing) {
                result = Some(playback);
            }
        }
        result
    }

    fn action(&mut self, crossing: Crossing) -> Option<Playback> {
        match (crossing, self.replay) {
            (Crossing::Enter, _) if !self.forward => {
                self.forward = true;
                if self.replay == ReplayPolicy::Once {
                    self.spent = true;
                }
                Some(Playback::Forward)
            }
            (Crossing::LeaveBack, ReplayPolicy::Reversible) if self.forward => {
                self.forward = false;
                Some(Playback::Reverse)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn at(top: f64) -> Rect {
        Rect { top, bottom: top + 300.0 }
    }

    fn watch(replay: ReplayPolicy) -> TriggerWatch {
        TriggerWatch::new(ViewportBand::new(0.8, 0.2), replay)
    }

    #[test]
    fn below_the_start_line_does_nothing() {
        let mut w = watch(ReplayPolicy::Reversible);
        assert_eq!(w.observe(at(900.0), VH), None);
        assert_eq!(w.observe(at(801.0), VH), None);
    }

    #[test]
    fn crossing_start_plays_then_scrolling_back_reverses() {
        let mut w = watch(ReplayPolicy::Reversible);
        assert_eq!(w.observe(at(790.0), VH), Some(Playback::Forward));
        assert_eq!(w.observe(at(500.0), VH), None);
        assert_eq!(w.observe(at(850.0), VH), Some(Playback::Reverse));
        assert_eq!(w.observe(at(700.0), VH), Some(Playback::Forward));
    }

    #[test]
    fn leaving_past_the_end_keeps_the_finished_state() {
        let mut w = watch(ReplayPolicy::Reversible);
        w.observe(at(700.0), VH);
        assert_eq!(w.observe(at(-200.0), VH), None);
        assert_eq!(w.observe(at(100.0), VH), None);
    }

    #[test]
    fn jumping_over_the_band_still_plays() {
        let mut w = watch(ReplayPolicy::Reversible);
        assert_eq!(w.observe(at(-2000.0), VH), Some(Playback::Forward));
        assert_eq!(w.observe(at(2000.0), VH), Some(Playback::Reverse));
    }

    #[test]
    fn once_policy_fires_a_single_time() {
        let mut w = watch(ReplayPolicy::Once);
        assert_eq!(w.observe(at(600.0), VH), Some(Playback::Forward));
        assert!(w.is_spent());
        assert_eq!(w.observe(at(900.0), VH), None);
        assert_eq!(w.observe(at(600.0), VH), None);
    }

    #[test]
    fn band_fractions_are_clamped() {
        let band = ViewportBand::new(1.5, -0.2);
        assert_eq!(band, ViewportBand { start: 1.0, end: 0.0 });
    }
}
