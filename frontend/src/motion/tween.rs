//! Visual state, partial property sets and the timing of a single tween.

use super::ease::Ease;
use crate::i18n::Direction;

/// Full inline presentation state of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Default for Visual {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, opacity: 1.0, scale: 1.0 }
    }
}

impl Visual {
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }

    pub fn merge(&mut self, props: &Props) {
        if let Some(x) = props.x {
            self.x = x;
        }
        if let Some(y) = props.y {
            self.y = y;
        }
        if let Some(opacity) = props.opacity {
            self.opacity = opacity;
        }
        if let Some(scale) = props.scale {
            self.scale = scale;
        }
    }

    /// Current values for exactly the properties `props` names.
    pub fn pick(&self, props: &Props) -> Props {
        Props {
            x: props.x.map(|_| self.x),
            y: props.y.map(|_| self.y),
            opacity: props.opacity.map(|_| self.opacity),
            scale: props.scale.map(|_| self.scale),
        }
    }
}

/// A partial set of animated properties. `None` leaves a property alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Props {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Resting counterpart of a from-state: same properties, zero offsets,
    /// full opacity and unit scale.
    pub fn settled(&self) -> Props {
        let rest = Visual::default();
        rest.pick(self)
    }

    pub fn overlaps(&self, other: &Props) -> bool {
        (self.x.is_some() && other.x.is_some())
            || (self.y.is_some() && other.y.is_some())
            || (self.opacity.is_some() && other.opacity.is_some())
            || (self.scale.is_some() && other.scale.is_some())
    }

    /// Interpolates every property `to` names. Properties missing from
    /// `from` are held at their `to` value.
    pub fn lerp(from: &Props, to: &Props, t: f64) -> Props {
        let mix = |a: Option<f64>, b: Option<f64>| {
            b.map(|b| match a {
                Some(a) if t < 1.0 => a + (b - a) * t,
                _ => b,
            })
        };
        Props {
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            opacity: mix(from.opacity, to.opacity),
            scale: mix(from.scale, to.scale),
        }
    }
}

/// Horizontal slides are expressed relative to the reading direction so
/// the same description works for both writing directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryVector {
    FromLeading(f64),
    FromTrailing(f64),
    FromBelow(f64),
    FromAbove(f64),
}

impl EntryVector {
    pub fn offset(self, direction: Direction) -> Props {
        let mirror = if direction.is_rtl() { -1.0 } else { 1.0 };
        match self {
            EntryVector::FromLeading(distance) => Props::new().x(-distance * mirror),
            EntryVector::FromTrailing(distance) => Props::new().x(distance * mirror),
            EntryVector::FromBelow(distance) => Props::new().y(distance),
            EntryVector::FromAbove(distance) => Props::new().y(-distance),
        }
    }

    /// Hidden start state: offset along the vector and fully transparent.
    pub fn hidden(self, direction: Direction) -> Props {
        self.offset(direction).opacity(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Never,
    Times { count: u32, yoyo: bool },
    Forever { yoyo: bool },
}

/// Durations and delays are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Timing {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self { duration, delay: 0.0, ease, repeat: Repeat::Never }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration * 1000.0
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay * 1000.0
    }

    /// Eased progress at `elapsed` ms after the tween started, and whether
    /// the tween has finished. Yoyo cycles run the curve backwards.
    pub fn sample(&self, elapsed: f64) -> (f64, bool) {
        let duration = self.duration_ms();
        if duration <= 0.0 {
            let end = match self.repeat {
                Repeat::Times { count, yoyo: true } if count % 2 == 1 => 0.0,
                _ => 1.0,
            };
            return (end, !matches!(self.repeat, Repeat::Forever { .. }));
        }

        let elapsed = elapsed.max(0.0);
        let (cycles, yoyo) = match self.repeat {
            Repeat::Never => (Some(1), false),
            Repeat::Times { count, yoyo } => (Some(count.saturating_add(1)), yoyo),
            Repeat::Forever { yoyo } => (None, yoyo),
        };

        if let Some(cycles) = cycles {
            if elapsed >= duration * cycles as f64 {
                let backwards = yoyo && (cycles - 1) % 2 == 1;
                return (if backwards { 0.0 } else { 1.0 }, true);
            }
        }

        let cycle = (elapsed / duration).floor() as u64;
        let local = (elapsed - cycle as f64 * duration) / duration;
        let backwards = yoyo && cycle % 2 == 1;
        let eased = if backwards {
            self.ease.apply(1.0 - local)
        } else {
            self.ease.apply(local)
        };
        (eased, false)
    }
}

/// Absolute start offsets for a chain of tweens, where each step may
/// overlap the previous one (a negative gap starts it early).
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    cursor: f64,
    started: bool,
}

impl Sequence {
    pub fn new(delay: f64) -> Self {
        Self { cursor: delay, started: false }
    }

    /// Places a step of `duration` seconds `gap` seconds after the end of
    /// the previous step and returns its absolute delay.
    pub fn then(&mut self, duration: f64, gap: f64) -> f64 {
        let start = if self.started {
            (self.cursor + gap).max(0.0)
        } else {
            self.cursor
        };
        self.started = true;
        self.cursor = self.cursor.max(start + duration);
        start
    }

    #[cfg(test)]
    pub fn total(&self) -> f64 {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_edge_mirrors_with_direction() {
        let ltr = EntryVector::FromLeading(100.0).hidden(Direction::Ltr);
        let rtl = EntryVector::FromLeading(100.0).hidden(Direction::Rtl);

        assert_eq!(ltr.x, Some(-100.0));
        assert_eq!(rtl.x, Some(100.0));
        assert_eq!(ltr.opacity, rtl.opacity);
        assert_eq!(ltr.y, rtl.y);
    }

    #[test]
    fn vertical_vectors_ignore_direction() {
        for dir in [Direction::Ltr, Direction::Rtl] {
            assert_eq!(EntryVector::FromBelow(50.0).offset(dir), Props::new().y(50.0));
            assert_eq!(EntryVector::FromAbove(100.0).offset(dir), Props::new().y(-100.0));
        }
    }

    #[test]
    fn settled_keeps_only_named_properties() {
        let from = Props::new().x(-100.0).opacity(0.0);
        assert_eq!(from.settled(), Props::new().x(0.0).opacity(1.0));
    }

    #[test]
    fn lerp_holds_missing_from_at_target() {
        let from = Props::new().y(50.0);
        let to = Props::new().y(0.0).opacity(1.0);
        let mid = Props::lerp(&from, &to, 0.5);
        assert_eq!(mid.y, Some(25.0));
        assert_eq!(mid.opacity, Some(1.0));
        assert_eq!(mid.x, None);
    }

    #[test]
    fn overlap_is_per_property() {
        let slide = Props::new().x(0.0).opacity(1.0);
        assert!(slide.overlaps(&Props::new().opacity(0.0)));
        assert!(!slide.overlaps(&Props::new().scale(1.05)));
    }

    #[test]
    fn single_play_sample_finishes_at_one() {
        let timing = Timing::new(1.0, Ease::Linear);
        assert_eq!(timing.sample(500.0), (0.5, false));
        assert_eq!(timing.sample(1000.0), (1.0, true));
        assert_eq!(timing.sample(-10.0), (0.0, false));
    }

    #[test]
    fn yoyo_pulse_returns_to_start() {
        let pulse = Timing::new(0.1, Ease::Linear).repeat(Repeat::Times { count: 1, yoyo: true });
        let (mid_back, done) = pulse.sample(150.0);
        assert!(!done);
        assert!((mid_back - 0.5).abs() < 1e-9);
        assert_eq!(pulse.sample(200.0), (0.0, true));
    }

    #[test]
    fn huge_repeat_counts_do_not_overflow() {
        let timing = Timing::new(1.0, Ease::Linear).repeat(Repeat::Times { count: u32::MAX, yoyo: false });
        let (progress, done) = timing.sample(2500.0);
        assert!(!done);
        assert!((progress - 0.5).abs() < 1e-9);
    }

    #[test]
    fn forever_never_finishes() {
        let float = Timing::new(3.0, Ease::Power2InOut).repeat(Repeat::Forever { yoyo: true });
        assert!(!float.sample(3_000_000.0).1);
    }

    #[test]
    fn sequence_applies_overlaps() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        let mut seq = Sequence::new(0.5);
        assert!(close(seq.then(1.0, 0.0), 0.5));
        assert!(close(seq.then(0.8, -0.5), 1.0));
        assert!(close(seq.then(0.8, -0.3), 1.5));
        assert!(close(seq.then(0.8, -0.3), 2.0));
        assert!(close(seq.then(1.0, -0.8), 2.0));
        assert!(close(seq.total(), 3.0));
    }

    #[test]
    fn first_step_ignores_its_gap() {
        let mut seq = Sequence::new(0.5);
        assert_eq!(seq.then(1.0, -0.5), 0.5);
        assert_eq!(seq.then(1.0, -0.5), 1.0);
    }
}
