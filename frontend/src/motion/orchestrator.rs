//! Scroll-bound entrance animations, counters, hover tweens and free
//! tweens over any [`Target`].
//!
//! Every binding belongs to a [`ScopeId`]; a component opens a scope when
//! it mounts and calls [`Orchestrator::unbind_all`] when it unmounts, which
//! drops its observers, cancels its tweens and reverts what it touched.
//! Time is passed in explicitly as milliseconds so the whole engine can be
//! driven by a test clock.

use super::tween::{Props, Timing, Visual};
use super::trigger::{Playback, Rect, ReplayPolicy, TriggerWatch, ViewportBand};
use crate::config::motion as defaults;

pub trait Target: Clone + PartialEq {
    /// `None` when the element is no longer attached.
    fn viewport_rect(&self) -> Option<Rect>;
    fn render(&self, visual: &Visual);
    fn set_text(&self, text: &str);
    /// Drops every inline style the orchestrator wrote.
    fn reset(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// Never unbound; owns page-level tweens such as window scrolling.
    pub const ROOT: ScopeId = ScopeId(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceSpec {
    pub from: Props,
    pub to: Props,
    pub timing: Timing,
    pub band: ViewportBand,
    pub replay: ReplayPolicy,
}

impl EntranceSpec {
    /// Animates from `from` back to the element's resting state.
    pub fn reveal(from: Props, timing: Timing) -> Self {
        Self {
            from,
            to: from.settled(),
            timing,
            band: ViewportBand::new(defaults::VIEWPORT_START, defaults::VIEWPORT_END),
            replay: ReplayPolicy::Reversible,
        }
    }

    pub fn band(mut self, band: ViewportBand) -> Self {
        self.band = band;
        self
    }

    #[cfg(test)]
    pub fn replay(mut self, replay: ReplayPolicy) -> Self {
        self.replay = replay;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSpec {
    pub timing: Timing,
    pub band: ViewportBand,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSpec {
    pub rest: Props,
    pub active: Props,
    pub timing: Timing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEdge {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Window scroll offset to apply this frame, if a scroll tween runs.
    pub scroll_y: Option<f64>,
    pub animating: bool,
}

enum BindingKind<T> {
    Entrance {
        targets: Vec<T>,
        trigger: T,
        spec: EntranceSpec,
        stagger: f64,
        watch: TriggerWatch,
    },
    Counter {
        target: T,
        trigger: T,
        end: u32,
        timing: Timing,
        watch: TriggerWatch,
    },
    Hover {
        target: T,
        spec: HoverSpec,
    },
}

impl<T> BindingKind<T> {
    /// Play-once watches that already fired have nothing left to do.
    fn is_spent(&self) -> bool {
        match self {
            BindingKind::Entrance { watch, .. } | BindingKind::Counter { watch, .. } => watch.is_spent(),
            BindingKind::Hover { .. } => false,
        }
    }
}

struct Binding<T> {
    id: BindingId,
    scope: ScopeId,
    kind: BindingKind<T>,
}

enum Channel<T> {
    Style { target: T, from: Option<Props>, to: Props },
    Count { target: T, end: u32, shown: Option<u32> },
    Scroll { from: f64, to: f64 },
}

impl<T: Target> Channel<T> {
    /// Last writer wins: a new tween evicts older ones driving any of the
    /// same properties on the same element.
    fn supersedes(&self, older: &Channel<T>) -> bool {
        match (self, older) {
            (Channel::Style { target, to, .. }, Channel::Style { target: other, to: other_to, .. }) => {
                target == other && to.overlaps(other_to)
            }
            (Channel::Count { target, .. }, Channel::Count { target: other, .. }) => target == other,
            (Channel::Scroll { .. }, Channel::Scroll { .. }) => true,
            _ => false,
        }
    }
}

struct Running<T> {
    scope: ScopeId,
    channel: Channel<T>,
    start: f64,
    timing: Timing,
}

enum Touched<T> {
    Style(T),
    Text(T, u32),
}

impl<T: PartialEq> PartialEq for Touched<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Touched::Style(a), Touched::Style(b)) => a == b,
            (Touched::Text(a, x), Touched::Text(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

pub struct Orchestrator<T: Target> {
    next_scope: u32,
    next_binding: u32,
    bindings: Vec<Binding<T>>,
    running: Vec<Running<T>>,
    visuals: Vec<(T, Visual)>,
    touched: Vec<(ScopeId, Touched<T>)>,
}

impl<T: Target> Default for Orchestrator<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn visual_of<'v, T: Target>(visuals: &'v mut Vec<(T, Visual)>, target: &T) -> &'v mut Visual {
    let index = match visuals.iter().position(|(t, _)| t == target) {
        Some(index) => index,
        None => {
            visuals.push((target.clone(), Visual::default()));
            visuals.len() - 1
        }
    };
    &mut visuals[index].1
}

impl<T: Target> Orchestrator<T> {
    pub fn new() -> Self {
        Self {
            next_scope: 1,
            next_binding: 0,
            bindings: Vec::new(),
            running: Vec::new(),
            visuals: Vec::new(),
            touched: Vec::new(),
        }
    }

    pub fn open_scope(&mut self) -> ScopeId {
        let scope = ScopeId(self.next_scope);
        self.next_scope += 1;
        scope
    }

    pub fn bind_entrance(
        &mut self,
        scope: ScopeId,
        target: Option<T>,
        trigger: Option<T>,
        spec: EntranceSpec,
    ) -> Option<BindingId> {
        self.bind_stagger(scope, target.into_iter().collect(), trigger, spec, 0.0)
    }

    /// Like [`bind_entrance`](Self::bind_entrance) but delays each target
    /// `each` seconds after the previous one.
    pub fn bind_stagger(
        &mut self,
        scope: ScopeId,
        targets: Vec<T>,
        trigger: Option<T>,
        spec: EntranceSpec,
        each: f64,
    ) -> Option<BindingId> {
        let trigger = trigger?;
        if targets.is_empty() {
            return None;
        }

        for target in &targets {
            self.set(scope, target, &spec.from);
        }

        let watch = TriggerWatch::new(spec.band, spec.replay);
        Some(self.push_binding(
            scope,
            BindingKind::Entrance { targets, trigger, spec, stagger: each, watch },
        ))
    }

    /// Counts the target's text up from 0 to `end` once the trigger enters
    /// its band. Plays a single time.
    pub fn bind_counter(
        &mut self,
        scope: ScopeId,
        target: Option<T>,
        end: u32,
        trigger: Option<T>,
        spec: CounterSpec,
    ) -> Option<BindingId> {
        let (target, trigger) = (target?, trigger?);
        target.set_text("0");
        self.touch(scope, Touched::Text(target.clone(), end));

        let watch = TriggerWatch::new(spec.band, ReplayPolicy::Once);
        Some(self.push_binding(
            scope,
            BindingKind::Counter { target, trigger, end, timing: spec.timing, watch },
        ))
    }

    pub fn bind_hover(&mut self, scope: ScopeId, target: Option<T>, spec: HoverSpec) -> Option<BindingId> {
        let target = target?;
        self.set(scope, &target, &spec.rest);
        Some(self.push_binding(scope, BindingKind::Hover { target, spec }))
    }

    /// Pointer edge for a hover binding. Returns false once the binding is
    /// gone, in which case nothing is animated.
    pub fn hover(&mut self, binding: BindingId, edge: HoverEdge, now: f64) -> bool {
        let Some(found) = self.bindings.iter().find(|b| b.id == binding) else {
            return false;
        };
        let BindingKind::Hover { target, spec } = &found.kind else {
            return false;
        };

        let to = match edge {
            HoverEdge::Enter => spec.active,
            HoverEdge::Leave => spec.rest,
        };
        let run = Running {
            scope: found.scope,
            channel: Channel::Style { target: target.clone(), from: None, to },
            start: now + spec.timing.delay_ms(),
            timing: spec.timing,
        };
        self.start(run);
        true
    }

    /// Free tween not tied to scrolling. With `from`, the start state is
    /// rendered immediately.
    pub fn animate(
        &mut self,
        scope: ScopeId,
        target: Option<T>,
        from: Option<Props>,
        to: Props,
        timing: Timing,
        now: f64,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };
        match from {
            Some(from) => self.set(scope, &target, &from),
            None => self.touch(scope, Touched::Style(target.clone())),
        }
        self.start(Running {
            scope,
            channel: Channel::Style { target, from, to },
            start: now + timing.delay_ms(),
            timing,
        });
        true
    }

    pub fn scroll_window(&mut self, from: f64, to: f64, timing: Timing, now: f64) {
        self.start(Running {
            scope: ScopeId::ROOT,
            channel: Channel::Scroll { from, to },
            start: now + timing.delay_ms(),
            timing,
        });
    }

    /// Re-evaluates every trigger against the current layout.
    pub fn update_triggers(&mut self, now: f64, viewport_height: f64) {
        let mut queued = Vec::new();

        for binding in &mut self.bindings {
            match &mut binding.kind {
                BindingKind::Entrance { targets, trigger, spec, stagger, watch } => {
                    let Some(rect) = trigger.viewport_rect() else { continue };
                    let Some(playback) = watch.observe(rect, viewport_height) else { continue };

                    let count = targets.len();
                    for (index, target) in targets.iter().enumerate() {
                        let (to, delay) = match playback {
                            Playback::Forward => (spec.to, spec.timing.delay + index as f64 * *stagger),
                            Playback::Reverse => (spec.from, (count - 1 - index) as f64 * *stagger),
                        };
                        let timing = spec.timing.delay(delay);
                        queued.push(Running {
                            scope: binding.scope,
                            channel: Channel::Style { target: target.clone(), from: None, to },
                            start: now + timing.delay_ms(),
                            timing,
                        });
                    }
                }
                BindingKind::Counter { target, trigger, end, timing, watch } => {
                    let Some(rect) = trigger.viewport_rect() else { continue };
                    if watch.observe(rect, viewport_height) == Some(Playback::Forward) {
                        queued.push(Running {
                            scope: binding.scope,
                            channel: Channel::Count { target: target.clone(), end: *end, shown: None },
                            start: now + timing.delay_ms(),
                            timing: *timing,
                        });
                    }
                }
                BindingKind::Hover { .. } => {}
            }
        }

        self.bindings.retain(|binding| !binding.kind.is_spent());
        for run in queued {
            self.start(run);
        }
    }

    /// Advances every running tween to `now` and writes the results.
    pub fn tick(&mut self, now: f64) -> Frame {
        let Self { running, visuals, .. } = self;
        let mut frame = Frame::default();

        running.retain_mut(|run| {
            let elapsed = now - run.start;
            if elapsed < 0.0 {
                return true;
            }
            let (progress, done) = run.timing.sample(elapsed);

            match &mut run.channel {
                Channel::Style { target, from, to } => {
                    let visual = visual_of(visuals, target);
                    let start = *from.get_or_insert_with(|| visual.pick(to));
                    visual.merge(&Props::lerp(&start, to, progress));
                    target.render(visual);
                }
                Channel::Count { target, end, shown } => {
                    let value = if done {
                        *end
                    } else {
                        (progress * *end as f64).round().clamp(0.0, *end as f64) as u32
                    };
                    if *shown != Some(value) {
                        *shown = Some(value);
                        target.set_text(&value.to_string());
                    }
                }
                Channel::Scroll { from, to } => {
                    frame.scroll_y = Some(*from + (*to - *from) * progress);
                }
            }
            !done
        });

        frame.animating = !running.is_empty();
        frame
    }

    /// Drops every binding and tween of `scope` and reverts the elements it
    /// touched. Later scroll or pointer events for the scope do nothing.
    pub fn unbind_all(&mut self, scope: ScopeId) {
        self.bindings.retain(|b| b.scope != scope);
        self.running.retain(|r| r.scope != scope);

        let (mine, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.touched).into_iter().partition(|(s, _)| *s == scope);
        self.touched = kept;

        for (_, touched) in mine {
            match touched {
                Touched::Style(target) => {
                    target.reset();
                    self.visuals.retain(|(t, _)| *t != target);
                }
                Touched::Text(target, end) => target.set_text(&end.to_string()),
            }
        }
    }

    #[cfg(test)]
    pub fn bindings_in(&self, scope: ScopeId) -> usize {
        self.bindings.iter().filter(|b| b.scope == scope).count()
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    fn push_binding(&mut self, scope: ScopeId, kind: BindingKind<T>) -> BindingId {
        let id = BindingId(self.next_binding);
        self.next_binding += 1;
        self.bindings.push(Binding { id, scope, kind });
        id
    }

    fn set(&mut self, scope: ScopeId, target: &T, props: &Props) {
        let visual = visual_of(&mut self.visuals, target);
        visual.merge(props);
        target.render(visual);
        self.touch(scope, Touched::Style(target.clone()));
    }

    fn touch(&mut self, scope: ScopeId, touched: Touched<T>) {
        if scope == ScopeId::ROOT {
            return;
        }
        if !self.touched.iter().any(|(s, t)| *s == scope && *t == touched) {
            self.touched.push((scope, touched));
        }
    }

    fn start(&mut self, run: Running<T>) {
        self.running.retain(|older| !run.channel.supersedes(&older.channel));
        self.running.push(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Direction;
    use crate::motion::ease::Ease;
    use crate::motion::tween::{EntryVector, Repeat};
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const VH: f64 = 1000.0;

    #[derive(Default)]
    struct Element {
        rect: Cell<Option<Rect>>,
        renders: RefCell<Vec<Visual>>,
        texts: RefCell<Vec<String>>,
        resets: Cell<u32>,
    }

    #[derive(Clone, Default)]
    struct Fake(Rc<Element>);

    impl PartialEq for Fake {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Target for Fake {
        fn viewport_rect(&self) -> Option<Rect> {
            self.0.rect.get()
        }

        fn render(&self, visual: &Visual) {
            self.0.renders.borrow_mut().push(*visual);
        }

        fn set_text(&self, text: &str) {
            self.0.texts.borrow_mut().push(text.to_string());
        }

        fn reset(&self) {
            self.0.resets.set(self.0.resets.get() + 1);
        }
    }

    impl Fake {
        fn at(top: f64) -> Self {
            let fake = Fake::default();
            fake.scroll_to(top);
            fake
        }

        fn scroll_to(&self, top: f64) {
            self.0.rect.set(Some(Rect { top, bottom: top + 400.0 }));
        }

        fn last(&self) -> Visual {
            *self.0.renders.borrow().last().expect("element was never rendered")
        }

        fn mutations(&self) -> usize {
            self.0.renders.borrow().len() + self.0.texts.borrow().len()
        }
    }

    fn rise() -> EntranceSpec {
        EntranceSpec::reveal(EntryVector::FromBelow(50.0).hidden(Direction::Ltr), Timing::new(1.0, Ease::Power3Out))
    }

    fn counter_spec() -> CounterSpec {
        CounterSpec {
            timing: Timing::new(2.0, Ease::Power2Out),
            band: ViewportBand::new(0.8, 0.2),
        }
    }

    #[test]
    fn entrance_renders_from_state_at_bind_time() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let title = Fake::at(2000.0);

        motion.bind_entrance(scope, Some(title.clone()), Some(title.clone()), rise());

        assert_eq!(title.last(), Visual { x: 0.0, y: 50.0, opacity: 0.0, scale: 1.0 });
        motion.update_triggers(0.0, VH);
        assert!(motion.is_idle());
    }

    #[test]
    fn entrance_plays_when_trigger_enters_and_reverses_on_the_way_back() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let title = Fake::at(2000.0);
        motion.bind_entrance(scope, Some(title.clone()), Some(title.clone()), rise());

        title.scroll_to(700.0);
        motion.update_triggers(0.0, VH);
        motion.tick(500.0);
        let midway = title.last();
        assert!(midway.y > 0.0 && midway.y < 50.0);
        motion.tick(1000.0);
        assert_eq!(title.last(), Visual::default());
        assert!(motion.is_idle());

        title.scroll_to(900.0);
        motion.update_triggers(2000.0, VH);
        motion.tick(3000.0);
        assert_eq!(title.last().opacity, 0.0);
        assert_eq!(title.last().y, 50.0);
    }

    #[test]
    fn stagger_delays_each_target() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let grid = Fake::at(900.0);
        let cards: Vec<Fake> = (0..3).map(|_| Fake::default()).collect();
        motion.bind_stagger(scope, cards.clone(), Some(grid.clone()), rise(), 0.2);

        grid.scroll_to(500.0);
        motion.update_triggers(0.0, VH);
        motion.tick(100.0);

        assert_eq!(cards[0].0.renders.borrow().len(), 2);
        assert_eq!(cards[1].0.renders.borrow().len(), 1);
        assert_eq!(cards[2].0.renders.borrow().len(), 1);

        motion.tick(1400.0);
        for card in &cards {
            assert_eq!(card.last(), Visual::default());
        }
    }

    #[test]
    fn counter_reaches_exactly_its_end_value() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let stat = Fake::at(1200.0);
        let value = Fake::default();
        motion.bind_counter(scope, Some(value.clone()), 150, Some(stat.clone()), counter_spec());
        assert_eq!(value.0.texts.borrow().as_slice(), ["0"]);

        stat.scroll_to(300.0);
        motion.update_triggers(0.0, VH);
        let mut now = 0.0;
        while !motion.is_idle() {
            now += 16.0;
            motion.tick(now);
        }

        let shown: Vec<u32> = value.0.texts.borrow().iter().map(|t| t.parse().unwrap()).collect();
        assert_eq!(shown.last(), Some(&150));
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert!(shown.iter().all(|v| *v <= 150));
    }

    #[test]
    fn counter_does_not_replay() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let stat = Fake::at(300.0);
        let value = Fake::default();
        motion.bind_counter(scope, Some(value.clone()), 5, Some(stat.clone()), counter_spec());

        motion.update_triggers(0.0, VH);
        motion.tick(5000.0);
        let before = value.mutations();

        stat.scroll_to(1500.0);
        motion.update_triggers(6000.0, VH);
        stat.scroll_to(300.0);
        motion.update_triggers(7000.0, VH);
        motion.tick(10_000.0);

        assert!(motion.is_idle());
        assert_eq!(value.mutations(), before);
    }

    #[test]
    fn unbinding_silences_the_scope() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let section = Fake::at(2000.0);
        let value = Fake::default();
        let card = Fake::default();
        motion.bind_entrance(scope, Some(section.clone()), Some(section.clone()), rise());
        motion.bind_counter(scope, Some(value.clone()), 500, Some(section.clone()), counter_spec());
        let hover = motion
            .bind_hover(
                scope,
                Some(card.clone()),
                HoverSpec {
                    rest: Props::new().scale(1.0),
                    active: Props::new().scale(1.05),
                    timing: Timing::new(0.3, Ease::Power2Out),
                },
            )
            .unwrap();

        motion.unbind_all(scope);
        assert_eq!(motion.bindings_in(scope), 0);
        assert_eq!(section.0.resets.get(), 1);
        assert_eq!(card.0.resets.get(), 1);
        assert_eq!(value.0.texts.borrow().last().map(String::as_str), Some("500"));

        let counts = [section.mutations(), value.mutations(), card.mutations()];
        section.scroll_to(100.0);
        motion.update_triggers(0.0, VH);
        assert!(!motion.hover(hover, HoverEdge::Enter, 0.0));
        motion.tick(5000.0);

        assert_eq!([section.mutations(), value.mutations(), card.mutations()], counts);
    }

    #[test]
    fn unbinding_one_scope_leaves_others_running() {
        let mut motion = Orchestrator::new();
        let first = motion.open_scope();
        let second = motion.open_scope();
        let a = Fake::at(100.0);
        let b = Fake::at(100.0);
        motion.bind_entrance(first, Some(a.clone()), Some(a.clone()), rise());
        motion.bind_entrance(second, Some(b.clone()), Some(b.clone()), rise());
        motion.update_triggers(0.0, VH);

        motion.unbind_all(first);
        motion.tick(2000.0);

        assert_eq!(b.last(), Visual::default());
        assert_eq!(motion.bindings_in(second), 1);
        assert_eq!(b.0.resets.get(), 0);
    }

    #[test]
    fn missing_elements_make_binding_a_no_op() {
        let mut motion: Orchestrator<Fake> = Orchestrator::new();
        let scope = motion.open_scope();
        let present = Fake::at(100.0);

        assert!(motion.bind_entrance(scope, Some(present.clone()), None, rise()).is_none());
        assert!(motion.bind_entrance(scope, None, Some(present.clone()), rise()).is_none());
        assert!(motion.bind_stagger(scope, Vec::new(), Some(present.clone()), rise(), 0.2).is_none());
        assert!(motion.bind_counter(scope, None, 10, Some(present.clone()), counter_spec()).is_none());
        assert!(motion.bind_hover(scope, None, HoverSpec {
            rest: Props::new(),
            active: Props::new(),
            timing: Timing::new(0.3, Ease::Linear),
        })
        .is_none());
        assert_eq!(present.mutations(), 0);
        assert_eq!(motion.bindings_in(scope), 0);
    }

    #[test]
    fn detached_trigger_is_skipped() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let title = Fake::default();
        motion.bind_entrance(scope, Some(title.clone()), Some(title.clone()), rise());

        motion.update_triggers(0.0, VH);
        assert!(motion.is_idle());
    }

    #[test]
    fn leading_slide_mirrors_for_right_to_left() {
        let timing = Timing::new(1.0, Ease::Power3Out);
        let first_x = |direction| {
            let mut motion = Orchestrator::new();
            let scope = motion.open_scope();
            let form = Fake::at(2000.0);
            let spec = EntranceSpec::reveal(EntryVector::FromLeading(100.0).hidden(direction), timing);
            motion.bind_entrance(scope, Some(form.clone()), Some(form.clone()), spec);
            form.last()
        };

        let ltr = first_x(Direction::Ltr);
        let rtl = first_x(Direction::Rtl);
        assert_eq!(ltr.x, -100.0);
        assert_eq!(rtl.x, 100.0);
        assert_eq!((ltr.y, ltr.opacity, ltr.scale), (rtl.y, rtl.opacity, rtl.scale));
    }

    #[test]
    fn hover_tweens_between_rest_and_active() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let card = Fake::default();
        let hover = motion
            .bind_hover(
                scope,
                Some(card.clone()),
                HoverSpec {
                    rest: Props::new().scale(1.0),
                    active: Props::new().scale(1.05),
                    timing: Timing::new(0.3, Ease::Power2Out),
                },
            )
            .unwrap();

        assert!(motion.hover(hover, HoverEdge::Enter, 0.0));
        motion.tick(300.0);
        assert_eq!(card.last().scale, 1.05);

        assert!(motion.hover(hover, HoverEdge::Leave, 400.0));
        motion.tick(500.0);
        assert!(card.last().scale > 1.0);
        motion.tick(700.0);
        assert_eq!(card.last().scale, 1.0);
    }

    #[test]
    fn newer_tween_overwrites_overlapping_properties() {
        let mut motion = Orchestrator::new();
        let header = Fake::default();
        let timing = Timing::new(0.3, Ease::Linear);

        motion.animate(ScopeId::ROOT, Some(header.clone()), None, Props::new().opacity(0.0), timing, 0.0);
        motion.tick(150.0);
        motion.animate(ScopeId::ROOT, Some(header.clone()), None, Props::new().opacity(1.0), timing, 150.0);
        motion.tick(450.0);

        assert_eq!(header.last().opacity, 1.0);
        assert!(motion.is_idle());
    }

    #[test]
    fn pulse_returns_to_rest() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let form = Fake::default();
        let pulse = Timing::new(0.1, Ease::Power2Out).repeat(Repeat::Times { count: 1, yoyo: true });

        motion.animate(scope, Some(form.clone()), None, Props::new().scale(0.95), pulse, 0.0);
        motion.tick(100.0);
        assert!((form.last().scale - 0.95).abs() < 1e-9);
        motion.tick(200.0);
        assert_eq!(form.last().scale, 1.0);
    }

    #[test]
    fn scroll_tween_reports_window_offsets() {
        let mut motion: Orchestrator<Fake> = Orchestrator::new();
        motion.scroll_window(0.0, 1200.0, Timing::new(1.0, Ease::Power2InOut), 0.0);

        let mid = motion.tick(500.0);
        assert!((mid.scroll_y.unwrap() - 600.0).abs() < 1e-9);
        assert!(mid.animating);

        let end = motion.tick(1000.0);
        assert_eq!(end.scroll_y, Some(1200.0));
        assert!(!end.animating);
    }

    #[test]
    fn play_once_entrance_neither_reverses_nor_replays() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let title = Fake::at(2000.0);
        motion.bind_entrance(scope, Some(title.clone()), Some(title.clone()), rise().replay(ReplayPolicy::Once));

        title.scroll_to(300.0);
        motion.update_triggers(0.0, VH);
        motion.tick(1500.0);
        assert_eq!(title.last(), Visual::default());
        assert_eq!(motion.bindings_in(scope), 0);
        let settled = title.mutations();

        title.scroll_to(2000.0);
        motion.update_triggers(2000.0, VH);
        motion.tick(4000.0);
        title.scroll_to(300.0);
        motion.update_triggers(5000.0, VH);
        motion.tick(7000.0);

        assert!(motion.is_idle());
        assert_eq!(title.mutations(), settled);
        assert_eq!(title.last(), Visual::default());
    }

    #[test]
    fn reversible_entrance_keeps_its_binding_after_playing() {
        let mut motion = Orchestrator::new();
        let scope = motion.open_scope();
        let title = Fake::at(300.0);
        motion.bind_entrance(scope, Some(title.clone()), Some(title.clone()), rise());

        motion.update_triggers(0.0, VH);
        assert_eq!(motion.bindings_in(scope), 1);
    }

    proptest! {
        #[test]
        fn counter_values_stay_in_range(end in 0u32..2000, ticks in proptest::collection::vec(0.0f64..3000.0, 1..40)) {
            let mut motion = Orchestrator::new();
            let scope = motion.open_scope();
            let stat = Fake::at(100.0);
            let value = Fake::default();
            motion.bind_counter(scope, Some(value.clone()), end, Some(stat.clone()), counter_spec());
            motion.update_triggers(0.0, VH);

            let mut ticks = ticks;
            ticks.sort_by(|a, b| a.partial_cmp(b).unwrap());
            for now in ticks {
                motion.tick(now);
            }
            motion.tick(2000.0);

            let shown: Vec<u32> = value.0.texts.borrow().iter().map(|t| t.parse().unwrap()).collect();
            prop_assert!(shown.iter().all(|v| *v <= end));
            prop_assert_eq!(shown.last().copied(), Some(end));
        }
    }
}
