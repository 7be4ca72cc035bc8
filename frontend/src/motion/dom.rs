use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use super::ease::Ease;
use super::orchestrator::{
    BindingId, CounterSpec, EntranceSpec, HoverEdge, HoverSpec, Orchestrator, ScopeId, Target,
};
use super::trigger::Rect;
use super::tween::{Props, Timing, Visual};
use crate::config::motion as defaults;

impl Target for HtmlElement {
    fn viewport_rect(&self) -> Option<Rect> {
        if !self.is_connected() {
            return None;
        }
        let bounds = self.get_bounding_client_rect();
        Some(Rect { top: bounds.top(), bottom: bounds.bottom() })
    }

    fn render(&self, visual: &Visual) {
        let style = self.style();
        let _ = style.set_property("transform", &visual.transform());
        let _ = style.set_property("opacity", &visual.opacity.to_string());
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn reset(&self) {
        let style = self.style();
        let _ = style.remove_property("transform");
        let _ = style.remove_property("opacity");
    }
}

fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn element(node: &NodeRef) -> Option<HtmlElement> {
    node.cast::<HtmlElement>()
}

/// Element children of `node`, in document order.
pub fn children(node: &NodeRef) -> Vec<HtmlElement> {
    let Some(parent) = element(node) else {
        return Vec::new();
    };
    let list = parent.children();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn body() -> Option<HtmlElement> {
    window().and_then(|w| w.document()).and_then(|doc| doc.body())
}

pub fn find(parent: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// A DOM event listener that unregisters itself when dropped.
struct Listener {
    element: HtmlElement,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type Engine = Rc<RefCell<Orchestrator<HtmlElement>>>;

/// Shared handle to the page's orchestrator, provided by [`MotionProvider`].
#[derive(Clone)]
pub struct Motion {
    engine: Engine,
    listeners: Rc<RefCell<Vec<(ScopeId, Listener)>>>,
}

impl PartialEq for Motion {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.engine, &other.engine)
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}

impl Motion {
    pub fn new() -> Self {
        Self {
            engine: Rc::new(RefCell::new(Orchestrator::new())),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn open(&self) -> MotionScope {
        let id = self.engine.borrow_mut().open_scope();
        debug!("Opened motion scope {:?}", id);
        MotionScope { motion: self.clone(), id }
    }

    fn close(&self, scope: ScopeId) {
        self.listeners.borrow_mut().retain(|(owner, _)| *owner != scope);
        self.engine.borrow_mut().unbind_all(scope);
        debug!("Closed motion scope {:?}", scope);
    }

    /// Re-reads trigger positions; called on scroll, resize and after binding.
    pub fn refresh(&self) {
        self.engine.borrow_mut().update_triggers(now(), viewport_height());
    }

    fn tick(&self) {
        let frame = self.engine.borrow_mut().tick(now());
        if let (Some(y), Some(window)) = (frame.scroll_y, window()) {
            window.scroll_to_with_x_and_y(window.scroll_x().unwrap_or(0.0), y);
        }
    }

    /// Page-level tween that outlives any component scope.
    pub fn animate(&self, target: Option<HtmlElement>, from: Option<Props>, to: Props, timing: Timing) {
        self.engine
            .borrow_mut()
            .animate(ScopeId::ROOT, target, from, to, timing, now());
    }

    /// Smoothly scrolls so the element with `section_id` sits just below the
    /// fixed header.
    pub fn scroll_to_section(&self, section_id: &str) {
        let Some(window) = window() else { return };
        let Some(section) = window.document().and_then(|doc| doc.get_element_by_id(section_id)) else {
            warn!("No section with id {:?} to scroll to", section_id);
            return;
        };

        let current = window.scroll_y().unwrap_or(0.0);
        let target = (current + section.get_bounding_client_rect().top() - defaults::HEADER_OFFSET).max(0.0);
        let timing = Timing::new(defaults::SECTION_SCROLL_DURATION, Ease::Power2InOut);
        self.engine.borrow_mut().scroll_window(current, target, timing, now());
    }

    fn listen(&self, scope: ScopeId, element: &HtmlElement, binding: BindingId, edge: HoverEdge) {
        let event = match edge {
            HoverEdge::Enter => "mouseenter",
            HoverEdge::Leave => "mouseleave",
        };
        let engine = Rc::downgrade(&self.engine);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(engine) = engine.upgrade() {
                engine.borrow_mut().hover(binding, edge, now());
            }
        }) as Box<dyn FnMut()>);

        if element
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.borrow_mut().push((
                scope,
                Listener { element: element.clone(), event, callback },
            ));
        }
    }
}

/// Binding surface handed to components inside [`use_motion`]. Every
/// binding made through it is released when the component unmounts or its
/// dependencies change.
pub struct MotionScope {
    motion: Motion,
    id: ScopeId,
}

impl MotionScope {
    /// Entrance triggered by the target's own position.
    pub fn entrance(&self, target: Option<HtmlElement>, spec: EntranceSpec) {
        let trigger = target.clone();
        let bound = self.motion.engine.borrow_mut().bind_entrance(self.id, target, trigger, spec);
        if bound.is_none() {
            debug!("Skipped entrance in {:?}: element not mounted", self.id);
        }
    }

    pub fn stagger(&self, targets: Vec<HtmlElement>, trigger: Option<HtmlElement>, spec: EntranceSpec, each: f64) {
        let bound = self.motion.engine.borrow_mut().bind_stagger(self.id, targets, trigger, spec, each);
        if bound.is_none() {
            debug!("Skipped stagger in {:?}: nothing mounted", self.id);
        }
    }

    pub fn counter(&self, target: Option<HtmlElement>, end: u32, trigger: Option<HtmlElement>, spec: CounterSpec) {
        let bound = self.motion.engine.borrow_mut().bind_counter(self.id, target, end, trigger, spec);
        if bound.is_none() {
            debug!("Skipped counter in {:?}: element not mounted", self.id);
        }
    }

    /// Pointer enter/leave on `hotspot` drives `target` between the rest
    /// and active states.
    pub fn hover(&self, hotspot: &HtmlElement, target: Option<HtmlElement>, spec: HoverSpec) {
        let bound = self.motion.engine.borrow_mut().bind_hover(self.id, target, spec);
        if let Some(binding) = bound {
            self.motion.listen(self.id, hotspot, binding, HoverEdge::Enter);
            self.motion.listen(self.id, hotspot, binding, HoverEdge::Leave);
        }
    }

    pub fn animate(&self, target: Option<HtmlElement>, from: Option<Props>, to: Props, timing: Timing) {
        self.motion
            .engine
            .borrow_mut()
            .animate(self.id, target, from, to, timing, now());
    }

    fn close(self) {
        self.motion.close(self.id);
    }
}

/// Opens a motion scope after render, runs `bind` against it and closes the
/// scope on unmount or whenever `deps` change. Without a [`MotionProvider`]
/// above the component nothing is bound.
#[hook]
pub fn use_motion<D, F>(deps: D, bind: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&MotionScope, &D) + 'static,
{
    let motion = use_context::<Motion>();
    use_effect_with_deps(
        move |deps| {
            let scope = motion.map(|motion| {
                let scope = motion.open();
                bind(&scope, deps);
                motion.refresh();
                scope
            });
            move || {
                if let Some(scope) = scope {
                    scope.close();
                }
            }
        },
        deps,
    );
}

#[derive(Properties, PartialEq)]
pub struct MotionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the orchestrator, re-evaluates triggers on scroll and resize, and
/// advances tweens on a fixed interval.
#[function_component(MotionProvider)]
pub fn motion_provider(props: &MotionProviderProps) -> Html {
    let motion = use_state(Motion::new);

    {
        let motion = (*motion).clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let on_scroll = {
                    let motion = motion.clone();
                    Closure::wrap(Box::new(move || motion.refresh()) as Box<dyn FnMut()>)
                };
                if let Some(window) = &window {
                    for event in ["scroll", "resize"] {
                        let _ = window.add_event_listener_with_callback(event, on_scroll.as_ref().unchecked_ref());
                    }
                }

                let ticker = {
                    let motion = motion.clone();
                    Interval::new(defaults::TICK_INTERVAL_MS, move || motion.tick())
                };
                motion.refresh();

                move || {
                    drop(ticker);
                    if let Some(window) = window {
                        for event in ["scroll", "resize"] {
                            let _ = window
                                .remove_event_listener_with_callback(event, on_scroll.as_ref().unchecked_ref());
                        }
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<Motion> context={(*motion).clone()}>
            { for props.children.iter() }
        </ContextProvider<Motion>>
    }
}
