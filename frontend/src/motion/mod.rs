//! Scroll-triggered entrance animations and the small tween engine behind
//! them. [`orchestrator`] holds the logic, [`dom`] binds it to the page.

pub mod dom;
pub mod ease;
pub mod orchestrator;
pub mod trigger;
pub mod tween;

pub use dom::{body, children, element, find, use_motion, Motion, MotionProvider};
pub use ease::Ease;
pub use orchestrator::{CounterSpec, EntranceSpec, HoverSpec};
pub use trigger::ViewportBand;
pub use tween::{EntryVector, Props, Repeat, Sequence, Timing};
