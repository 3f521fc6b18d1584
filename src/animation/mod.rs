//! Count-up animation of numeric labels and the easing curves shared with the
//! chart reveal.

pub mod animator;
pub mod counter;
pub mod easing;

pub use animator::{LabelBinding, NumericAnimator};
pub use counter::{CounterLabel, CounterPhase, ValueStyle, parse_target};
pub use easing::{count_up, ease_out_cubic, ease_out_quart};
