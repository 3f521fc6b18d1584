//! Count-up animation timing

use std::time::Duration;

pub struct AnimationConfig {
    /// How long a numeric label takes to count from zero to its target
    pub counter_duration_ms: u64,
}

impl AnimationConfig {
    pub const fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }
}

pub const ANIMATION: AnimationConfig = AnimationConfig {
    counter_duration_ms: 2000,
};
