// src/utils/app_time.rs

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Fraction of `duration` that has passed between `start` and `at`, clamped to `[0, 1]`.
/// A zero duration is treated as already complete.
pub fn progress_between(start: AppInstant, at: AppInstant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    // saturating: `at` before `start` counts as no time elapsed
    let elapsed = at.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}
