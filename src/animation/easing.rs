//! Easing curves. All take and return progress in `[0, 1]`.

/// Fast start, slow settle: `1 - (1 - t)^3`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Used by the chart reveal: `1 - (1 - t)^4`.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Interpolated value between 0 and `target` at progress `t`.
pub fn count_up(target: f64, t: f64) -> f64 {
    target * ease_out_cubic(t)
}
