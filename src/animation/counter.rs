//! A single count-up label: parses its target out of the rendered text, keeps
//! the text's formatting style, and re-renders itself from 0 to the target.

use std::time::Duration;

use crate::animation::easing::count_up;
use crate::utils::app_time::{AppInstant, progress_between};
use crate::utils::{format_fixed, format_floored};

/// Formatting style detected from a label's original text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueStyle {
    /// `$` text. `signed` labels always show a sign; `negative` comes from the target.
    Currency { signed: bool, negative: bool },
    /// `%` text with 0 or 1 decimals
    Percent { decimals: usize },
    /// Plain integer with thousands separators
    Count,
}

impl ValueStyle {
    pub fn detect(text: &str, target: f64) -> Self {
        if text.contains('$') {
            let signed = text.trim_start().starts_with(['+', '-']);
            ValueStyle::Currency {
                signed,
                negative: target < 0.0,
            }
        } else if text.contains('%') {
            ValueStyle::Percent {
                decimals: if text.contains('.') { 1 } else { 0 },
            }
        } else {
            ValueStyle::Count
        }
    }

    pub fn render(&self, value: f64) -> String {
        match *self {
            ValueStyle::Currency { signed, negative } => {
                let magnitude = if value.is_finite() { value.abs().floor() } else { 0.0 };
                // no "-$0" while a negative label is still below one whole unit
                let sign = match (negative && magnitude > 0.0, signed) {
                    (true, _) => "-",
                    (false, true) if !negative => "+",
                    _ => "",
                };
                format!("{}${}", sign, format_floored(magnitude))
            }
            ValueStyle::Percent { decimals } => format!("{}%", format_fixed(value, decimals)),
            ValueStyle::Count => format_floored(value),
        }
    }
}

/// Numeric target of a label: every character except digits, `.` and `-` is
/// dropped and the longest leading decimal literal is parsed (`"1.2.3"` -> `1.2`).
pub fn parse_target(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    (1..=cleaned.len())
        .rev()
        .find_map(|end| cleaned[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Animating,
    Settled,
}

#[derive(Debug, Clone)]
pub struct CounterLabel<K> {
    pub key: K,
    source_text: String,
    /// `None` when the text holds no number; such labels stay static
    target: Option<f64>,
    style: ValueStyle,
    duration: Duration,
    started_at: Option<AppInstant>,
    phase: CounterPhase,
    text: String,
}

impl<K> CounterLabel<K> {
    pub fn new(key: K, text: impl Into<String>, duration: Duration) -> Self {
        let source_text = text.into();
        let target = parse_target(&source_text);
        let style = ValueStyle::detect(&source_text, target.unwrap_or(0.0));
        Self {
            key,
            text: source_text.clone(),
            source_text,
            target,
            style,
            duration,
            started_at: None,
            phase: CounterPhase::Idle,
        }
    }

    pub fn target(&self) -> Option<f64> {
        self.target
    }

    pub fn style(&self) -> ValueStyle {
        self.style
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_animatable(&self) -> bool {
        self.target.is_some()
    }

    /// Text of this label at `progress` in `[0, 1]`. Pure: no state changes.
    pub fn text_at(&self, progress: f64) -> String {
        match self.target {
            Some(target) => self.style.render(count_up(target, progress)),
            None => self.source_text.clone(),
        }
    }

    /// Leaves `Idle`. Labels without a number go straight to `Settled` with their text untouched.
    pub fn start(&mut self, now: AppInstant) {
        if self.phase != CounterPhase::Idle {
            return;
        }
        if self.target.is_none() {
            self.phase = CounterPhase::Settled;
            return;
        }
        self.started_at = Some(now);
        self.phase = CounterPhase::Animating;
        self.text = self.text_at(0.0);
    }

    /// Re-renders an animating label for `now`. Returns `true` while it still needs frames.
    pub fn tick(&mut self, now: AppInstant) -> bool {
        let (CounterPhase::Animating, Some(started_at)) = (self.phase, self.started_at) else {
            return false;
        };
        let progress = progress_between(started_at, now, self.duration);
        self.text = self.text_at(progress);
        if progress >= 1.0 {
            self.phase = CounterPhase::Settled;
            return false;
        }
        true
    }

    /// Jumps straight to the final text.
    pub fn settle(&mut self) {
        self.text = self.text_at(1.0);
        self.phase = CounterPhase::Settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(2000);

    #[test]
    fn parses_targets_like_the_rendered_text() {
        assert_eq!(parse_target("$55,706"), Some(55_706.0));
        assert_eq!(parse_target("+$125,027.87"), Some(125_027.87));
        assert_eq!(parse_target("-$1,250"), Some(-1_250.0));
        assert_eq!(parse_target("100.0%"), Some(100.0));
        assert_eq!(parse_target("1.2.3"), Some(1.2));
        assert_eq!(parse_target("N/A"), None);
        assert_eq!(parse_target("-"), None);
    }

    #[test]
    fn detects_styles() {
        assert_eq!(
            ValueStyle::detect("$55,706", 55_706.0),
            ValueStyle::Currency { signed: false, negative: false }
        );
        assert_eq!(
            ValueStyle::detect("+$9,599.69", 9_599.69),
            ValueStyle::Currency { signed: true, negative: false }
        );
        assert_eq!(ValueStyle::detect("100.0%", 100.0), ValueStyle::Percent { decimals: 1 });
        assert_eq!(ValueStyle::detect("95%", 95.0), ValueStyle::Percent { decimals: 0 });
        assert_eq!(ValueStyle::detect("1,024", 1_024.0), ValueStyle::Count);
    }

    #[test]
    fn sign_follows_the_value_not_a_stray_plus() {
        // a '+' that is not a leading sign does not make the label signed
        let label = CounterLabel::new((), "$1,000+", DURATION);
        assert_eq!(label.text_at(1.0), "$1,000");

        let label = CounterLabel::new((), "-$1,250", DURATION);
        assert_eq!(label.text_at(1.0), "-$1,250");
        assert_eq!(label.text_at(0.0), "$0");
        assert_eq!(label.text_at(0.0001), "$0");
        assert_eq!(label.text_at(0.5), "-$1,093");

        let label = CounterLabel::new((), "+$55,706.51", DURATION);
        assert_eq!(label.text_at(0.0), "+$0");
        assert_eq!(label.text_at(1.0), "+$55,706");
    }

    #[test]
    fn currency_settles_exactly_on_target() {
        let label = CounterLabel::new((), "$55,706", DURATION);
        assert_eq!(label.text_at(1.0), "$55,706");
    }

    #[test]
    fn huge_targets_settle_on_every_digit() {
        let mut label = CounterLabel::new((), "100,000,000,000,000,000,000", DURATION);
        assert_eq!(label.style(), ValueStyle::Count);
        label.start(AppInstant::now());
        label.settle();
        assert_eq!(label.phase(), CounterPhase::Settled);
        assert_eq!(label.text(), "100,000,000,000,000,000,000");

        let label = CounterLabel::new((), "$20,000,000,000,000,000,000", DURATION);
        assert_eq!(label.text_at(1.0), "$20,000,000,000,000,000,000");
    }

    #[test]
    fn percent_frames_are_bounded_and_monotonic() {
        let label = CounterLabel::new((), "100.0%", DURATION);
        let mut last = 0.0;
        for i in 0..=200 {
            let text = label.text_at(i as f64 / 200.0);
            let value: f64 = text.trim_end_matches('%').parse().unwrap();
            assert!((0.0..=100.0).contains(&value), "{} out of range", text);
            assert!(value >= last, "{} went backwards", text);
            last = value;
        }
        assert_eq!(label.text_at(1.0), "100.0%");
    }

    #[test]
    fn counts_keep_thousands_separators() {
        let label = CounterLabel::new((), "1,024", DURATION);
        assert_eq!(label.text_at(1.0), "1,024");
        assert_eq!(label.text_at(0.5), "896");
    }

    #[test]
    fn walks_idle_animating_settled() {
        let t0 = AppInstant::now();
        let mut label = CounterLabel::new("pnl", "$2,000", DURATION);
        assert_eq!(label.phase(), CounterPhase::Idle);
        assert_eq!(label.text(), "$2,000");

        label.start(t0);
        assert_eq!(label.phase(), CounterPhase::Animating);
        assert_eq!(label.text(), "$0");

        assert!(label.tick(t0 + Duration::from_millis(1000)));
        assert_eq!(label.text(), "$1,750");
        assert_eq!(label.phase(), CounterPhase::Animating);

        assert!(!label.tick(t0 + Duration::from_millis(2500)));
        assert_eq!(label.phase(), CounterPhase::Settled);
        assert_eq!(label.text(), "$2,000");

        // settled labels ignore further ticks and restarts
        label.start(t0 + Duration::from_millis(3000));
        assert!(!label.tick(t0 + Duration::from_millis(3000)));
        assert_eq!(label.phase(), CounterPhase::Settled);
    }

    #[test]
    fn unparsable_text_is_left_alone() {
        let mut label = CounterLabel::new((), "N/A", DURATION);
        assert!(!label.is_animatable());
        label.start(AppInstant::now());
        assert_eq!(label.phase(), CounterPhase::Settled);
        assert_eq!(label.text(), "N/A");
        label.settle();
        assert_eq!(label.text(), "N/A");
    }
}
