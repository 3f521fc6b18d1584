use std::time::Duration;

use crate::animation::counter::{CounterLabel, CounterPhase};
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// A view field and the text it was first rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBinding<K> {
    pub key: K,
    pub text: String,
}

impl<K> LabelBinding<K> {
    pub fn new(key: K, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

/// Drives a set of independent count-up labels from an external frame tick.
pub struct NumericAnimator<K> {
    labels: Vec<CounterLabel<K>>,
    /// First tick that found every label settled
    settled_at: Option<AppInstant>,
}

impl<K: PartialEq> NumericAnimator<K> {
    pub fn new(bindings: impl IntoIterator<Item = LabelBinding<K>>, duration: Duration) -> Self {
        let labels = bindings
            .into_iter()
            .map(|b| CounterLabel::new(b.key, b.text, duration))
            .collect();
        Self {
            labels,
            settled_at: None,
        }
    }

    /// Starts every idle label at `now`.
    pub fn start(&mut self, now: AppInstant) {
        for label in &mut self.labels {
            label.start(now);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_animator_events {
            let skipped = self.labels.iter().filter(|l| !l.is_animatable()).count();
            log::info!(
                "[animator] started {} labels ({} left static)",
                self.labels.len() - skipped,
                skipped
            );
        }
    }

    /// Advances every animating label. Returns `true` while any label still needs frames.
    pub fn tick(&mut self, now: AppInstant) -> bool {
        let mut running = false;
        for label in &mut self.labels {
            running |= label.tick(now);
        }

        if !running && self.settled_at.is_none() && self.is_settled() {
            self.settled_at = Some(now);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_animator_events {
                log::debug!("[animator] all {} labels settled", self.labels.len());
            }
        }

        running
    }

    /// Skips every label to its final text.
    pub fn settle_all(&mut self) {
        for label in &mut self.labels {
            label.settle();
        }
    }

    pub fn text(&self, key: &K) -> Option<&str> {
        self.find(key).map(|l| l.text())
    }

    pub fn phase(&self, key: &K) -> Option<CounterPhase> {
        self.find(key).map(|l| l.phase())
    }

    pub fn is_settled(&self) -> bool {
        self.labels
            .iter()
            .all(|l| l.phase() == CounterPhase::Settled)
    }

    pub fn settled_at(&self) -> Option<AppInstant> {
        self.settled_at
    }

    pub fn labels(&self) -> &[CounterLabel<K>] {
        &self.labels
    }

    fn find(&self, key: &K) -> Option<&CounterLabel<K>> {
        self.labels.iter().find(|l| &l.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Field {
        Pnl,
        WinRate,
        Trades,
        Note,
    }

    fn animator() -> NumericAnimator<Field> {
        NumericAnimator::new(
            vec![
                LabelBinding::new(Field::Pnl, "+$125,027.87"),
                LabelBinding::new(Field::WinRate, "98.2%"),
                LabelBinding::new(Field::Trades, "167"),
                LabelBinding::new(Field::Note, "n/a"),
            ],
            Duration::from_millis(2000),
        )
    }

    #[test]
    fn labels_animate_independently_and_settle() {
        let t0 = AppInstant::now();
        let mut animator = animator();
        assert!(!animator.is_settled());
        animator.start(t0);

        assert_eq!(animator.text(&Field::Pnl), Some("+$0"));
        assert_eq!(animator.text(&Field::WinRate), Some("0.0%"));
        assert_eq!(animator.phase(&Field::Note), Some(CounterPhase::Settled));
        assert_eq!(animator.text(&Field::Note), Some("n/a"));

        assert!(animator.tick(t0 + Duration::from_millis(500)));
        assert_eq!(animator.phase(&Field::Trades), Some(CounterPhase::Animating));

        assert!(!animator.tick(t0 + Duration::from_millis(2000)));
        assert!(animator.is_settled());
        assert_eq!(animator.text(&Field::Pnl), Some("+$125,027"));
        assert_eq!(animator.text(&Field::WinRate), Some("98.2%"));
        assert_eq!(animator.text(&Field::Trades), Some("167"));
    }

    #[test]
    fn settling_is_recorded_once() {
        let t0 = AppInstant::now();
        let mut animator = animator();
        animator.start(t0);

        assert!(animator.tick(t0 + Duration::from_millis(1000)));
        assert_eq!(animator.settled_at(), None);

        let done = t0 + Duration::from_millis(2000);
        assert!(!animator.tick(done));
        assert_eq!(animator.settled_at(), Some(done));

        // later repaints keep ticking but the settle point does not move
        assert!(!animator.tick(t0 + Duration::from_millis(5000)));
        assert_eq!(animator.settled_at(), Some(done));
    }

    #[test]
    fn settle_all_skips_the_animation() {
        let mut animator = animator();
        animator.settle_all();
        assert!(animator.is_settled());
        assert_eq!(animator.text(&Field::Trades), Some("167"));
        assert!(!animator.tick(AppInstant::now()));
    }

    #[test]
    fn unknown_key_has_no_text() {
        let animator = NumericAnimator::<Field>::new(Vec::new(), Duration::from_millis(10));
        assert_eq!(animator.text(&Field::Pnl), None);
        assert!(animator.is_settled());
    }
}
