//! One-way entrance animations triggered by viewport intersection.
//!
//! An element is marked shown the first time at least `threshold` of it is
//! visible and stays shown for the rest of the page view.

use std::collections::HashSet;

/// Entrance animation variants, each with its own marker class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    Up,
    Left,
    Right,
}

impl RevealKind {
    pub fn class(&self) -> &'static str {
        match self {
            RevealKind::Up => "reveal",
            RevealKind::Left => "reveal-left",
            RevealKind::Right => "reveal-right",
        }
    }

    /// Grid items slide in from alternating sides.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            RevealKind::Left
        } else {
            RevealKind::Right
        }
    }
}

/// Result of feeding one intersection sample to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// Crossed the threshold just now; apply the shown class and stop observing.
    BecameShown,
    AlreadyShown,
    Hidden,
}

/// Shown flags for observed elements, keyed by a caller-chosen id.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    shown: HashSet<u32>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            shown: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, id: u32, ratio: f64, is_intersecting: bool) -> RevealTransition {
        if self.shown.contains(&id) {
            return RevealTransition::AlreadyShown;
        }
        if is_intersecting && ratio >= self.threshold {
            self.shown.insert(id);
            RevealTransition::BecameShown
        } else {
            RevealTransition::Hidden
        }
    }

    pub fn is_shown(&self, id: u32) -> bool {
        self.shown.contains(&id)
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_classes() {
        assert_eq!(RevealKind::Up.class(), "reveal");
        assert_eq!(RevealKind::Left.class(), "reveal-left");
        assert_eq!(RevealKind::Right.class(), "reveal-right");
    }

    #[test]
    fn alternating_starts_left() {
        let kinds: Vec<_> = (0..4).map(RevealKind::alternating).collect();
        assert_eq!(
            kinds,
            vec![
                RevealKind::Left,
                RevealKind::Right,
                RevealKind::Left,
                RevealKind::Right
            ]
        );
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut tracker = RevealTracker::new(0.18);
        assert_eq!(tracker.observe(1, 0.1, true), RevealTransition::Hidden);
        assert_eq!(tracker.observe(1, 0.5, false), RevealTransition::Hidden);
        assert!(!tracker.is_shown(1));
    }

    #[test]
    fn shown_is_permanent() {
        let mut tracker = RevealTracker::new(0.18);
        assert_eq!(tracker.observe(1, 0.18, true), RevealTransition::BecameShown);
        assert_eq!(tracker.observe(1, 0.0, false), RevealTransition::AlreadyShown);
        assert_eq!(tracker.observe(1, 0.9, true), RevealTransition::AlreadyShown);
        assert!(tracker.is_shown(1));
        assert_eq!(tracker.shown_count(), 1);
    }

    #[test]
    fn elements_are_tracked_independently() {
        let mut tracker = RevealTracker::new(0.18);
        tracker.observe(1, 0.4, true);
        assert_eq!(tracker.observe(2, 0.05, true), RevealTransition::Hidden);
        assert!(tracker.is_shown(1));
        assert!(!tracker.is_shown(2));
    }
}
