//! Swipe Gesture Engine
//!
//! The core interaction model: one gesture session at a time, resolved into
//! an apply/skip/abandoned outcome when the pointer is released.

pub mod engine;
pub mod session;
pub mod visuals;

pub use engine::{SwipeEngine, SwipePhase};
pub use session::GestureSession;
pub use visuals::{CardVisualState, CardVisuals};

use serde::{Deserialize, Serialize};

/// Direction of a committed swipe, as reported to the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Leftward commit (skip)
    Left,
    /// Rightward commit (apply)
    Right,
}

/// Outcome of a completed gesture.
///
/// Exactly one decision is produced per completed gesture. `Undecided` means
/// the drag was abandoned below the commit threshold: the card returns to
/// rest and no callback fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    /// Rightward commit: apply to the job
    Apply,
    /// Leftward commit: skip the job
    Skip,
    /// Gesture abandoned; card returns to rest
    Undecided,
}

impl SwipeDecision {
    /// Resolve a final horizontal displacement against the commit threshold.
    pub fn resolve(offset_x: f64, commit_threshold_px: f64) -> Self {
        if offset_x.abs() > commit_threshold_px {
            if offset_x > 0.0 {
                SwipeDecision::Apply
            } else {
                SwipeDecision::Skip
            }
        } else {
            SwipeDecision::Undecided
        }
    }

    /// The direction reported to the container, if the gesture committed.
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            SwipeDecision::Apply => Some(SwipeDirection::Right),
            SwipeDecision::Skip => Some(SwipeDirection::Left),
            SwipeDecision::Undecided => None,
        }
    }
}

impl From<SwipeDirection> for SwipeDecision {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Right => SwipeDecision::Apply,
            SwipeDirection::Left => SwipeDecision::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_apply() {
        assert_eq!(SwipeDecision::resolve(150.0, 100.0), SwipeDecision::Apply);
    }

    #[test]
    fn test_resolve_skip() {
        assert_eq!(SwipeDecision::resolve(-150.0, 100.0), SwipeDecision::Skip);
    }

    #[test]
    fn test_resolve_below_threshold() {
        assert_eq!(SwipeDecision::resolve(-60.0, 100.0), SwipeDecision::Undecided);
        assert_eq!(SwipeDecision::resolve(60.0, 100.0), SwipeDecision::Undecided);
    }

    #[test]
    fn test_resolve_exact_threshold_is_undecided() {
        // The commit test is strictly greater-than.
        assert_eq!(SwipeDecision::resolve(100.0, 100.0), SwipeDecision::Undecided);
        assert_eq!(SwipeDecision::resolve(-100.0, 100.0), SwipeDecision::Undecided);
    }

    #[test]
    fn test_direction_mapping() {
        assert_eq!(SwipeDecision::Apply.direction(), Some(SwipeDirection::Right));
        assert_eq!(SwipeDecision::Skip.direction(), Some(SwipeDirection::Left));
        assert_eq!(SwipeDecision::Undecided.direction(), None);
    }

    #[test]
    fn test_decision_from_direction() {
        assert_eq!(SwipeDecision::from(SwipeDirection::Right), SwipeDecision::Apply);
        assert_eq!(SwipeDecision::from(SwipeDirection::Left), SwipeDecision::Skip);
    }

    #[test]
    fn test_direction_serialization() {
        assert_eq!(serde_json::to_string(&SwipeDirection::Left).unwrap(), "\"left\"");
        assert_eq!(serde_json::to_string(&SwipeDirection::Right).unwrap(), "\"right\"");
    }
}
