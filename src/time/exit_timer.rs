//! Deferred Decision Timer
//!
//! When a swipe commits, the decision callback must wait for the exit
//! animation to finish playing. That wait is modeled as an explicit timer
//! owned by the card instance rather than an ambient scheduled callback:
//! the host polls it with its own notion of "now", and dropping the timer
//! cancels it. A card disposed mid-animation therefore never fires into a
//! container that no longer exists.

use crate::gesture::SwipeDirection;
use std::time::{Duration, Instant};

/// A one-shot timer carrying the committed swipe direction
#[derive(Debug, Clone)]
pub struct ExitTimer {
    deadline: Instant,
    direction: SwipeDirection,
    fired: bool,
}

impl ExitTimer {
    /// Schedule the decision callback `delay` after `now`
    pub fn schedule(now: Instant, delay: Duration, direction: SwipeDirection) -> Self {
        Self {
            deadline: now + delay,
            direction,
            fired: false,
        }
    }

    /// When the timer elapses
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// The direction the timer will report
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Whether the timer has already fired
    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Fire if the deadline has elapsed. Fires at most once.
    pub fn poll(&mut self, now: Instant) -> Option<SwipeDirection> {
        if self.fired || now < self.deadline {
            return None;
        }
        self.fired = true;
        Some(self.direction)
    }
}
