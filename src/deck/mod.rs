//! Job Deck
//!
//! The containing list around swipe cards. The deck supplies the top card,
//! receives resolved swipe outcomes, and owns the consequences: advancing
//! the feed and tracking applied, skipped, and saved jobs. The engine only
//! ever notifies the deck; it never mutates it directly.

use crate::gesture::SwipeDirection;
use crate::jobs::Job;
use std::collections::VecDeque;
use tracing::debug;

/// An ordered feed of jobs with outcome bookkeeping
#[derive(Debug, Clone, Default)]
pub struct JobDeck {
    queue: VecDeque<Job>,
    applied: Vec<Job>,
    skipped: Vec<Job>,
    saved: Vec<Job>,
}

impl JobDeck {
    /// Build a deck from a feed, in feed order
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            queue: jobs.into(),
            ..Default::default()
        }
    }

    /// The interactive card, if any remain
    pub fn top(&self) -> Option<&Job> {
        self.queue.front()
    }

    /// Jobs still waiting in the feed
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// True when the feed is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Jobs applied to so far
    pub fn applied(&self) -> &[Job] {
        &self.applied
    }

    /// Jobs skipped so far
    pub fn skipped(&self) -> &[Job] {
        &self.skipped
    }

    /// Jobs saved for later
    pub fn saved(&self) -> &[Job] {
        &self.saved
    }

    /// Record a resolved decision for the top card and advance the feed.
    /// Returns the job the decision applied to, or `None` on an empty deck.
    pub fn resolve(&mut self, direction: SwipeDirection) -> Option<&Job> {
        let job = self.queue.pop_front()?;
        debug!(job = %job.id, ?direction, "deck resolved top card");
        match direction {
            SwipeDirection::Right => {
                self.applied.push(job);
                self.applied.last()
            }
            SwipeDirection::Left => {
                self.skipped.push(job);
                self.skipped.last()
            }
        }
    }

    /// Save the top card without advancing the feed. Saving twice is a
    /// no-op; returns whether the job was newly saved.
    pub fn save_top(&mut self) -> bool {
        let Some(job) = self.queue.front() else {
            return false;
        };
        if self.saved.iter().any(|saved| saved.id == job.id) {
            return false;
        }
        debug!(job = %job.id, "deck saved top card");
        self.saved.push(job.clone());
        true
    }
}
