//! # SwipeHire Engine
//!
//! The swipeable-card interaction engine behind the SwipeHire job browser:
//! pointer and touch tracking, gesture-to-decision resolution, exit-animation
//! sequencing, and the exactly-once decision callback contract between a card
//! and its containing deck.
//!
//! ## Overview
//!
//! Each visible job card owns one [`SwipeEngine`]. Platform input events are
//! normalized into [`PointerPoint`] samples and fed to the engine, which
//! tracks a single gesture session at a time and resolves it against the
//! commit threshold when the pointer is released. Committed swipes play an
//! exit animation and report their direction to the container exactly once,
//! after the exit delay elapses.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Instant;
//! use swipehire::{PointerPoint, PointerSource, SwipeEngine, SwipeDirection};
//!
//! let mut engine = SwipeEngine::new();
//! engine.set_on_swipe(|direction| {
//!     assert_eq!(direction, SwipeDirection::Right);
//! });
//!
//! // Drag the card 150px to the right and release.
//! let start = Instant::now();
//! engine.pointer_down(PointerPoint::new(100.0, 100.0), PointerSource::Mouse);
//! engine.pointer_move(PointerPoint::new(250.0, 100.0));
//! engine.pointer_up(start);
//!
//! // The decision callback fires once the exit delay has elapsed.
//! let fired = engine.poll(start + engine.exit_delay());
//! assert_eq!(fired, Some(SwipeDirection::Right));
//! ```
//!
//! ## Architecture
//!
//! - [`input`]: Typed pointer abstraction over mouse and touch events
//! - [`gesture`]: Session tracking, the swipe state machine, derived visuals
//! - [`time`]: Explicit cancellable timer for the deferred decision callback
//! - [`jobs`]: Serde data model for job cards
//! - [`deck`]: The containing list; receives outcomes and advances the feed
//! - [`trace`]: Recorded gesture traces, replayable through the engine
//! - [`app`]: CLI and configuration management
//!
//! ## Gesture Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ Mouse/Touch │───▶│   Gesture   │───▶│  Decision   │───▶│  Exit Timer │
//! │   Events    │    │   Session   │    │ Resolution  │    │ + Callback  │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                          │                                      │
//!                          ▼                                      ▼
//!                   ┌─────────────┐                        ┌─────────────┐
//!                   │ CardVisuals │                        │   JobDeck   │
//!                   │ (observer)  │                        │  (advance)  │
//!                   └─────────────┘                        └─────────────┘
//! ```

pub mod app;
pub mod deck;
pub mod gesture;
pub mod input;
pub mod jobs;
pub mod time;
pub mod trace;

// Re-export commonly used types
pub use deck::JobDeck;
pub use gesture::engine::{SwipeEngine, SwipePhase};
pub use gesture::session::GestureSession;
pub use gesture::visuals::{CardVisualState, CardVisuals};
pub use gesture::{SwipeDecision, SwipeDirection};
pub use input::pointer::{PointerOffset, PointerPoint, PointerSource};
pub use jobs::Job;
pub use trace::GestureTrace;

/// Result type alias for the swipe engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the swipe engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Gesture error: {0}")]
    Gesture(String),

    #[error("Trace error: {0}")]
    Trace(String),

    #[error("Deck error: {0}")]
    Deck(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
