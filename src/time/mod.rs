//! Exit timing
//!
//! The only asynchronous boundary in the engine: the fixed delay between a
//! committed swipe's visual exit and its decision callback.

pub mod exit_timer;

pub use exit_timer::ExitTimer;
