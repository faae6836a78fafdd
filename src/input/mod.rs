//! Typed pointer input
//!
//! Normalizes the overlapping coordinate shapes of mouse and touch events
//! into a single abstraction the gesture engine is written against.

pub mod pointer;

pub use pointer::{MouseInput, PointerOffset, PointerPoint, PointerSource, TouchInput};
