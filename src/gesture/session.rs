//! Gesture Session Lifecycle
//!
//! A [`GestureSession`] is the bounded lifetime of one drag interaction, from
//! pointer-down to pointer-up or abort. The engine owns at most one session
//! at a time; dropping the session is what closes it, so its offset can never
//! outlive the interaction it belongs to.

use crate::input::pointer::{PointerOffset, PointerPoint, PointerSource};

/// One drag interaction in progress
#[derive(Debug, Clone)]
pub struct GestureSession {
    /// Pointer coordinate captured at gesture start
    origin: PointerPoint,
    /// Current displacement from the origin
    offset: PointerOffset,
    /// Input device that opened the session
    source: PointerSource,
    /// Whether any move sample has been tracked yet
    saw_move: bool,
}

impl GestureSession {
    /// Open a session at the given origin
    pub fn open(origin: PointerPoint, source: PointerSource) -> Self {
        Self {
            origin,
            offset: PointerOffset::ZERO,
            source,
            saw_move: false,
        }
    }

    /// The coordinate captured at gesture start
    pub fn origin(&self) -> PointerPoint {
        self.origin
    }

    /// Current displacement from the origin
    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    /// Input device that opened the session
    pub fn source(&self) -> PointerSource {
        self.source
    }

    /// True before the first move sample has been tracked.
    ///
    /// The touch scroll-intent test only applies to the first sample.
    pub fn is_first_move(&self) -> bool {
        !self.saw_move
    }

    /// Track a move sample, returning the updated displacement
    pub fn track(&mut self, point: PointerPoint) -> PointerOffset {
        self.offset = point.offset_from(self.origin);
        self.saw_move = true;
        self.offset
    }

    /// Displacement a move sample would produce, without tracking it
    pub fn peek(&self, point: PointerPoint) -> PointerOffset {
        point.offset_from(self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_session_is_at_rest() {
        let session = GestureSession::open(PointerPoint::new(100.0, 100.0), PointerSource::Mouse);
        assert_eq!(session.offset(), PointerOffset::ZERO);
        assert!(session.is_first_move());
    }

    #[test]
    fn test_track_updates_offset() {
        let mut session =
            GestureSession::open(PointerPoint::new(100.0, 100.0), PointerSource::Mouse);
        let offset = session.track(PointerPoint::new(250.0, 110.0));
        assert_eq!(offset.dx, 150.0);
        assert_eq!(offset.dy, 10.0);
        assert_eq!(session.offset(), offset);
        assert!(!session.is_first_move());
    }

    #[test]
    fn test_peek_does_not_track() {
        let session = GestureSession::open(PointerPoint::new(0.0, 0.0), PointerSource::Touch);
        let peeked = session.peek(PointerPoint::new(10.0, 60.0));
        assert_eq!(peeked.dy, 60.0);
        assert_eq!(session.offset(), PointerOffset::ZERO);
        assert!(session.is_first_move());
    }

    #[test]
    fn test_offset_is_relative_to_origin_not_last_sample() {
        let mut session = GestureSession::open(PointerPoint::new(50.0, 50.0), PointerSource::Mouse);
        session.track(PointerPoint::new(100.0, 50.0));
        let offset = session.track(PointerPoint::new(80.0, 50.0));
        assert_eq!(offset.dx, 30.0);
    }

    #[test]
    fn test_source_is_preserved() {
        let session = GestureSession::open(PointerPoint::new(0.0, 0.0), PointerSource::Touch);
        assert_eq!(session.source(), PointerSource::Touch);
    }
}
