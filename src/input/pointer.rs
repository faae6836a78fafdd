//! Pointer Abstraction
//!
//! Mouse and touch events arrive with duck-typed coordinate shapes. This
//! module collapses them into [`PointerPoint`] plus a [`PointerSource`] tag,
//! so the gesture state machine handles both through one typed interface.

use serde::{Deserialize, Serialize};

/// A pointer coordinate in client space (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

impl PointerPoint {
    /// Create a point from client coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to this point
    pub fn offset_from(&self, origin: PointerPoint) -> PointerOffset {
        PointerOffset {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Displacement between two pointer points (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PointerOffset {
    /// Zero displacement (card at rest)
    pub const ZERO: PointerOffset = PointerOffset { dx: 0.0, dy: 0.0 };

    /// True when the vertical component dominates the horizontal one.
    ///
    /// Used on the first touch move sample to decide whether the gesture is
    /// really a page-scroll intent rather than a horizontal swipe.
    pub fn is_mostly_vertical(&self) -> bool {
        self.dy.abs() > self.dx.abs()
    }
}

/// Which input device produced a pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    /// Desktop mouse / trackpad pointer
    Mouse,
    /// Touchscreen contact
    Touch,
}

impl PointerSource {
    /// Touch gestures yield to vertical page scrolling; mouse drags never do.
    pub fn yields_to_vertical_scroll(&self) -> bool {
        matches!(self, PointerSource::Touch)
    }
}

/// Mouse-shaped platform event (`clientX` / `clientY`)
#[derive(Debug, Clone, Copy)]
pub struct MouseInput {
    pub client_x: f64,
    pub client_y: f64,
}

/// First contact of a touch-shaped platform event (`touches[0]`)
#[derive(Debug, Clone, Copy)]
pub struct TouchInput {
    pub client_x: f64,
    pub client_y: f64,
}

impl From<MouseInput> for PointerPoint {
    fn from(event: MouseInput) -> Self {
        PointerPoint::new(event.client_x, event.client_y)
    }
}

impl From<TouchInput> for PointerPoint {
    fn from(event: TouchInput) -> Self {
        PointerPoint::new(event.client_x, event.client_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from() {
        let origin = PointerPoint::new(100.0, 100.0);
        let current = PointerPoint::new(250.0, 80.0);
        let offset = current.offset_from(origin);
        assert_eq!(offset.dx, 150.0);
        assert_eq!(offset.dy, -20.0);
    }

    #[test]
    fn test_zero_offset() {
        let p = PointerPoint::new(42.0, 7.0);
        assert_eq!(p.offset_from(p), PointerOffset::ZERO);
    }

    #[test]
    fn test_mostly_vertical() {
        assert!(PointerOffset { dx: 10.0, dy: 60.0 }.is_mostly_vertical());
        assert!(PointerOffset { dx: -5.0, dy: -20.0 }.is_mostly_vertical());
        assert!(!PointerOffset { dx: 60.0, dy: 10.0 }.is_mostly_vertical());
    }

    #[test]
    fn test_equal_components_are_not_vertical() {
        // A perfect diagonal stays a horizontal swipe candidate.
        assert!(!PointerOffset { dx: 30.0, dy: 30.0 }.is_mostly_vertical());
    }

    #[test]
    fn test_source_scroll_yielding() {
        assert!(PointerSource::Touch.yields_to_vertical_scroll());
        assert!(!PointerSource::Mouse.yields_to_vertical_scroll());
    }

    #[test]
    fn test_mouse_adapter() {
        let event = MouseInput {
            client_x: 12.0,
            client_y: 34.0,
        };
        let point: PointerPoint = event.into();
        assert_eq!(point, PointerPoint::new(12.0, 34.0));
    }

    #[test]
    fn test_touch_adapter() {
        let event = TouchInput {
            client_x: 56.0,
            client_y: 78.0,
        };
        let point: PointerPoint = event.into();
        assert_eq!(point, PointerPoint::new(56.0, 78.0));
    }

    #[test]
    fn test_point_serialization_roundtrip() {
        let point = PointerPoint::new(1.5, -2.5);
        let json = serde_json::to_string(&point).unwrap();
        let back: PointerPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }
}
