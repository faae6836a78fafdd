//! Derived Card Visuals
//!
//! Visual parameters are derived from gesture state, never stored: the
//! rendering layer subscribes to the engine and redraws from the latest
//! [`CardVisuals`] snapshot it receives.

use crate::app::config::VisualConfig;
use crate::gesture::SwipeDirection;
use crate::input::pointer::PointerOffset;

/// Visual state of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisualState {
    /// At rest, no gesture in progress
    Rest,
    /// Following the pointer
    Dragging,
    /// Playing the exit animation; terminal for this card instance
    Exiting,
}

/// Per-frame visual parameters for one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisuals {
    /// Current visual state
    pub state: CardVisualState,
    /// Horizontal translation (pixels)
    pub translate_x: f64,
    /// Vertical translation (pixels)
    pub translate_y: f64,
    /// Rotation (degrees, positive clockwise)
    pub rotation_deg: f64,
    /// Opacity of the "apply" overlay, in [0, 1]
    pub apply_opacity: f64,
    /// Opacity of the "skip" overlay, in [0, 1]
    pub skip_opacity: f64,
    /// Opacity of the card itself, in [0, 1]
    pub card_opacity: f64,
}

impl CardVisuals {
    /// A card at rest
    pub fn rest() -> Self {
        Self {
            state: CardVisualState::Rest,
            translate_x: 0.0,
            translate_y: 0.0,
            rotation_deg: 0.0,
            apply_opacity: 0.0,
            skip_opacity: 0.0,
            card_opacity: 1.0,
        }
    }

    /// Visuals for a card being dragged by `offset`
    pub fn dragging(offset: PointerOffset, config: &VisualConfig) -> Self {
        let overlay = overlay_opacity(offset.dx, config);
        Self {
            state: CardVisualState::Dragging,
            translate_x: offset.dx,
            translate_y: offset.dy,
            rotation_deg: offset.dx * config.rotation_deg_per_px,
            apply_opacity: if offset.dx > config.overlay_reveal_px {
                overlay
            } else {
                0.0
            },
            skip_opacity: if offset.dx < -config.overlay_reveal_px {
                overlay
            } else {
                0.0
            },
            card_opacity: 1.0,
        }
    }

    /// Target visuals of the exit animation in the committed direction
    pub fn exiting(direction: SwipeDirection, config: &VisualConfig) -> Self {
        let sign = match direction {
            SwipeDirection::Right => 1.0,
            SwipeDirection::Left => -1.0,
        };
        Self {
            state: CardVisualState::Exiting,
            translate_x: sign * config.exit_travel_px,
            translate_y: 0.0,
            rotation_deg: sign * config.exit_rotation_deg,
            apply_opacity: 0.0,
            skip_opacity: 0.0,
            card_opacity: 0.0,
        }
    }
}

/// Overlay opacity ramp: 0 at the reveal distance, 1 at the full distance.
fn overlay_opacity(offset_x: f64, config: &VisualConfig) -> f64 {
    (offset_x.abs() / config.overlay_full_px).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> VisualConfig {
        VisualConfig::default()
    }

    #[test]
    fn test_rest_visuals() {
        let visuals = CardVisuals::rest();
        assert_eq!(visuals.state, CardVisualState::Rest);
        assert_eq!(visuals.translate_x, 0.0);
        assert_eq!(visuals.rotation_deg, 0.0);
        assert_eq!(visuals.apply_opacity, 0.0);
        assert_eq!(visuals.skip_opacity, 0.0);
        assert_eq!(visuals.card_opacity, 1.0);
    }

    #[test]
    fn test_rotation_is_proportional_to_horizontal_offset() {
        let offset = PointerOffset { dx: 80.0, dy: 5.0 };
        let visuals = CardVisuals::dragging(offset, &config());
        assert!((visuals.rotation_deg - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlay_hidden_below_reveal_distance() {
        let offset = PointerOffset { dx: 40.0, dy: 0.0 };
        let visuals = CardVisuals::dragging(offset, &config());
        assert_eq!(visuals.apply_opacity, 0.0);
        assert_eq!(visuals.skip_opacity, 0.0);
    }

    #[test]
    fn test_apply_overlay_scales_past_reveal() {
        let offset = PointerOffset { dx: 75.0, dy: 0.0 };
        let visuals = CardVisuals::dragging(offset, &config());
        assert!((visuals.apply_opacity - 0.75).abs() < 1e-9);
        assert_eq!(visuals.skip_opacity, 0.0);
    }

    #[test]
    fn test_skip_overlay_is_symmetric() {
        let offset = PointerOffset { dx: -75.0, dy: 0.0 };
        let visuals = CardVisuals::dragging(offset, &config());
        assert!((visuals.skip_opacity - 0.75).abs() < 1e-9);
        assert_eq!(visuals.apply_opacity, 0.0);
    }

    #[test]
    fn test_overlay_opacity_clamps_at_one() {
        let offset = PointerOffset { dx: 250.0, dy: 0.0 };
        let visuals = CardVisuals::dragging(offset, &config());
        assert_eq!(visuals.apply_opacity, 1.0);
    }

    #[test]
    fn test_overlay_hidden_at_exact_reveal_distance() {
        // The reveal test is strictly greater-than.
        let offset = PointerOffset { dx: 50.0, dy: 0.0 };
        let visuals = CardVisuals::dragging(offset, &config());
        assert_eq!(visuals.apply_opacity, 0.0);
    }

    #[test]
    fn test_dragging_follows_both_axes() {
        let offset = PointerOffset { dx: 30.0, dy: -12.0 };
        let visuals = CardVisuals::dragging(offset, &config());
        assert_eq!(visuals.translate_x, 30.0);
        assert_eq!(visuals.translate_y, -12.0);
    }

    #[test]
    fn test_exiting_right() {
        let visuals = CardVisuals::exiting(SwipeDirection::Right, &config());
        assert_eq!(visuals.state, CardVisualState::Exiting);
        assert_eq!(visuals.translate_x, 400.0);
        assert_eq!(visuals.rotation_deg, 20.0);
        assert_eq!(visuals.card_opacity, 0.0);
    }

    #[test]
    fn test_exiting_left() {
        let visuals = CardVisuals::exiting(SwipeDirection::Left, &config());
        assert_eq!(visuals.translate_x, -400.0);
        assert_eq!(visuals.rotation_deg, -20.0);
    }
}
