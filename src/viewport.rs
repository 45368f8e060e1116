//! Per-frame viewport measurements used to place pointers.

use bevy::prelude::*;

/// Configuration for pointer placement behavior
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct PointerConfig {
    /// Fraction of the half-viewport at which off-screen pointers are
    /// clamped (0.9 keeps them inset 10% from the true edge)
    pub edge_inset: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { edge_inset: 0.9 }
    }
}

/// Screen measurements for one frame: viewport size, its center, and the
/// inset bounds off-screen pointers are clamped to.
///
/// Rebuilt from the primary window every frame so a resize is picked up
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub size:   Vec2,
    pub center: Vec2,
    pub bounds: Vec2,
}

impl ViewportState {
    pub fn new(size: Vec2, edge_inset: f32) -> Self {
        let center = size / 2.0;
        Self {
            size,
            center,
            bounds: center * edge_inset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_bounds_follow_viewport_size() {
        let viewport = ViewportState::new(Vec2::new(1920.0, 1080.0), 0.9);
        assert_eq!(viewport.center, Vec2::new(960.0, 540.0));
        assert_eq!(viewport.bounds, Vec2::new(864.0, 486.0));
    }

    #[test]
    fn default_inset_keeps_a_ten_percent_margin() {
        let config = PointerConfig::default();
        let viewport = ViewportState::new(Vec2::new(800.0, 600.0), config.edge_inset);
        assert_eq!(viewport.bounds, Vec2::new(360.0, 270.0));
    }
}
