//! Clamping of off-viewport projections onto the screen edge.

use bevy::prelude::*;

use crate::viewport::ViewportState;

/// Where an off-screen pointer ends up: a position on the inset bounds
/// rectangle and the angle (radians, counter-clockwise from +x) from the
/// screen center toward the target's projected direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePlacement {
    pub position: Vec2,
    pub angle:    f32,
}

impl EdgePlacement {
    /// The angle as a rotation around the screen normal, ready to orient
    /// an arrow indicator.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.angle)
    }
}

/// Clamps an off-viewport screen position onto the inset bounds rectangle
/// and computes the pointing angle.
///
/// The position is first re-centered; if the target sits behind the camera
/// (negative depth) it is mirrored so the pointer keeps aiming at the
/// direction the target actually is instead of flipping to the opposite
/// edge. The angle is taken from the unclamped direction and is
/// independent of where on the rectangle the position lands.
pub fn clamp_to_edge(screen_position: Vec3, viewport: ViewportState) -> EdgePlacement {
    let bounds = viewport.bounds;

    let mut p = screen_position.truncate() - viewport.center;
    if screen_position.z < 0.0 {
        p = -p;
    }

    let angle = p.y.atan2(p.x);

    if p.x == 0.0 && p.y != 0.0 {
        // Straight up or down. tan(±90°) has no usable slope; go directly
        // to the vertical bound.
        p = Vec2::new(0.0, bounds.y.copysign(p.y));
    } else {
        let slope = angle.tan();

        // Clamp onto the left or right bound along the direction's slope.
        p = if p.x > 0.0 {
            Vec2::new(bounds.x, bounds.x * slope)
        } else {
            Vec2::new(-bounds.x, -bounds.x * slope)
        };

        // The horizontal clamp overshoots vertically for steep directions;
        // re-clamp onto the top or bottom bound.
        if p.y > bounds.y {
            p = Vec2::new(bounds.y / slope, bounds.y);
        } else if p.y < -bounds.y {
            p = Vec2::new(-bounds.y / slope, -bounds.y);
        }
    }

    EdgePlacement {
        position: p + viewport.center,
        angle,
    }
}
