//! World-to-screen projection and visibility classification.

use bevy::prelude::*;

/// Minimum depth magnitude used for the perspective divide. A target
/// crossing the camera plane has a view-space depth of exactly zero;
/// dividing by it would leak non-finite coordinates into placement.
const DEPTH_EPSILON: f32 = 1e-4;

/// Projects a world position to screen space through a perspective camera.
///
/// Returns screen x/y in logical pixels with the origin at the bottom-left
/// corner of the viewport, and z = signed view-space depth (negative when
/// the target is behind the camera). Behind-camera positions come out
/// mirrored through the screen center, which is what `clamp_to_edge`
/// expects.
pub fn world_to_screen(
    world_position: Vec3,
    cam_global: &GlobalTransform,
    perspective: &PerspectiveProjection,
    viewport_size: Vec2,
) -> Vec3 {
    let rot = cam_global.rotation();
    let relative = world_position - cam_global.translation();

    let depth = relative.dot(rot * Vec3::NEG_Z);
    let x = relative.dot(rot * Vec3::X);
    let y = relative.dot(rot * Vec3::Y);

    let half_tan_vfov = (perspective.fov * 0.5).tan();
    let half_tan_hfov = half_tan_vfov * (viewport_size.x / viewport_size.y);

    let divisor = if depth.abs() < DEPTH_EPSILON {
        DEPTH_EPSILON.copysign(depth)
    } else {
        depth
    };

    let half = viewport_size / 2.0;
    Vec3::new(
        (x / (divisor * half_tan_hfov)).mul_add(half.x, half.x),
        (y / (divisor * half_tan_vfov)).mul_add(half.y, half.y),
        depth,
    )
}

/// Returns true when the projected position lands on the viewport.
/// Bounds are inclusive; a target exactly on the edge still counts as
/// visible. Anything at or behind the camera plane does not.
pub fn is_on_screen(screen_position: Vec3, viewport_size: Vec2) -> bool {
    screen_position.z > 0.0
        && screen_position.x >= 0.0
        && screen_position.x <= viewport_size.x
        && screen_position.y >= 0.0
        && screen_position.y <= viewport_size.y
}
