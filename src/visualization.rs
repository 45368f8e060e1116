//! Debug overlay for pointer placement.
//!
//! Draws a gizmo circle at each active on-screen pointer and an oriented
//! gizmo arrow at each off-screen one, using Bevy's GizmoConfigGroup
//! pattern. Pointer positions are mapped into the centered coordinates of
//! a default 2D camera, so the overlay lines up when a standard `Camera2d`
//! views the scene. Toggle via
//! `GizmoConfigStore::config_mut::<PointerGizmo>().enabled`.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::PointerRole;
use crate::drawer::draw_pointers;
use crate::pool::PointerPool;

/// Gizmo config group for the pointer overlay.
/// Toggle via `GizmoConfigStore::config_mut::<PointerGizmo>().enabled`
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct PointerGizmo {}

/// Colors and sizes for the pointer overlay
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct PointerVisualizationConfig {
    pub on_screen_color:  Color,
    pub off_screen_color: Color,
    pub marker_radius:    f32,
    pub arrow_length:     f32,
    pub line_width:       f32,
}

impl Default for PointerVisualizationConfig {
    fn default() -> Self {
        Self {
            on_screen_color:  Color::srgb(0.0, 1.0, 0.0),
            off_screen_color: Color::srgb(1.0, 0.8, 0.0),
            marker_radius:    12.0,
            arrow_length:     28.0,
            line_width:       2.0,
        }
    }
}

/// Plugin that adds the pointer debug overlay
pub struct PointerVisualizationPlugin;

impl Plugin for PointerVisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<PointerGizmo>()
            .init_resource::<PointerVisualizationConfig>()
            .add_systems(Startup, init_pointer_gizmo)
            .add_systems(PostUpdate, draw_pointer_gizmos.after(draw_pointers));
    }
}

/// Initialize the pointer gizmo config (disabled by default)
fn init_pointer_gizmo(
    mut config_store: ResMut<GizmoConfigStore>,
    viz_config: Res<PointerVisualizationConfig>,
) {
    let (config, _) = config_store.config_mut::<PointerGizmo>();
    config.enabled = false;
    config.line.width = viz_config.line_width;
}

/// System that draws the active pointers
fn draw_pointer_gizmos(
    mut gizmos: Gizmos<PointerGizmo>,
    pool: Res<PointerPool>,
    viz_config: Res<PointerVisualizationConfig>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let half = Vec2::new(window.width(), window.height()) / 2.0;

    for (handle, instance) in pool.iter_active() {
        // Pointer positions have a bottom-left origin; a default 2D camera
        // is centered on the viewport.
        let centered = instance.position - half;
        match pool.key(handle).map(|key| key.role) {
            Some(PointerRole::OffScreen) => {
                let tip = centered + Vec2::from_angle(instance.angle) * viz_config.arrow_length;
                gizmos.arrow_2d(centered, tip, viz_config.off_screen_color);
            },
            _ => {
                gizmos.circle_2d(centered, viz_config.marker_radius, viz_config.on_screen_color);
            },
        }
    }
}
