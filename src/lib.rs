// bevy_target_pointer
// Screen-space indicators for world-space targets:
// - On-screen markers placed at the target's projected position
// - Off-screen arrows clamped to the viewport edge, rotated toward the target
// - Grow-only instance pooling with exactly one active indicator per target

use bevy::prelude::*;

mod components;
mod drawer;
mod edge;
mod pool;
pub mod prelude;
mod projection;
mod viewport;
#[cfg(feature = "visualization")]
mod visualization;

// Public API - Components
pub use components::AttachedPointer;
pub use components::IndicatorTemplate;
pub use components::PointerCamera;
pub use components::PointerRole;
pub use components::PointerTarget;

// Public API - Pool types (read by rendering layers)
pub use pool::PointerHandle;
pub use pool::PointerInstance;
pub use pool::PointerPool;
pub use pool::PoolKey;

// Public API - Placement math
pub use edge::EdgePlacement;
pub use edge::clamp_to_edge;
pub use projection::is_on_screen;
pub use projection::world_to_screen;
pub use viewport::ViewportState;

// Public API - Configuration resources
pub use viewport::PointerConfig;

// Public API - Registry (for querying)
pub use drawer::PointerRegistry;

// Public API - Visualization (for enabling/disabling)
#[cfg(feature = "visualization")]
pub use visualization::PointerGizmo;
#[cfg(feature = "visualization")]
pub use visualization::PointerVisualizationConfig;
#[cfg(feature = "visualization")]
pub use visualization::PointerVisualizationPlugin;

// Internal - used by plugin, not for external use
use bevy::transform::TransformSystems;
use drawer::{draw_pointers, on_target_added, on_target_removed};

/// Plugin that adds pointer tracking and per-frame placement
pub struct TargetPointerPlugin;

impl Plugin for TargetPointerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Register observers for target lifecycle events
            .add_observer(on_target_added)
            .add_observer(on_target_removed)
            // Place pointers after the frame's transforms are final
            .add_systems(
                PostUpdate,
                draw_pointers.after(TransformSystems::Propagate),
            )
            // Initialize resources
            .init_resource::<PointerConfig>()
            .init_resource::<PointerRegistry>()
            .init_resource::<PointerPool>();
    }
}
