//! Convenient re-exports for common types and traits

pub use crate::TargetPointerPlugin;
pub use crate::components::AttachedPointer;
pub use crate::components::IndicatorTemplate;
pub use crate::components::PointerCamera;
pub use crate::components::PointerRole;
pub use crate::components::PointerTarget;
pub use crate::edge::EdgePlacement;
pub use crate::pool::PointerHandle;
pub use crate::pool::PointerInstance;
pub use crate::pool::PointerPool;
pub use crate::viewport::PointerConfig;
pub use crate::viewport::ViewportState;
#[cfg(feature = "visualization")]
pub use crate::visualization::PointerVisualizationPlugin;
