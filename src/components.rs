//! Target-side components: which indicators a target can use and which
//! pooled instance currently represents it.

use bevy::prelude::*;

use crate::pool::PointerHandle;
use crate::pool::PointerPool;

/// Whether an indicator marks a target inside the viewport or points at
/// one outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PointerRole {
    OnScreen,
    OffScreen,
}

/// Immutable descriptor for one kind of indicator a target can display.
/// Targets referencing templates with the same role and key share pooled
/// instances.
#[derive(Debug, Clone, PartialEq, Eq, Reflect)]
pub struct IndicatorTemplate {
    pub role: PointerRole,
    pub key:  String,
}

impl IndicatorTemplate {
    pub fn new(role: PointerRole, key: impl Into<String>) -> Self {
        Self {
            role,
            key: key.into(),
        }
    }
}

/// Marks an entity as a pointer target and lists the indicators available
/// to it. Adding the component registers the target with the drawer;
/// removing it (or despawning the entity) releases any attached indicator.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct PointerTarget {
    templates: Vec<IndicatorTemplate>,
}

impl PointerTarget {
    pub fn new(templates: Vec<IndicatorTemplate>) -> Self {
        Self { templates }
    }

    /// First template with the given role, in declaration order.
    pub fn template_of(&self, role: PointerRole) -> Option<&IndicatorTemplate> {
        self.templates.iter().find(|template| template.role == role)
    }
}

/// Marks the camera whose projection drives pointer placement.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct PointerCamera;

/// The pooled instance currently representing a target, if any.
///
/// Inserted automatically alongside `PointerTarget`. At most one instance
/// is attached per target, and an attached instance is always the active
/// one; both invariants are maintained here and nowhere else.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AttachedPointer(Option<PointerHandle>);

impl AttachedPointer {
    pub const fn current(&self) -> Option<PointerHandle> {
        self.0
    }

    /// Makes `handle` the target's attached instance. No-op when it
    /// already is; otherwise the previous instance (if any) is deactivated
    /// and the new one activated.
    pub fn attach(&mut self, handle: PointerHandle, pool: &mut PointerPool) {
        if self.0 == Some(handle) {
            return;
        }
        if let Some(previous) = self.0 {
            pool.set_active(previous, false);
        }
        self.0 = Some(handle);
        pool.set_active(handle, true);
    }

    /// Deactivates and releases the attached instance, if any.
    pub fn detach(&mut self, pool: &mut PointerPool) {
        let Some(current) = self.0.take() else {
            return;
        };
        pool.set_active(current, false);
    }
}
