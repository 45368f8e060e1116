//! Per-frame pointer placement and target registration.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::AttachedPointer;
use crate::components::IndicatorTemplate;
use crate::components::PointerCamera;
use crate::components::PointerRole;
use crate::components::PointerTarget;
use crate::edge::clamp_to_edge;
use crate::pool::PointerHandle;
use crate::pool::PointerPool;
use crate::projection::is_on_screen;
use crate::projection::world_to_screen;
use crate::viewport::PointerConfig;
use crate::viewport::ViewportState;

/// Targets currently tracked by the drawer, in registration order.
#[derive(Resource, Debug, Default)]
pub struct PointerRegistry {
    targets: Vec<Entity>,
}

impl PointerRegistry {
    fn insert(&mut self, entity: Entity) {
        if !self.targets.contains(&entity) {
            self.targets.push(entity);
        }
    }

    fn remove(&mut self, entity: Entity) {
        self.targets.retain(|target| *target != entity);
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.targets.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Observer for `PointerTarget` insertion - registers the target and gives
/// it an empty attachment slot.
pub fn on_target_added(
    add: On<Add, PointerTarget>,
    mut commands: Commands,
    mut registry: ResMut<PointerRegistry>,
) {
    let entity = add.entity;

    registry.insert(entity);
    commands.entity(entity).insert(AttachedPointer::default());
    debug!("pointer target registered: {entity:?}");
}

/// Observer for `PointerTarget` removal - releases the attached instance
/// before the target leaves the registry, so no pooled instance is left
/// active without an owner.
pub fn on_target_removed(
    remove: On<Remove, PointerTarget>,
    mut registry: ResMut<PointerRegistry>,
    mut pool: ResMut<PointerPool>,
    mut attachment_query: Query<&mut AttachedPointer>,
) {
    let entity = remove.entity;

    if let Ok(mut attached) = attachment_query.get_mut(entity) {
        attached.detach(&mut pool);
    }
    registry.remove(entity);
    debug!("pointer target deregistered: {entity:?}");
}

/// System that places one indicator per registered target every frame.
///
/// Runs in `PostUpdate` after transform propagation so projections see the
/// frame's final target positions. A target whose current visibility state
/// has no matching template is detached; the pass always continues to the
/// remaining targets.
pub fn draw_pointers(
    config: Res<PointerConfig>,
    registry: Res<PointerRegistry>,
    mut pool: ResMut<PointerPool>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&GlobalTransform, &Projection), With<PointerCamera>>,
    mut target_query: Query<(&GlobalTransform, &PointerTarget, &mut AttachedPointer)>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((cam_global, projection)) = camera_query.single() else {
        return;
    };
    let Projection::Perspective(perspective) = projection else {
        return;
    };

    // Rebuilt every frame so window resizes are picked up immediately.
    let viewport =
        ViewportState::new(Vec2::new(window.width(), window.height()), config.edge_inset);

    for entity in registry.iter() {
        let Ok((transform, target, mut attached)) = target_query.get_mut(entity) else {
            continue;
        };

        let screen_position =
            world_to_screen(transform.translation(), cam_global, perspective, viewport.size);

        if is_on_screen(screen_position, viewport.size) {
            if let Some(template) = target.template_of(PointerRole::OnScreen) {
                let handle = reuse_or_acquire(&attached, template, &mut pool);
                if let Some(instance) = pool.get_mut(handle) {
                    instance.position = screen_position.truncate();
                }
                attached.attach(handle, &mut pool);
                continue;
            }
        } else if let Some(template) = target.template_of(PointerRole::OffScreen) {
            let placement = clamp_to_edge(screen_position, viewport);
            if placement.position.is_finite() && placement.angle.is_finite() {
                let handle = reuse_or_acquire(&attached, template, &mut pool);
                if let Some(instance) = pool.get_mut(handle) {
                    instance.position = placement.position;
                    instance.angle = placement.angle;
                }
                attached.attach(handle, &mut pool);
                continue;
            }
        }

        attached.detach(&mut pool);
    }
}

/// Keeps the target's current instance when its role already matches;
/// otherwise asks the pool for an instance from the template's bucket.
fn reuse_or_acquire(
    attached: &AttachedPointer,
    template: &IndicatorTemplate,
    pool: &mut PointerPool,
) -> PointerHandle {
    match attached.current() {
        Some(handle) if pool.key(handle).is_some_and(|key| key.role == template.role) => handle,
        _ => pool.acquire(template),
    }
}
