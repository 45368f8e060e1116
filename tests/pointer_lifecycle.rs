//! End-to-end pointer lifecycle against a headless app: registration,
//! per-frame placement, role switching, pooling, and deregistration.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_target_pointer::prelude::*;

// The default window is 1280x720 logical. With a 90 degree vertical fov
// the projection half-tangents are 16/9 horizontally and 1 vertically,
// the screen center is (640, 360) and the inset bounds are (576, 324).

fn setup_app() -> App {
    let mut app = App::new();
    app.add_plugins(TargetPointerPlugin);
    app.world_mut().spawn((Window::default(), PrimaryWindow));
    app.world_mut().spawn((
        PointerCamera,
        Projection::Perspective(PerspectiveProjection {
            fov: FRAC_PI_2,
            ..Default::default()
        }),
        GlobalTransform::IDENTITY,
    ));
    app
}

fn both_templates() -> PointerTarget {
    PointerTarget::new(vec![
        IndicatorTemplate::new(PointerRole::OnScreen, "marker"),
        IndicatorTemplate::new(PointerRole::OffScreen, "arrow"),
    ])
}

fn spawn_target(app: &mut App, target: PointerTarget, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((target, GlobalTransform::from_translation(position)))
        .id()
}

fn move_target(app: &mut App, entity: Entity, position: Vec3) {
    let mut transform = app.world_mut().get_mut::<GlobalTransform>(entity).unwrap();
    *transform = GlobalTransform::from_translation(position);
}

fn active_placements(app: &App) -> Vec<(Vec2, f32)> {
    app.world()
        .resource::<PointerPool>()
        .iter_active()
        .map(|(_, instance)| (instance.position, instance.angle))
        .collect()
}

fn instance_count(app: &App) -> usize {
    app.world().resource::<PointerPool>().instance_count()
}

#[test]
fn visible_target_gets_an_on_screen_marker() {
    let mut app = setup_app();
    let entity = spawn_target(&mut app, both_templates(), Vec3::new(0.0, 0.0, -5.0));
    app.update();

    let placements = active_placements(&app);
    assert_eq!(placements.len(), 1);
    let (position, _) = placements[0];
    assert!((position - Vec2::new(640.0, 360.0)).length() < 1e-2);

    let attached = app.world().get::<AttachedPointer>(entity).unwrap();
    assert!(attached.current().is_some());
}

#[test]
fn off_screen_target_is_clamped_to_the_inset_edge() {
    let mut app = setup_app();
    // x/depth = 2 exceeds the horizontal half-tangent of 16/9.
    spawn_target(&mut app, both_templates(), Vec3::new(4.0, 0.0, -2.0));
    app.update();

    let placements = active_placements(&app);
    assert_eq!(placements.len(), 1);
    let (position, angle) = placements[0];
    assert!((position - Vec2::new(1216.0, 360.0)).length() < 1e-2);
    assert!(angle.abs() < 1e-3);
}

#[test]
fn target_behind_the_camera_keeps_pointing_at_its_direction() {
    let mut app = setup_app();
    spawn_target(&mut app, both_templates(), Vec3::new(4.0, 0.0, 2.0));
    app.update();

    let placements = active_placements(&app);
    assert_eq!(placements.len(), 1);
    let (position, angle) = placements[0];
    // The raw projection lands left of center; the mirrored pointer sits
    // on the right edge where the target actually is.
    assert!((position - Vec2::new(1216.0, 360.0)).length() < 1e-1);
    assert!(angle.abs() < 1e-3);
}

#[test]
fn role_switch_swaps_instances_and_reuses_them() {
    let mut app = setup_app();
    let entity = spawn_target(&mut app, both_templates(), Vec3::new(0.0, 0.0, -5.0));
    app.update();

    assert_eq!(instance_count(&app), 1);
    let first = app.world().get::<AttachedPointer>(entity).unwrap().current();
    assert!(first.is_some());

    // Leaving the viewport releases the marker and acquires an arrow.
    move_target(&mut app, entity, Vec3::new(4.0, 0.0, -2.0));
    app.update();
    assert_eq!(instance_count(&app), 2);
    assert_eq!(active_placements(&app).len(), 1);
    let second = app.world().get::<AttachedPointer>(entity).unwrap().current();
    assert_ne!(first, second);

    // Coming back reuses the pooled marker instead of growing the pool.
    move_target(&mut app, entity, Vec3::new(0.0, 0.0, -5.0));
    app.update();
    assert_eq!(instance_count(&app), 2);
    assert_eq!(
        app.world().get::<AttachedPointer>(entity).unwrap().current(),
        first
    );
}

#[test]
fn missing_template_for_the_current_state_detaches() {
    let mut app = setup_app();
    let on_screen_only =
        PointerTarget::new(vec![IndicatorTemplate::new(PointerRole::OnScreen, "marker")]);
    let entity = spawn_target(&mut app, on_screen_only, Vec3::new(0.0, 0.0, -5.0));
    app.update();
    assert_eq!(active_placements(&app).len(), 1);

    move_target(&mut app, entity, Vec3::new(4.0, 0.0, -2.0));
    app.update();
    assert!(active_placements(&app).is_empty());
    assert!(
        app.world()
            .get::<AttachedPointer>(entity)
            .unwrap()
            .current()
            .is_none()
    );
    // The released instance stays pooled for later reuse.
    assert_eq!(instance_count(&app), 1);
}

#[test]
fn despawn_releases_the_pooled_instance_for_other_targets() {
    let mut app = setup_app();
    let off_screen_only =
        || PointerTarget::new(vec![IndicatorTemplate::new(PointerRole::OffScreen, "arrow")]);
    let first = spawn_target(&mut app, off_screen_only(), Vec3::new(4.0, 0.0, -2.0));
    spawn_target(&mut app, off_screen_only(), Vec3::new(-4.0, 0.0, -2.0));
    app.update();
    assert_eq!(instance_count(&app), 2);
    assert_eq!(active_placements(&app).len(), 2);

    // Deregistration releases the instance synchronously.
    app.world_mut().despawn(first);
    assert_eq!(active_placements(&app).len(), 1);

    // A newcomer sharing the key reuses the freed instance.
    spawn_target(&mut app, off_screen_only(), Vec3::new(0.0, 4.0, -2.0));
    app.update();
    assert_eq!(instance_count(&app), 2);
    assert_eq!(active_placements(&app).len(), 2);
}

#[test]
fn every_target_is_updated_even_after_a_non_matching_one() {
    let mut app = setup_app();
    // First registered target has no template for its off-screen state;
    // the second must still get its marker the same frame.
    let on_screen_only =
        PointerTarget::new(vec![IndicatorTemplate::new(PointerRole::OnScreen, "marker")]);
    spawn_target(&mut app, on_screen_only, Vec3::new(4.0, 0.0, -2.0));
    spawn_target(&mut app, both_templates(), Vec3::new(0.0, 0.0, -5.0));
    app.update();

    let placements = active_placements(&app);
    assert_eq!(placements.len(), 1);
    assert!((placements[0].0 - Vec2::new(640.0, 360.0)).length() < 1e-2);
}

#[test]
fn one_indicator_per_target_every_frame() {
    let mut app = setup_app();
    let entity = spawn_target(&mut app, both_templates(), Vec3::new(0.0, 0.0, -5.0));
    for position in [
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::new(4.0, 0.0, -2.0),
        Vec3::new(0.0, 4.0, -2.0),
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, -5.0),
    ] {
        move_target(&mut app, entity, position);
        app.update();
        assert_eq!(active_placements(&app).len(), 1);
    }
}
