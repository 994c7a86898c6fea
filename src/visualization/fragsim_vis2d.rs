use std::collections::HashMap;

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyId, NVec2};

/// Component tagging each circle with the body it draws
#[derive(Component)]
struct BodyTag(pub BodyId);

/// Unit circle shared by every body, scaled by radius
#[derive(Resource)]
struct CircleMesh(Handle<Mesh>);

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.registry.len());

    let resolution = (scenario.frame.width as f32, scenario.frame.height as f32);
    let tick_hz = scenario.parameters.tick_hz;

    App::new()
        .insert_resource(scenario)
        .insert_resource(Time::<Fixed>::from_hz(tick_hz))
        .add_plugins(
            DefaultPlugins
                .build()
                // env_logger already owns the global logger
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "fragsim".into(),
                        resolution: resolution.into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .add_systems(Startup, setup_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (drag_input_system, sync_bodies_system, title_system))
        .run();
}

fn setup_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.spawn(Camera2dBundle::default());
    commands.insert_resource(CircleMesh(meshes.add(Circle::new(1.0))));
}

/// Scene space has its origin at the top-left corner with y pointing down
fn to_world(x: NVec2, width: f64, height: f64) -> Vec3 {
    Vec3::new((x.x - width / 2.0) as f32, (height / 2.0 - x.y) as f32, 0.0)
}

fn physics_step_system(mut scenario: ResMut<Scenario>, windows: Query<&Window, With<PrimaryWindow>>) {
    // the frame follows the window if it was resized
    if let Ok(window) = windows.get_single() {
        scenario.frame.width = window.width() as f64;
        scenario.frame.height = window.height() as f64;
    }

    let report = scenario.step();
    if let Some(seed) = report.exploded {
        log::debug!("tick {}: settled, fragmented body {}", scenario.registry.tick, seed.0);
    }
}

fn drag_input_system(
    mut scenario: ResMut<Scenario>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    // read through `Res` deref first so an idle mouse leaves the scenario unchanged
    let dragging = scenario.drag.is_dragging();

    if buttons.just_released(MouseButton::Left) {
        if dragging {
            scenario.drag.release();
        }
        return;
    }

    let pressing = buttons.just_pressed(MouseButton::Left);
    let moving = dragging && buttons.pressed(MouseButton::Left);
    if !pressing && !moving {
        return;
    }

    // window cursor coordinates already match scene coordinates
    let Some(cursor) = windows.get_single().ok().and_then(|w| w.cursor_position()) else {
        return;
    };
    let cursor = NVec2::new(cursor.x as f64, cursor.y as f64);

    let Scenario {
        engine,
        registry,
        drag,
        ..
    } = &mut *scenario;

    if pressing {
        drag.press(registry, cursor);
    } else {
        drag.moved(engine, cursor);
    }
}

fn sync_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    circle: Res<CircleMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &BodyTag, &Handle<ColorMaterial>, &mut Transform)>,
) {
    let frame = scenario.frame;
    let mut live: HashMap<BodyId, _> = scenario
        .registry
        .snapshot()
        .into_iter()
        .map(|view| (view.id, view))
        .collect();

    // update what is already on screen, drop what was absorbed or fragmented
    for (entity, BodyTag(id), material, mut transform) in &mut query {
        match live.remove(id) {
            Some(view) => {
                transform.translation = to_world(view.x, frame.width, frame.height);
                transform.scale = Vec3::splat(view.radius as f32);
            }
            None => {
                materials.remove(material);
                commands.entity(entity).despawn();
            }
        }
    }

    for (id, view) in live {
        let color = Color::srgb_u8(view.color.0, view.color.1, view.color.2);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(circle.0.clone()),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_translation(to_world(view.x, frame.width, frame.height))
                    .with_scale(Vec3::splat(view.radius as f32)),
                ..Default::default()
            },
            BodyTag(id),
        ));
    }
}

fn title_system(scenario: Res<Scenario>, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if !scenario.is_changed() {
        return;
    }
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = format!(
            "fragsim | tick {} | bodies {} | explosions {}",
            scenario.registry.tick,
            scenario.registry.len(),
            scenario.engine.explosions()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    use crate::simulation::engine::Engine;
    use crate::simulation::params::Parameters;
    use crate::simulation::scenario::Frame;

    fn world_with(buttons: ButtonInput<MouseButton>, dragging: bool) -> World {
        let params = Parameters {
            tick_hz: 62.5,
            seed: Some(5),
        };
        let mut scenario = Scenario::seeded(
            params.clone(),
            Engine::new(&params),
            Frame {
                width: 800.0,
                height: 600.0,
            },
        );
        if dragging {
            let Scenario { registry, drag, .. } = &mut scenario;
            let on_primary = registry.primary().map(|b| b.x).expect("primary present");
            assert!(drag.press(registry, on_primary));
        }

        let mut world = World::new();
        world.insert_resource(scenario);
        world.insert_resource(buttons);
        world.spawn((Window::default(), PrimaryWindow));
        world.clear_trackers();
        world
    }

    #[test]
    fn idle_mouse_leaves_scenario_unchanged() {
        let mut world = world_with(ButtonInput::default(), false);
        world.run_system_once(drag_input_system);
        assert!(!world.is_resource_changed::<Scenario>());
    }

    #[test]
    fn release_ends_a_drag() {
        let mut buttons = ButtonInput::default();
        buttons.press(MouseButton::Left);
        buttons.release(MouseButton::Left);
        let mut world = world_with(buttons, true);

        world.run_system_once(drag_input_system);
        assert!(world.is_resource_changed::<Scenario>());
        assert!(!world.resource::<Scenario>().drag.is_dragging());
    }
}
