use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::math::primitives::Sphere;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::reporting::report::{simulated_days, AU};
use crate::simulation::engine::Engine;
use crate::simulation::states::NVec3;

/// The engine as a bevy resource; systems only touch it through this
#[derive(Resource)]
struct Simulation(Engine);

/// Component tagging each sphere with its index into the registry
#[derive(Component)]
struct BodyIndex(pub usize);

/// Render units per astronomical unit
const AU_SCALE: f32 = 50.0;

/// Earth radius in m, the reference for visual radii
const EARTH_RADIUS: f64 = 6.371e6;

/// Render radius of an Earth-sized body
const EARTH_VISUAL_RADIUS: f32 = 0.8;

const PALETTE: [Color; 9] = [
    Color::srgb(1.0, 0.85, 0.3),
    Color::srgb(0.6, 0.6, 0.6),
    Color::srgb(0.9, 0.8, 0.6),
    Color::srgb(0.3, 0.5, 1.0),
    Color::srgb(0.9, 0.4, 0.2),
    Color::srgb(0.85, 0.7, 0.5),
    Color::srgb(0.9, 0.85, 0.6),
    Color::srgb(0.6, 0.9, 0.95),
    Color::srgb(0.3, 0.4, 0.95),
];

/// Open a window and drive `engine` in real time until it is closed
pub fn run_3d(engine: Engine) {
    tracing::info!(bodies = engine.registry().len(), "starting 3D viewer");

    App::new()
        .insert_resource(Simulation(engine))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "solsim".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (input_3d, physics_step_3d, sync_transforms_3d, update_title).chain())
        .run();
}

/// Startup system: spawn camera and one sphere per body
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<Simulation>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        tonemapping: Tonemapping::None,
        transform: Transform::from_xyz(0.0, 900.0, 1800.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // one unit sphere shared by every body, scaled per entity
    let sphere = meshes.add(Sphere::new(1.0).mesh());

    for (i, b) in sim.0.registry().bodies().iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: sphere.clone(),
                material: materials.add(StandardMaterial {
                    base_color: PALETTE[i % PALETTE.len()],
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(to_render(b.position))
                    .with_scale(Vec3::splat(visual_radius(b.radius()))),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// R resets, Up/Down double/halve speed, Space pauses
fn input_3d(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<Simulation>) {
    let engine = &mut sim.0;

    if keys.just_pressed(KeyCode::KeyR) {
        if let Err(e) = engine.reset() {
            tracing::error!("reset failed: {e}");
        }
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        engine.faster();
        tracing::info!(speed = engine.speed_multiplier(), "speed up");
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        engine.slower();
        tracing::info!(speed = engine.speed_multiplier(), "slow down");
    }
    if keys.just_pressed(KeyCode::Space) {
        engine.toggle_pause();
    }
}

/// Per-frame physics: every sub-step runs before any transform is read
fn physics_step_3d(time: Res<Time>, mut sim: ResMut<Simulation>) {
    sim.0.advance_frame(time.delta());
}

fn sync_transforms_3d(sim: Res<Simulation>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let bodies = sim.0.registry().bodies();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = bodies.get(*i) {
            transform.translation = to_render(b.position);
            transform.rotation = Quat::from_rotation_y(b.rotation().to_radians() as f32);
        }
    }
}

fn update_title(sim: Res<Simulation>, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    let engine = &sim.0;
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = format!(
            "solsim | day {:.1} | speed x{}{}",
            simulated_days(engine.registry().simulated_time()),
            engine.speed_multiplier(),
            if engine.paused { " | paused" } else { "" },
        );
    }
}

fn to_render(position: NVec3) -> Vec3 {
    Vec3::new(
        (position.x / AU) as f32 * AU_SCALE,
        (position.z / AU) as f32 * AU_SCALE,
        -(position.y / AU) as f32 * AU_SCALE,
    )
}

/// Cube-root compression so the Sun and Jupiter do not swallow the inner system
fn visual_radius(radius: f64) -> f32 {
    ((radius / EARTH_RADIUS).cbrt() as f32) * EARTH_VISUAL_RADIUS
}
