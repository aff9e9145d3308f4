use bevy::core_pipeline::{bloom::Bloom, tonemapping::Tonemapping};
use bevy::log::LogPlugin;
use bevy::prelude::*;

mod appearance;
mod barbershop;
mod character;
mod controls;
mod cursor;
mod input;
mod menu;
mod orbit;
mod server;
mod webview;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "barbershop".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn,barbershop=debug".to_string(),
                ..Default::default()
            }),
    )
    .add_plugins(menu::Plugin)
    .add_plugins(cursor::Plugin)
    .add_plugins(controls::Plugin)
    .add_plugins(input::Plugin)
    .add_plugins(character::Plugin)
    .add_plugins(server::Plugin)
    .add_plugins(webview::Plugin)
    .add_plugins(barbershop::Plugin)
    .add_systems(Startup, setup);

    app.run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Barber chair stand-in.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(0.8, 1.0, 0.8))),
        MeshMaterial3d(materials.add(Color::from(bevy::color::palettes::basic::MAROON))),
        Transform::from_xyz(0.0, 0.5, 1.5),
    ));

    // Ground
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(50.0, 50.0).subdivisions(10))),
        MeshMaterial3d(materials.add(Color::from(bevy::color::palettes::basic::SILVER))),
    ));

    commands.spawn((
        PointLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));

    commands.insert_resource(AmbientLight {
        brightness: 200.0,
        ..Default::default()
    });

    commands
        .spawn(character::Character {
            transform: Transform::from_xyz(0.0, 0.0, 5.0),
            ..Default::default()
        })
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.3, 1.2))),
                MeshMaterial3d(materials.add(Color::from(bevy::color::palettes::basic::TEAL))),
                Transform::from_xyz(0.0, 0.9, 0.0),
            ));
            parent.spawn((
                Camera3d::default(),
                Camera {
                    hdr: true,
                    ..default()
                },
                Tonemapping::TonyMcMapface,
                Bloom::NATURAL,
                Transform::from_xyz(0.0, 2.5, 4.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
            ));
        });
}
