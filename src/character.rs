use bevy::ecs::event::EventReader;
use bevy::prelude::*;

use super::input;

#[derive(Bundle, Default)]
pub struct Character {
    pub character_marker: CharacterMarker,
    pub visibility: Visibility,
    pub transform: Transform,
    pub kinematics: Kinematics,
}

#[derive(Component, Default, Debug)]
pub struct CharacterMarker;

/// Point the character turns to face, ignoring height.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    pub target: Vec3,
}

#[derive(Component, Debug)]
pub struct Kinematics {
    pub velocity: Vec3,
    pub ground_speed: f32,
    pub action: Action,
}

#[derive(Default, Debug)]
pub struct Action {
    pub forward: f32,
    pub strafe: f32,
}

impl std::default::Default for Kinematics {
    fn default() -> Self {
        Self {
            velocity: Vec3::default(),
            ground_speed: 3.0,
            action: Action {
                forward: 0.0,
                strafe: 0.0,
            },
        }
    }
}

pub struct Plugin;

impl Plugin {
    fn read_movement_inputs(
        mut query_characters: Query<&mut Kinematics, With<CharacterMarker>>,
        mut movement_input_event_reader: EventReader<input::movement::Input>,
    ) {
        let movement_input_event = movement_input_event_reader.read().last();

        for mut kinematics in query_characters.iter_mut() {
            if let Some(movement_input) = movement_input_event {
                // Maps the movement coordinates to a circle (from a square).
                kinematics.action.forward =
                    movement_input.forward * f32::sqrt(1.0 - movement_input.strafe.powi(2) / 2.0);
                kinematics.action.strafe =
                    movement_input.strafe * f32::sqrt(1.0 - movement_input.forward.powi(2) / 2.0);
            }
        }
    }

    fn face_look_target(
        mut query_characters: Query<(&mut Transform, &LookAt), With<CharacterMarker>>,
    ) {
        for (mut transform, look_at) in query_characters.iter_mut() {
            let target = look_at.target.with_y(transform.translation.y);
            if target.distance_squared(transform.translation) > f32::EPSILON {
                transform.look_at(target, Vec3::Y);
            }
        }
    }

    fn update_kinematics(
        mut query_characters: Query<(&mut Transform, &mut Kinematics), With<CharacterMarker>>,
        time: Res<Time>,
    ) {
        const IDLE_VELOCITY: f32 = 0.1;
        const UP: Vec3 = bevy::math::Vec3::Y;

        let time_delta = time.delta_secs();

        for (mut transform, mut kinematics) in query_characters.iter_mut() {
            let forward = transform.forward();
            let right = transform.right();

            let input_movement =
                forward * kinematics.action.forward + right * kinematics.action.strafe;

            let input_movement_velocity = input_movement * kinematics.ground_speed;
            kinematics.velocity = input_movement_velocity - input_movement_velocity.dot(UP) * UP;

            if kinematics.velocity.length() < IDLE_VELOCITY {
                kinematics.velocity = Vec3::ZERO;
                continue;
            }

            transform.translation += kinematics.velocity * time_delta;
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                Self::read_movement_inputs,
                Self::face_look_target,
                Self::update_kinematics,
            )
                .chain(),
        );
    }
}
