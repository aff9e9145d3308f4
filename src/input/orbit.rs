use crate::controls;
use bevy::ecs::event::{Event, EventWriter};
use bevy::input::{keyboard::KeyCode, mouse::MouseButton, ButtonInput};
use bevy::prelude::*;

/// Logical camera-orbit commands, decoupled from the physical bindings.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitIntent {
    RotateLeft,
    RotateRight,
}

pub struct Plugin;

impl Plugin {
    pub fn process_inputs(
        controls: Res<controls::Controls>,
        keyboard_input: Res<ButtonInput<KeyCode>>,
        mouse_input: Res<ButtonInput<MouseButton>>,
        mut intent_event_writer: EventWriter<OrbitIntent>,
    ) {
        if controls
            .rotate_left
            .just_pressed(&keyboard_input, &mouse_input)
        {
            intent_event_writer.send(OrbitIntent::RotateLeft);
        }
        if controls
            .rotate_right
            .just_pressed(&keyboard_input, &mouse_input)
        {
            intent_event_writer.send(OrbitIntent::RotateRight);
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OrbitIntent>()
            .add_systems(Update, Self::process_inputs);
    }
}
