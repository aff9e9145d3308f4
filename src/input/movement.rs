use crate::controls;
use crate::menu::GameControls;
use bevy::ecs::event::{Event, EventWriter};
use bevy::input::{keyboard::KeyCode, mouse::MouseButton, ButtonInput};
use bevy::prelude::*;

#[derive(Event, Clone, Copy, Default, Debug, PartialEq)]
pub struct Input {
    pub forward: f32,
    pub strafe: f32,
}

pub struct Plugin;

impl Plugin {
    fn process_inputs(
        controls: Res<controls::Controls>,
        game_controls: Res<GameControls>,
        keyboard_input: Res<ButtonInput<KeyCode>>,
        mouse_input: Res<ButtonInput<MouseButton>>,
        mut input_event_writer: EventWriter<Input>,
    ) {
        if !game_controls.enabled {
            input_event_writer.send(Input::default());
            return;
        }

        let axis = |positive: controls::ButtonInput, negative: controls::ButtonInput| {
            let mut value = 0.0;
            if positive.pressed(&keyboard_input, &mouse_input) {
                value += 1.0;
            }
            if negative.pressed(&keyboard_input, &mouse_input) {
                value -= 1.0;
            }
            value
        };

        let forward = axis(controls.move_forward, controls.move_backward);
        let strafe = axis(controls.strafe_right, controls.strafe_left);

        input_event_writer.send(Input { forward, strafe });
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_event::<Input>()
            .add_systems(Update, Self::process_inputs);
    }
}
