use bevy::input::{keyboard::KeyCode, mouse::MouseButton};
use bevy::prelude::*;

#[derive(Resource, Debug)]
pub struct Controls {
    pub move_forward: ButtonInput,
    pub move_backward: ButtonInput,
    pub strafe_left: ButtonInput,
    pub strafe_right: ButtonInput,
    pub rotate_left: ButtonInput,
    pub rotate_right: ButtonInput,
    pub open_barbershop: ButtonInput,
    pub close_panel: ButtonInput,
}

impl Controls {
    pub fn new() -> Self {
        Controls {
            move_forward: ButtonInput::Keyboard(KeyCode::KeyW),
            move_backward: ButtonInput::Keyboard(KeyCode::KeyS),
            strafe_left: ButtonInput::Keyboard(KeyCode::KeyA),
            strafe_right: ButtonInput::Keyboard(KeyCode::KeyD),
            // Shares A/D with strafing; game controls are off while the camera orbits.
            rotate_left: ButtonInput::Keyboard(KeyCode::KeyA),
            rotate_right: ButtonInput::Keyboard(KeyCode::KeyD),
            open_barbershop: ButtonInput::Keyboard(KeyCode::KeyB),
            close_panel: ButtonInput::Keyboard(KeyCode::Escape),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ButtonInput {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl ButtonInput {
    pub fn pressed(
        &self,
        keyboard_input: &bevy::input::ButtonInput<KeyCode>,
        mouse_input: &bevy::input::ButtonInput<MouseButton>,
    ) -> bool {
        match *self {
            ButtonInput::Keyboard(key_code) => keyboard_input.pressed(key_code),
            ButtonInput::Mouse(mouse_button) => mouse_input.pressed(mouse_button),
        }
    }

    pub fn just_pressed(
        &self,
        keyboard_input: &bevy::input::ButtonInput<KeyCode>,
        mouse_input: &bevy::input::ButtonInput<MouseButton>,
    ) -> bool {
        match *self {
            ButtonInput::Keyboard(key_code) => keyboard_input.just_pressed(key_code),
            ButtonInput::Mouse(mouse_button) => mouse_input.just_pressed(mouse_button),
        }
    }
}

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Controls::new());
    }
}
