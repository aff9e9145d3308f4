use bevy::ecs::event::{Event, EventReader, EventWriter};
use bevy::input::{keyboard::KeyCode, mouse::MouseButton, ButtonInput};
use bevy::prelude::*;

use super::appearance::BarbershopData;
use super::controls;

/// Messages the server sends to this client.
#[derive(Event, Clone, Debug, PartialEq)]
pub enum ServerEvent {
    Open {
        self_service: bool,
        data: BarbershopData,
    },
    Close {
        notify_server: bool,
    },
}

/// Messages this client sends to the server.
#[derive(Event, Clone, Debug, PartialEq)]
pub enum ClientEmit {
    Update(BarbershopData),
    Close,
}

pub struct Plugin;

impl Plugin {
    // Local stand-in for the server-side barbershop command.
    fn request_from_keyboard(
        controls: Res<controls::Controls>,
        keyboard_input: Res<ButtonInput<KeyCode>>,
        mouse_input: Res<ButtonInput<MouseButton>>,
        mut server_event_writer: EventWriter<ServerEvent>,
    ) {
        if controls
            .open_barbershop
            .just_pressed(&keyboard_input, &mouse_input)
        {
            server_event_writer.send(ServerEvent::Open {
                self_service: true,
                data: BarbershopData::default(),
            });
        }
    }

    fn emit_to_server(mut client_emit_reader: EventReader<ClientEmit>) {
        for emit in client_emit_reader.read() {
            info!("emit to server: {emit:?}");
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ServerEvent>()
            .add_event::<ClientEmit>()
            .add_systems(Update, Self::request_from_keyboard)
            .add_systems(PostUpdate, Self::emit_to_server);
    }
}
