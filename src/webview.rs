use bevy::ecs::event::{Event, EventReader, EventWriter};
use bevy::input::{keyboard::KeyCode, mouse::MouseButton, ButtonInput};
use bevy::prelude::*;

use super::appearance::BarbershopData;
use super::controls;

/// Payload pushed into a page.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewMessage {
    SetData(BarbershopData),
}

/// Requests to the UI host.
#[derive(Event, Clone, Debug, PartialEq)]
pub enum ViewCommand {
    Open(String),
    Close(String),
    Focus,
    Unfocus,
    Emit(ViewMessage),
}

/// Notifications from the UI host.
#[derive(Event, Clone, Debug, PartialEq)]
pub enum ViewEvent {
    Ready(String),
    Update(BarbershopData),
    SaveClose,
    // The host closed the page on its own, e.g. the user dismissed it.
    Closed(String),
}

/// Pages the host is currently showing, most recent last.
#[derive(Resource, Default, Debug)]
pub struct Pages {
    pub open: Vec<String>,
    pub focused: bool,
}

pub struct Plugin;

impl Plugin {
    fn host_pages(
        mut pages: ResMut<Pages>,
        mut view_command_reader: EventReader<ViewCommand>,
        mut view_event_writer: EventWriter<ViewEvent>,
    ) {
        for command in view_command_reader.read() {
            match command {
                ViewCommand::Open(page) => {
                    if !pages.open.contains(page) {
                        pages.open.push(page.clone());
                    }
                    info!("page {page} opened");
                    view_event_writer.send(ViewEvent::Ready(page.clone()));
                }
                ViewCommand::Close(page) => {
                    pages.open.retain(|open| open != page);
                    info!("page {page} closed");
                }
                ViewCommand::Focus => pages.focused = true,
                ViewCommand::Unfocus => pages.focused = false,
                ViewCommand::Emit(message) => debug!("page message: {message:?}"),
            }
        }
    }

    fn close_from_keyboard(
        controls: Res<controls::Controls>,
        keyboard_input: Res<ButtonInput<KeyCode>>,
        mouse_input: Res<ButtonInput<MouseButton>>,
        mut pages: ResMut<Pages>,
        mut view_event_writer: EventWriter<ViewEvent>,
    ) {
        if !controls
            .close_panel
            .just_pressed(&keyboard_input, &mouse_input)
        {
            return;
        }
        if let Some(page) = pages.open.pop() {
            info!("page {page} dismissed");
            view_event_writer.send(ViewEvent::Closed(page));
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Pages>()
            .add_event::<ViewCommand>()
            .add_event::<ViewEvent>()
            .add_systems(Update, (Self::close_from_keyboard, Self::host_pages));
    }
}
