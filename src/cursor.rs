use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::menu::Menus;

pub struct Plugin;

impl Plugin {
    fn grab_cursor(window: &mut Window) {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }

    fn ungrab_cursor(window: &mut Window) {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }

    fn sync_cursor(menus: Res<Menus>, mut query: Query<&mut Window, With<PrimaryWindow>>) {
        if !menus.is_changed() {
            return;
        }
        let Ok(mut primary_window) = query.get_single_mut() else {
            return;
        };

        if menus.open {
            Self::ungrab_cursor(&mut primary_window);
        } else {
            Self::grab_cursor(&mut primary_window);
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, Self::sync_cursor);
    }
}
