use bevy::prelude::*;

pub mod movement;
pub mod orbit;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(movement::Plugin);
        app.add_plugins(orbit::Plugin);
    }
}
