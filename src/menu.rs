use bevy::prelude::*;

/// Whether any menu currently owns the screen.
#[derive(Resource, Default, Debug)]
pub struct Menus {
    pub open: bool,
}

/// Gameplay input switch; off while a menu takes the keyboard.
#[derive(Resource, Debug)]
pub struct GameControls {
    pub enabled: bool,
}

impl std::default::Default for GameControls {
    fn default() -> Self {
        Self { enabled: true }
    }
}

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Menus>()
            .init_resource::<GameControls>();
    }
}
