use bevy::ecs::event::{Event, EventReader, EventWriter};
use bevy::prelude::*;

use super::appearance::BarbershopData;
use super::character::{CharacterMarker, LookAt};
use super::input;
use super::input::orbit::OrbitIntent;
use super::menu::{GameControls, Menus};
use super::orbit::{Orbit, OrbitCursor, OrbitError, DEFAULT_STEP_DEGREES};
use super::server::{ClientEmit, ServerEvent};
use super::webview::{ViewCommand, ViewEvent, ViewMessage};

#[derive(Resource, Debug, Clone)]
pub struct BarbershopSettings {
    pub page_name: String,
    pub step_degrees: f32,
    pub forward_distance: f32, // Distance from the player to the first camera anchor.
    pub height_offset: f32,    // Camera and focus height above the player origin.
    pub field_of_view_degrees: f32,
}

impl std::default::Default for BarbershopSettings {
    fn default() -> Self {
        Self {
            page_name: "Barbershop".to_string(),
            step_degrees: DEFAULT_STEP_DEGREES,
            forward_distance: 2.0,
            height_offset: 0.62,
            field_of_view_degrees: 20.0,
        }
    }
}

/// Present from the moment the page is requested until the view closes.
#[derive(Resource, Debug)]
pub struct OpenView {
    pub self_service: bool,
    pub data: BarbershopData,
}

#[derive(Component, Default, Debug)]
pub struct BarbershopCamera;

/// The scripted camera and its orbit around the player.
///
/// Inserted when the page reports ready, removed on close.
#[derive(Resource, Debug)]
pub struct CameraSession {
    pub camera: Entity,
    pub eye: Vec3, // Where the camera first stood; the player keeps facing it.
    pub focus: Vec3,
    pub orbit: Orbit,
    pub cursor: OrbitCursor,
    pub suspended: Vec<Entity>, // Cameras that were active before the session.
}

impl CameraSession {
    /// Moves the cursor and returns the camera's new translation.
    pub fn rotate(&mut self, intent: OrbitIntent) -> Result<Vec3, OrbitError> {
        let point = match intent {
            OrbitIntent::RotateLeft => self.cursor.advance(&self.orbit)?,
            OrbitIntent::RotateRight => self.cursor.retreat(&self.orbit)?,
        };
        Ok(Vec3::new(point.x, self.focus.y, point.y))
    }
}

#[derive(Event, Clone, Copy, Debug)]
pub struct CloseView {
    pub notify_server: bool,
    pub close_page: bool,
}

fn horizontal(translation: Vec3) -> Vec2 {
    Vec2::new(translation.x, translation.z)
}

pub struct Plugin;

impl Plugin {
    fn open_view(
        mut commands: Commands,
        settings: Res<BarbershopSettings>,
        mut menus: ResMut<Menus>,
        mut game_controls: ResMut<GameControls>,
        mut deferred: Local<Vec<ServerEvent>>,
        mut server_event_reader: EventReader<ServerEvent>,
        mut view_command_writer: EventWriter<ViewCommand>,
        mut close_view_writer: EventWriter<CloseView>,
    ) {
        let server_events: Vec<ServerEvent> = deferred
            .drain(..)
            .chain(server_event_reader.read().cloned())
            .collect();
        let mut closing = false;

        for server_event in server_events {
            match server_event {
                // The close lands later this frame; retry once it has.
                ServerEvent::Open { .. } if closing => {
                    deferred.push(server_event);
                }
                ServerEvent::Open { self_service, data } => {
                    if menus.open {
                        debug!("barbershop requested while a menu is open");
                        continue;
                    }

                    commands.insert_resource(OpenView { self_service, data });
                    view_command_writer.send(ViewCommand::Open(settings.page_name.clone()));
                    view_command_writer.send(ViewCommand::Focus);

                    game_controls.enabled = false;
                    menus.open = true;
                    info!("opening barbershop (self service: {self_service})");
                }
                ServerEvent::Close { notify_server } => {
                    close_view_writer.send(CloseView {
                        notify_server,
                        close_page: true,
                    });
                    closing = true;
                }
            }
        }
    }

    fn handle_view_events(
        mut commands: Commands,
        settings: Res<BarbershopSettings>,
        open_view: Option<Res<OpenView>>,
        session: Option<Res<CameraSession>>,
        query_player: Query<(Entity, &Transform), With<CharacterMarker>>,
        mut query_cameras: Query<(Entity, &mut Camera), Without<BarbershopCamera>>,
        mut view_event_reader: EventReader<ViewEvent>,
        mut view_command_writer: EventWriter<ViewCommand>,
        mut client_emit_writer: EventWriter<ClientEmit>,
        mut close_view_writer: EventWriter<CloseView>,
    ) {
        let mut running = session.is_some();

        for view_event in view_event_reader.read() {
            match view_event {
                ViewEvent::Ready(page) => {
                    if *page != settings.page_name {
                        continue;
                    }
                    let Some(open_view) = open_view.as_ref() else {
                        warn!("page {page} is ready but the barbershop is not open");
                        continue;
                    };

                    debug!(
                        "sending appearance to {page} (self service: {})",
                        open_view.self_service
                    );
                    view_command_writer.send(ViewCommand::Emit(ViewMessage::SetData(
                        open_view.data.clone(),
                    )));

                    if running {
                        debug!("camera session already running");
                        continue;
                    }
                    let Ok((player_entity, player)) = query_player.get_single() else {
                        warn!("no player to point the barbershop camera at");
                        continue;
                    };

                    let session =
                        Self::start_session(&mut commands, &settings, player, &mut query_cameras);
                    commands.entity(player_entity).insert(LookAt {
                        target: session.eye,
                    });
                    commands.insert_resource(session);
                    running = true;
                }
                ViewEvent::Update(data) => {
                    client_emit_writer.send(ClientEmit::Update(data.clone()));
                }
                ViewEvent::SaveClose => {
                    close_view_writer.send(CloseView {
                        notify_server: false,
                        close_page: true,
                    });
                }
                ViewEvent::Closed(page) => {
                    if *page == settings.page_name {
                        close_view_writer.send(CloseView {
                            notify_server: true,
                            close_page: false,
                        });
                    }
                }
            }
        }
    }

    fn start_session(
        commands: &mut Commands,
        settings: &BarbershopSettings,
        player: &Transform,
        query_cameras: &mut Query<(Entity, &mut Camera), Without<BarbershopCamera>>,
    ) -> CameraSession {
        let up = Vec3::Y * settings.height_offset;
        let focus = player.translation + up;
        let forward = player.forward().as_vec3().with_y(0.0).normalize_or_zero();
        let forward_reference = player.translation + forward * settings.forward_distance;

        let mut suspended = Vec::new();
        for (entity, mut camera) in query_cameras.iter_mut() {
            if camera.is_active {
                camera.is_active = false;
                suspended.push(entity);
            }
        }

        let eye = forward_reference + up;
        let camera = commands
            .spawn((
                BarbershopCamera,
                Camera3d::default(),
                Projection::Perspective(PerspectiveProjection {
                    fov: settings.field_of_view_degrees.to_radians(),
                    ..default()
                }),
                Transform::from_translation(eye).looking_at(focus, Vec3::Y),
            ))
            .id();

        let orbit = Orbit::generate(
            horizontal(player.translation),
            horizontal(forward_reference),
            settings.step_degrees,
        );
        if orbit.is_empty() {
            warn!("step of {} degrees yields no orbit", settings.step_degrees);
        }
        info!("camera orbit: {}", orbit.describe());

        CameraSession {
            camera,
            eye,
            focus,
            orbit,
            cursor: OrbitCursor::default(),
            suspended,
        }
    }

    fn rotate_camera(
        session: Option<ResMut<CameraSession>>,
        mut query_cameras: Query<&mut Transform, With<BarbershopCamera>>,
        mut intent_event_reader: EventReader<OrbitIntent>,
    ) {
        let Some(mut session) = session else {
            intent_event_reader.clear();
            return;
        };

        for intent in intent_event_reader.read() {
            match session.rotate(*intent) {
                Ok(translation) => {
                    if let Ok(mut transform) = query_cameras.get_mut(session.camera) {
                        *transform =
                            Transform::from_translation(translation).looking_at(session.focus, Vec3::Y);
                    }
                    debug!("camera at orbit point {}", session.cursor.index());
                }
                Err(error) => warn!("cannot rotate camera: {error}"),
            }
        }
    }

    /// Despawns every barbershop camera, wakes the suspended ones and releases
    /// the player's gaze. Safe to run without a session.
    fn end_session(
        commands: &mut Commands,
        session: Option<&CameraSession>,
        query_barbershop_cameras: &Query<Entity, With<BarbershopCamera>>,
        query_cameras: &mut Query<&mut Camera, Without<BarbershopCamera>>,
        query_looking: &Query<Entity, (With<CharacterMarker>, With<LookAt>)>,
    ) {
        for entity in query_barbershop_cameras.iter() {
            commands.entity(entity).despawn();
        }
        for entity in query_looking.iter() {
            commands.entity(entity).remove::<LookAt>();
        }
        if let Some(session) = session {
            for entity in &session.suspended {
                if let Ok(mut camera) = query_cameras.get_mut(*entity) {
                    camera.is_active = true;
                }
            }
        }
        commands.remove_resource::<CameraSession>();
    }

    fn close_view(
        mut commands: Commands,
        settings: Res<BarbershopSettings>,
        open_view: Option<Res<OpenView>>,
        session: Option<Res<CameraSession>>,
        mut menus: ResMut<Menus>,
        mut game_controls: ResMut<GameControls>,
        query_barbershop_cameras: Query<Entity, With<BarbershopCamera>>,
        mut query_cameras: Query<&mut Camera, Without<BarbershopCamera>>,
        query_looking: Query<Entity, (With<CharacterMarker>, With<LookAt>)>,
        mut close_view_reader: EventReader<CloseView>,
        mut view_command_writer: EventWriter<ViewCommand>,
        mut client_emit_writer: EventWriter<ClientEmit>,
    ) {
        let requests: Vec<CloseView> = close_view_reader.read().copied().collect();
        if requests.is_empty() {
            return;
        }

        Self::end_session(
            &mut commands,
            session.as_deref(),
            &query_barbershop_cameras,
            &mut query_cameras,
            &query_looking,
        );

        if open_view.is_none() {
            debug!("barbershop close requested but it is not open");
            return;
        }
        commands.remove_resource::<OpenView>();

        game_controls.enabled = true;
        view_command_writer.send(ViewCommand::Unfocus);
        if requests.iter().any(|request| request.close_page) {
            view_command_writer.send(ViewCommand::Close(settings.page_name.clone()));
        }
        menus.open = false;

        if requests.iter().any(|request| request.notify_server) {
            client_emit_writer.send(ClientEmit::Close);
        }
        info!("barbershop closed");
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BarbershopSettings>()
            .add_event::<CloseView>()
            .add_systems(
                Update,
                (
                    Self::open_view,
                    Self::handle_view_events,
                    Self::rotate_camera.after(input::orbit::Plugin::process_inputs),
                    Self::close_view,
                )
                    .chain(),
            );
    }
}
