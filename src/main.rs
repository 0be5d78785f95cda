use avian2d::prelude::*;
use bevy::prelude::*;

mod camera;
mod combat;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod fade;
mod movement;
mod persistence;
mod rooms;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Galley".into(),
            resolution: (1280, 720).into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Top-down view, nothing falls anywhere.
    .insert_resource(Gravity(Vec2::ZERO))
    .add_plugins((
        crate::core::CorePlugin,
        fade::FadePlugin,
        camera::CameraPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        rooms::RoomsPlugin,
        persistence::PersistencePlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
