use bevy::prelude::*;

mod rendering;
use rendering::*;

mod scenes;

mod simulation;
use simulation::*;

mod ui;
use ui::*;

mod world;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Granular Sandbox Simulator".into(),
                resolution: (400.0, 460.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((CanvasPlugin, SandboxPlugin, SandboxUiPlugin))
        .run();
}
