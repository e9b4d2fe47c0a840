// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev")]
mod dev_tools;
mod palette;
mod swatches;
mod theme;

use bevy::prelude::*;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Add Bevy plugins.
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Window {
                title: "Palette Panel".to_string(),
                ..default()
            }
            .into(),
            ..default()
        }));

        app.insert_resource(palette::PaletteSettings::from_env());

        // Add other plugins.
        app.add_plugins((
            theme::plugin,
            palette::plugin,
            swatches::plugin,
            #[cfg(feature = "dev")]
            dev_tools::plugin,
        ));

        configure_schedules(app);

        app.add_systems(Startup, spawn_camera.in_set(StartupSystems::SpawnUi));
    }
}

fn configure_schedules(app: &mut App) {
    // Order new `StartupSystems` variants by adding them here:
    app.configure_sets(
        Startup,
        (StartupSystems::SpawnUi, StartupSystems::LoadPalette).chain(),
    );

    // Order new `AppSystems` variants by adding them here:
    app.configure_sets(
        Update,
        (AppSystems::RecordInput, AppSystems::Update).chain(),
    );
}

/// High-level groupings of systems for the app in the `Startup` schedule.
/// The UI container has to exist before the palette is rendered into it.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
enum StartupSystems {
    /// Spawn the camera and the UI containers.
    SpawnUi,
    /// Read the palette file and render it.
    LoadPalette,
}

/// High-level groupings of systems for the app in the `Update` schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call in `configure_schedules`.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
enum AppSystems {
    /// Record user input.
    RecordInput,
    /// Do everything else (consider splitting this into further variants).
    Update,
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
}
