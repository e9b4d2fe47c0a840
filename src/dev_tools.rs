//! Development tools for the app. This plugin is only enabled in dev builds.

use bevy::{
    input::common_conditions::{input_just_pressed, input_toggle_active},
    prelude::*,
};
use bevy_inspector_egui::{
    bevy_egui::EguiPlugin,
    quick::{ResourceInspectorPlugin, WorldInspectorPlugin},
};

use crate::{
    AppSystems,
    palette::{ColorPalette, ReloadPalette},
    swatches::SwatchTemplate,
};

const INSPECTOR_TOGGLE_KEY: KeyCode = KeyCode::Backquote;
const UI_DEBUG_TOGGLE_KEY: KeyCode = KeyCode::F1;
const RELOAD_PALETTE_KEY: KeyCode = KeyCode::F5;

pub(super) fn plugin(app: &mut App) {
    // World inspector
    app.add_plugins((
        EguiPlugin::default(),
        WorldInspectorPlugin::default().run_if(input_toggle_active(false, INSPECTOR_TOGGLE_KEY)),
        ResourceInspectorPlugin::<ColorPalette>::new()
            .run_if(input_toggle_active(false, INSPECTOR_TOGGLE_KEY)),
        ResourceInspectorPlugin::<SwatchTemplate>::new()
            .run_if(input_toggle_active(false, INSPECTOR_TOGGLE_KEY)),
    ));

    // Toggle the debug overlay for UI.
    app.add_systems(
        Update,
        toggle_debug_ui.run_if(input_just_pressed(UI_DEBUG_TOGGLE_KEY)),
    );

    // Re-read the palette file and rebuild the swatches. Edits to `SwatchTemplate` made in the
    // inspector also take effect on reload.
    app.add_systems(
        Update,
        reload_palette
            .run_if(input_just_pressed(RELOAD_PALETTE_KEY))
            .in_set(AppSystems::RecordInput),
    );
}

fn toggle_debug_ui(mut options: ResMut<UiDebugOptions>) {
    options.toggle();
}

fn reload_palette(mut commands: Commands) {
    commands.trigger(ReloadPalette);
}
