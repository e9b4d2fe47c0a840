//! Load the color palette from disk.

use std::{ffi::OsString, path::PathBuf};

use bevy::prelude::*;

use crate::StartupSystems;

mod file;
mod hex;

use file::{ParsedPalette, read_palette_file};
use hex::rgba_hex;

/// Environment variable overriding [`PaletteSettings::path`].
pub const PALETTE_FILE_VAR: &str = "PALETTE_FILE";

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<PaletteSettings>()
        .init_resource::<ColorPalette>()
        .add_systems(Startup, load_palette.in_set(StartupSystems::LoadPalette))
        .add_observer(reload_palette);
}

#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct PaletteSettings {
    pub path: PathBuf,
}

impl PaletteSettings {
    pub fn from_env() -> Self {
        Self::from_var(std::env::var_os(PALETTE_FILE_VAR))
    }

    /// Settings for a looked-up [`PALETTE_FILE_VAR`] value. Unset or empty means the default path.
    fn from_var(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self { path: path.into() },
            _ => Self::default(),
        }
    }
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/palette.txt"),
        }
    }
}

/// A single palette entry, stored as straight sRGB with alpha.
#[derive(Reflect, Debug, Deref, Clone, Copy, PartialEq)]
pub struct PaletteColor(pub Srgba);

impl PaletteColor {
    pub fn from_argb_u8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(Srgba::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    /// The text shown on this color's button, `RRGGBBAA`.
    pub fn label(&self) -> String {
        rgba_hex(self.0)
    }
}

impl From<PaletteColor> for Color {
    fn from(value: PaletteColor) -> Self {
        Color::Srgba(value.0)
    }
}

/// The colors of the most recent load, in file order.
#[derive(Resource, Reflect, Debug, Default, Deref)]
#[reflect(Resource)]
pub struct ColorPalette(pub Vec<PaletteColor>);

/// Triggered after [`ColorPalette`] has been replaced.
#[derive(Event, Debug, Clone, Copy)]
pub struct PaletteLoaded;

/// Trigger to read the palette file again.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReloadPalette;

fn load_palette(
    settings: Res<PaletteSettings>,
    mut palette: ResMut<ColorPalette>,
    mut commands: Commands,
) {
    let parsed = match read_palette_file(&settings.path) {
        Ok(parsed) => parsed,
        Err(err) => {
            error!("{err}");
            ParsedPalette::default()
        }
    };

    for rejected in &parsed.rejected {
        warn!(
            "Invalid color code on line {} of {:?} (must be AARRGGBB): {:?}: {}",
            rejected.line_number, settings.path, rejected.text, rejected.error
        );
    }

    info!(
        "Loaded {} colors from {:?}",
        parsed.colors.len(),
        settings.path
    );

    palette.0 = parsed.colors;
    commands.trigger(PaletteLoaded);
}

fn reload_palette(
    _: On<ReloadPalette>,
    settings: Res<PaletteSettings>,
    palette: ResMut<ColorPalette>,
    commands: Commands,
) {
    debug!("Reloading palette from {:?}", settings.path);
    load_palette(settings, palette, commands);
}
