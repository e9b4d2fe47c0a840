//! Render the loaded palette as a panel of color buttons.

use bevy::{color::Luminance, prelude::*};

use crate::{
    AppSystems, StartupSystems,
    palette::{ColorPalette, PaletteColor, PaletteLoaded, PaletteSettings},
    theme::{palette::*, prelude::*},
};

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<SwatchTemplate>()
        .init_resource::<SelectedSwatch>()
        .add_systems(Startup, spawn_swatch_panel.in_set(StartupSystems::SpawnUi))
        .add_systems(Update, select_swatch.in_set(AppSystems::RecordInput))
        .add_observer(render_swatches);
}

/// How each swatch button is built.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct SwatchTemplate {
    /// Button size in logical pixels.
    pub size: Vec2,
    pub margin: f32,
    pub border: f32,
    pub font_size: f32,
    /// Whether buttons get a hex code label.
    pub show_label: bool,
}

impl Default for SwatchTemplate {
    fn default() -> Self {
        Self {
            size: Vec2::new(112.0, 48.0),
            margin: 4.0,
            border: 2.0,
            font_size: 14.0,
            show_label: true,
        }
    }
}

/// The container swatch buttons are spawned into.
#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct SwatchPanel;

/// Text under the header describing the last load.
#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct SwatchStatus;

#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct SwatchButton {
    /// Position in the palette.
    pub index: usize,
    pub color: PaletteColor,
}

/// The swatch most recently clicked, if any. Cleared when the palette is re-rendered.
#[derive(Resource, Reflect, Debug, Default, Deref)]
#[reflect(Resource)]
pub struct SelectedSwatch(pub Option<SwatchButton>);

fn spawn_swatch_panel(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Palette UI"),
        children![
            widget::header("Palette"),
            (widget::label(""), SwatchStatus),
            (
                Name::new("Swatch Panel"),
                SwatchPanel,
                Node {
                    width: percent(100),
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    justify_content: JustifyContent::Center,
                    align_content: AlignContent::FlexStart,
                    padding: UiRect::all(px(8)),
                    ..default()
                },
                BackgroundColor(PANEL_BACKGROUND),
            ),
        ],
    ));
}

/// A button filled with `color` and labeled with its hex code.
pub fn swatch_button(color: PaletteColor, index: usize, template: &SwatchTemplate) -> impl Bundle {
    let label = color.label();
    let text = template
        .show_label
        .then(|| swatch_label(label.clone(), color, template.font_size));

    (
        Name::new(format!("Swatch {label}")),
        SwatchButton { index, color },
        Button,
        Node {
            width: px(template.size.x),
            height: px(template.size.y),
            margin: UiRect::all(px(template.margin)),
            border: UiRect::all(px(template.border)),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(color.into()),
        BorderColor::all(SWATCH_BORDER),
        InteractionBorder {
            none: SWATCH_BORDER,
            hovered: SWATCH_HOVERED_BORDER,
            pressed: SWATCH_PRESSED_BORDER,
        },
        Children::spawn(SpawnIter(text.into_iter())),
    )
}

fn swatch_label(label: String, color: PaletteColor, font_size: f32) -> impl Bundle {
    (
        Name::new("Swatch Label"),
        Text(label),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(label_color(color)),
    )
}

/// Dark text on light, opaque swatches and light text otherwise.
/// Mostly transparent swatches show the dark panel through them.
fn label_color(color: PaletteColor) -> Color {
    if color.alpha >= 0.5 && color.luminance() > 0.5 {
        SWATCH_TEXT_DARK
    } else {
        SWATCH_TEXT_LIGHT
    }
}

fn render_swatches(
    _: On<PaletteLoaded>,
    palette: Res<ColorPalette>,
    template: Res<SwatchTemplate>,
    settings: Res<PaletteSettings>,
    panel: Single<Entity, With<SwatchPanel>>,
    swatches: Query<Entity, With<SwatchButton>>,
    mut status: Query<&mut Text, With<SwatchStatus>>,
    mut selected: ResMut<SelectedSwatch>,
    mut commands: Commands,
) {
    for swatch in &swatches {
        commands.entity(swatch).despawn();
    }
    selected.0 = None;

    let panel = panel.into_inner();
    for (index, &color) in palette.iter().enumerate() {
        commands.spawn((swatch_button(color, index, &template), ChildOf(panel)));
    }

    for mut text in &mut status {
        text.0 = match palette.len() {
            0 => format!("No colors loaded from {}", settings.path.display()),
            1 => format!("1 color from {}", settings.path.display()),
            n => format!("{n} colors from {}", settings.path.display()),
        };
    }

    debug!("Rendered {} swatches", palette.len());
}

fn select_swatch(
    buttons: Query<(&Interaction, &SwatchButton), Changed<Interaction>>,
    mut selected: ResMut<SelectedSwatch>,
) {
    for (interaction, swatch) in &buttons {
        if *interaction == Interaction::Pressed {
            info!("Selected swatch {} ({})", swatch.index, swatch.color.label());
            selected.0 = Some(*swatch);
        }
    }
}
