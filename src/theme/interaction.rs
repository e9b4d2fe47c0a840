use bevy::prelude::*;

use crate::AppSystems;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, apply_interaction_border.in_set(AppSystems::Update));
}

/// Border colors to use when a [`Button`] is hovered or pressed.
///
/// The background is left alone, since swatch buttons show their palette color there.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct InteractionBorder {
    pub none: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl InteractionBorder {
    fn color(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::None => self.none,
            Interaction::Hovered => self.hovered,
            Interaction::Pressed => self.pressed,
        }
    }
}

fn apply_interaction_border(
    mut border_query: Query<
        (&Interaction, &InteractionBorder, &mut BorderColor),
        Changed<Interaction>,
    >,
) {
    for (interaction, palette, mut border) in &mut border_query {
        *border = BorderColor::all(palette.color(*interaction));
    }
}
