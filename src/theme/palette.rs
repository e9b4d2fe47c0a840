use bevy::prelude::*;

/// #1d1f27
pub const BACKGROUND: Color = Color::srgb_u8(0x1d, 0x1f, 0x27);
/// #2a2d38
pub const PANEL_BACKGROUND: Color = Color::srgb_u8(0x2a, 0x2d, 0x38);

/// #ddd369
pub const LABEL_TEXT: Color = Color::srgb_u8(0xdd, 0xd3, 0x69);
/// #fcfbcc
pub const HEADER_TEXT: Color = Color::srgb_u8(0xfc, 0xfb, 0xcc);

/// #ececec
pub const SWATCH_TEXT_LIGHT: Color = Color::srgb_u8(0xec, 0xec, 0xec);
/// #161616
pub const SWATCH_TEXT_DARK: Color = Color::srgb_u8(0x16, 0x16, 0x16);

/// #4a4e5c
pub const SWATCH_BORDER: Color = Color::srgb_u8(0x4a, 0x4e, 0x5c);
/// #6299d1
pub const SWATCH_HOVERED_BORDER: Color = Color::srgb_u8(0x62, 0x99, 0xd1);
/// #fcfbcc
pub const SWATCH_PRESSED_BORDER: Color = Color::srgb_u8(0xfc, 0xfb, 0xcc);
