use ratatui::style::Color;

pub const BRAND_ORANGE: Color = Color::Rgb(0xff, 0xa9, 0x4d);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xff, 0xa9, 0x4d);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BALANCE_OWED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const BALANCE_OWING: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
