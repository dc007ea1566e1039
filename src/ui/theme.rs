use ratatui::style::Color;

pub const BRAND_RED: Color = Color::Rgb(0xc7, 0x3b, 0x0f);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CATEGORY_TEXT: Color = Color::Rgb(0xad, 0x8a, 0x85);
pub const PRICE_TEXT: Color = Color::Rgb(0xca, 0xaf, 0xa7);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const STATUS_OK: Color = Color::Rgb(0x1e, 0xa5, 0x75);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
