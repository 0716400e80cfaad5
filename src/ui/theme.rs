use ratatui::style::Color;

pub const GREY_SUBTITLE: Color = Color::Rgb(0x78, 0x7e, 0x8f);
pub const INPUT_TEXT: Color = Color::Rgb(0x33, 0x37, 0x40);
pub const INPUT_BORDER: Color = Color::Rgb(0xe3, 0xe9, 0xf3);
pub const INPUT_BORDER_ACTIVE: Color = Color::Rgb(0x78, 0xca, 0xff);
pub const INPUT_DISABLED: Color = Color::Rgb(0x9e, 0xa7, 0xb8);
pub const POPOVER_BORDER: Color = Color::Rgb(0xe3, 0xe9, 0xf3);
pub const CALENDAR_SELECTED: Color = Color::Rgb(0x00, 0x7e, 0xff);
pub const CALENDAR_CURSOR: Color = Color::Rgb(0xe6, 0xf0, 0xfb);
pub const CALENDAR_TODAY: Color = Color::Rgb(0xf6, 0x4d, 0x0a);
pub const CALENDAR_WEEKDAY: Color = Color::Rgb(0x9e, 0xa7, 0xb8);
