use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 95, g: 215, b: 255 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ACCENT: Color = Color::BrightYellow;

pub const VALID: Color = Color::Green;
pub const INVALID: Color = Color::Red;

pub const IPV4_ADDR: Color = Color::TrueColor { r: 135, g: 215, b: 135 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 175, g: 135, b: 255 };
