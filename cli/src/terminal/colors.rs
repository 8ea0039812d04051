use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::BrightBlue;
pub const IPV6_ADDR: Color = Color::BrightMagenta;

pub const STATUS_OK: Color = Color::Green;
pub const STATUS_REDIRECT: Color = Color::Cyan;
pub const STATUS_CLIENT_ERROR: Color = Color::Yellow;
pub const STATUS_SERVER_ERROR: Color = Color::Red;
pub const NO_ANSWER: Color = Color::BrightBlack;
