use ratatui::style::Color;

// Marquee Palette (amber-on-black, tuned for dark terminals)
pub const MARQUEE_GOLD: Color = Color::Rgb(255, 191, 0); // Bright marquee bulbs
pub const SOFT_GOLD: Color = Color::Rgb(214, 158, 46); // Warm mid highlight
pub const DIM_GOLD: Color = Color::Rgb(122, 88, 12); // Unfocused borders

pub const HIGHLIGHT_BG: Color = Color::Rgb(46, 36, 12);
pub const TEXT_PRIMARY: Color = Color::Rgb(235, 235, 225);
pub const TEXT_SECONDARY: Color = Color::Rgb(168, 168, 156);
pub const TEXT_DIM: Color = Color::Rgb(110, 110, 100);

pub const ERROR_RED: Color = Color::Rgb(229, 62, 62);
