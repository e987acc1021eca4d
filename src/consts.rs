//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw one board cell, so that cells come
/// out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Background of board cells whose row + column is even
pub(crate) const DARK_SQUARE_COLOR: Color = Color::Rgb(0x19, 0x95, 0xAD);

/// Background of board cells whose row + column is odd, and of the menu
pub(crate) const LIGHT_SQUARE_COLOR: Color = Color::Rgb(0xA1, 0xD6, 0xE2);

pub(crate) const SNAKE_COLOR: Color = Color::Rgb(0x00, 0x00, 0x00);

pub(crate) const FOOD_COLOR: Color = Color::Rgb(0xBA, 0x95, 0x31);

/// Foreground of the title, score, and instructions
pub(crate) const TEXT_COLOR: Color = Color::Rgb(0x19, 0x95, 0xAD);

pub(crate) const GAME_OVER_COLOR: Color = Color::Rgb(0xFF, 0x32, 0x32);

/// Modifiers applied on top of the text color for headings
pub(crate) const HEADING_MODIFIER: Modifier = Modifier::BOLD;

/// Style for key names shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Name of the program's directory under the user's configuration directory
pub(crate) const APP_DIR_NAME: &str = "gridsnake";
