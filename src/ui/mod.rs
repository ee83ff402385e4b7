pub mod hud;
pub mod menu;

use crate::config::SCREEN_WIDTH;
use crate::font::FontFace;

/// Left edge that centers `text` horizontally on the screen.
#[must_use]
pub fn centered_x(face: &FontFace, text: &str) -> i32 {
    (SCREEN_WIDTH - face.bounds(text).width) / 2
}

/// Every fixed string the presenter draws, digits included.
pub const LABELS: [&str; 5] = [
    menu::TITLE,
    menu::START_PROMPT,
    menu::GAME_OVER,
    menu::CONTINUE_PROMPT,
    "high score: 0123456789",
];
