use crate::config::{SCREEN_HEIGHT, TILE_SIZE};
use crate::font::{FontFace, Fonts};
use crate::surface::Surface;
use crate::theme::Palette;
use crate::ui::centered_x;

pub const TITLE: &str = "Snake Game";
pub const START_PROMPT: &str = "press spacebar to start";
pub const GAME_OVER: &str = "Game Over";
pub const CONTINUE_PROMPT: &str = "press spacebar to continue";

/// Baseline-anchored position of one line of text.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TextAnchor {
    pub x: i32,
    pub y: i32,
}

fn anchor(face: &FontFace, text: &str, y: i32) -> TextAnchor {
    TextAnchor {
        x: centered_x(face, text),
        y,
    }
}

#[must_use]
pub fn high_score_label(high_score: u32) -> String {
    format!("high score: {high_score}")
}

/// Home screen lines: title, then one tile below it the high score, then three
/// tiles further down the start prompt.
#[must_use]
pub fn home_layout(fonts: &Fonts, high_score: &str) -> [TextAnchor; 3] {
    let title_y = fonts.headline.size() as i32 + TILE_SIZE;
    let caption_size = fonts.caption.size() as i32;
    let high_score_y = title_y + TILE_SIZE + caption_size;
    let start_y = high_score_y + TILE_SIZE * 3 + caption_size;

    [
        anchor(&fonts.headline, TITLE, title_y),
        anchor(&fonts.caption, high_score, high_score_y),
        anchor(&fonts.caption, START_PROMPT, start_y),
    ]
}

/// Game-over lines, stacked around the vertical middle of the screen.
#[must_use]
pub fn game_over_layout(fonts: &Fonts) -> [TextAnchor; 2] {
    let headline = fonts.headline.bounds(GAME_OVER);
    let prompt = fonts.score.bounds(CONTINUE_PROMPT);
    let base_y = (SCREEN_HEIGHT - headline.descent - prompt.descent) / 2;

    [
        anchor(&fonts.headline, GAME_OVER, base_y),
        anchor(
            &fonts.score,
            CONTINUE_PROMPT,
            base_y + fonts.score.size() as i32,
        ),
    ]
}

/// Draws the home screen.
pub fn render_home_menu<S: Surface + ?Sized>(
    surface: &mut S,
    high_score: u32,
    fonts: &Fonts,
    palette: &Palette,
) {
    let high_score = high_score_label(high_score);
    let [title, record, start] = home_layout(fonts, &high_score);

    surface.draw_text(TITLE, &fonts.headline, title.x, title.y, palette.text);
    surface.draw_text(&high_score, &fonts.caption, record.x, record.y, palette.text);
    surface.draw_text(START_PROMPT, &fonts.caption, start.x, start.y, palette.text);
}

/// Draws the game-over overlay on top of the play field.
pub fn render_game_over_menu<S: Surface + ?Sized>(surface: &mut S, fonts: &Fonts, palette: &Palette) {
    let [headline, prompt] = game_over_layout(fonts);

    surface.draw_text(GAME_OVER, &fonts.headline, headline.x, headline.y, palette.text);
    surface.draw_text(CONTINUE_PROMPT, &fonts.score, prompt.x, prompt.y, palette.text);
}
