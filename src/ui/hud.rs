use crate::config::TILE_SIZE;
use crate::font::Fonts;
use crate::surface::Surface;
use crate::theme::Palette;
use crate::ui::centered_x;

/// Baseline of the score, halfway down the second HUD row.
pub const SCORE_BASELINE_Y: i32 = TILE_SIZE * 3 / 2;

/// Draws the live score centered in the HUD band.
pub fn render_hud<S: Surface + ?Sized>(surface: &mut S, score: u32, fonts: &Fonts, palette: &Palette) {
    let text = score.to_string();
    let x = centered_x(&fonts.score, &text);
    surface.draw_text(&text, &fonts.score, x, SCORE_BASELINE_Y, palette.text);
}
