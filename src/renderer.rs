use crate::config::TILE_SIZE;
use crate::font::Fonts;
use crate::game::{GameView, Phase};
use crate::surface::{PixelRect, Surface};
use crate::theme::Palette;
use crate::tile::Tile;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_home_menu};

const ANTIALIAS: bool = true;

/// Renders the full frame from immutable state.
pub fn render<S: Surface + ?Sized>(surface: &mut S, view: &GameView<'_>, fonts: &Fonts, palette: &Palette) {
    if view.phase == Phase::Home {
        render_home_menu(surface, view.high_score, fonts, palette);
        return;
    }

    render_walls(surface, view, palette);
    render_snake(surface, view, palette);
    render_food(surface, view, palette);
    render_hud(surface, view.score, fonts, palette);

    if !view.is_playing() {
        render_game_over_menu(surface, fonts, palette);
    }
}

fn render_walls<S: Surface + ?Sized>(surface: &mut S, view: &GameView<'_>, palette: &Palette) {
    for tile in view.board.walls().iter() {
        surface.fill_rect(tile_rect(*tile), palette.wall, ANTIALIAS);
    }
}

fn render_snake<S: Surface + ?Sized>(surface: &mut S, view: &GameView<'_>, palette: &Palette) {
    let (head_color, body_color) = if view.is_playing() {
        (palette.snake_head, palette.snake_body)
    } else {
        (palette.snake_dead, palette.snake_dead)
    };

    let mut segments = view.board.snake().segments();
    if let Some(head) = segments.next() {
        surface.fill_rect(tile_rect(*head), head_color, ANTIALIAS);
    }
    for segment in segments {
        surface.fill_rect(tile_rect(*segment), body_color, ANTIALIAS);
    }
}

fn render_food<S: Surface + ?Sized>(surface: &mut S, view: &GameView<'_>, palette: &Palette) {
    for tile in view.board.food().iter() {
        surface.fill_rect(tile_rect(*tile), palette.food, ANTIALIAS);
    }
}

/// Pixel square covered by `tile`.
#[must_use]
pub fn tile_rect(tile: Tile) -> PixelRect {
    PixelRect {
        x: tile.x * TILE_SIZE,
        y: tile.y * TILE_SIZE,
        width: TILE_SIZE,
        height: TILE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use crate::font::Fonts;
    use crate::game::GameState;
    use crate::input::{InputSnapshot, Key};
    use crate::surface::{DrawCommand, DrawList, PixelRect};
    use crate::theme::CLASSIC;
    use crate::tile::Tile;
    use crate::ui::LABELS;
    use crate::ui::menu::{CONTINUE_PROMPT, GAME_OVER, START_PROMPT, TITLE};

    use super::{render, tile_rect};

    fn frame(state: &GameState) -> DrawList {
        let fonts = Fonts::press_start(&LABELS).expect("fonts load");
        let mut surface = DrawList::new();
        render(&mut surface, &state.view(), &fonts, &CLASSIC);
        surface
    }

    #[test]
    fn tile_rect_scales_by_tile_size() {
        assert_eq!(
            tile_rect(Tile::new(3, 4)),
            PixelRect {
                x: 30,
                y: 40,
                width: 10,
                height: 10
            }
        );
    }

    #[test]
    fn home_screen_only_draws_text() {
        let state = GameState::new_with_seed(60, 1);
        let surface = frame(&state);

        let texts: Vec<&str> = surface.texts().map(|(text, _, _)| text).collect();
        assert_eq!(texts, vec![TITLE, "high score: 0", START_PROMPT]);
        assert!(
            surface
                .commands()
                .iter()
                .all(|command| matches!(command, DrawCommand::Text { .. }))
        );
    }

    #[test]
    fn play_screen_draws_walls_snake_food_then_score() {
        let mut state = GameState::new_with_seed(60, 2);
        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        let surface = frame(&state);

        let walls = state.board().walls().len();
        assert_eq!(surface.rects_with(CLASSIC.wall).count(), walls);
        assert_eq!(
            surface.rects_with(CLASSIC.snake_head).collect::<Vec<_>>(),
            vec![tile_rect(Tile::new(3, 3))]
        );
        assert_eq!(surface.rects_with(CLASSIC.snake_body).count(), 2);
        assert_eq!(surface.rects_with(CLASSIC.food).count(), 1);

        let texts: Vec<&str> = surface.texts().map(|(text, _, _)| text).collect();
        assert_eq!(texts, vec!["0"]);
        assert!(matches!(
            surface.commands().last(),
            Some(DrawCommand::Text { .. })
        ));
    }

    #[test]
    fn game_over_tints_snake_and_adds_overlay() {
        let mut state = GameState::new_with_seed(60, 3);
        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        let _ = state.advance(&InputSnapshot::of(&[Key::ArrowUp]));
        for _ in 0..11 {
            let _ = state.advance(&InputSnapshot::empty());
        }
        let surface = frame(&state);

        assert_eq!(surface.rects_with(CLASSIC.snake_dead).count(), 3);
        assert_eq!(surface.rects_with(CLASSIC.snake_head).count(), 0);

        let texts: Vec<&str> = surface.texts().map(|(text, _, _)| text).collect();
        assert_eq!(texts, vec!["0", GAME_OVER, CONTINUE_PROMPT]);
    }

    #[test]
    fn paused_screen_matches_play_screen() {
        let mut state = GameState::new_with_seed(60, 4);
        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        let playing = frame(&state);

        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        assert_eq!(frame(&state), playing);
    }
}
