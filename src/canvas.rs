use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::config::{GRID, GridSize, TILE_SIZE};
use crate::font::FontFace;
use crate::surface::{PixelRect, Surface};
use crate::theme::Rgba;
use crate::tile::Tile;

/// Upper half-block glyph: foreground paints the top tile, background the bottom one.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Tile rows packed into one terminal row.
const TILES_PER_ROW: i32 = 2;

/// Terminal rows needed for the full logical screen.
pub const TERMINAL_ROWS: u16 = GRID.height / TILES_PER_ROW as u16;

/// Terminal columns needed for the full logical screen.
pub const TERMINAL_COLUMNS: u16 = GRID.width;

#[derive(Debug, Clone, PartialEq)]
struct Label {
    text: String,
    column: i32,
    row: i32,
    spacing: i32,
    color: Rgba,
}

/// Off-screen 640×480 surface rasterised onto terminal cells.
///
/// Every tile becomes half a terminal cell. Text snaps to the cell grid with
/// its horizontal center kept; faces wider than one cell per glyph are
/// letter-spaced so large text still reads large.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalCanvas {
    size: GridSize,
    tiles: Vec<Option<Rgba>>,
    labels: Vec<Label>,
    background: Rgba,
}

impl TerminalCanvas {
    #[must_use]
    pub fn new(background: Rgba) -> Self {
        Self {
            size: GRID,
            tiles: vec![None; GRID.total_cells()],
            labels: Vec::new(),
            background,
        }
    }

    /// Color painted on `tile`, if any.
    #[must_use]
    pub fn tile_color(&self, tile: Tile) -> Option<Rgba> {
        tile.index(self.size).and_then(|index| self.tiles[index])
    }

    fn origin(area: Rect) -> (u16, u16) {
        (
            area.x + area.width.saturating_sub(TERMINAL_COLUMNS) / 2,
            area.y + area.height.saturating_sub(TERMINAL_ROWS) / 2,
        )
    }
}

impl Surface for TerminalCanvas {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba, _antialias: bool) {
        let first_x = rect.x.div_euclid(TILE_SIZE);
        let first_y = rect.y.div_euclid(TILE_SIZE);
        let end_x = (rect.x + rect.width + TILE_SIZE - 1).div_euclid(TILE_SIZE);
        let end_y = (rect.y + rect.height + TILE_SIZE - 1).div_euclid(TILE_SIZE);

        for y in first_y..end_y {
            for x in first_x..end_x {
                if let Some(index) = Tile::new(x, y).index(self.size) {
                    self.tiles[index] = Some(color);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, face: &FontFace, x: i32, y: i32, color: Rgba) {
        let bounds = face.bounds(text);
        let cell_height = TILE_SIZE * TILES_PER_ROW;

        let spacing = ((face.advance() / f64::from(TILE_SIZE)).round() as i32).max(1);
        let span = UnicodeWidthStr::width(text) as i32 * spacing;
        let center = f64::from(x) + f64::from(bounds.width) / 2.0;
        let column = (center / f64::from(TILE_SIZE) - f64::from(span) / 2.0).round() as i32;
        let row = (y - bounds.ascent / 2).div_euclid(cell_height);

        self.labels.push(Label {
            text: text.to_owned(),
            column,
            row,
            spacing,
            color,
        });
    }
}

impl Widget for &TerminalCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (origin_x, origin_y) = TerminalCanvas::origin(area);
        let background = to_color(self.background);
        let columns = TERMINAL_COLUMNS.min(area.width);
        let rows = TERMINAL_ROWS.min(area.height);

        for row in 0..rows {
            for column in 0..columns {
                let x = i32::from(column);
                let top = i32::from(row) * TILES_PER_ROW;
                let upper = self.tile_color(Tile::new(x, top)).map_or(background, to_color);
                let lower = self
                    .tile_color(Tile::new(x, top + 1))
                    .map_or(background, to_color);

                if let Some(cell) = buf.cell_mut((origin_x + column, origin_y + row)) {
                    cell.set_symbol(GLYPH_HALF_UPPER).set_fg(upper).set_bg(lower);
                }
            }
        }

        for label in &self.labels {
            let Ok(row) = u16::try_from(label.row) else {
                continue;
            };
            if row >= rows {
                continue;
            }

            for (offset, ch) in label.text.chars().enumerate() {
                let Ok(column) = u16::try_from(label.column + offset as i32 * label.spacing)
                else {
                    continue;
                };
                if column >= columns {
                    continue;
                }

                if let Some(cell) = buf.cell_mut((origin_x + column, origin_y + row)) {
                    cell.set_char(ch)
                        .set_fg(to_color(label.color))
                        .set_bg(background);
                }
            }
        }
    }
}

fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
