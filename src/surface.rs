use crate::font::FontFace;
use crate::theme::Rgba;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Drawing primitives the presenter needs from a backend.
pub trait Surface {
    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba, antialias: bool);

    /// Draws `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, face: &FontFace, x: i32, y: i32, color: Rgba);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: PixelRect,
        color: Rgba,
        antialias: bool,
    },
    Text {
        text: String,
        size: f64,
        x: i32,
        y: i32,
        color: Rgba,
    },
}

/// Surface that records commands instead of drawing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded rectangles filled with `color`.
    pub fn rects_with(&self, color: Rgba) -> impl Iterator<Item = PixelRect> + '_ {
        self.commands.iter().filter_map(move |command| match command {
            DrawCommand::Rect {
                rect, color: fill, ..
            } if *fill == color => Some(*rect),
            _ => None,
        })
    }

    /// Recorded text with its baseline origin.
    pub fn texts(&self) -> impl Iterator<Item = (&str, i32, i32)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            DrawCommand::Rect { .. } => None,
        })
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba, antialias: bool) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            antialias,
        });
    }

    fn draw_text(&mut self, text: &str, face: &FontFace, x: i32, y: i32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            size: face.size(),
            x,
            y,
            color,
        });
    }
}
