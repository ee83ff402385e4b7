/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Colors applied to every visual element.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub snake_body: Rgba,
    /// Brighter than `snake_body` so the head stands out.
    pub snake_head: Rgba,
    /// Replaces both snake colors once the round has ended.
    pub snake_dead: Rgba,
    pub food: Rgba,
    pub wall: Rgba,
    pub text: Rgba,
    pub background: Rgba,
}

/// The only palette the game ships with.
pub const CLASSIC: Palette = Palette {
    snake_body: Rgba::opaque(0, 135, 0),
    snake_head: Rgba::opaque(0, 255, 0),
    snake_dead: Rgba::opaque(150, 25, 75),
    food: Rgba::opaque(200, 0, 0),
    wall: Rgba::opaque(105, 105, 105),
    text: Rgba::opaque(255, 255, 255),
    background: Rgba::opaque(0, 0, 0),
};

#[cfg(test)]
mod tests {
    use super::{CLASSIC, Rgba};

    #[test]
    fn head_is_brighter_than_body() {
        assert!(CLASSIC.snake_head.g > CLASSIC.snake_body.g);
    }

    #[test]
    fn palette_is_fully_opaque() {
        let colors = [
            CLASSIC.snake_body,
            CLASSIC.snake_head,
            CLASSIC.snake_dead,
            CLASSIC.food,
            CLASSIC.wall,
            CLASSIC.text,
        ];

        assert!(colors.iter().all(|color| color.a == 255));
        assert_eq!(CLASSIC.wall, Rgba::opaque(105, 105, 105));
    }
}
