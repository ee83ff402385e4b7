use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::config::{FONT_DPI, TILE_SIZE};

/// Points per inch; face sizes are given in points.
const POINTS_PER_INCH: f64 = 72.0;

/// Failure to build a glyph face.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FontError {
    #[error("invalid font size {size} for {font}")]
    InvalidSize { font: &'static str, size: f64 },
    #[error("invalid font resolution {dpi} dpi for {font}")]
    InvalidDpi { font: &'static str, dpi: f64 },
    #[error("{font} has no glyph for {ch:?}")]
    MissingGlyph { font: &'static str, ch: char },
}

/// Design metrics of a monospaced bitmap-style font, in font units.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelFont {
    pub name: &'static str,
    pub units_per_em: u16,
    pub advance: u16,
    pub ascent: u16,
    pub descent: u16,
    /// Glyphs that reach below the baseline.
    pub descenders: &'static str,
}

impl PixelFont {
    /// Press Start 2P: an 8×8 pixel grid with one row below the baseline.
    pub const PRESS_START_2P: Self = Self {
        name: "Press Start 2P",
        units_per_em: 1000,
        advance: 1000,
        ascent: 875,
        descent: 125,
        descenders: "gjpqy,;",
    };

    /// The font covers printable ASCII only.
    #[must_use]
    pub fn has_glyph(self, ch: char) -> bool {
        ch == ' ' || ch.is_ascii_graphic()
    }
}

/// Hinting applied when sizing a face.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Hinting {
    None,
    /// Snap vertical metrics to whole pixels.
    Vertical,
}

/// Pixel extent of a string drawn from a baseline origin.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TextBounds {
    /// Horizontal extent from the origin.
    pub width: i32,
    /// Pixels above the baseline.
    pub ascent: i32,
    /// Pixels below the baseline; zero without descenders.
    pub descent: i32,
}

/// A font scaled to a size and resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontFace {
    font: PixelFont,
    size: f64,
    pixels_per_em: f64,
    hinting: Hinting,
}

impl FontFace {
    pub fn new(font: PixelFont, size: f64, dpi: f64, hinting: Hinting) -> Result<Self, FontError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize {
                font: font.name,
                size,
            });
        }
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(FontError::InvalidDpi {
                font: font.name,
                dpi,
            });
        }

        Ok(Self {
            font,
            size,
            pixels_per_em: size * dpi / POINTS_PER_INCH,
            hinting,
        })
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Horizontal pixels taken by one glyph.
    #[must_use]
    pub fn advance(&self) -> f64 {
        self.scale(self.font.advance)
    }

    fn scale(&self, units: u16) -> f64 {
        f64::from(units) * self.pixels_per_em / f64::from(self.font.units_per_em)
    }

    fn vertical(&self, units: u16) -> i32 {
        let pixels = self.scale(units);
        match self.hinting {
            Hinting::Vertical => pixels.round() as i32,
            Hinting::None => pixels.ceil() as i32,
        }
    }

    /// Measures `text` as drawn from a baseline origin.
    #[must_use]
    pub fn bounds(&self, text: &str) -> TextBounds {
        let columns = UnicodeWidthStr::width(text);
        if text.trim().is_empty() {
            return TextBounds {
                width: (columns as f64 * self.advance()).round() as i32,
                ..TextBounds::default()
            };
        }

        let has_descender = text.chars().any(|ch| self.font.descenders.contains(ch));
        TextBounds {
            width: (columns as f64 * self.advance()).round() as i32,
            ascent: self.vertical(self.font.ascent),
            descent: if has_descender {
                self.vertical(self.font.descent)
            } else {
                0
            },
        }
    }

    /// Fails on the first character the font cannot draw.
    pub fn check_glyphs(&self, text: &str) -> Result<(), FontError> {
        match text.chars().find(|ch| !self.font.has_glyph(*ch)) {
            Some(ch) => Err(FontError::MissingGlyph {
                font: self.font.name,
                ch,
            }),
            None => Ok(()),
        }
    }
}

/// The three faces used by the presenter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fonts {
    /// Live score and the "continue" prompt.
    pub score: FontFace,
    /// Title and "Game Over".
    pub headline: FontFace,
    /// High score and the "start" prompt.
    pub caption: FontFace,
}

impl Fonts {
    /// Builds the faces at one and two tiles in size and checks that every
    /// fixed UI string can be drawn.
    pub fn load(font: PixelFont, dpi: f64, labels: &[&str]) -> Result<Self, FontError> {
        let small = f64::from(TILE_SIZE);
        let fonts = Self {
            score: FontFace::new(font, small, dpi, Hinting::Vertical)?,
            headline: FontFace::new(font, small * 2.0, dpi, Hinting::Vertical)?,
            caption: FontFace::new(font, small, dpi, Hinting::Vertical)?,
        };

        for label in labels {
            fonts.score.check_glyphs(label)?;
        }

        Ok(fonts)
    }

    /// Press Start 2P at the default resolution.
    pub fn press_start(labels: &[&str]) -> Result<Self, FontError> {
        Self::load(PixelFont::PRESS_START_2P, FONT_DPI, labels)
    }
}
