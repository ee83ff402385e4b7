use std::ops::{Add, Neg};

use crate::config::GridSize;

/// Grid cell in logical tile coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the tile lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Row-major index into a dense grid, or `None` outside the bounds.
    #[must_use]
    pub fn index(self, bounds: GridSize) -> Option<usize> {
        if !self.is_within_bounds(bounds) {
            return None;
        }

        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        Some(y * usize::from(bounds.width) + x)
    }
}

impl Add<Direction> for Tile {
    type Output = Tile;

    fn add(self, direction: Direction) -> Tile {
        let step = direction.delta();
        Tile::new(self.x + step.x, self.y + step.y)
    }
}

/// Unit movement vector. Never `(0, 0)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Direction(Tile);

impl Direction {
    pub const UP: Self = Self(Tile::new(0, -1));
    pub const DOWN: Self = Self(Tile::new(0, 1));
    pub const LEFT: Self = Self(Tile::new(-1, 0));
    pub const RIGHT: Self = Self(Tile::new(1, 0));

    /// All four directions in input priority order.
    pub const ALL: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    /// Offset applied to the head per step.
    #[must_use]
    pub const fn delta(self) -> Tile {
        self.0
    }

    /// Returns the reverse direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        -self
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction(Tile::new(-self.0.x, -self.0.y))
    }
}
