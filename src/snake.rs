use std::collections::VecDeque;

use crate::tile::Tile;

/// Ordered snake body, head at the front.
///
/// The snake only stores cells. Direction, growth and collision live with the
/// board and the game state, which keep the occupancy map in step with every
/// push and pop made here.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Tile>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Tile>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Horizontal snake of `len` cells with its head at `head`, body trailing left.
    #[must_use]
    pub fn horizontal(head: Tile, len: usize) -> Self {
        let body = (0..len.max(1))
            .map(|offset| Tile::new(head.x - offset as i32, head.y))
            .collect();

        Self { body }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Tile {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Tile {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Pushes a new head cell.
    pub(crate) fn push_head(&mut self, tile: Tile) {
        self.body.push_front(tile);
    }

    /// Pops the tail cell, keeping at least one segment.
    pub(crate) fn pop_tail(&mut self) -> Option<Tile> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_back()
    }

    /// Returns true if any segment occupies `tile`. Linear; gameplay uses the
    /// occupancy map instead.
    #[must_use]
    pub fn occupies(&self, tile: Tile) -> bool {
        self.body.contains(&tile)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Tile> {
        self.body.iter()
    }
}
