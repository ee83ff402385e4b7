use rand::Rng;

use crate::board::OccupancyMap;
use crate::config::HUD_ROWS;
use crate::tile::Tile;

/// Food tiles currently on the board.
///
/// The game keeps at most one item alive, but nothing here depends on that.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FoodSet {
    tiles: Vec<Tile>,
}

impl FoodSet {
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    pub(crate) fn insert(&mut self, tile: Tile) {
        if !self.contains(tile) {
            self.tiles.push(tile);
        }
    }

    /// Removes `tile`, returning whether it was present.
    pub(crate) fn remove(&mut self, tile: Tile) -> bool {
        let Some(index) = self.tiles.iter().position(|food| *food == tile) else {
            return false;
        };

        self.tiles.swap_remove(index);
        true
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.drain(..)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

/// Samples a free tile uniformly from the spawn region by rejection.
///
/// The spawn region covers every column and the rows below the HUD band.
/// Returns `None` when the region has no free tile left, which is the only
/// case where sampling could not terminate.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, occupancy: &OccupancyMap) -> Option<Tile> {
    if occupancy.free_spawn_cells() == 0 {
        return None;
    }

    let bounds = occupancy.bounds();
    loop {
        let candidate = Tile::new(
            rng.gen_range(0..i32::from(bounds.width)),
            rng.gen_range(HUD_ROWS..i32::from(bounds.height)),
        );

        if !occupancy.contains(candidate) {
            return Some(candidate);
        }
    }
}
