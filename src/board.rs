use log::debug;
use rand::Rng;

use crate::config::{GridSize, HUD_ROWS, INITIAL_SNAKE_LEN};
use crate::food::{FoodSet, spawn_position};
use crate::snake::Snake;
use crate::tile::Tile;

/// Head position of the snake at the start of every round.
pub const SNAKE_START: Tile = Tile::new(3, 3);

/// Dense one-bit-per-tile index over walls, snake and food.
///
/// Not a source of truth: [`Board`] updates it in the same call that changes
/// any of the three contributors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OccupancyMap {
    bounds: GridSize,
    cells: Vec<bool>,
    spawn_occupied: usize,
}

impl OccupancyMap {
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self {
            bounds,
            cells: vec![false; bounds.total_cells()],
            spawn_occupied: 0,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns whether `tile` is flagged. Tiles outside the grid are never flagged.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        tile.index(self.bounds)
            .is_some_and(|index| self.cells[index])
    }

    /// Flags `tile`, returning true when it was previously clear.
    pub fn insert(&mut self, tile: Tile) -> bool {
        let Some(index) = tile.index(self.bounds) else {
            return false;
        };
        if self.cells[index] {
            return false;
        }

        self.cells[index] = true;
        if tile.y >= HUD_ROWS {
            self.spawn_occupied += 1;
        }
        true
    }

    /// Clears `tile`, returning true when it was previously flagged.
    pub fn remove(&mut self, tile: Tile) -> bool {
        let Some(index) = tile.index(self.bounds) else {
            return false;
        };
        if !self.cells[index] {
            return false;
        }

        self.cells[index] = false;
        if tile.y >= HUD_ROWS {
            self.spawn_occupied -= 1;
        }
        true
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.spawn_occupied = 0;
    }

    /// Number of flagged tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unflagged tiles left in the food spawn region (rows below the HUD band).
    #[must_use]
    pub fn free_spawn_cells(&self) -> usize {
        spawn_region_cells(self.bounds) - self.spawn_occupied
    }

    /// Iterates over every flagged tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let width = usize::from(self.bounds.width);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, flagged)| **flagged)
            .map(move |(index, _)| Tile::new((index % width) as i32, (index / width) as i32))
    }
}

fn spawn_region_cells(bounds: GridSize) -> usize {
    let rows = usize::from(bounds.height).saturating_sub(HUD_ROWS as usize);
    usize::from(bounds.width) * rows
}

/// Rectangular wall frame enclosing the play area below the HUD band.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Walls {
    bounds: GridSize,
    tiles: Vec<Tile>,
}

impl Walls {
    /// Builds the top row at `y = HUD_ROWS`, the bottom row, and both side columns.
    #[must_use]
    pub fn frame(bounds: GridSize) -> Self {
        let width = i32::from(bounds.width);
        let height = i32::from(bounds.height);

        let mut tiles = Vec::new();
        for x in 0..width {
            tiles.push(Tile::new(x, HUD_ROWS));
            tiles.push(Tile::new(x, height - 1));
        }
        for y in HUD_ROWS + 1..height - 1 {
            tiles.push(Tile::new(0, y));
            tiles.push(Tile::new(width - 1, y));
        }

        Self { bounds, tiles }
    }

    /// Constant-time membership test derived from the frame geometry.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        let width = i32::from(self.bounds.width);
        let height = i32::from(self.bounds.height);

        if !tile.is_within_bounds(self.bounds) || tile.y < HUD_ROWS {
            return false;
        }

        tile.y == HUD_ROWS || tile.y == height - 1 || tile.x == 0 || tile.x == width - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// What the snake would run into at a given tile.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Contact {
    Free,
    Food,
    Wall,
    Body,
}

/// Walls, snake and food fused behind a single occupancy index.
#[derive(Debug, Clone)]
pub struct Board {
    walls: Walls,
    snake: Snake,
    food: FoodSet,
    occupancy: OccupancyMap,
}

impl Board {
    /// Builds the walls and the starting snake. No food is placed yet.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        let mut board = Self {
            walls: Walls::frame(bounds),
            snake: Snake::horizontal(SNAKE_START, INITIAL_SNAKE_LEN),
            food: FoodSet::default(),
            occupancy: OccupancyMap::new(bounds),
        };
        board.rebuild_occupancy();
        board
    }

    /// Restores the starting snake, clears food and spawns one item.
    ///
    /// Returns the spawned food tile, or `None` if no tile was free.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        self.snake = Snake::horizontal(SNAKE_START, INITIAL_SNAKE_LEN);
        self.food = FoodSet::default();
        self.rebuild_occupancy();
        self.spawn_food(rng)
    }

    fn rebuild_occupancy(&mut self) {
        self.occupancy.clear();
        for tile in self.walls.iter().chain(self.snake.segments()) {
            self.occupancy.insert(*tile);
        }
        for tile in self.food.iter() {
            self.occupancy.insert(*tile);
        }
    }

    /// Classifies `tile` in constant time.
    ///
    /// Food is only looked up for occupied tiles, so the common free path never
    /// scans the food set.
    #[must_use]
    pub fn classify(&self, tile: Tile) -> Contact {
        if !self.occupancy.contains(tile) {
            if tile.is_within_bounds(self.bounds()) {
                return Contact::Free;
            }
            return Contact::Wall;
        }

        if self.food.contains(tile) {
            Contact::Food
        } else if self.walls.contains(tile) {
            Contact::Wall
        } else {
            Contact::Body
        }
    }

    /// Moves the snake onto the free tile `new_head`, releasing the tail.
    pub fn slide_to(&mut self, new_head: Tile) {
        debug_assert_eq!(self.classify(new_head), Contact::Free);

        if let Some(tail) = self.snake.pop_tail() {
            self.occupancy.remove(tail);
        }
        self.snake.push_head(new_head);
        self.occupancy.insert(new_head);
    }

    /// Eats the food at `new_head`, growing by one cell.
    ///
    /// The eaten tile keeps its occupancy flag: the snake now covers it.
    pub fn grow_to(&mut self, new_head: Tile) {
        debug_assert_eq!(self.classify(new_head), Contact::Food);

        self.food.remove(new_head);
        self.snake.push_head(new_head);
    }

    /// Places one food item on a uniformly sampled free tile.
    pub fn spawn_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        let tile = spawn_position(rng, &self.occupancy)?;
        self.food.insert(tile);
        self.occupancy.insert(tile);
        debug!("food spawned at ({}, {})", tile.x, tile.y);
        Some(tile)
    }

    /// Removes every food item.
    pub fn clear_food(&mut self) {
        for tile in self.food.drain() {
            self.occupancy.remove(tile);
        }
    }

    /// Puts food on `tile` if it is free and inside the spawn region.
    pub fn place_food(&mut self, tile: Tile) -> bool {
        if tile.y < HUD_ROWS || self.classify(tile) != Contact::Free {
            return false;
        }

        self.food.insert(tile);
        self.occupancy.insert(tile);
        true
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.occupancy.bounds()
    }

    #[must_use]
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> &FoodSet {
        &self.food
    }

    #[must_use]
    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::{GRID, GridSize};
    use crate::tile::Tile;

    use super::{Board, Contact, OccupancyMap, Walls};

    fn union_of_contributors(board: &Board) -> HashSet<Tile> {
        board
            .walls()
            .iter()
            .chain(board.snake().segments())
            .chain(board.food().iter())
            .copied()
            .collect()
    }

    #[test]
    fn walls_frame_the_play_area_below_hud() {
        let walls = Walls::frame(GRID);

        assert!(walls.contains(Tile::new(10, 2)));
        assert!(walls.contains(Tile::new(10, 47)));
        assert!(walls.contains(Tile::new(0, 20)));
        assert!(walls.contains(Tile::new(63, 20)));
        assert!(!walls.contains(Tile::new(0, 1)));
        assert!(!walls.contains(Tile::new(5, 5)));

        let listed: HashSet<Tile> = walls.iter().copied().collect();
        assert_eq!(listed.len(), walls.len());
        assert!(listed.iter().all(|tile| walls.contains(*tile)));
        // 64 + 64 top and bottom rows, 44 + 44 side cells between them.
        assert_eq!(walls.len(), 64 * 2 + 44 * 2);
    }

    #[test]
    fn reset_populates_occupancy_from_walls_snake_and_food() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(GRID);
        let food = board.reset(&mut rng).expect("empty board has room for food");

        assert_eq!(board.food().len(), 1);
        assert!(board.food().contains(food));
        assert_eq!(
            board.occupancy().tiles().collect::<HashSet<_>>(),
            union_of_contributors(&board)
        );
    }

    #[test]
    fn classify_distinguishes_every_contact() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut board = Board::new(GRID);
        board.reset(&mut rng);
        board.clear_food();
        assert!(board.place_food(Tile::new(10, 10)));

        assert_eq!(board.classify(Tile::new(4, 3)), Contact::Free);
        assert_eq!(board.classify(Tile::new(10, 10)), Contact::Food);
        assert_eq!(board.classify(Tile::new(0, 3)), Contact::Wall);
        assert_eq!(board.classify(Tile::new(2, 3)), Contact::Body);
    }

    #[test]
    fn slide_and_grow_keep_occupancy_in_lockstep() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(GRID);
        board.reset(&mut rng);
        board.clear_food();
        assert!(board.place_food(Tile::new(5, 3)));

        board.slide_to(Tile::new(4, 3));
        assert!(!board.occupancy().contains(Tile::new(1, 3)));
        assert_eq!(board.snake().len(), 3);

        board.grow_to(Tile::new(5, 3));
        assert_eq!(board.snake().len(), 4);
        assert!(board.food().is_empty());
        assert!(board.occupancy().contains(Tile::new(5, 3)));
        assert_eq!(
            board.occupancy().tiles().collect::<HashSet<_>>(),
            union_of_contributors(&board)
        );
    }

    #[test]
    fn place_food_rejects_occupied_and_hud_tiles() {
        let mut board = Board::new(GRID);

        assert!(!board.place_food(Tile::new(3, 3)));
        assert!(!board.place_food(Tile::new(0, 10)));
        assert!(!board.place_food(Tile::new(10, 1)));
        assert!(board.place_food(Tile::new(10, 10)));
    }

    #[test]
    fn free_spawn_cells_tracks_inserts_and_removals() {
        let bounds = GridSize {
            width: 3,
            height: 4,
        };
        let mut occupancy = OccupancyMap::new(bounds);
        assert_eq!(occupancy.free_spawn_cells(), 6);

        assert!(occupancy.insert(Tile::new(1, 2)));
        assert!(!occupancy.insert(Tile::new(1, 2)));
        assert!(occupancy.insert(Tile::new(1, 0)));
        assert_eq!(occupancy.free_spawn_cells(), 5);
        assert_eq!(occupancy.len(), 2);

        assert!(occupancy.remove(Tile::new(1, 2)));
        assert!(!occupancy.remove(Tile::new(1, 2)));
        assert_eq!(occupancy.free_spawn_cells(), 6);
    }
}
