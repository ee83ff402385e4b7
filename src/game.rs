use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Board, Contact};
use crate::config::{GRID, INITIAL_SPEED, MAX_SPEED, MIN_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::{InputSnapshot, Key, Steering, direction_change_is_valid};
use crate::score::HighScore;
use crate::tile::Direction;

/// Top-level screen the game is showing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Home,
    Playing,
    Paused,
    GameOver,
}

/// Why the last round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundEnd {
    WallCollision,
    SelfCollision,
    /// No free tile was left for the next food item.
    BoardFilled,
}

/// What the host should do after an `advance`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[must_use]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-only projection handed to the presenter.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub phase: Phase,
    pub board: &'a Board,
    pub score: u32,
    pub high_score: u32,
    pub speed: u32,
    pub round_end: Option<RoundEnd>,
}

impl GameView<'_> {
    /// False once the round has ended; the snake is drawn dead.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase != Phase::GameOver
    }
}

/// Complete mutable game state for one process.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    phase: Phase,
    direction: Direction,
    speed: u32,
    tick: u64,
    score: u32,
    high_score: HighScore,
    round_end: Option<RoundEnd>,
    tps: u32,
    rng: StdRng,
}

impl GameState {
    /// Creates a game on the home screen, seeding food placement from the wall clock.
    #[must_use]
    pub fn new(tps: u32) -> Self {
        Self::new_with_seed(tps, wall_clock_seed())
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(tps: u32, seed: u64) -> Self {
        let mut state = Self {
            board: Board::new(GRID),
            phase: Phase::Home,
            direction: Direction::RIGHT,
            speed: INITIAL_SPEED,
            tick: 0,
            score: 0,
            high_score: HighScore::default(),
            round_end: None,
            tps: tps.max(1),
            rng: StdRng::seed_from_u64(seed),
        };
        state.reset_round();
        state
    }

    /// Applies one tick worth of input and, when due, one simulation step.
    pub fn advance(&mut self, input: &InputSnapshot) -> Flow {
        if input.just_pressed(Key::Q) {
            info!("quit requested");
            return Flow::Quit;
        }

        // A Space press that changes phase consumes the whole call.
        if input.just_pressed(Key::Space) {
            match self.phase {
                Phase::Home => {
                    self.reset_round();
                    self.set_phase(Phase::Playing);
                    info!("round started");
                }
                Phase::Playing => self.set_phase(Phase::Paused),
                Phase::Paused => self.set_phase(Phase::Playing),
                Phase::GameOver => {
                    self.reset_round();
                    self.set_phase(Phase::Home);
                }
            }
            return Flow::Continue;
        }

        if self.phase != Phase::Playing {
            return Flow::Continue;
        }

        self.tick += 1;
        match input.steering() {
            Some(Steering::Turn(direction)) => {
                if direction_change_is_valid(self.direction, direction) {
                    self.direction = direction;
                }
            }
            Some(Steering::Faster) => self.speed_up(),
            Some(Steering::Slower) => self.slow_down(),
            None => {}
        }

        if self.tick % self.step_period() == 0 {
            self.step();
        }

        Flow::Continue
    }

    /// Read-only access for the presenter.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            phase: self.phase,
            board: &self.board,
            score: self.score,
            high_score: self.high_score.value(),
            speed: self.speed,
            round_end: self.round_end,
        }
    }

    /// Logical resolution, independent of the outer window size.
    #[must_use]
    pub fn layout(&self, _outer_width: u32, _outer_height: u32) -> (i32, i32) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Ticks between two steps at the current speed, never zero.
    #[must_use]
    pub fn step_period(&self) -> u64 {
        u64::from((self.tps / self.speed).max(1))
    }

    fn step(&mut self) {
        let new_head = self.board.snake().head() + self.direction;

        match self.board.classify(new_head) {
            Contact::Free => self.board.slide_to(new_head),
            Contact::Food => {
                self.board.grow_to(new_head);
                self.add_point();
                self.speed_up();
                if self.board.spawn_food(&mut self.rng).is_none() {
                    warn!("no free tile left for food");
                    self.end_round(RoundEnd::BoardFilled);
                }
            }
            Contact::Wall => self.end_round(RoundEnd::WallCollision),
            Contact::Body => self.end_round(RoundEnd::SelfCollision),
        }
    }

    fn reset_round(&mut self) {
        if self.board.reset(&mut self.rng).is_none() {
            warn!("board reset left no room for food");
        }
        self.direction = Direction::RIGHT;
        self.speed = INITIAL_SPEED;
        self.tick = 0;
        self.score = 0;
        self.round_end = None;
        self.high_score.record(self.score);
    }

    fn end_round(&mut self, reason: RoundEnd) {
        self.round_end = Some(reason);
        self.set_phase(Phase::GameOver);
        info!(
            "round ended: {reason:?}, score {}, high score {}",
            self.score,
            self.high_score.value()
        );
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("phase {:?} -> {phase:?}", self.phase);
        self.phase = phase;
    }

    fn add_point(&mut self) {
        self.score += 1;
        if self.high_score.record(self.score) {
            debug!("high score is now {}", self.score);
        }
    }

    fn speed_up(&mut self) {
        self.speed = (self.speed + 1).min(MAX_SPEED);
        debug!("speed {}", self.speed);
    }

    fn slow_down(&mut self) {
        self.speed = self.speed.saturating_sub(1).max(MIN_SPEED);
        debug!("speed {}", self.speed);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score.value()
    }

    #[must_use]
    pub fn round_end(&self) -> Option<RoundEnd> {
        self.round_end
    }

    #[must_use]
    pub fn tps(&self) -> u32 {
        self.tps
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for placing food by hand.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Seed derived from the current time.
#[must_use]
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::config::{INITIAL_SPEED, MAX_SPEED, MIN_SPEED};
    use crate::input::{InputSnapshot, Key};
    use crate::tile::{Direction, Tile};

    use super::{Flow, GameState, Phase};

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(60, seed);
        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        state.board_mut().clear_food();
        state
    }

    fn idle(state: &mut GameState, ticks: usize) {
        for _ in 0..ticks {
            let _ = state.advance(&InputSnapshot::empty());
        }
    }

    #[test]
    fn starts_on_home_screen_with_food() {
        let state = GameState::new_with_seed(60, 1);

        assert_eq!(state.phase(), Phase::Home);
        assert_eq!(state.board().food().len(), 1);
        assert_eq!(state.tick(), 0);
    }

    #[test]
    fn home_screen_does_not_tick() {
        let mut state = GameState::new_with_seed(60, 1);
        idle(&mut state, 100);

        assert_eq!(state.tick(), 0);
        assert_eq!(state.board().snake().head(), Tile::new(3, 3));
    }

    #[test]
    fn step_fires_every_twelfth_tick_at_speed_five() {
        let mut state = playing(2);
        assert_eq!(state.step_period(), 12);

        idle(&mut state, 11);
        assert_eq!(state.board().snake().head(), Tile::new(3, 3));

        idle(&mut state, 1);
        assert_eq!(state.board().snake().head(), Tile::new(4, 3));

        idle(&mut state, 12);
        assert_eq!(state.board().snake().head(), Tile::new(5, 3));
    }

    #[test]
    fn step_period_never_reaches_zero() {
        let mut state = GameState::new_with_seed(3, 3);
        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        assert_eq!(state.step_period(), 1);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut state = playing(4);

        let _ = state.advance(&InputSnapshot::of(&[Key::ArrowLeft]));
        assert_eq!(state.direction(), Direction::RIGHT);

        let _ = state.advance(&InputSnapshot::of(&[Key::J]));
        assert_eq!(state.direction(), Direction::DOWN);
    }

    #[test]
    fn rejected_turn_still_claims_the_snapshot() {
        let mut state = playing(5);

        let _ = state.advance(&InputSnapshot::of(&[Key::ArrowLeft, Key::K]));
        assert_eq!(state.direction(), Direction::RIGHT);
    }

    #[test]
    fn speed_keys_saturate_at_both_ends() {
        // High tick rate keeps the snake away from the walls while pressing.
        let mut state = GameState::new_with_seed(6000, 6);
        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));

        for _ in 0..100 {
            let _ = state.advance(&InputSnapshot::of(&[Key::Equal]));
        }
        assert_eq!(state.speed(), MAX_SPEED);

        for _ in 0..100 {
            let _ = state.advance(&InputSnapshot::of(&[Key::Minus]));
        }
        assert_eq!(state.speed(), MIN_SPEED);
    }

    #[test]
    fn quit_is_reported_from_every_phase() {
        let mut state = GameState::new_with_seed(60, 7);
        assert_eq!(state.advance(&InputSnapshot::of(&[Key::Q])), Flow::Quit);

        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        assert_eq!(
            state.advance(&InputSnapshot::of(&[Key::Space, Key::Q])),
            Flow::Quit
        );
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn space_cycles_between_playing_and_paused() {
        let mut state = playing(8);
        idle(&mut state, 5);

        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        assert_eq!(state.phase(), Phase::Paused);
        assert_eq!(state.tick(), 5);

        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.tick(), 5);
    }

    #[test]
    fn wall_collision_ends_round_and_continue_returns_home() {
        let mut state = playing(9);
        let _ = state.advance(&InputSnapshot::of(&[Key::ArrowUp]));
        idle(&mut state, 11);

        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.round_end(), Some(super::RoundEnd::WallCollision));
        assert!(!state.view().is_playing());

        let _ = state.advance(&InputSnapshot::of(&[Key::Space]));
        assert_eq!(state.phase(), Phase::Home);
        assert_eq!(state.speed(), INITIAL_SPEED);
        assert_eq!(state.round_end(), None);
        assert_eq!(state.board().snake().head(), Tile::new(3, 3));
    }

    #[test]
    fn layout_is_fixed() {
        let state = GameState::new_with_seed(60, 10);
        assert_eq!(state.layout(1920, 1080), (640, 480));
        assert_eq!(state.layout(1, 1), (640, 480));
    }
}
