use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tile::Direction;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    H,
    J,
    K,
    L,
    Q,
    /// The `=` key, which carries `+` when shifted.
    Equal,
    Minus,
    Space,
}

impl Key {
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Direction or speed change requested by one snapshot.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Steering {
    Turn(Direction),
    Faster,
    Slower,
}

/// Steering keys in the order they are examined. The first pressed key wins.
const STEERING_PRIORITY: [(Key, Steering); 10] = [
    (Key::ArrowUp, Steering::Turn(Direction::UP)),
    (Key::ArrowDown, Steering::Turn(Direction::DOWN)),
    (Key::ArrowLeft, Steering::Turn(Direction::LEFT)),
    (Key::ArrowRight, Steering::Turn(Direction::RIGHT)),
    (Key::K, Steering::Turn(Direction::UP)),
    (Key::J, Steering::Turn(Direction::DOWN)),
    (Key::H, Steering::Turn(Direction::LEFT)),
    (Key::L, Steering::Turn(Direction::RIGHT)),
    (Key::Equal, Steering::Faster),
    (Key::Minus, Steering::Slower),
];

/// Keys that went down since the previous `advance`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InputSnapshot {
    pressed: u16,
}

impl InputSnapshot {
    /// Snapshot with nothing pressed.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot with exactly the given keys pressed.
    #[must_use]
    pub fn of(keys: &[Key]) -> Self {
        let mut snapshot = Self::default();
        for key in keys {
            snapshot.press(*key);
        }
        snapshot
    }

    pub fn press(&mut self, key: Key) {
        self.pressed |= key.bit();
    }

    #[must_use]
    pub fn just_pressed(self, key: Key) -> bool {
        self.pressed & key.bit() != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.pressed == 0
    }

    /// Returns the single steering action this snapshot asks for.
    ///
    /// Arrows come before vi keys, which come before speed keys. Later
    /// pressed keys are ignored even if the winning turn is later rejected.
    #[must_use]
    pub fn steering(self) -> Option<Steering> {
        STEERING_PRIORITY
            .iter()
            .find(|(key, _)| self.just_pressed(*key))
            .map(|(_, steering)| *steering)
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps a terminal key event onto a game key.
#[must_use]
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    // Raw mode delivers Ctrl+C as a key press instead of a signal.
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Q),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'h' => Some(Key::H),
            'j' => Some(Key::J),
            'k' => Some(Key::K),
            'l' => Some(Key::L),
            'q' => Some(Key::Q),
            '=' | '+' => Some(Key::Equal),
            '-' => Some(Key::Minus),
            ' ' => Some(Key::Space),
            _ => None,
        },
        _ => None,
    }
}

/// Collects terminal key presses into per-tick snapshots.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Gathers every key press that arrives before `deadline`.
    ///
    /// Always drains events that are already queued, even when `deadline`
    /// has passed.
    pub fn collect_until(&mut self, deadline: Instant) -> io::Result<InputSnapshot> {
        let mut snapshot = InputSnapshot::empty();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }

            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = key_from_event(key_event) {
                    snapshot.press(key);
                }
            }
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use crate::tile::Direction;

    use super::{InputSnapshot, Key, Steering, direction_change_is_valid, key_from_event};

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::UP, Direction::DOWN));
        assert!(!direction_change_is_valid(Direction::DOWN, Direction::UP));
        assert!(!direction_change_is_valid(
            Direction::LEFT,
            Direction::RIGHT
        ));
        assert!(!direction_change_is_valid(
            Direction::RIGHT,
            Direction::LEFT
        ));

        assert!(direction_change_is_valid(Direction::UP, Direction::LEFT));
        assert!(direction_change_is_valid(Direction::UP, Direction::UP));
    }

    #[test]
    fn arrows_win_over_vi_keys_and_speed_keys() {
        let snapshot = InputSnapshot::of(&[Key::Equal, Key::H, Key::ArrowDown]);
        assert_eq!(
            snapshot.steering(),
            Some(Steering::Turn(Direction::DOWN))
        );

        let snapshot = InputSnapshot::of(&[Key::Minus, Key::L]);
        assert_eq!(
            snapshot.steering(),
            Some(Steering::Turn(Direction::RIGHT))
        );

        let snapshot = InputSnapshot::of(&[Key::Minus, Key::Equal]);
        assert_eq!(snapshot.steering(), Some(Steering::Faster));
    }

    #[test]
    fn up_wins_over_down_and_left_over_right() {
        let snapshot = InputSnapshot::of(&[Key::ArrowDown, Key::ArrowUp]);
        assert_eq!(snapshot.steering(), Some(Steering::Turn(Direction::UP)));

        let snapshot = InputSnapshot::of(&[Key::ArrowRight, Key::ArrowLeft]);
        assert_eq!(
            snapshot.steering(),
            Some(Steering::Turn(Direction::LEFT))
        );
    }

    #[test]
    fn space_and_quit_do_not_steer() {
        let snapshot = InputSnapshot::of(&[Key::Space, Key::Q]);

        assert_eq!(snapshot.steering(), None);
        assert!(snapshot.just_pressed(Key::Space));
        assert!(!InputSnapshot::empty().just_pressed(Key::Space));
    }

    #[test]
    fn terminal_keys_map_to_game_keys() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(key_from_event(press(KeyCode::Up)), Some(Key::ArrowUp));
        assert_eq!(key_from_event(press(KeyCode::Char('K'))), Some(Key::K));
        assert_eq!(key_from_event(press(KeyCode::Char('+'))), Some(Key::Equal));
        assert_eq!(key_from_event(press(KeyCode::Char('='))), Some(Key::Equal));
        assert_eq!(key_from_event(press(KeyCode::Char(' '))), Some(Key::Space));
        assert_eq!(key_from_event(press(KeyCode::Char('x'))), None);
        assert_eq!(
            key_from_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Q)
        );

        let mut release = press(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(key_from_event(release), None);
    }
}
