use crate::config::{COLS, ROWS};
use crate::game::skins::SkinKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn on_board(self) -> bool {
        self.x >= 0 && self.x < COLS && self.y >= 0 && self.y < ROWS
    }

    /// Wraps an out-of-bounds position to the opposite edge, one axis at a time.
    pub fn wrapped(self) -> Self {
        let mut p = self;
        if p.x < 0 {
            p.x = COLS - 1;
        } else if p.x >= COLS {
            p.x = 0;
        }
        if p.y < 0 {
            p.y = ROWS - 1;
        } else if p.y >= ROWS {
            p.y = 0;
        }
        p
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    GameOver,
}

/// Observable state handed to the presentation layer once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    pub skill_value: u32,
    pub selected_skin: SkinKey,
    pub combo: u32,
    pub combo_timer: u32,
}

/// Discrete notifications drained by the presentation layer (sons, particules).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten { combo: u32 },
    SkillReady,
    SkillActivated,
    SkillExpired,
    Dodged,
    ProjectileHit,
    GameOver { new_high_score: Option<u32> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_cancel_out() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn step_moves_one_cell() {
        let p = Position::new(5, 15);
        assert_eq!(p.step(Direction::Right), Position::new(6, 15));
        assert_eq!(p.step(Direction::Up), Position::new(5, 14));
    }

    #[test]
    fn wrap_sends_to_opposite_edge() {
        assert_eq!(Position::new(-1, 10).wrapped(), Position::new(COLS - 1, 10));
        assert_eq!(Position::new(COLS, 10).wrapped(), Position::new(0, 10));
        assert_eq!(Position::new(4, -1).wrapped(), Position::new(4, ROWS - 1));
        assert_eq!(Position::new(4, ROWS).wrapped(), Position::new(4, 0));
    }

    #[test]
    fn board_bounds() {
        assert!(Position::new(0, 0).on_board());
        assert!(Position::new(COLS - 1, ROWS - 1).on_board());
        assert!(!Position::new(COLS, 0).on_board());
        assert!(!Position::new(0, -1).on_board());
    }
}
