use crate::config::PROJECTILE_LIFE_TICKS;
use crate::game::types::{Direction, Position};

/// Skill-spawned projectile. Moves one cell per tick, only ever collides with food.
#[derive(Clone, Copy, Debug)]
pub struct Projectile {
    pub pos: Position,
    pub dir: Direction,
    pub life: u32,
}

impl Projectile {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self {
            pos,
            dir,
            life: PROJECTILE_LIFE_TICKS,
        }
    }

    pub fn advance(&mut self) {
        self.pos = self.pos.step(self.dir);
        self.life = self.life.saturating_sub(1);
    }

    pub fn expired(&self) -> bool {
        self.life == 0 || !self.pos.on_board()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COLS;

    #[test]
    fn advances_one_cell_per_tick() {
        let mut p = Projectile::new(Position::new(5, 5), Direction::Right);
        p.advance();
        assert_eq!(p.pos, Position::new(6, 5));
        assert_eq!(p.life, PROJECTILE_LIFE_TICKS - 1);
    }

    #[test]
    fn expires_when_lifetime_runs_out() {
        let mut p = Projectile::new(Position::new(0, 10), Direction::Up);
        // Keep it on the board: bounce inside the column.
        for _ in 0..PROJECTILE_LIFE_TICKS {
            assert!(!p.expired());
            if p.pos.y == 0 {
                p.dir = Direction::Down;
            }
            p.advance();
        }
        assert!(p.expired());
    }

    #[test]
    fn expires_off_board() {
        let mut p = Projectile::new(Position::new(COLS - 1, 5), Direction::Right);
        p.advance();
        assert!(p.expired());
    }
}
