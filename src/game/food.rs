use macroquad::rand::gen_range;

use crate::config::{COLS, ROWS};
use crate::game::types::Position;

/// Picks a random cell not occupied by the snake body.
pub fn spawn(body: &[Position]) -> Position {
    loop {
        let p = Position::new(gen_range(0, COLS), gen_range(0, ROWS));
        if !body.contains(&p) {
            return p;
        }
    }
}

/// One attraction step toward the head. X axis first, then Y.
pub fn attract_step(food: &mut Position, head: Position) {
    let dx = head.x - food.x;
    let dy = head.y - food.y;
    if dx != 0 {
        food.x += dx.signum();
    } else if dy != 0 {
        food.y += dy.signum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::rand::srand;

    #[test]
    fn never_spawns_on_body() {
        srand(7);
        let body: Vec<Position> = (0..COLS).map(|x| Position::new(x, 10)).collect();
        for _ in 0..500 {
            let p = spawn(&body);
            assert!(p.on_board());
            assert!(!body.contains(&p));
        }
    }

    #[test]
    fn attraction_prefers_x_axis() {
        let head = Position::new(10, 10);
        let mut food = Position::new(14, 13);
        attract_step(&mut food, head);
        assert_eq!(food, Position::new(13, 13));
    }

    #[test]
    fn attraction_falls_back_to_y_axis() {
        let head = Position::new(10, 10);
        let mut food = Position::new(10, 4);
        attract_step(&mut food, head);
        assert_eq!(food, Position::new(10, 5));
    }

    #[test]
    fn attraction_stops_on_the_head_cell() {
        let head = Position::new(3, 3);
        let mut food = Position::new(3, 3);
        attract_step(&mut food, head);
        assert_eq!(food, head);
    }
}
