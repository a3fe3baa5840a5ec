use macroquad::prelude::*;
use macroquad::rand::gen_range;

use crate::config::{CELL_SIZE, GAME_HEIGHT, GAME_WIDTH, PARTICLE_DAMPING, SHAKE_DECAY};
use crate::game::types::Position;

pub fn cell_center(p: Position) -> Vec2 {
    vec2(
        p.x as f32 * CELL_SIZE + CELL_SIZE * 0.5,
        p.y as f32 * CELL_SIZE + CELL_SIZE * 0.5,
    )
}

struct Particle {
    pos: Vec2,
    vel: Vec2,
    life: f32,
    max_life: f32,
    color: Color,
    size: f32,
}

/// Presentation-only effects: particles, screen shake, full-screen flash and
/// the grid pulse. Purely cosmetic, the simulation never reads any of this.
pub struct Fx {
    particles: Vec<Particle>,
    pub shake: f32,
    flash: f32,
    flash_color: Color,
    pub grid_pulse: f32,
}

impl Fx {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            shake: 0.0,
            flash: 0.0,
            flash_color: WHITE,
            grid_pulse: 0.0,
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.shake = 0.0;
        self.flash = 0.0;
        self.grid_pulse = 0.0;
    }

    pub fn set_flash(&mut self, frames: f32, color: Color) {
        self.flash = frames;
        self.flash_color = color;
    }

    /// Ring of 30 particles around the head on skill activation.
    pub fn skill_ring(&mut self, at: Position, color: Color) {
        let c = cell_center(at);
        for i in 0..30 {
            let angle = std::f32::consts::TAU * i as f32 / 30.0;
            let speed = gen_range(3.0, 7.0);
            self.particles.push(Particle {
                pos: c,
                vel: vec2(angle.cos(), angle.sin()) * speed,
                life: 40.0,
                max_life: 40.0,
                color,
                size: gen_range(3.0, 6.0),
            });
        }
    }

    pub fn eat_burst(&mut self, at: Position, color: Color) {
        self.scatter(at, 12, 5.0, 25.0, color, 2.0, 4.0);
    }

    pub fn dodge_burst(&mut self, at: Position, color: Color) {
        self.scatter(at, 8, 6.0, 20.0, color, 2.0, 2.0);
    }

    /// Death explosion: a small burst on every body cell.
    pub fn death_burst(&mut self, body: &[Position], color: Color) {
        for &seg in body {
            self.scatter(seg, 4, 8.0, 40.0, color, 2.0, 5.0);
        }
    }

    fn scatter(
        &mut self,
        at: Position,
        count: usize,
        spread: f32,
        life: f32,
        color: Color,
        size_min: f32,
        size_max: f32,
    ) {
        let c = cell_center(at);
        for _ in 0..count {
            self.particles.push(Particle {
                pos: c,
                vel: vec2(
                    gen_range(-0.5, 0.5) * spread,
                    gen_range(-0.5, 0.5) * spread,
                ),
                life,
                max_life: life,
                color,
                size: gen_range(size_min, size_max),
            });
        }
    }

    /// Random jitter applied to the whole scene while the shake decays.
    pub fn shake_offset(&mut self) -> Vec2 {
        if self.shake <= 0.0 {
            return Vec2::ZERO;
        }
        let off = vec2(
            gen_range(-0.5, 0.5) * self.shake,
            gen_range(-0.5, 0.5) * self.shake,
        );
        self.shake *= SHAKE_DECAY;
        if self.shake < 0.5 {
            self.shake = 0.0;
        }
        off
    }

    /// Grid line alpha for this frame, decaying the activation pulse.
    pub fn grid_alpha(&mut self) -> f32 {
        self.grid_pulse *= 0.97;
        0.04 + self.grid_pulse * 0.1
    }

    pub fn update_and_draw(&mut self, off: Vec2) {
        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel *= PARTICLE_DAMPING;
            p.life -= 1.0;
            if p.life <= 0.0 {
                return false;
            }
            let alpha = p.life / p.max_life;
            let mut color = p.color;
            color.a = alpha;
            draw_circle(off.x + p.pos.x, off.y + p.pos.y, p.size * alpha, color);
            true
        });
    }

    pub fn draw_flash(&mut self, off: Vec2) {
        if self.flash <= 0.0 {
            return;
        }
        let mut color = self.flash_color;
        color.a = self.flash / 20.0;
        draw_rectangle(off.x, off.y, GAME_WIDTH, GAME_HEIGHT, color);
        self.flash -= 1.0;
    }
}
