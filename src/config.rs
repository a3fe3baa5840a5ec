// Grille fixe (portrait 400x600)
pub const CELL_SIZE: f32 = 20.0;
pub const COLS: i32 = 20;
pub const ROWS: i32 = 30;
pub const GAME_WIDTH: f32 = CELL_SIZE * COLS as f32;
pub const GAME_HEIGHT: f32 = CELL_SIZE * ROWS as f32;

// Cadence de simulation (ticks par seconde)
pub const BASE_FPS: f32 = 10.0;
pub const TURBO_FPS: f32 = 20.0;

// Snake
pub const START_SIZE: usize = 3;
pub const START_HEAD: (i32, i32) = (5, 15);

// Score / combo
pub const FOOD_SCORE: u32 = 10;
// ~3 secondes à BASE_FPS
pub const COMBO_RESET_TICKS: u32 = 30;
pub const COMBO_SCORE_CAP: u32 = 5;

// Jauge de skill
pub const MAX_SKILL: u32 = 100;
pub const SKILL_GAIN: u32 = 20;

// Tuning par skill
pub const CHAOS_TURN_CHANCE: f32 = 0.2;
pub const DODGE_CHARGES: u32 = 3;
// Rasenshuriken coupe tout seul bien avant la durée nominale.
pub const BURST_ACTIVE_SEC: f32 = 0.5;

// Projectiles
pub const PROJECTILE_LIFE_TICKS: u32 = 30;
pub const PROJECTILE_FOOD_BONUS: u32 = 50;

// Persistence
pub const SAVE_FILE: &str = "serpentine_save.json";

// Visuel
pub const TRAIL_MAX: usize = 8;
pub const TRAIL_START_ALPHA: f32 = 0.6;
pub const TRAIL_DECAY: f32 = 0.85;
pub const SHAKE_DECAY: f32 = 0.85;
pub const PARTICLE_DAMPING: f32 = 0.96;
