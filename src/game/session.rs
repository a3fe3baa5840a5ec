use crate::config::{
    BASE_FPS, COMBO_RESET_TICKS, COMBO_SCORE_CAP, FOOD_SCORE, PROJECTILE_FOOD_BONUS, START_HEAD,
    START_SIZE,
};
use crate::game::food;
use crate::game::projectile::Projectile;
use crate::game::skills::SkillGauge;
use crate::game::skins::{self, Skin, SkinKey};
use crate::game::types::{Direction, GameEvent, GameSnapshot, Phase, Position};

/// The whole game session: snake, food, skill lifecycle, scoring, phase.
///
/// Driven from the outside by `update(dt)` once per frame; the simulation itself
/// advances in fixed ticks gated by `1/fps` of accumulated wall-clock time. The
/// skill countdown also runs on wall-clock time, but lives inside the session as
/// a plain float (the `magnet_left` pattern) so a restart cancels it for free.
pub struct GameSession {
    // Snake
    pub(crate) body: Vec<Position>,
    pub(crate) head: Position,
    pub(crate) direction: Direction,
    pub(crate) next_direction: Direction,
    pub(crate) size: usize,

    // Skill lifecycle
    gauge: SkillGauge,
    skill_active: bool,
    pub(crate) skill_left: f32,
    pub(crate) dodge_charges: u32,

    // Tick cadence
    pub(crate) fps: f32,
    tick_acc: f32,

    // Scoring
    phase: Phase,
    score: u32,
    high_score: u32,
    combo: u32,
    combo_timer: u32,

    skin: &'static Skin,
    pub(crate) food: Position,
    projectiles: Vec<Projectile>,

    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(high_score: u32) -> Self {
        Self {
            body: Vec::new(),
            head: Position::new(START_HEAD.0, START_HEAD.1),
            direction: Direction::Right,
            next_direction: Direction::Right,
            size: START_SIZE,
            gauge: SkillGauge::default(),
            skill_active: false,
            skill_left: 0.0,
            dodge_charges: 0,
            fps: BASE_FPS,
            tick_acc: 0.0,
            phase: Phase::Menu,
            score: 0,
            high_score,
            combo: 0,
            combo_timer: 0,
            skin: skins::skin(SkinKey::Classic),
            food: Position::new(10, 10),
            projectiles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Resets every bit of session state and starts ticking.
    pub fn start(&mut self, key: SkinKey) {
        self.skin = skins::skin(key);
        self.phase = Phase::Playing;
        self.score = 0;
        self.combo = 0;
        self.combo_timer = 0;
        self.gauge.reset();
        self.skill_active = false;
        self.skill_left = 0.0;
        self.dodge_charges = 0;
        self.fps = BASE_FPS;
        self.tick_acc = 0.0;
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.size = START_SIZE;
        self.head = Position::new(START_HEAD.0, START_HEAD.1);
        self.body = (0..self.size as i32)
            .map(|i| Position::new(self.head.x - i, self.head.y))
            .collect();
        self.projectiles.clear();
        self.events.clear();
        self.food = food::spawn(&self.body);
    }

    /// Buffers the direction for the next tick. An exact reversal of the
    /// current heading is silently ignored.
    pub fn set_direction(&mut self, dir: Direction) {
        if dir == self.direction.opposite() {
            return;
        }
        self.next_direction = dir;
    }

    /// No-op unless the gauge is full and no skill is already running.
    pub fn activate_skill(&mut self) {
        if self.phase != Phase::Playing || self.skill_active || !self.gauge.is_ready() {
            return;
        }
        self.skill_active = true;
        self.gauge.reset();
        self.skill_left = self.skin.skill_duration;
        let kind = self.skin.skill;
        kind.on_activate(self);
        self.events.push(GameEvent::SkillActivated);
    }

    /// Back to the menu. Clears the skill countdown and every transient entity,
    /// so nothing from this run can leak into the next one.
    pub fn destroy(&mut self) {
        self.phase = Phase::Menu;
        self.skill_active = false;
        self.skill_left = 0.0;
        self.dodge_charges = 0;
        self.projectiles.clear();
        self.events.clear();
    }

    /// Wall-clock driver, called once per rendered frame.
    pub fn update(&mut self, dt: f32) {
        if self.phase != Phase::Playing {
            return;
        }

        if self.skill_active {
            self.skill_left -= dt;
            if self.skill_left <= 0.0 {
                self.deactivate_skill();
            }
        }

        self.tick_acc += dt;
        if self.tick_acc >= 1.0 / self.fps {
            self.tick_acc = 0.0;
            self.tick();
        }
    }

    fn deactivate_skill(&mut self) {
        self.skill_active = false;
        self.skill_left = 0.0;
        let kind = self.skin.skill;
        kind.on_deactivate(self);
        self.events.push(GameEvent::SkillExpired);
    }

    /// One simulation step.
    fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        if self.combo_timer > 0 {
            self.combo_timer -= 1;
            if self.combo_timer == 0 {
                self.combo = 0;
            }
        }

        let kind = self.skin.skill;
        if self.skill_active {
            kind.pre_move(self);
        }

        self.direction = self.next_direction;
        let mut new_head = self.head.step(self.direction);

        let mut collision = false;
        if !new_head.on_board() {
            if self.skill_active && kind.wraps_walls() {
                new_head = new_head.wrapped();
            } else {
                collision = true;
            }
        }

        if !collision
            && self.body.contains(&new_head)
            && !(self.skill_active && kind.passes_through_self())
        {
            collision = true;
        }

        if collision {
            if self.skill_active && kind.on_collision(self) {
                // Collision absorbed: the snake holds its cell for this tick.
                self.events.push(GameEvent::Dodged);
                return;
            }
            self.die();
            return;
        }

        self.body.insert(0, new_head);
        self.head = new_head;
        if self.body.len() > self.size {
            self.body.pop();
        }

        if self.head == self.food {
            self.eat();
        }

        if self.skill_active {
            kind.post_move(self);
        }
        self.advance_projectiles();
    }

    fn eat(&mut self) {
        self.size += 1;
        self.combo += 1;
        self.combo_timer = COMBO_RESET_TICKS;

        let mult = if self.skill_active {
            self.skin.skill.food_multiplier()
        } else {
            1
        };
        self.score += FOOD_SCORE * mult * self.combo.min(COMBO_SCORE_CAP);

        if self.gauge.gain() {
            self.events.push(GameEvent::SkillReady);
        }
        self.events.push(GameEvent::FoodEaten { combo: self.combo });
        self.food = food::spawn(&self.body);
    }

    fn advance_projectiles(&mut self) {
        let mut i = 0;
        while i < self.projectiles.len() {
            self.projectiles[i].advance();
            if self.projectiles[i].pos == self.food {
                self.score += PROJECTILE_FOOD_BONUS;
                self.events.push(GameEvent::ProjectileHit);
                self.food = food::spawn(&self.body);
            }
            if self.projectiles[i].expired() {
                self.projectiles.remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn die(&mut self) {
        self.phase = Phase::GameOver;
        self.skill_active = false;
        self.skill_left = 0.0;
        let new_high = if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.score)
        } else {
            None
        };
        self.events.push(GameEvent::GameOver {
            new_high_score: new_high,
        });
    }

    pub(crate) fn fire_projectile(&mut self) {
        self.projectiles
            .push(Projectile::new(self.head.step(self.direction), self.direction));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            skill_value: self.gauge.charge(),
            selected_skin: self.skin.key,
            combo: self.combo,
            combo_timer: self.combo_timer,
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // Rendering-only accessors.

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn skin(&self) -> &'static Skin {
        self.skin
    }

    pub fn skill_active(&self) -> bool {
        self.skill_active
    }

    pub fn dodge_charges(&self) -> u32 {
        self.dodge_charges
    }
}
