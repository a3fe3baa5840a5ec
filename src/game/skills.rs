use macroquad::rand::gen_range;

use crate::config::{
    BASE_FPS, BURST_ACTIVE_SEC, CHAOS_TURN_CHANCE, DODGE_CHARGES, MAX_SKILL, SKILL_GAIN, TURBO_FPS,
};
use crate::game::food;
use crate::game::session::GameSession;
use crate::game::types::Direction;

/// Closed set of skill behaviors. Every skin maps to exactly one variant; the
/// session dispatches through the hooks below instead of branching on skin keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillKind {
    SpeedBoost,
    WallPhase,
    FoodAttract,
    ProjectileBurst,
    ChaosMovement,
    AutoDodge,
}

impl SkillKind {
    /// Out-of-bounds wraps to the opposite edge instead of killing.
    pub fn wraps_walls(self) -> bool {
        matches!(self, SkillKind::WallPhase)
    }

    /// Running into the own body is non-fatal.
    pub fn passes_through_self(self) -> bool {
        matches!(self, SkillKind::SpeedBoost)
    }

    /// Score multiplier while active. Overrides the generic x2, never stacks.
    pub fn food_multiplier(self) -> u32 {
        match self {
            SkillKind::ChaosMovement => 3,
            _ => 2,
        }
    }

    pub(crate) fn on_activate(self, s: &mut GameSession) {
        match self {
            SkillKind::SpeedBoost => s.fps = TURBO_FPS,
            SkillKind::ProjectileBurst => {
                s.fire_projectile();
                s.skill_left = BURST_ACTIVE_SEC;
            }
            SkillKind::AutoDodge => s.dodge_charges = DODGE_CHARGES,
            _ => {}
        }
    }

    /// May overwrite the buffered direction before it is committed.
    pub(crate) fn pre_move(self, s: &mut GameSession) {
        if self == SkillKind::ChaosMovement && gen_range(0.0, 1.0) < CHAOS_TURN_CHANCE {
            let d = Direction::ALL[gen_range::<usize>(0, Direction::ALL.len())];
            if d != s.direction.opposite() {
                s.next_direction = d;
            }
        }
    }

    /// Returns true if the collision was absorbed and the tick should abort.
    pub(crate) fn on_collision(self, s: &mut GameSession) -> bool {
        if self == SkillKind::AutoDodge && s.dodge_charges > 0 {
            s.dodge_charges -= 1;
            return true;
        }
        false
    }

    pub(crate) fn post_move(self, s: &mut GameSession) {
        if self == SkillKind::FoodAttract {
            food::attract_step(&mut s.food, s.head);
        }
    }

    pub(crate) fn on_deactivate(self, s: &mut GameSession) {
        match self {
            SkillKind::SpeedBoost => s.fps = BASE_FPS,
            SkillKind::AutoDodge => s.dodge_charges = 0,
            _ => {}
        }
    }
}

/// Charge meter driving the armed -> ready part of the skill lifecycle.
/// Gains a fixed amount per food eaten, clamps at max, resets at activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillGauge {
    charge: u32,
}

impl SkillGauge {
    pub fn charge(self) -> u32 {
        self.charge
    }

    pub fn is_ready(self) -> bool {
        self.charge >= MAX_SKILL
    }

    /// Adds one food's worth of charge. Returns true when the gauge just filled.
    pub fn gain(&mut self) -> bool {
        if self.charge >= MAX_SKILL {
            return false;
        }
        self.charge = (self.charge + SKILL_GAIN).min(MAX_SKILL);
        self.charge >= MAX_SKILL
    }

    pub fn reset(&mut self) {
        self.charge = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_fills_in_five_meals() {
        let mut g = SkillGauge::default();
        assert!(!g.is_ready());
        for i in 1..=4 {
            assert!(!g.gain());
            assert_eq!(g.charge(), i * SKILL_GAIN);
        }
        // Fifth meal fills the gauge and reports it exactly once.
        assert!(g.gain());
        assert!(g.is_ready());
        assert_eq!(g.charge(), MAX_SKILL);
        assert!(!g.gain());
        assert_eq!(g.charge(), MAX_SKILL);
    }

    #[test]
    fn gauge_resets_to_zero() {
        let mut g = SkillGauge::default();
        while !g.is_ready() {
            g.gain();
        }
        g.reset();
        assert_eq!(g.charge(), 0);
        assert!(!g.is_ready());
    }

    #[test]
    fn multiplier_overrides() {
        assert_eq!(SkillKind::ChaosMovement.food_multiplier(), 3);
        assert_eq!(SkillKind::WallPhase.food_multiplier(), 2);
        assert_eq!(SkillKind::SpeedBoost.food_multiplier(), 2);
    }

    #[test]
    fn rule_predicates() {
        assert!(SkillKind::WallPhase.wraps_walls());
        assert!(!SkillKind::SpeedBoost.wraps_walls());
        assert!(SkillKind::SpeedBoost.passes_through_self());
        assert!(!SkillKind::AutoDodge.passes_through_self());
    }
}
