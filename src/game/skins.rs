use macroquad::prelude::Color;

use crate::game::skills::SkillKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkinKey {
    Classic,
    DomainMaster,
    NeonWave,
    SageMode,
    GearFifth,
    UltraInstinct,
}

impl SkinKey {
    pub const ALL: [SkinKey; 6] = [
        SkinKey::Classic,
        SkinKey::DomainMaster,
        SkinKey::NeonWave,
        SkinKey::SageMode,
        SkinKey::GearFifth,
        SkinKey::UltraInstinct,
    ];
}

/// Static catalog entry: one identity, one look, one skill.
pub struct Skin {
    pub key: SkinKey,
    pub name: &'static str,
    pub color: Color,
    pub body_color: Color,
    pub glow_color: Color,
    pub skill_name: &'static str,
    /// Nominal skill duration in seconds (wall-clock, not ticks).
    pub skill_duration: f32,
    pub description: &'static str,
    pub skill: SkillKind,
}

static SKINS: [Skin; 6] = [
    Skin {
        key: SkinKey::Classic,
        name: "Classic",
        color: Color::new(0.0, 1.0, 0.533, 1.0),
        body_color: Color::new(0.0, 0.533, 0.267, 1.0),
        glow_color: Color::new(0.0, 1.0, 0.533, 0.25),
        skill_name: "Turbo Dash",
        skill_duration: 2.0,
        description: "Sprint and become invincible",
        skill: SkillKind::SpeedBoost,
    },
    Skin {
        key: SkinKey::DomainMaster,
        name: "Domain Master",
        color: Color::new(1.0, 1.0, 1.0, 1.0),
        body_color: Color::new(0.267, 0.267, 0.267, 1.0),
        glow_color: Color::new(1.0, 1.0, 1.0, 0.19),
        skill_name: "Infinite Domain",
        skill_duration: 5.0,
        description: "Wrap around walls, x2 Score",
        skill: SkillKind::WallPhase,
    },
    Skin {
        key: SkinKey::NeonWave,
        name: "Neon Wave",
        color: Color::new(0.0, 1.0, 1.0, 1.0),
        body_color: Color::new(0.0, 0.267, 0.4, 1.0),
        glow_color: Color::new(0.0, 1.0, 1.0, 0.25),
        skill_name: "Pulse Wave",
        skill_duration: 3.0,
        description: "Sucks food towards you",
        skill: SkillKind::FoodAttract,
    },
    Skin {
        key: SkinKey::SageMode,
        name: "Sage Mode",
        color: Color::new(1.0, 0.4, 0.2, 1.0),
        body_color: Color::new(0.6, 0.067, 0.0, 1.0),
        glow_color: Color::new(1.0, 0.4, 0.2, 0.25),
        skill_name: "Rasenshuriken",
        skill_duration: 1.0,
        description: "Shoots a projectile forward",
        skill: SkillKind::ProjectileBurst,
    },
    Skin {
        key: SkinKey::GearFifth,
        name: "Gear Fifth",
        color: Color::new(1.0, 1.0, 1.0, 1.0),
        body_color: Color::new(0.867, 0.867, 0.867, 1.0),
        glow_color: Color::new(1.0, 1.0, 1.0, 0.19),
        skill_name: "Nika's Laugh",
        skill_duration: 6.0,
        description: "Random movement, x3 Food",
        skill: SkillKind::ChaosMovement,
    },
    Skin {
        key: SkinKey::UltraInstinct,
        name: "Ultra Instinct",
        color: Color::new(0.753, 0.753, 1.0, 1.0),
        body_color: Color::new(0.333, 0.333, 0.533, 1.0),
        glow_color: Color::new(0.753, 0.753, 1.0, 0.25),
        skill_name: "Autonomous Dodge",
        skill_duration: 8.0,
        description: "Auto dodge 3 collisions",
        skill: SkillKind::AutoDodge,
    },
];

pub fn skin(key: SkinKey) -> &'static Skin {
    let idx = match key {
        SkinKey::Classic => 0,
        SkinKey::DomainMaster => 1,
        SkinKey::NeonWave => 2,
        SkinKey::SageMode => 3,
        SkinKey::GearFifth => 4,
        SkinKey::UltraInstinct => 5,
    };
    &SKINS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_consistent() {
        for key in SkinKey::ALL {
            let s = skin(key);
            assert_eq!(s.key, key);
            assert!(s.skill_duration > 0.0);
            assert!(!s.name.is_empty());
            assert!(!s.skill_name.is_empty());
        }
    }

    #[test]
    fn each_skin_has_a_unique_skill() {
        for a in SkinKey::ALL {
            for b in SkinKey::ALL {
                if a != b {
                    assert_ne!(skin(a).skill, skin(b).skill);
                }
            }
        }
    }
}
