use macroquad::prelude::*;

use crate::config::{
    CELL_SIZE, COLS, GAME_HEIGHT, GAME_WIDTH, MAX_SKILL, ROWS, TRAIL_DECAY, TRAIL_MAX,
    TRAIL_START_ALPHA,
};
use crate::game::fx::{cell_center, Fx};
use crate::game::session::GameSession;
use crate::game::skins::{self, SkinKey};
use crate::game::types::{Direction, GameEvent, Phase, Position};
use crate::save;
use crate::sound::SoundBank;

// Palette néon (reprend les couleurs du HUD)
const BACKDROP: Color = Color::new(0.020, 0.039, 0.055, 1.0);
const BACKDROP_DOMAIN: Color = Color::new(0.067, 0.067, 0.094, 1.0);
const ACCENT: Color = Color::new(0.0, 1.0, 0.8, 1.0);
const FOOD_COLOR: Color = Color::new(1.0, 0.2, 0.4, 1.0);
const FOOD_HIGHLIGHT: Color = Color::new(1.0, 0.4, 0.6, 1.0);
const PROJECTILE_COLOR: Color = Color::new(1.0, 0.4, 0.2, 1.0);
const DODGE_COLOR: Color = Color::new(0.753, 0.753, 1.0, 1.0);
const TEXT_MAIN: Color = Color::new(0.88, 0.9, 0.93, 1.0);
const TEXT_DIM: Color = Color::new(0.42, 0.51, 0.6, 1.0);

fn with_alpha(c: Color, a: f32) -> Color {
    Color::new(c.r, c.g, c.b, a)
}

fn cell_rect(p: Position, pad: f32) -> Rect {
    Rect::new(
        p.x as f32 * CELL_SIZE + pad,
        p.y as f32 * CELL_SIZE + pad,
        CELL_SIZE - pad * 2.0,
        CELL_SIZE - pad * 2.0,
    )
}

fn draw_text_centered(text: &str, cx: f32, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, cx - dims.width * 0.5, y, size as f32, color);
}

fn direction_input() -> Option<Direction> {
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        Some(Direction::Up)
    } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        Some(Direction::Down)
    } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        Some(Direction::Left)
    } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        Some(Direction::Right)
    } else {
        None
    }
}

fn draw_grid(off: Vec2, alpha: f32) {
    let color = with_alpha(ACCENT, alpha);
    for x in 0..=COLS {
        let px = off.x + x as f32 * CELL_SIZE;
        draw_line(px, off.y, px, off.y + GAME_HEIGHT, 0.5, color);
    }
    for y in 0..=ROWS {
        let py = off.y + y as f32 * CELL_SIZE;
        draw_line(off.x, py, off.x + GAME_WIDTH, py, 0.5, color);
    }
}

fn draw_snake(session: &GameSession, off: Vec2, anim: f32) {
    let skin = session.skin();
    let domain_active = session.skill_active() && skin.key == SkinKey::DomainMaster;
    let wave_active = session.skill_active() && skin.key == SkinKey::NeonWave;
    let body_len = session.body().len().max(1);

    for (i, &seg) in session.body().iter().enumerate() {
        let is_head = i == 0;
        let mut color = if is_head { skin.color } else { skin.body_color };

        if domain_active {
            // Clignotement noir/blanc du Domain
            color = if macroquad::rand::gen_range(0.0, 1.0) > 0.5 {
                WHITE
            } else {
                Color::new(0.13, 0.13, 0.13, 1.0)
            };
        } else if wave_active {
            let wave = (anim * 12.0 + i as f32 * 0.5).sin() * 0.16;
            color = Color::new(
                (color.r + wave).clamp(0.0, 1.0),
                (color.g + wave).clamp(0.0, 1.0),
                (color.b + wave).clamp(0.0, 1.0),
                1.0,
            );
        }

        let pad = if is_head { 1.0 } else { 2.0 };
        let r = cell_rect(seg, pad);
        draw_rectangle(off.x + r.x, off.y + r.y, r.w, r.h, color);

        if is_head {
            draw_eyes(seg, session.direction(), off);
        } else {
            // Dégradé vers la queue
            let fade = i as f32 / body_len as f32 * 0.4;
            draw_rectangle(off.x + r.x, off.y + r.y, r.w, r.h, with_alpha(BLACK, fade));
        }
    }
}

fn draw_eyes(head: Position, dir: Direction, off: Vec2) {
    let c = cell_center(head) + off;
    let (dx, dy) = dir.delta();
    let eye_offset = 2.5;
    let (e1, e2) = if dx != 0 {
        (
            vec2(c.x + dx as f32 * 3.0, c.y - eye_offset),
            vec2(c.x + dx as f32 * 3.0, c.y + eye_offset),
        )
    } else {
        (
            vec2(c.x - eye_offset, c.y + dy as f32 * 3.0),
            vec2(c.x + eye_offset, c.y + dy as f32 * 3.0),
        )
    };
    draw_circle(e1.x, e1.y, 3.0, BLACK);
    draw_circle(e2.x, e2.y, 3.0, BLACK);
    draw_circle(e1.x + 1.0, e1.y - 1.0, 1.0, WHITE);
}

fn draw_food(food: Position, off: Vec2, anim: f32) {
    let c = cell_center(food) + off;
    let pulse = (anim * 4.8).sin() * 0.3 + 1.0;
    let radius = (CELL_SIZE * 0.5 - 3.0) * pulse;
    draw_circle(c.x, c.y, radius * 1.4, with_alpha(FOOD_COLOR, 0.25));
    draw_circle(c.x, c.y, radius, FOOD_COLOR);
    draw_circle(c.x - 2.0, c.y - 2.0, radius * 0.4, FOOD_HIGHLIGHT);
}

fn draw_projectiles(session: &GameSession, off: Vec2) {
    for p in session.projectiles() {
        let c = cell_center(p.pos) + off;
        draw_circle(c.x, c.y, 6.0, WHITE);
        draw_circle(c.x, c.y, 4.0, PROJECTILE_COLOR);
    }
}

fn draw_hud(session: &GameSession, off: Vec2, anim: f32) {
    let snap = session.snapshot();
    let skin = session.skin();

    draw_text(
        &format!("SCORE {}", snap.score),
        off.x + 8.0,
        off.y + 22.0,
        20.0,
        TEXT_MAIN,
    );
    let best = format!("BEST {}", snap.high_score);
    let dims = measure_text(&best, None, 20, 1.0);
    draw_text(
        &best,
        off.x + GAME_WIDTH - dims.width - 8.0,
        off.y + 22.0,
        20.0,
        TEXT_DIM,
    );

    if snap.combo > 1 {
        draw_text_centered(
            &format!("x{} COMBO", snap.combo),
            off.x + GAME_WIDTH * 0.5,
            off.y + 75.0,
            18,
            ACCENT,
        );
    }

    // Jauge de skill en bas
    let bar_w = GAME_WIDTH - 120.0;
    let bar_x = off.x + 8.0;
    let bar_y = off.y + GAME_HEIGHT - 20.0;
    let ratio = snap.skill_value as f32 / MAX_SKILL as f32;
    draw_rectangle(bar_x, bar_y, bar_w, 10.0, with_alpha(WHITE, 0.12));
    let fill = if session.skill_active() { skin.color } else { ACCENT };
    draw_rectangle(bar_x, bar_y, bar_w * ratio, 10.0, fill);
    draw_rectangle_lines(bar_x, bar_y, bar_w, 10.0, 1.0, with_alpha(WHITE, 0.3));

    let label = if session.skill_active() {
        skin.skill_name.to_owned()
    } else if snap.skill_value >= MAX_SKILL {
        // Prêt: petit clignotement
        if (anim * 6.0).sin() > 0.0 {
            "SPACE!".to_owned()
        } else {
            skin.skill_name.to_owned()
        }
    } else {
        skin.skill_name.to_owned()
    };
    draw_text(
        &label,
        bar_x + bar_w + 8.0,
        bar_y + 9.0,
        16.0,
        if snap.skill_value >= MAX_SKILL || session.skill_active() {
            skin.color
        } else {
            TEXT_DIM
        },
    );

    // Charges de dodge restantes
    if session.skill_active() && skin.key == SkinKey::UltraInstinct {
        for i in 0..session.dodge_charges() {
            draw_circle(
                off.x + GAME_WIDTH * 0.5 - 15.0 + i as f32 * 15.0,
                off.y + 50.0,
                4.0,
                DODGE_COLOR,
            );
        }
    }
}

fn draw_scene(session: &GameSession, fx: &mut Fx, trail: &[(Position, f32)], off: Vec2, anim: f32) {
    let skin = session.skin();
    let domain_active = session.skill_active() && skin.key == SkinKey::DomainMaster;
    clear_background(if domain_active {
        BACKDROP_DOMAIN
    } else {
        BACKDROP
    });

    draw_grid(off, fx.grid_alpha());

    let border = if session.skill_active() {
        skin.color
    } else {
        ACCENT
    };
    draw_rectangle_lines(off.x, off.y, GAME_WIDTH, GAME_HEIGHT, 2.0, border);

    for &(pos, alpha) in trail {
        if alpha > 0.05 {
            let r = cell_rect(pos, 2.0);
            draw_rectangle(
                off.x + r.x,
                off.y + r.y,
                r.w,
                r.h,
                with_alpha(skin.glow_color, alpha * 0.3),
            );
        }
    }

    draw_snake(session, off, anim);
    draw_food(session.food(), off, anim);
    draw_projectiles(session, off);
    fx.update_and_draw(off);

    if session.skill_active() {
        let aura = 0.1 + (anim * 6.0).sin() * 0.05;
        draw_rectangle_lines(
            off.x + 4.0,
            off.y + 4.0,
            GAME_WIDTH - 8.0,
            GAME_HEIGHT - 8.0,
            16.0,
            with_alpha(skin.color, aura),
        );
    }

    fx.draw_flash(off);
    draw_hud(session, off, anim);
}

fn draw_menu(selected: usize, high_score: u32, anim: f32) {
    clear_background(BACKDROP);
    let cx = GAME_WIDTH * 0.5;

    draw_text_centered("SERPENTINE", cx, 90.0, 42, ACCENT);
    draw_text_centered("choose your serpent", cx, 120.0, 16, TEXT_DIM);

    let key = SkinKey::ALL[selected];
    let skin = skins::skin(key);

    // Aperçu: trois segments + tête qui ondule doucement
    let wiggle = (anim * 3.0).sin() * 4.0;
    for i in 0..3 {
        let x = cx - 30.0 + i as f32 * 24.0;
        let y = 200.0 + if i == 2 { wiggle } else { 0.0 };
        let color = if i == 2 { skin.color } else { skin.body_color };
        draw_rectangle(x, y, 20.0, 20.0, color);
    }

    draw_text_centered(skin.name, cx, 270.0, 28, skin.color);
    draw_text_centered(skin.skill_name, cx, 300.0, 20, TEXT_MAIN);
    draw_text_centered(skin.description, cx, 324.0, 16, TEXT_DIM);
    draw_text_centered(
        &format!("{}s", skin.skill_duration),
        cx,
        346.0,
        16,
        TEXT_DIM,
    );

    draw_text_centered("<   >", cx, 400.0, 24, with_alpha(TEXT_MAIN, 0.7));
    draw_text_centered("ENTER TO START", cx, 470.0, 18, ACCENT);
    if high_score > 0 {
        draw_text_centered(&format!("BEST {}", high_score), cx, 510.0, 16, TEXT_DIM);
    }
}

fn draw_game_over(session: &GameSession, off: Vec2) {
    let snap = session.snapshot();
    draw_rectangle(off.x, off.y, GAME_WIDTH, GAME_HEIGHT, with_alpha(BLACK, 0.7));

    let cx = off.x + GAME_WIDTH * 0.5;
    let cy = off.y + GAME_HEIGHT * 0.5;
    draw_text_centered("GAME OVER", cx, cy - 30.0, 36, FOOD_COLOR);
    draw_text_centered(&format!("Score: {}", snap.score), cx, cy + 10.0, 16, TEXT_MAIN);
    if snap.score >= snap.high_score && snap.score > 0 {
        draw_text_centered("NEW HIGH SCORE!", cx, cy + 35.0, 14, ACCENT);
    }
    draw_text_centered("ENTER to restart - ESC for menu", cx, cy + 65.0, 12, TEXT_DIM);
}

pub async fn run() {
    let mut save_data = save::load();
    let sounds = SoundBank::load().await;
    let mut session = GameSession::new(save_data.high_score);
    let mut fx = Fx::new();
    let mut selected: usize = 0;
    let mut trail: Vec<(Position, f32)> = Vec::new();
    let mut last_head = session.head();
    let mut anim: f32 = 0.0;

    loop {
        let dt = get_frame_time();
        anim += dt;

        match session.phase() {
            Phase::Menu => {
                if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
                    selected = (selected + SkinKey::ALL.len() - 1) % SkinKey::ALL.len();
                }
                if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
                    selected = (selected + 1) % SkinKey::ALL.len();
                }
                if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space) {
                    session.start(SkinKey::ALL[selected]);
                    fx.clear();
                    trail.clear();
                    last_head = session.head();
                }
                draw_menu(selected, session.snapshot().high_score, anim);
            }
            Phase::Playing | Phase::GameOver => {
                if session.phase() == Phase::Playing {
                    if let Some(d) = direction_input() {
                        session.set_direction(d);
                    }
                    if is_key_pressed(KeyCode::Space) {
                        session.activate_skill();
                    }
                    if is_key_pressed(KeyCode::Escape) {
                        session.destroy();
                        next_frame().await;
                        continue;
                    }
                    session.update(dt);
                } else {
                    if is_key_pressed(KeyCode::Enter) {
                        let key = session.snapshot().selected_skin;
                        session.start(key);
                        fx.clear();
                        trail.clear();
                        last_head = session.head();
                    }
                    if is_key_pressed(KeyCode::Escape) {
                        session.destroy();
                        next_frame().await;
                        continue;
                    }
                }

                // Trace de la tête (rendu uniquement)
                if session.head() != last_head {
                    trail.push((last_head, TRAIL_START_ALPHA));
                    if trail.len() > TRAIL_MAX {
                        trail.remove(0);
                    }
                    for t in trail.iter_mut() {
                        t.1 *= TRAIL_DECAY;
                    }
                    last_head = session.head();
                }

                for ev in session.drain_events() {
                    match ev {
                        GameEvent::FoodEaten { combo } => {
                            sounds.eat();
                            if combo > 1 {
                                sounds.combo();
                            }
                            fx.eat_burst(session.head(), FOOD_COLOR);
                            fx.shake = fx.shake.max(4.0);
                        }
                        GameEvent::SkillReady => sounds.skill_ready(),
                        GameEvent::SkillActivated => {
                            sounds.skill_activate();
                            let skin = session.skin();
                            fx.skill_ring(session.head(), skin.color);
                            fx.shake = 15.0;
                            fx.grid_pulse = 1.0;
                            match skin.key {
                                SkinKey::DomainMaster => fx.set_flash(10.0, WHITE),
                                SkinKey::GearFifth => fx.set_flash(15.0, WHITE),
                                SkinKey::UltraInstinct => fx.set_flash(20.0, DODGE_COLOR),
                                _ => {}
                            }
                        }
                        GameEvent::SkillExpired => {}
                        GameEvent::Dodged => {
                            sounds.dodge();
                            fx.set_flash(5.0, WHITE);
                            fx.dodge_burst(session.head(), DODGE_COLOR);
                        }
                        GameEvent::ProjectileHit => {
                            fx.shake = fx.shake.max(4.0);
                        }
                        GameEvent::GameOver { new_high_score } => {
                            sounds.game_over();
                            fx.death_burst(session.body(), session.skin().color);
                            fx.shake = 20.0;
                            if let Some(hs) = new_high_score {
                                save_data.high_score = hs;
                                save::store(&save_data);
                            }
                        }
                    }
                }

                let off = fx.shake_offset();
                draw_scene(&session, &mut fx, &trail, off, anim);
                if session.phase() == Phase::GameOver {
                    draw_game_over(&session, off);
                }
            }
        }

        next_frame().await;
    }
}
