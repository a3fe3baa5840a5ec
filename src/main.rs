use macroquad::prelude::*;

mod config;
mod game;
mod save;
mod sound;

// Fenêtre fixe à la taille exacte de la grille
fn window_conf() -> Conf {
    Conf {
        window_title: "Serpentine".to_owned(),
        window_width: config::GAME_WIDTH as i32,
        window_height: config::GAME_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    macroquad::Window::from_config(window_conf(), game::r#loop::run());
}
