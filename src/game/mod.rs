pub mod food;
pub mod fx;
pub mod r#loop;
pub mod projectile;
pub mod session;
pub mod skills;
pub mod skins;
pub mod types;
