use std::fs;
use std::path::Path;

use macroquad::prelude::warn;
use serde::{Deserialize, Serialize};

use crate::config::SAVE_FILE;

/// The only thing that outlives a session: the best score.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
pub struct SaveData {
    pub high_score: u32,
}

pub fn load() -> SaveData {
    if !Path::new(SAVE_FILE).exists() {
        return SaveData::default();
    }
    match fs::read_to_string(SAVE_FILE) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
        Err(e) => {
            warn!("cannot read {}: {}", SAVE_FILE, e);
            SaveData::default()
        }
    }
}

/// Best-effort write; a failure only costs the saved score.
pub fn store(data: &SaveData) {
    match serde_json::to_string_pretty(data) {
        Ok(text) => {
            if let Err(e) = fs::write(SAVE_FILE, text) {
                warn!("cannot write {}: {}", SAVE_FILE, e);
            }
        }
        Err(e) => warn!("cannot serialize save data: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_data_round_trips_through_json() {
        let data = SaveData { high_score: 1230 };
        let text = serde_json::to_string(&data).unwrap();
        let back: SaveData = serde_json::from_str(&text).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let back: SaveData = serde_json::from_str("not json").unwrap_or_default();
        assert_eq!(back, SaveData::default());
    }
}
