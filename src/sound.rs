use macroquad::audio::{self, load_sound_from_bytes, PlaySoundParams, Sound};
use macroquad::prelude::warn;

/// Synthesized tone bank. Everything is generated in code as tiny PCM16 WAVs,
/// so there are no asset files to ship. A failed load degrades to silence.
pub struct SoundBank {
    eat: Option<Sound>,
    combo: Option<Sound>,
    skill_ready: Option<Sound>,
    skill_activate: Option<Sound>,
    dodge: Option<Sound>,
    game_over: Option<Sound>,
}

/// Mono PCM16 WAV of a sine tone with a linear fade-out.
fn tone_wav(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let sample_rate: u32 = 44100;
    let num_samples: u32 = (duration_seconds * sample_rate as f32) as u32;
    let mut data: Vec<u8> = Vec::with_capacity((num_samples as usize) * 2 + 44);

    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = sample_rate * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&sample_rate.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / sample_rate as f32;
        let envelope = 1.0 - t / duration_seconds;
        let v = (std::f32::consts::TAU * frequency_hz * t).sin() * amplitude * envelope;
        let sample = (v * i16::MAX as f32) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }

    data
}

async fn load_tone(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Option<Sound> {
    match load_sound_from_bytes(&tone_wav(frequency_hz, duration_seconds, volume)).await {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("audio unavailable: {:?}", e);
            None
        }
    }
}

impl SoundBank {
    pub async fn load() -> Self {
        Self {
            eat: load_tone(660.0, 0.08, 0.5).await,
            combo: load_tone(880.0, 0.10, 0.4).await,
            skill_ready: load_tone(990.0, 0.25, 0.5).await,
            skill_activate: load_tone(220.0, 0.35, 0.6).await,
            dodge: load_tone(1320.0, 0.06, 0.4).await,
            game_over: load_tone(110.0, 0.60, 0.6).await,
        }
    }

    fn play(slot: &Option<Sound>, volume: f32) {
        if let Some(s) = slot {
            audio::play_sound(
                s,
                PlaySoundParams {
                    looped: false,
                    volume,
                },
            );
        }
    }

    pub fn eat(&self) {
        Self::play(&self.eat, 0.35);
    }

    pub fn combo(&self) {
        Self::play(&self.combo, 0.3);
    }

    pub fn skill_ready(&self) {
        Self::play(&self.skill_ready, 0.4);
    }

    pub fn skill_activate(&self) {
        Self::play(&self.skill_activate, 0.5);
    }

    pub fn dodge(&self) {
        Self::play(&self.dodge, 0.35);
    }

    pub fn game_over(&self) {
        Self::play(&self.game_over, 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_header_and_size_are_consistent() {
        let wav = tone_wav(440.0, 0.1, 0.5);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        let num_samples = (0.1f32 * 44100.0) as usize;
        assert_eq!(wav.len(), 44 + num_samples * 2);
    }

    #[test]
    fn tone_fades_to_silence() {
        let wav = tone_wav(440.0, 0.05, 1.0);
        let tail = i16::from_le_bytes([wav[wav.len() - 2], wav[wav.len() - 1]]);
        assert!(tail.abs() < 1000);
    }
}
