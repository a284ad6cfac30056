//! Rodio-based sound adapter
//!
//! Synthesizes a short rising chime as the default notification sound.

use std::time::Duration;

use async_trait::async_trait;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::application::ports::{SoundError, SoundPlayer};

/// Chime notes: C6, E6, G6 (frequency Hz, duration ms)
const CHIME: &[(f32, u64)] = &[(1046.5, 90), (1318.5, 90), (1568.0, 180)];

/// Output amplitude, kept low so the cue is not jarring
const AMPLITUDE: f32 = 0.25;

/// Sound player using rodio on the default output device
pub struct RodioSoundPlayer;

impl RodioSoundPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoundPlayer for RodioSoundPlayer {
    async fn play_default(&self) -> Result<(), SoundError> {
        // rodio blocks until playback ends
        tokio::task::spawn_blocking(play_chime_sync)
            .await
            .map_err(|e| SoundError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

/// A sine tone with a short fade-in to avoid clicks
fn soft_tone(freq: f32, duration_ms: u64) -> impl Source<Item = f32> + Send {
    let fade_ms = (duration_ms / 5).min(30);
    SineWave::new(freq)
        .take_duration(Duration::from_millis(duration_ms))
        .fade_in(Duration::from_millis(fade_ms))
        .amplify(AMPLITUDE)
}

fn play_chime_sync() -> Result<(), SoundError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| SoundError::PlaybackFailed(e.to_string()))?;

    for &(freq, duration_ms) in CHIME {
        sink.append(soft_tone(freq, duration_ms));
    }

    // The stream must outlive playback
    sink.sleep_until_end();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chime_rises() {
        assert!(CHIME.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn can_play_default_sound() {
        let player = RodioSoundPlayer::new();
        assert!(player.play_default().await.is_ok());
    }
}
