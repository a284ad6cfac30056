//! Sound port for the default notification cue

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during sound playback
#[derive(Error, Debug)]
pub enum SoundError {
    /// Failed to play the sound
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),
}

/// Port trait for playing the platform's default notification sound
#[async_trait]
pub trait SoundPlayer: Send + Sync {
    /// Play the default notification sound
    async fn play_default(&self) -> Result<(), SoundError>;
}

/// Blanket implementation for boxed sound players
#[async_trait]
impl SoundPlayer for Box<dyn SoundPlayer> {
    async fn play_default(&self) -> Result<(), SoundError> {
        self.as_ref().play_default().await
    }
}
