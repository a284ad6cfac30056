//! No-op sound adapter
//!
//! Used when sound is disabled.

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{SoundError, SoundPlayer};

/// Sound player that stays silent
pub struct NoOpSoundPlayer;

impl NoOpSoundPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoundPlayer for NoOpSoundPlayer {
    async fn play_default(&self) -> Result<(), SoundError> {
        debug!("Sound disabled, skipping notification sound");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_returns_ok() {
        let player = NoOpSoundPlayer::new();
        assert!(player.play_default().await.is_ok());
    }
}
