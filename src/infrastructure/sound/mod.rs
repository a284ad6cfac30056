//! Sound infrastructure adapters
//!
//! Plays the default notification sound, or nothing when sound is disabled.

mod noop;
mod rodio;

pub use noop::NoOpSoundPlayer;
pub use rodio::RodioSoundPlayer;

use crate::application::ports::SoundPlayer;

/// Create a sound player based on whether sound is enabled
pub fn create_sound_player(enabled: bool) -> Box<dyn SoundPlayer> {
    if enabled {
        Box::new(RodioSoundPlayer::new())
    } else {
        Box::new(NoOpSoundPlayer::new())
    }
}
