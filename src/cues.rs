//! One-shot cue events for the audio/visual collaborator
//!
//! The engine never plays a sound itself. It accumulates cues as gameplay
//! events happen and the embedding drains them once per frame to drive its
//! own audio banks and effects.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A one-shot cue emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Plain fruit eaten; index into the munch voice bank
    Munch { voice: u8 },
    /// Trash eaten; index into the yuck voice bank
    Yuck { voice: u8 },
    /// Golden item eaten, badge phase started (fanfare)
    GoldenFanfare,
    /// Golden reveal finished and the bonus landed
    GoldenPoints,
    /// Three identical fruits in a row
    Streak,
    /// Tenth plain fruit of the session
    TenFruits,
    /// Score warning threshold crossed
    Warning,
    /// Hippo just went idle
    Hungry,
    /// Hippo still idle after the call-out delay
    FeedMe,
    /// Trash count reached the game-over threshold
    GameOver,
}

/// Pick a voice line index, never repeating the previous pick.
///
/// One "last played" slot is shared across the munch and yuck banks, so the
/// same index from the other bank also counts as a repeat.
pub fn pick_voice(rng: &mut Pcg32, bank_size: u8, last: Option<u8>) -> u8 {
    debug_assert!(bank_size > 1, "voice bank too small to avoid repeats");
    loop {
        let voice = rng.random_range(0..bank_size);
        if Some(voice) != last {
            return voice;
        }
    }
}
