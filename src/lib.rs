//! Hippo Feast - simulation engine for a feed-the-hippo arcade mini-game
//!
//! Items spawn at the playfield edges and fly toward a bottom-centered hippo;
//! a single tap eats whichever item currently overlaps the mouth. Scoring,
//! streaks, the golden-item reveal, trash penalties, idle behavior and
//! game-over all live here. Rendering, audio playback and input capture are
//! external collaborators that read snapshots and drain cue events.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, eat resolution,
//!   achievement watchers)
//! - `engine`: Embedding facade (start / tick / attempt_eat / snapshot)
//! - `cues`: One-shot audio/visual cue events reported to the frontend

pub mod cues;
pub mod engine;
pub mod sim;

pub use cues::Cue;
pub use engine::{Engine, Snapshot};
pub use sim::{GamePhase, MouthRect};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz motion clock)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield extent in normalized coordinates (both axes)
    pub const FIELD_SIZE: f32 = 100.0;
    /// How far outside the field edge items enter from
    pub const SPAWN_MARGIN: f32 = 10.0;

    /// Seconds between spawn opportunities
    pub const SPAWN_PERIOD_SECS: f32 = 1.0;
    /// Per-item speed range, playfield units per second
    pub const ITEM_MIN_SPEED: f32 = 30.0;
    pub const ITEM_MAX_SPEED: f32 = 60.0;

    /// Score gate and chance for hazard spawns
    pub const TRASH_SCORE_GATE: i64 = 200;
    pub const TRASH_SPAWN_CHANCE: f64 = 0.3;
    /// Score gate and chance for golden spawns
    pub const GOLDEN_SCORE_GATE: i64 = 25;
    pub const GOLDEN_SPAWN_CHANCE: f64 = 0.1;

    /// Scoring
    pub const FRUIT_POINTS: i64 = 1;
    pub const TRASH_PENALTY: i64 = 30;
    pub const GOLDEN_BONUS: i64 = 40;
    pub const STREAK_BONUS: i64 = 20;

    /// Identical plain fruits in a row needed for the streak bonus
    pub const STREAK_LEN: usize = 3;

    /// One-shot warning when the score first reaches this value
    pub const SCORE_WARNING_THRESHOLD: i64 = 190;
    /// One-shot milestone on the Nth plain fruit eaten
    pub const TEN_FRUITS_MILESTONE: u32 = 10;
    /// Trash eats that end the session
    pub const TRASH_GAME_OVER_COUNT: u32 = 10;

    /// How long an eaten item keeps showing its smashed sprite
    pub const EAT_DISPLAY_SECS: f32 = 0.2;
    /// Mouth-open pulse after a tap
    pub const MOUTH_PULSE_SECS: f32 = 0.2;
    /// Full-screen banner duration (warning, milestone, trash badge)
    pub const BANNER_SECS: f32 = 2.0;
    /// Duration of each phase of the golden and streak reveal sequences
    pub const REVEAL_PHASE_SECS: f32 = 2.0;

    /// Seconds without a tap before the hippo goes idle
    pub const IDLE_THRESHOLD_SECS: f32 = 7.0;
    /// Delay from the "hungry" call-out to the "feed me" one
    pub const FEED_ME_DELAY_SECS: f32 = 2.0;
    /// Mouth open/close half-period while idle
    pub const MOUTH_TOGGLE_SECS: f32 = 0.5;

    /// Voice-line bank sizes (munch and yuck reactions)
    pub const FRUIT_VOICE_COUNT: u8 = 10;
    pub const TRASH_VOICE_COUNT: u8 = 8;
}
