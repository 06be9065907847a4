//! Session state and core simulation types
//!
//! The whole play session lives in one `GameState`, exclusively owned by the
//! engine. Collaborators only ever see read models derived from it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::cues::Cue;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen
    NotStarted,
    /// Active gameplay
    Playing,
    /// Too much trash; session ended
    GameOver,
}

/// The three plain edible categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitKind {
    Mango,
    Banana,
    Carrot,
}

impl FruitKind {
    pub const ALL: [FruitKind; 3] = [FruitKind::Mango, FruitKind::Banana, FruitKind::Carrot];
}

/// The six hazard categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrashKind {
    RedCan,
    BlueCan,
    GreenCan,
    Bag,
    Bottle,
    CrushedBottle,
}

impl TrashKind {
    pub const ALL: [TrashKind; 6] = [
        TrashKind::RedCan,
        TrashKind::BlueCan,
        TrashKind::GreenCan,
        TrashKind::Bag,
        TrashKind::Bottle,
        TrashKind::CrushedBottle,
    ];
}

/// Item category; exactly one of plain / golden / hazard holds by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Fruit(FruitKind),
    Golden,
    Trash(TrashKind),
}

impl ItemKind {
    pub fn is_trash(&self) -> bool {
        matches!(self, ItemKind::Trash(_))
    }

    pub fn is_golden(&self) -> bool {
        matches!(self, ItemKind::Golden)
    }

    pub fn is_plain_fruit(&self) -> bool {
        matches!(self, ItemKind::Fruit(_))
    }
}

/// Item lifecycle; eaten items linger briefly so the smashed sprite shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemState {
    Flying,
    Eaten { remaining: f32 },
}

/// A spawned entity flying toward the hippo
#[derive(Debug, Clone)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    /// Normalized playfield position (spawn points may sit slightly outside)
    pub pos: Vec2,
    /// Unit direction toward the mouth center at spawn time; never re-aimed
    pub dir: Vec2,
    /// Units per second, drawn once at spawn
    pub speed: f32,
    /// Sprite rotation in radians, recorded at spawn for the renderer
    pub heading: f32,
    pub state: ItemState,
}

impl Item {
    pub fn is_flying(&self) -> bool {
        matches!(self.state, ItemState::Flying)
    }
}

/// Golden reveal sequence: badge, then points label, then the +40 lands.
///
/// Modeled as an explicit (phase, remaining) machine advanced by the tick so
/// a session reset cancels the pending bonus in a single state clear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoldenReveal {
    Badge { remaining: f32 },
    Points { remaining: f32 },
}

/// Streak presentation: banner then coin. Purely visual; the +20 is already
/// credited when the machine starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreakReveal {
    Banner { remaining: f32 },
    Coin { remaining: f32 },
}

/// Idle/hunger watcher over the time since the last tap
#[derive(Debug, Clone, Default)]
pub struct IdleState {
    /// Seconds since the last eat attempt
    pub elapsed: f32,
    /// Whether the hippo is in its idle animation
    pub idle: bool,
    /// Countdown to the second call-out, armed on entering idle
    pub feed_me_delay: Option<f32>,
    /// Mouth open/close phase accumulator while idle
    pub toggle: f32,
}

impl IdleState {
    /// Any tap wakes the hippo and re-arms both idle call-outs.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Idle animation: mouth open on the first half of each toggle cycle.
    pub fn mouth_open(&self) -> bool {
        self.idle && (self.toggle / MOUTH_TOGGLE_SECS) as u32 % 2 == 0
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG; all randomness flows through here
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Unclamped; repeated trash penalties can push it negative
    pub score: i64,
    pub trash_eaten: u32,
    /// Cumulative plain fruits eaten (milestone counter)
    pub plain_eaten: u32,
    /// FIFO of the last <= STREAK_LEN plain-fruit categories eaten.
    /// Golden and trash eats neither append nor clear it.
    pub streak: Vec<FruitKind>,
    /// Live items, in spawn order
    pub items: Vec<Item>,
    /// One-shot latch: score warning already shown this session
    pub warning_fired: bool,
    /// One-shot latch: ten-fruits milestone already shown this session
    pub ten_fruits_fired: bool,
    /// First trash of the session already showed its badge
    pub first_trash_seen: bool,
    /// Sick face after trash; cleared on the next eat attempt
    pub sick: bool,
    /// Forwarded to the audio collaborator; no simulation effect
    pub muted: bool,
    pub idle: IdleState,
    pub golden: Option<GoldenReveal>,
    pub streak_reveal: Option<StreakReveal>,
    /// Mouth-open pulse after a tap, seconds remaining
    pub mouth_pulse: f32,
    /// Banner countdowns, 0 = hidden
    pub warning_banner: f32,
    pub ten_fruits_banner: f32,
    pub trash_badge: f32,
    /// One-shot cues accumulated since the last drain
    pub cues: Vec<Cue>,
    /// Last voice line played, shared across the munch and yuck banks
    pub last_voice: Option<u8>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Spawn clock accumulator, seconds
    pub spawn_clock: f32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            score: 0,
            trash_eaten: 0,
            plain_eaten: 0,
            streak: Vec::with_capacity(STREAK_LEN),
            items: Vec::new(),
            warning_fired: false,
            ten_fruits_fired: false,
            first_trash_seen: false,
            sick: false,
            muted: false,
            idle: IdleState::default(),
            golden: None,
            streak_reveal: None,
            mouth_pulse: 0.0,
            warning_banner: 0.0,
            ten_fruits_banner: 0.0,
            trash_badge: 0.0,
            cues: Vec::new(),
            last_voice: None,
            time_ticks: 0,
            spawn_clock: 0.0,
            next_id: 1,
        }
    }

    /// Begin (or fully restart) a play session.
    ///
    /// Everything from the previous session is dropped, including in-flight
    /// reveal timers, so a stale golden bonus can never land in the new one.
    pub fn start(&mut self) {
        let seed = self.seed;
        *self = Self::new(seed);
        self.phase = GamePhase::Playing;
        log::info!("session started (seed {seed})");
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Credit (or deduct) points and run the one-shot score-warning latch.
    pub fn add_score(&mut self, points: i64) {
        self.score += points;
        if self.score >= SCORE_WARNING_THRESHOLD && !self.warning_fired {
            self.warning_fired = true;
            self.warning_banner = BANNER_SECS;
            self.push_cue(Cue::Warning);
            log::info!("score warning at {}", self.score);
        }
    }

    /// Trash threshold reached: stop the clocks, cancel every in-flight
    /// presentation and silence the frontend.
    pub fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.muted = true;
        self.golden = None;
        self.streak_reveal = None;
        self.mouth_pulse = 0.0;
        self.warning_banner = 0.0;
        self.ten_fruits_banner = 0.0;
        self.trash_badge = 0.0;
        self.idle.reset();
        self.push_cue(Cue::GameOver);
        log::info!(
            "game over: score {}, trash eaten {}",
            self.score,
            self.trash_eaten
        );
    }
}
