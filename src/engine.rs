//! Embedding facade
//!
//! The engine exclusively owns the session state. The embedding drives it
//! with ticks and eat attempts on one logical timeline, reads snapshots for
//! rendering, and drains cue events for audio dispatch. Nothing here mutates
//! state on behalf of a collaborator.

use serde::Serialize;

use crate::cues::Cue;
use crate::sim::{
    EatOutcome, GamePhase, GameState, GoldenReveal, ItemKind, ItemState, MouthRect, StreakReveal,
    attempt_eat, tick,
};

/// The game engine for one play session at a time
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Create an engine; `seed` fixes the RNG stream for the session.
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
        }
    }

    /// Start a session, or fully restart the current one. Safe to call in any
    /// phase; a restart drops every in-flight delayed effect.
    pub fn start(&mut self) {
        self.state.start();
    }

    /// Advance all clocks by `dt` seconds against the current mouth geometry.
    /// Call at a fixed rate; no-op outside the Playing phase.
    pub fn tick(&mut self, mouth: MouthRect, dt: f32) {
        tick(&mut self.state, &mouth, dt);
    }

    /// Resolve a single tap. The caller debounces; one call per physical tap.
    pub fn attempt_eat(&mut self, mouth: MouthRect) -> EatOutcome {
        attempt_eat(&mut self.state, &mouth)
    }

    /// Forwarded to the audio collaborator via the snapshot; no simulation
    /// effect.
    pub fn set_muted(&mut self, muted: bool) {
        self.state.muted = muted;
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> i64 {
        self.state.score
    }

    /// Drain the one-shot cues accumulated since the last call.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.state.cues)
    }

    /// Read-only view for the renderer and cue dispatcher.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }
}

/// Read model handed to collaborators; never a mutation path back in
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: i64,
    pub trash_eaten: u32,
    pub muted: bool,
    /// Mouth open from the tap pulse or the idle toggle
    pub mouth_open: bool,
    pub sick: bool,
    pub idle: bool,
    pub items: Vec<ItemView>,
    pub overlays: Overlays,
}

impl Snapshot {
    fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            trash_eaten: state.trash_eaten,
            muted: state.muted,
            mouth_open: state.mouth_pulse > 0.0 || state.idle.mouth_open(),
            sick: state.sick,
            idle: state.idle.idle,
            items: state.items.iter().map(ItemView::from_item).collect(),
            overlays: Overlays {
                golden_badge: matches!(state.golden, Some(GoldenReveal::Badge { .. })),
                golden_points: matches!(state.golden, Some(GoldenReveal::Points { .. })),
                streak_banner: matches!(state.streak_reveal, Some(StreakReveal::Banner { .. })),
                streak_coin: matches!(state.streak_reveal, Some(StreakReveal::Coin { .. })),
                warning: state.warning_banner > 0.0,
                ten_fruits: state.ten_fruits_banner > 0.0,
                trash_badge: state.trash_badge > 0.0,
            },
        }
    }
}

/// One renderable item
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub id: u32,
    pub kind: ItemKind,
    pub x: f32,
    pub y: f32,
    /// Sprite rotation, radians
    pub heading: f32,
    /// Show the smashed sprite variant
    pub smashed: bool,
}

impl ItemView {
    fn from_item(item: &crate::sim::Item) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            x: item.pos.x,
            y: item.pos.y,
            heading: item.heading,
            smashed: matches!(item.state, ItemState::Eaten { .. }),
        }
    }
}

/// Which overlay presentations are currently showing
#[derive(Debug, Clone, Copy, Serialize, Default)]
pub struct Overlays {
    pub golden_badge: bool,
    pub golden_points: bool,
    pub streak_banner: bool,
    pub streak_coin: bool,
    pub warning: bool,
    pub ten_fruits: bool,
    pub trash_badge: bool,
}
