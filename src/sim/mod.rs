//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order, by entity ID)
//! - No rendering, audio or platform dependencies

pub mod eat;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use eat::{EatOutcome, attempt_eat};
pub use geometry::MouthRect;
pub use spawn::spawn_item;
pub use state::{
    FruitKind, GamePhase, GameState, GoldenReveal, IdleState, Item, ItemKind, ItemState,
    StreakReveal, TrashKind,
};
pub use tick::tick;
