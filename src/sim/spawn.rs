//! Item spawning policy
//!
//! One spawn opportunity per period: pick an entry edge biased toward the
//! upper half of the field, aim at the mouth center once, roll the category,
//! draw a speed. Items never re-aim after launch.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::geometry::MouthRect;
use super::state::{FruitKind, GameState, Item, ItemKind, ItemState, TrashKind};
use crate::consts::*;

/// Entry point on one of three edges. The top edge spans the full width; the
/// side edges only cover the upper half, so items arc down toward the
/// bottom-centered hippo.
fn entry_point(rng: &mut Pcg32) -> Vec2 {
    match rng.random_range(0..3u8) {
        0 => Vec2::new(rng.random_range(0.0..FIELD_SIZE), -SPAWN_MARGIN),
        1 => Vec2::new(-SPAWN_MARGIN, rng.random_range(0.0..FIELD_SIZE / 2.0)),
        _ => Vec2::new(
            FIELD_SIZE + SPAWN_MARGIN,
            rng.random_range(0.0..FIELD_SIZE / 2.0),
        ),
    }
}

/// Category policy. The hazard roll is evaluated first and gates out the
/// golden roll for this spawn; a failed hazard roll leaves golden eligible.
fn choose_kind(rng: &mut Pcg32, score: i64) -> ItemKind {
    if score >= TRASH_SCORE_GATE && rng.random_bool(TRASH_SPAWN_CHANCE) {
        let trash = TrashKind::ALL[rng.random_range(0..TrashKind::ALL.len())];
        return ItemKind::Trash(trash);
    }
    if score >= GOLDEN_SCORE_GATE && rng.random_bool(GOLDEN_SPAWN_CHANCE) {
        return ItemKind::Golden;
    }
    ItemKind::Fruit(FruitKind::ALL[rng.random_range(0..FruitKind::ALL.len())])
}

/// Spawn one item aimed at the current mouth center.
///
/// Skipped entirely when the geometry is degenerate: there is nothing to aim
/// at, and a zero-size box means the frontend layout hasn't settled yet.
pub fn spawn_item(state: &mut GameState, mouth: &MouthRect) {
    if mouth.is_degenerate() {
        log::debug!("spawn skipped: degenerate mouth rect");
        return;
    }

    let pos = entry_point(&mut state.rng);
    let dir = (mouth.center() - pos).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }

    let kind = choose_kind(&mut state.rng, state.score);
    let speed = state.rng.random_range(ITEM_MIN_SPEED..ITEM_MAX_SPEED);
    let id = state.next_entity_id();
    state.items.push(Item {
        id,
        kind,
        pos,
        dir,
        speed,
        heading: dir.y.atan2(dir.x),
        state: ItemState::Flying,
    });
}
