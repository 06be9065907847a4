//! Fixed-timestep advance of the session
//!
//! One call moves every clock forward in a fixed order, so a given schedule
//! of ticks and eat attempts always replays identically:
//! presentation timers, then motion, then the spawn clock, then the idle
//! clock. All delayed effects are plain countdowns advanced here; there are
//! no timer handles to orphan across a reset.

use super::geometry::MouthRect;
use super::spawn::spawn_item;
use super::state::{GamePhase, GameState, GoldenReveal, ItemState, StreakReveal};
use crate::consts::*;
use crate::cues::Cue;

/// Advance the session by `dt` seconds against the current mouth geometry.
/// No-op outside the Playing phase; game-over stops every clock.
pub fn tick(state: &mut GameState, mouth: &MouthRect, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    advance_presentation(state, dt);
    integrate_motion(state, mouth, dt);

    state.spawn_clock += dt;
    while state.spawn_clock >= SPAWN_PERIOD_SECS {
        state.spawn_clock -= SPAWN_PERIOD_SECS;
        spawn_item(state, mouth);
    }

    advance_idle(state, dt);
}

/// Decrement a countdown, clamping at zero.
fn run_down(timer: &mut f32, dt: f32) {
    if *timer > 0.0 {
        *timer = (*timer - dt).max(0.0);
    }
}

/// Advance banners, the reveal machines and eaten-item display timers.
fn advance_presentation(state: &mut GameState, dt: f32) {
    run_down(&mut state.mouth_pulse, dt);
    run_down(&mut state.warning_banner, dt);
    run_down(&mut state.ten_fruits_banner, dt);
    run_down(&mut state.trash_badge, dt);

    // Golden reveal: badge, then points label, then the deferred bonus lands.
    state.golden = match state.golden.take() {
        Some(GoldenReveal::Badge { remaining }) => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                Some(GoldenReveal::Points {
                    remaining: REVEAL_PHASE_SECS,
                })
            } else {
                Some(GoldenReveal::Badge { remaining })
            }
        }
        Some(GoldenReveal::Points { remaining }) => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                state.add_score(GOLDEN_BONUS);
                state.push_cue(Cue::GoldenPoints);
                log::debug!("golden bonus landed, score {}", state.score);
                None
            } else {
                Some(GoldenReveal::Points { remaining })
            }
        }
        None => None,
    };

    // Streak presentation: banner then coin. Score was credited up front.
    state.streak_reveal = match state.streak_reveal.take() {
        Some(StreakReveal::Banner { remaining }) => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                Some(StreakReveal::Coin {
                    remaining: REVEAL_PHASE_SECS,
                })
            } else {
                Some(StreakReveal::Banner { remaining })
            }
        }
        Some(StreakReveal::Coin { remaining }) => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                None
            } else {
                Some(StreakReveal::Coin { remaining })
            }
        }
        None => None,
    };

    // Age smashed items out of the live collection
    for item in &mut state.items {
        if let ItemState::Eaten { remaining } = &mut item.state {
            *remaining -= dt;
        }
    }
    state.items.retain(|item| match item.state {
        ItemState::Flying => true,
        ItemState::Eaten { remaining } => remaining > 0.0,
    });
}

/// Advance every flying item and cull misses.
///
/// An item inside the eat zone stays live and reachable; one that crosses the
/// hippo's bottom edge without reaching the mouth is a miss with no score
/// effect. A degenerate rect suspends both checks for this tick.
fn integrate_motion(state: &mut GameState, mouth: &MouthRect, dt: f32) {
    let geometry_valid = !mouth.is_degenerate();
    state.items.retain_mut(|item| {
        if !item.is_flying() {
            return true;
        }
        item.pos += item.dir * item.speed * dt;
        if !geometry_valid {
            return true;
        }
        if mouth.eat_zone_contains(item.pos) {
            return true;
        }
        item.pos.y <= mouth.bottom
    });
}

/// Advance the idle/hunger watcher.
///
/// Crossing the threshold enters idle exactly once per episode: the hungry
/// call-out fires immediately and the feed-me one is armed for later. While
/// idle the mouth toggle accumulator drives the open/close animation.
fn advance_idle(state: &mut GameState, dt: f32) {
    state.idle.elapsed += dt;

    if !state.idle.idle && state.idle.elapsed >= IDLE_THRESHOLD_SECS {
        state.idle.idle = true;
        state.idle.toggle = 0.0;
        state.idle.feed_me_delay = Some(FEED_ME_DELAY_SECS);
        state.push_cue(Cue::Hungry);
        log::debug!("hippo idle after {:.1}s", state.idle.elapsed);
    }

    if state.idle.idle {
        state.idle.toggle += dt;
        let cycle = 2.0 * MOUTH_TOGGLE_SECS;
        if state.idle.toggle >= cycle {
            state.idle.toggle -= cycle;
        }

        if let Some(delay) = state.idle.feed_me_delay {
            let delay = delay - dt;
            if delay <= 0.0 {
                state.idle.feed_me_delay = None;
                state.push_cue(Cue::FeedMe);
            } else {
                state.idle.feed_me_delay = Some(delay);
            }
        }
    }
}
