//! Eat resolution
//!
//! An external tap is a single trigger. Resolution is two-phase: first a pure
//! scan over the live collection picks at most one reachable item, then the
//! mutation is applied. The collection is never mutated mid-scan, and at most
//! one item transitions per call (first match in collection order wins).

use super::geometry::MouthRect;
use super::state::{
    FruitKind, GamePhase, GameState, GoldenReveal, ItemKind, ItemState, StreakReveal, TrashKind,
};
use crate::consts::*;
use crate::cues::{Cue, pick_voice};

/// What a single eat attempt resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EatOutcome {
    /// Nothing reachable; mouth pulse only
    Miss,
    Fruit(FruitKind),
    Golden,
    Trash(TrashKind),
}

/// Resolve one tap against the current mouth geometry.
///
/// Matched or not, the tap wakes the hippo: the idle machine resets, the sick
/// face clears and the mouth pulses open.
pub fn attempt_eat(state: &mut GameState, mouth: &MouthRect) -> EatOutcome {
    if state.phase != GamePhase::Playing {
        return EatOutcome::Miss;
    }

    state.idle.reset();
    state.sick = false;
    state.mouth_pulse = MOUTH_PULSE_SECS;

    // Phase one: pure query over the collection snapshot.
    let target = state
        .items
        .iter()
        .position(|item| item.is_flying() && mouth.eat_zone_contains(item.pos));
    let Some(idx) = target else {
        return EatOutcome::Miss;
    };

    // Phase two: apply. The item lingers in its smashed state briefly; the
    // tick filters it out after the display delay.
    let kind = state.items[idx].kind;
    state.items[idx].state = ItemState::Eaten {
        remaining: EAT_DISPLAY_SECS,
    };

    match kind {
        ItemKind::Golden => {
            // The bonus is deferred to the end of the reveal sequence;
            // golden is transparent to the streak and the milestone counter.
            state.golden = Some(GoldenReveal::Badge {
                remaining: REVEAL_PHASE_SECS,
            });
            state.push_cue(Cue::GoldenFanfare);
            EatOutcome::Golden
        }
        ItemKind::Trash(trash) => {
            eat_trash(state);
            EatOutcome::Trash(trash)
        }
        ItemKind::Fruit(fruit) => {
            eat_fruit(state, fruit);
            EatOutcome::Fruit(fruit)
        }
    }
}

fn eat_trash(state: &mut GameState) {
    state.add_score(-TRASH_PENALTY);
    state.trash_eaten += 1;
    state.sick = true;
    if !state.first_trash_seen {
        state.first_trash_seen = true;
        state.trash_badge = BANNER_SECS;
    }

    let voice = pick_voice(&mut state.rng, TRASH_VOICE_COUNT, state.last_voice);
    state.last_voice = Some(voice);
    state.push_cue(Cue::Yuck { voice });
    log::debug!("ate trash #{}, score {}", state.trash_eaten, state.score);

    if state.trash_eaten >= TRASH_GAME_OVER_COUNT {
        state.enter_game_over();
    }
}

fn eat_fruit(state: &mut GameState, fruit: FruitKind) {
    state.add_score(FRUIT_POINTS);
    state.plain_eaten += 1;

    // Bounded FIFO of the last three plain-fruit categories
    state.streak.push(fruit);
    if state.streak.len() > STREAK_LEN {
        state.streak.remove(0);
    }
    if state.streak.len() == STREAK_LEN && state.streak.windows(2).all(|w| w[0] == w[1]) {
        state.add_score(STREAK_BONUS);
        // Clearing prevents an overlapping re-trigger on the next eat
        state.streak.clear();
        state.streak_reveal = Some(StreakReveal::Banner {
            remaining: REVEAL_PHASE_SECS,
        });
        state.push_cue(Cue::Streak);
        log::info!("three in a row, score {}", state.score);
    }

    if state.plain_eaten == TEN_FRUITS_MILESTONE && !state.ten_fruits_fired {
        state.ten_fruits_fired = true;
        state.ten_fruits_banner = BANNER_SECS;
        state.push_cue(Cue::TenFruits);
        log::info!("ten fruits milestone");
    }

    let voice = pick_voice(&mut state.rng, FRUIT_VOICE_COUNT, state.last_voice);
    state.last_voice = Some(voice);
    state.push_cue(Cue::Munch { voice });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Item;
    use glam::Vec2;

    fn hippo() -> MouthRect {
        MouthRect::new(40.0, 60.0, 80.0, 96.0)
    }

    fn playing_state() -> GameState {
        let mut state = GameState::new(4242);
        state.start();
        state
    }

    /// Put an item of `kind` inside the eat zone.
    fn feed(state: &mut GameState, kind: ItemKind) -> u32 {
        let id = state.next_entity_id();
        state.items.push(Item {
            id,
            kind,
            pos: Vec2::new(50.0, 83.0),
            dir: Vec2::new(0.0, 1.0),
            speed: 40.0,
            heading: std::f32::consts::FRAC_PI_2,
            state: ItemState::Flying,
        });
        id
    }

    fn eat(state: &mut GameState, kind: ItemKind) -> EatOutcome {
        feed(state, kind);
        attempt_eat(state, &hippo())
    }

    #[test]
    fn test_miss_is_a_pulse_only() {
        let mut state = playing_state();
        let outcome = attempt_eat(&mut state, &hippo());
        assert_eq!(outcome, EatOutcome::Miss);
        assert_eq!(state.score, 0);
        assert!(state.mouth_pulse > 0.0);
        assert!(state.cues.is_empty());
    }

    #[test]
    fn test_item_outside_zone_is_unreachable() {
        let mut state = playing_state();
        let id = state.next_entity_id();
        state.items.push(Item {
            id,
            kind: ItemKind::Fruit(FruitKind::Mango),
            pos: Vec2::new(50.0, 92.0), // inside the body, below the mouth band
            dir: Vec2::new(0.0, 1.0),
            speed: 40.0,
            heading: 0.0,
            state: ItemState::Flying,
        });
        assert_eq!(attempt_eat(&mut state, &hippo()), EatOutcome::Miss);
        assert!(state.items[0].is_flying());
    }

    #[test]
    fn test_first_match_wins_and_only_one_transitions() {
        let mut state = playing_state();
        feed(&mut state, ItemKind::Fruit(FruitKind::Mango));
        feed(&mut state, ItemKind::Fruit(FruitKind::Banana));

        let outcome = attempt_eat(&mut state, &hippo());
        assert_eq!(outcome, EatOutcome::Fruit(FruitKind::Mango));
        assert!(matches!(state.items[0].state, ItemState::Eaten { .. }));
        assert!(state.items[1].is_flying());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_fruit_scores_one_point_each() {
        let mut state = playing_state();
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        eat(&mut state, ItemKind::Fruit(FruitKind::Banana));
        assert_eq!(state.score, 2);
        assert_eq!(state.plain_eaten, 2);
    }

    #[test]
    fn test_streak_awards_bonus_once_then_clears() {
        let mut state = playing_state();
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        assert!(!state.cues.contains(&Cue::Streak));

        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        assert_eq!(state.score, 3 + STREAK_BONUS);
        assert!(state.streak.is_empty());
        assert!(matches!(
            state.streak_reveal,
            Some(StreakReveal::Banner { .. })
        ));

        // A fourth mango starts a fresh window, no immediate re-trigger
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        assert_eq!(state.score, 4 + STREAK_BONUS);
        assert_eq!(state.cues.iter().filter(|&&c| c == Cue::Streak).count(), 1);
    }

    #[test]
    fn test_mixed_fruits_do_not_streak() {
        let mut state = playing_state();
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        eat(&mut state, ItemKind::Fruit(FruitKind::Banana));
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        assert_eq!(state.score, 3);
        assert!(!state.cues.contains(&Cue::Streak));
    }

    #[test]
    fn test_golden_is_transparent_to_the_streak() {
        let mut state = playing_state();
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        eat(&mut state, ItemKind::Golden);
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        assert!(state.cues.contains(&Cue::Streak));
        // 3 fruit points + streak bonus; golden still pending
        assert_eq!(state.score, 3 + STREAK_BONUS);
    }

    #[test]
    fn test_trash_is_transparent_to_the_streak() {
        let mut state = playing_state();
        eat(&mut state, ItemKind::Fruit(FruitKind::Carrot));
        eat(&mut state, ItemKind::Trash(TrashKind::Bag));
        eat(&mut state, ItemKind::Fruit(FruitKind::Carrot));
        eat(&mut state, ItemKind::Fruit(FruitKind::Carrot));
        assert!(state.cues.contains(&Cue::Streak));
    }

    #[test]
    fn test_golden_defers_score_and_skips_counters() {
        let mut state = playing_state();
        let outcome = eat(&mut state, ItemKind::Golden);
        assert_eq!(outcome, EatOutcome::Golden);
        assert_eq!(state.score, 0);
        assert_eq!(state.plain_eaten, 0);
        assert!(state.streak.is_empty());
        assert!(matches!(state.golden, Some(GoldenReveal::Badge { .. })));
        assert!(state.cues.contains(&Cue::GoldenFanfare));
    }

    #[test]
    fn test_trash_penalty_and_sick_face() {
        let mut state = playing_state();
        let outcome = eat(&mut state, ItemKind::Trash(TrashKind::RedCan));
        assert_eq!(outcome, EatOutcome::Trash(TrashKind::RedCan));
        assert_eq!(state.score, -TRASH_PENALTY);
        assert_eq!(state.trash_eaten, 1);
        assert!(state.sick);
        assert!(state.trash_badge > 0.0);

        // Sick face clears on the next attempt, even a miss
        attempt_eat(&mut state, &hippo());
        assert!(!state.sick);
    }

    #[test]
    fn test_score_goes_negative_unclamped() {
        let mut state = playing_state();
        eat(&mut state, ItemKind::Trash(TrashKind::Bottle));
        eat(&mut state, ItemKind::Trash(TrashKind::Bottle));
        assert_eq!(state.score, -2 * TRASH_PENALTY);
    }

    #[test]
    fn test_ten_fruits_milestone_fires_exactly_once() {
        let mut state = playing_state();
        for _ in 0..TEN_FRUITS_MILESTONE {
            // Alternate kinds so no streak bonus muddies the score
            eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
            eat(&mut state, ItemKind::Fruit(FruitKind::Banana));
        }
        assert_eq!(
            state.cues.iter().filter(|&&c| c == Cue::TenFruits).count(),
            1
        );
    }

    #[test]
    fn test_warning_fires_once_despite_oscillation() {
        let mut state = playing_state();
        state.score = SCORE_WARNING_THRESHOLD - 1;
        eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
        assert!(state.warning_fired);

        // Drop below with trash, climb back over: still one warning
        eat(&mut state, ItemKind::Trash(TrashKind::Bag));
        eat(&mut state, ItemKind::Fruit(FruitKind::Banana));
        assert_eq!(state.cues.iter().filter(|&&c| c == Cue::Warning).count(), 1);
    }

    #[test]
    fn test_tenth_trash_ends_the_session() {
        let mut state = playing_state();
        for i in 1..TRASH_GAME_OVER_COUNT {
            eat(&mut state, ItemKind::Trash(TrashKind::GreenCan));
            assert_eq!(state.phase, GamePhase::Playing, "still alive after {i}");
        }
        eat(&mut state, ItemKind::Trash(TrashKind::GreenCan));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.muted);
        assert!(state.cues.contains(&Cue::GameOver));

        // An eleventh trash never resolves
        let score = state.score;
        let outcome = eat(&mut state, ItemKind::Trash(TrashKind::GreenCan));
        assert_eq!(outcome, EatOutcome::Miss);
        assert_eq!(state.score, score);
        assert_eq!(state.trash_eaten, TRASH_GAME_OVER_COUNT);
    }

    #[test]
    fn test_voice_cues_never_repeat_back_to_back() {
        let mut state = playing_state();
        for _ in 0..40 {
            eat(&mut state, ItemKind::Fruit(FruitKind::Mango));
            eat(&mut state, ItemKind::Fruit(FruitKind::Banana));
        }
        let voices: Vec<u8> = state
            .cues
            .iter()
            .filter_map(|c| match c {
                Cue::Munch { voice } | Cue::Yuck { voice } => Some(*voice),
                _ => None,
            })
            .collect();
        for pair in voices.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
