//! Property-based tests for pattern compilation and sequencing.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated patterns and tick schedules.

use proptest::prelude::*;
use signalbox::arbiter::{Arbiter, ManualClock, StandardPairs};
use signalbox::config::{DirectionConfig, StepConfig};
use signalbox::core::{StateTransition, TransitionHistory};
use signalbox::light::{Step, StepLabel, MAX_STEPS_IN_PATTERN, NEVER_EXPIRES};
use signalbox::pattern::{compile_config, compile_steps, default_set};
use signalbox::sequencing::{advance, Synchronizer};
use signalbox::{Direction, IntersectionState};

/// Labels a configuration may place before the terminating `end`.
const RUNNING: [StepLabel; 13] = [
    StepLabel::Lpsg,
    StepLabel::Lpsy,
    StepLabel::Lpsr,
    StepLabel::Lusg,
    StepLabel::Lusy,
    StepLabel::Lusr,
    StepLabel::Lysg,
    StepLabel::Lysy,
    StepLabel::Lysr,
    StepLabel::Lrsg,
    StepLabel::Lrsy,
    StepLabel::Lrsr,
    StepLabel::Disabled,
];

prop_compose! {
    /// A valid step list: up to nine running steps with arbitrary times,
    /// followed by `end`.
    fn arbitrary_entries()(
        running in prop::collection::vec(
            (prop::sample::select(RUNNING.to_vec()), 0..100_000u64),
            1..MAX_STEPS_IN_PATTERN,
        ),
        end_time in 0..100_000u64,
    ) -> Vec<(StepLabel, u64)> {
        let mut entries = running;
        entries.push((StepLabel::End, end_time));
        entries
    }
}

fn to_config(entries: &[(StepLabel, u64)]) -> Vec<StepConfig> {
    entries
        .iter()
        .map(|(label, time)| StepConfig::new(label.token(), *time))
        .collect()
}

fn direction_config(direction: &str, entries: &[(StepLabel, u64)]) -> DirectionConfig {
    DirectionConfig {
        steps: to_config(entries),
        ..DirectionConfig::new(direction, &["<", "O"], &[])
    }
}

fn arbitrary_state() -> impl Strategy<Value = IntersectionState> {
    prop_oneof![
        Just(IntersectionState::NorthSouth),
        Just(IntersectionState::EastWest),
        Just(IntersectionState::Error),
        Just(IntersectionState::Off),
    ]
}

proptest! {
    #[test]
    fn compiled_pattern_starts_at_zero_and_ends_once(entries in arbitrary_entries()) {
        let steps = compile_steps(&to_config(&entries)).unwrap();
        let end = entries.len() - 1;

        prop_assert_eq!(steps[0].offset_ms, 0);
        let never: Vec<_> = (0..MAX_STEPS_IN_PATTERN)
            .filter(|&i| steps[i].offset_ms == NEVER_EXPIRES)
            .collect();
        prop_assert_eq!(never, vec![end]);
        prop_assert_eq!(steps[end].label, StepLabel::End);
        prop_assert!(steps[end + 1..].iter().all(|s| *s == Step::unused()));
    }

    #[test]
    fn compiled_offsets_come_from_the_following_entry(entries in arbitrary_entries()) {
        let steps = compile_steps(&to_config(&entries)).unwrap();
        let end = entries.len() - 1;

        for i in 0..end {
            prop_assert_eq!(steps[i].label, entries[i].0);
            if i >= 1 {
                prop_assert_eq!(steps[i].offset_ms, entries[i + 1].1);
            }
        }
    }

    #[test]
    fn advance_is_idempotent_before_expiry(elapsed in 0..3000u64, repeats in 1..5usize) {
        // Step 0 of the default pattern expires at 3000.
        let mut set = default_set();
        set.restart_cycle(0);
        let before = set.clone();

        for _ in 0..repeats {
            prop_assert_eq!(advance(Some(&mut set), elapsed), StepLabel::Lpsr);
        }
        prop_assert_eq!(set, before);
    }

    #[test]
    fn advance_never_reports_unused(
        entries in arbitrary_entries(),
        deltas in prop::collection::vec(0..20_000u64, 1..40),
    ) {
        let config = direction_config("north", &entries);
        let mut table = compile_config(&[config]).unwrap();
        let set = table.get_mut(Direction::North);
        set.restart_cycle(0);

        let mut now = 0;
        for delta in deltas {
            now += delta;
            let label = advance(Some(&mut *set), now);
            prop_assert_ne!(label, StepLabel::Unused);
            prop_assert_eq!(label, set.current_label());
            prop_assert_ne!(set.current_label(), StepLabel::Unused);
        }
    }

    #[test]
    fn synchronizer_reports_lower_label(
        north in arbitrary_entries(),
        south in arbitrary_entries(),
        deltas in prop::collection::vec(0..20_000u64, 1..40),
    ) {
        let mut table = compile_config(&[
            direction_config("north", &north),
            direction_config("south", &south),
        ])
        .unwrap();
        let mut sync = Synchronizer::new();
        sync.assign(&mut table, Some(Direction::North), Some(Direction::South), 0)
            .unwrap();

        let mut now = 0;
        for delta in deltas {
            now += delta;
            let label = sync.tick(&mut table, now);
            let expected = table
                .get(Direction::North)
                .current_label()
                .min(table.get(Direction::South).current_label());
            prop_assert_eq!(label, expected);
        }
    }

    #[test]
    fn arbiter_only_runs_pairs_once_started(
        deltas in prop::collection::vec(0..15_000u64, 1..60),
    ) {
        let mut arbiter = Arbiter::new(ManualClock::new(0), StandardPairs);

        for delta in deltas {
            arbiter.clock().advance(delta);
            let state = arbiter.poll();
            prop_assert!(state.is_pair());
            prop_assert!(arbiter.active_pair().is_some());
            prop_assert!(!arbiter.is_fail_safe());
        }
    }

    #[test]
    fn history_keeps_most_recent_in_order(
        states in prop::collection::vec(arbitrary_state(), 1..30),
        capacity in 1..10usize,
    ) {
        let mut history = TransitionHistory::with_capacity(capacity);
        let mut from = IntersectionState::Off;
        for (i, to) in states.iter().enumerate() {
            history.record(StateTransition { from, to: *to, at_ms: i as u64 });
            from = *to;
        }

        prop_assert_eq!(history.len(), states.len().min(capacity));
        let kept: Vec<_> = history.iter().map(|t| t.to).collect();
        prop_assert_eq!(&kept[..], &states[states.len() - kept.len()..]);
        let times: Vec<_> = history.iter().map(|t| t.at_ms).collect();
        prop_assert!(times.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn label_tokens_parse_back_in_any_case(label in prop::sample::select(RUNNING.to_vec())) {
        prop_assert_eq!(StepLabel::from_token(label.token()), Some(label));
        prop_assert_eq!(
            StepLabel::from_token(&label.token().to_ascii_lowercase()),
            Some(label)
        );
    }
}
