//! Property-based tests for the machine, table, and bimap cores.
//!
//! These tests use proptest to verify invariants hold across
//! many randomly generated inputs.

use gambit::machine::{StateHooks, StateMachine, TransitionCause};
use gambit::state_id;
use gambit::{BiMap, WeightedTable};
use proptest::prelude::*;

state_id! {
    enum Ai {
        Idle,
        Walk,
        Chase,
        Attack,
    }
}

const ALL_STATES: [Ai; 4] = [Ai::Idle, Ai::Walk, Ai::Chase, Ai::Attack];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Enter(Ai),
    Update(Ai),
    Leave(Ai),
}

type Trace = Vec<Event>;

fn traced_machine() -> StateMachine<Ai, Trace> {
    let mut machine = StateMachine::new();
    for state in ALL_STATES {
        machine.register(
            state,
            StateHooks::new()
                .on_enter(move |trace: &mut Trace| trace.push(Event::Enter(state)))
                .on_update(move |trace: &mut Trace| {
                    trace.push(Event::Update(state));
                    None
                })
                .on_leave(move |trace: &mut Trace| trace.push(Event::Leave(state))),
        );
    }
    machine
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> Ai {
        match variant {
            0 => Ai::Idle,
            1 => Ai::Walk,
            2 => Ai::Chase,
            _ => Ai::Attack,
        }
    }
}

proptest! {
    #[test]
    fn update_ticks_the_current_state_exactly_n_times(
        initial in arbitrary_state(),
        ticks in 0..40usize,
    ) {
        let mut trace = Trace::new();
        let mut machine = traced_machine();
        machine.set_initial(initial, &mut trace);

        for _ in 0..ticks {
            machine.update(&mut trace);
        }

        let updates = trace
            .iter()
            .filter(|e| matches!(e, Event::Update(_)))
            .count();
        prop_assert_eq!(updates, ticks);

        let foreign = trace
            .iter()
            .any(|e| !matches!(e, Event::Enter(s) | Event::Update(s) | Event::Leave(s) if *s == initial));
        prop_assert!(!foreign);
    }

    #[test]
    fn immediate_transitions_fire_leave_strictly_before_enter(
        targets in prop::collection::vec(arbitrary_state(), 1..10),
    ) {
        let mut trace = Trace::new();
        let mut machine = traced_machine();
        machine.set_initial(Ai::Idle, &mut trace);

        for target in &targets {
            machine.change_now(*target, &mut trace);
        }

        let mut expected = vec![Event::Enter(Ai::Idle)];
        let mut prev = Ai::Idle;
        for target in &targets {
            expected.push(Event::Leave(prev));
            expected.push(Event::Enter(*target));
            prev = *target;
        }
        prop_assert_eq!(trace, expected);
    }

    #[test]
    fn deferred_requests_collapse_to_the_last_target(
        targets in prop::collection::vec(arbitrary_state(), 1..10),
    ) {
        let mut trace = Trace::new();
        let mut machine = traced_machine();
        machine.set_initial(Ai::Idle, &mut trace);

        for target in &targets {
            machine.change_to(*target);
        }
        machine.update(&mut trace);

        let last = *targets.last().unwrap();
        prop_assert_eq!(machine.current(), Some(&last));

        let expected = vec![
            Event::Enter(Ai::Idle),
            Event::Leave(Ai::Idle),
            Event::Enter(last),
            Event::Update(last),
        ];
        prop_assert_eq!(trace, expected);

        let causes: Vec<_> = machine.log().records().iter().map(|r| r.cause).collect();
        prop_assert_eq!(causes, vec![TransitionCause::Initial, TransitionCause::Deferred]);
    }

    #[test]
    fn log_path_tracks_applied_transitions(
        targets in prop::collection::vec(arbitrary_state(), 0..10),
    ) {
        let mut trace = Trace::new();
        let mut machine = traced_machine();
        machine.set_initial(Ai::Idle, &mut trace);

        for target in &targets {
            machine.change_now(*target, &mut trace);
        }

        let mut expected = vec![Ai::Idle];
        expected.extend(targets.iter().copied());
        let path: Vec<Ai> = machine.log().path().into_iter().copied().collect();
        prop_assert_eq!(path, expected);
    }

    #[test]
    fn weight_sum_always_matches_the_entries(
        weights in prop::collection::vec(0..1000u32, 0..20),
        extra in 0..1000u32,
    ) {
        let mut table = WeightedTable::with_seed(0);
        table.extend(weights.iter().copied().enumerate().map(|(i, w)| (i, w)));

        let expected: u64 = weights.iter().map(|w| u64::from(*w)).sum();
        prop_assert_eq!(table.weight_sum(), expected);

        table.add(weights.len(), extra);
        prop_assert_eq!(table.weight_sum(), expected + u64::from(extra));

        let removed = table.remove(table.len() - 1);
        prop_assert_eq!(removed.weight, extra);
        prop_assert_eq!(table.weight_sum(), expected);
    }

    #[test]
    fn pick_returns_a_positive_weight_member_or_nothing(
        weights in prop::collection::vec(0..100u32, 0..20),
        seed in any::<u64>(),
    ) {
        let mut table = WeightedTable::with_seed(seed);
        table.extend(weights.iter().copied().enumerate().map(|(i, w)| (i, w)));

        match table.pick().copied() {
            Some(index) => {
                prop_assert!(table.weight_sum() > 0);
                prop_assert!(weights[index] > 0);
            }
            None => prop_assert_eq!(table.weight_sum(), 0),
        }
    }

    #[test]
    fn pick_where_never_mutates_and_always_terminates(
        weights in prop::collection::vec(0..100u32, 0..20),
        seed in any::<u64>(),
        rejected in 0..20usize,
    ) {
        let mut table = WeightedTable::with_seed(seed);
        table.extend(weights.iter().copied().enumerate().map(|(i, w)| (i, w)));
        let before: Vec<_> = table.entries().to_vec();

        let picked = table.pick_where(|index| *index != rejected).copied();
        if let Some(index) = picked {
            prop_assert_ne!(index, rejected);
            prop_assert!(weights[index] > 0);
        }

        prop_assert_eq!(table.entries(), before.as_slice());
    }

    #[test]
    fn bimap_directions_stay_mutual_inverses(
        pairs in prop::collection::vec((0..8u8, 0..8u8), 0..40),
    ) {
        let mut map = BiMap::new();
        for (key, value) in pairs {
            map.insert(key, value);
        }

        prop_assert_eq!(map.iter().count(), map.len());
        for (key, value) in map.iter() {
            prop_assert_eq!(map.get_by_key(key), Some(value));
            prop_assert_eq!(map.get_by_value(value), Some(key));
        }

        let mut keys: Vec<_> = map.keys().copied().collect();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), map.len());
    }

    #[test]
    fn bimap_removal_clears_both_directions(
        pairs in prop::collection::vec((0..8u8, 0..8u8), 1..40),
    ) {
        let mut map = BiMap::new();
        for (key, value) in &pairs {
            map.insert(*key, *value);
        }

        let keys: Vec<_> = map.keys().copied().collect();
        for key in keys {
            let value = map.remove_by_key(&key).unwrap();
            prop_assert!(!map.contains_key(&key));
            prop_assert!(!map.contains_value(&value));
        }
        prop_assert!(map.is_empty());
    }
}
