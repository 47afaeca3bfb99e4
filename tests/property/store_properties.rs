//! Property-based tests for the task store and time formatting.
//!
//! Uses proptest to verify:
//! 1. The active/completed views partition the store for any mutation plan.
//! 2. Toggling completion twice is the identity.
//! 3. Removal deletes exactly one task and preserves the others' order.
//! 4. `format_mm_ss` round-trips and keeps its field widths.
//! 5. Whitespace-only text never creates a task.

use proptest::prelude::*;

use termfocus_core::{Filter, Priority, TaskStore, format_mm_ss};

// --- Strategies ---

/// Strategy for task text with a guaranteed non-whitespace character.
fn arb_task_text() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,29}"
}

/// Strategy for an arbitrary priority.
fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
    ]
}

/// Strategy for a store-building plan: text, completed flag, priority.
fn arb_plan() -> impl Strategy<Value = Vec<(String, bool, Priority)>> {
    prop::collection::vec((arb_task_text(), any::<bool>(), arb_priority()), 1..20)
}

/// Build a store by replaying a plan through the public operations.
fn store_from(plan: &[(String, bool, Priority)]) -> TaskStore {
    let mut store = TaskStore::new();
    for (text, completed, priority) in plan {
        let id = store.add(text).unwrap().id;
        store.set_priority(id, *priority).unwrap();
        if *completed {
            store.toggle(id).unwrap();
        }
    }
    store
}

// --- Property tests ---

proptest! {
    /// Active and completed views partition the store; the all view is the
    /// identity, whatever mutations came before.
    #[test]
    fn filters_partition_the_store(plan in arb_plan()) {
        let store = store_from(&plan);

        let all = store.filtered(Filter::All);
        let active = store.filtered(Filter::Active);
        let completed = store.filtered(Filter::Completed);

        prop_assert_eq!(all.len(), store.len());
        prop_assert_eq!(active.len() + completed.len(), all.len());
        prop_assert!(active.iter().all(|t| !t.completed));
        prop_assert!(completed.iter().all(|t| t.completed));

        // The all view is the store in insertion order.
        for (seen, task) in all.iter().zip(store.tasks()) {
            prop_assert_eq!(seen.id, task.id);
        }
    }

    /// Toggling a task twice restores its original completion state.
    #[test]
    fn toggle_is_involution(plan in arb_plan(), index in any::<prop::sample::Index>()) {
        let mut store = store_from(&plan);
        let id = store.tasks()[index.index(store.len())].id;
        let before = store.get(id).unwrap().completed;

        store.toggle(id).unwrap();
        store.toggle(id).unwrap();

        prop_assert_eq!(store.get(id).unwrap().completed, before);
    }

    /// Removing a task deletes exactly one record and keeps the rest in
    /// their original relative order.
    #[test]
    fn remove_preserves_relative_order(plan in arb_plan(), index in any::<prop::sample::Index>()) {
        let mut store = store_from(&plan);
        let ids_before: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
        let victim = ids_before[index.index(ids_before.len())];

        store.remove(victim).unwrap();

        let ids_after: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
        let expected: Vec<_> = ids_before.into_iter().filter(|id| *id != victim).collect();
        prop_assert_eq!(ids_after, expected);
    }

    /// Mutating a fabricated id never changes the store.
    #[test]
    fn unknown_id_mutations_are_noops(plan in arb_plan()) {
        let mut store = store_from(&plan);
        let snapshot: Vec<_> = store.tasks().to_vec();
        let ghost = termfocus_core::TaskId::new();

        prop_assert!(store.toggle(ghost).is_err());
        prop_assert!(store.remove(ghost).is_err());
        prop_assert!(store.set_priority(ghost, Priority::High).is_err());
        prop_assert_eq!(store.tasks(), snapshot.as_slice());
    }

    /// MM:SS formatting round-trips and keeps both fields well-formed.
    #[test]
    fn format_mm_ss_round_trips(secs in 0u32..360_000) {
        let formatted = format_mm_ss(secs);
        let (minutes, seconds) = formatted.split_once(':').unwrap();

        prop_assert!(minutes.len() >= 2);
        prop_assert_eq!(seconds.len(), 2);

        let m: u32 = minutes.parse().unwrap();
        let s: u32 = seconds.parse().unwrap();
        prop_assert!(s < 60);
        prop_assert_eq!(m * 60 + s, secs);
    }

    /// Whitespace-only text is always rejected without touching the store.
    #[test]
    fn whitespace_only_text_never_adds(text in "[ \t]{0,10}") {
        let mut store = TaskStore::new();
        prop_assert!(store.add(&text).is_err());
        prop_assert!(store.is_empty());
    }
}
