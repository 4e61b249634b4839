//! Property tests for the progression rules and the validators.
mod common;
use common::*;
use proptest::prelude::*;
use sleuth::prelude::*;

/// A catalog size and a subset of its positions marked as completed.
fn catalog_and_completions() -> impl Strategy<Value = (usize, Vec<bool>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), proptest::collection::vec(any::<bool>(), n)))
}

fn completion_set(mask: &[bool]) -> CompletionSet {
    mask.iter()
        .enumerate()
        .filter(|(_, done)| **done)
        .map(|(i, _)| format!("c{}", i))
        .collect()
}

fn role() -> impl Strategy<Value = NodeRole> {
    prop::sample::select(NodeRole::ALL.to_vec())
}

proptest! {
    #[test]
    fn first_case_is_always_unlocked((n, mask) in catalog_and_completions()) {
        let catalog = numbered_catalog(n);
        let states = derive_case_states(&catalog, &completion_set(&mask));
        prop_assert!(states[0].unlocked);
    }

    #[test]
    fn unlock_follows_predecessor((n, mask) in catalog_and_completions()) {
        let catalog = numbered_catalog(n);
        let completed = completion_set(&mask);
        let states = derive_case_states(&catalog, &completed);
        for i in 1..n {
            prop_assert_eq!(states[i].unlocked, mask[i - 1]);
            prop_assert_eq!(states[i].completed, mask[i]);
        }
    }

    #[test]
    fn recording_never_locks_a_case((n, mask) in catalog_and_completions(), extra in 0usize..12) {
        let catalog = numbered_catalog(n);
        let before = completion_set(&mask);
        let after = record_completion(&before, &format!("c{}", extra % n));
        let old = derive_case_states(&catalog, &before);
        let new = derive_case_states(&catalog, &after);
        for (was, now) in old.iter().zip(new.iter()) {
            prop_assert!(!was.unlocked || now.unlocked);
            prop_assert!(!was.completed || now.completed);
        }
    }

    #[test]
    fn record_completion_is_idempotent((_n, mask) in catalog_and_completions(), id in "c[0-9]{1,2}") {
        let base = completion_set(&mask);
        let once = record_completion(&base, &id);
        let twice = record_completion(&once, &id);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn four_case_level_needs_three(mask in proptest::collection::vec(any::<bool>(), 4)) {
        let catalog = numbered_catalog(4);
        let completed = completion_set(&mask);
        let solved = mask.iter().filter(|d| **d).count();
        prop_assert_eq!(is_level_complete(&catalog, &completed, catalog.level()), solved >= 3);
    }

    #[test]
    fn short_flowcharts_never_validate(roles in proptest::collection::vec(role(), 0..3)) {
        let nodes: Vec<_> = roles.into_iter().map(node).collect();
        prop_assert!(!validate_flowchart(&nodes));
    }

    #[test]
    fn flowchart_validity_depends_only_on_roles(roles in proptest::collection::vec(role(), 3..10)) {
        let nodes: Vec<_> = roles.iter().copied().map(node).collect();
        let expected = [NodeRole::Start, NodeRole::Process, NodeRole::End]
            .iter()
            .all(|r| roles.contains(r));
        prop_assert_eq!(validate_flowchart(&nodes), expected);
    }

    #[test]
    fn pseudocode_up_to_fifty_chars_never_validates(text in ".{0,50}") {
        prop_assume!(text.chars().count() <= 50);
        prop_assert!(!validate_pseudocode(&text));
    }

    #[test]
    fn wrapped_pseudocode_always_validates(body in "[a-z ]{50,80}") {
        let text = format!("begin\n{}\nend", body);
        prop_assert!(validate_pseudocode(&text));
    }
}
