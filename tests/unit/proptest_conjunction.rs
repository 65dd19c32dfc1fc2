//! Property-based tests for the conjunction combinator
//!
//! Uses proptest to verify properties that should hold for all member lists.
//! A member is described by `Option<String>`: `None` passes, `Some(reason)`
//! fails with that reason.

use std::sync::Arc;

use proptest::prelude::*;
use spec::{Conjunction, SharedSpecification, Specification};

use crate::common::{Stub, members};

fn verdict_lists(min: usize) -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of("[a-z]{1,8}"), min..10)
}

fn stubs_for(verdicts: &[Option<String>]) -> Vec<Arc<Stub>> {
    verdicts.iter().cloned().map(Stub::from_verdict).collect()
}

fn expected_reasons(verdicts: &[Option<String>]) -> Vec<&str> {
    verdicts.iter().filter_map(Option::as_deref).collect()
}

proptest! {
    /// The conjunction holds exactly when every member holds
    #[test]
    fn satisfied_iff_all_members_satisfied(verdicts in verdict_lists(2)) {
        let conj = Conjunction::<u8>::try_from_members(members(&stubs_for(&verdicts))).unwrap();
        let all_pass = verdicts.iter().all(Option::is_none);
        prop_assert_eq!(conj.satisfied_by(&0).is_ok(), all_pass);
    }

    /// Reported reasons are exactly the failing members' reasons, in order
    #[test]
    fn reasons_are_complete_and_ordered(verdicts in verdict_lists(2)) {
        let conj = Conjunction::<u8>::try_from_members(members(&stubs_for(&verdicts))).unwrap();
        let reported = conj.satisfied_by(&0).err().map(|f| {
            f.reasons().into_iter().map(str::to_string).collect::<Vec<_>>()
        }).unwrap_or_default();
        prop_assert_eq!(reported, expected_reasons(&verdicts));
    }

    /// Every member is evaluated exactly once per call
    #[test]
    fn no_short_circuit(verdicts in verdict_lists(2)) {
        let stubs = stubs_for(&verdicts);
        let conj = Conjunction::<u8>::try_from_members(members(&stubs)).unwrap();
        let _ = conj.satisfied_by(&0);
        for stub in &stubs {
            prop_assert_eq!(stub.calls(), 1);
        }
    }

    /// Evaluating twice gives the same result
    #[test]
    fn evaluation_is_idempotent(verdicts in verdict_lists(2)) {
        let conj = Conjunction::<u8>::try_from_members(members(&stubs_for(&verdicts))).unwrap();
        prop_assert_eq!(conj.satisfied_by(&0), conj.satisfied_by(&0));
    }

    /// The positional evaluation collapses to the same result
    #[test]
    fn evaluate_agrees_with_satisfied_by(verdicts in verdict_lists(2)) {
        let conj = Conjunction::<u8>::try_from_members(members(&stubs_for(&verdicts))).unwrap();
        let evaluation = conj.evaluate(&0);
        prop_assert_eq!(evaluation.verdicts.len(), verdicts.len());
        prop_assert_eq!(evaluation.into_result(), conj.satisfied_by(&0));
    }

    /// Nesting a prefix into its own conjunction keeps verdict and reasons
    #[test]
    fn nesting_matches_flat(verdicts in verdict_lists(3), split in 2_usize..9) {
        let split = split.min(verdicts.len() - 1);
        let stubs = stubs_for(&verdicts);

        let flat = Conjunction::<u8>::try_from_members(members(&stubs)).unwrap();

        let inner = Conjunction::<u8>::try_from_members(members(&stubs[..split])).unwrap();
        let mut outer_members: Vec<SharedSpecification<u8>> = vec![Arc::new(inner)];
        outer_members.extend(members(&stubs[split..]));
        let nested = Conjunction::try_from_members(outer_members).unwrap();

        let flat_result = flat.satisfied_by(&0);
        let nested_result = nested.satisfied_by(&0);
        prop_assert_eq!(flat_result.is_ok(), nested_result.is_ok());
        if let (Err(flat_failure), Err(nested_failure)) = (&flat_result, &nested_result) {
            prop_assert_eq!(flat_failure.reasons(), nested_failure.reasons());
        }
    }
}
