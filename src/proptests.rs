use proptest::prelude::*;

use crate::catalog::family_table;
use crate::registry::{GeoType, Method, CONTAINS, EUCLIDEAN_DISTANCE, INTERSECTS, TYPES};
use crate::render::{group_entries, render_impls};
use crate::table::{ImplEntry, Origin};

fn method_strat() -> impl Strategy<Value = Method> {
    prop_oneof![Just(CONTAINS), Just(INTERSECTS), Just(EUCLIDEAN_DISTANCE)]
}

fn body_strat() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "false",
        "0.0",
        "self == other",
        "self.contains(other)",
        "other.Contains(self)",
        "self.intersects(other) || other.Contains(self)",
    ])
}

fn registry_strat() -> impl Strategy<Value = Vec<GeoType>> {
    prop::sample::subsequence(TYPES.to_vec(), 1..=TYPES.len())
}

// A method, a registry subset, and a sparse catalog over that subset.
// Keys are unique by construction: one optional body per ordered pair.
fn family_strat() -> impl Strategy<Value = (Method, Vec<GeoType>, Vec<ImplEntry>)> {
    (method_strat(), registry_strat()).prop_flat_map(|(method, types)| {
        let pairs: Vec<(&'static str, &'static str)> = types
            .iter()
            .flat_map(|a| types.iter().map(move |b| (a.name, b.name)))
            .collect();
        let bodies = prop::collection::vec(prop::option::of(body_strat()), pairs.len());
        (
            Just(method),
            Just(types),
            bodies.prop_map(move |bodies| {
                pairs
                    .iter()
                    .zip(bodies)
                    .filter_map(|(&(self_t, other_t), body)| {
                        body.map(|body| ImplEntry::explicit(method, self_t, other_t, body))
                    })
                    .collect::<Vec<_>>()
            }),
        )
    })
}

proptest! {
    #[test]
    fn completion_is_total_and_unique((method, types, catalog) in family_strat()) {
        let table = family_table(method, &catalog, &types).unwrap();
        prop_assert_eq!(table.len(), types.len() * types.len());
        for a in &types {
            for b in &types {
                prop_assert!(table.get(method.name, a.name, b.name).is_some());
            }
        }
    }

    #[test]
    fn explicit_entries_always_win((method, types, catalog) in family_strat()) {
        let table = family_table(method, &catalog, &types).unwrap();
        for authored in &catalog {
            let survived = table
                .get(method.name, authored.self_t, authored.other_t)
                .unwrap();
            prop_assert_eq!(survived.origin, Origin::Explicit);
            prop_assert_eq!(survived.body.text(), authored.body.text());
        }
    }

    #[test]
    fn symmetric_entries_mirror_explicit_off_diagonal_ones(
        (method, types, catalog) in family_strat()) {
        let table = family_table(method, &catalog, &types).unwrap();
        for entry in table.entries() {
            if entry.origin == Origin::Symmetric {
                prop_assert!(method.symmetric);
                prop_assert_ne!(entry.self_t, entry.other_t);
                let source = table
                    .get(method.name, entry.other_t, entry.self_t)
                    .unwrap();
                prop_assert_eq!(source.origin, Origin::Explicit);
            }
        }
    }

    #[test]
    fn generation_is_reproducible((method, types, catalog) in family_strat()) {
        let once = family_table(method, &catalog, &types).unwrap();
        let twice = family_table(method, &catalog, &types).unwrap();
        prop_assert_eq!(
            render_impls(&group_entries(&once)),
            render_impls(&group_entries(&twice))
        );
    }
}
