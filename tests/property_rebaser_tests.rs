use chart_rebase::core::rebase_values;
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        8 => (0.01f64..10_000.0).prop_map(Some),
        1 => Just(Some(0.0)),
        1 => Just(None),
    ]
}

fn series() -> impl Strategy<Value = (Vec<Option<f64>>, usize)> {
    proptest::collection::vec(cell(), 1..96).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len)
    })
}

fn close(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= 1e-9 * scale
}

proptest! {
    #[test]
    fn anchor_reads_one_when_defined((values, anchor) in series()) {
        match rebase_values(&values, anchor) {
            Some(rebased) => {
                prop_assert!(values[anchor].is_some());
                prop_assert_eq!(rebased.len(), values.len());
                prop_assert_eq!(rebased[anchor], Some(1.0));
            }
            None => prop_assert!(values[anchor].is_none()),
        }
    }

    #[test]
    fn forward_ratios_match_original((values, anchor) in series()) {
        prop_assume!(values[anchor].is_some());
        let rebased = rebase_values(&values, anchor).expect("anchor defined");
        for i in anchor + 1..values.len() {
            match (rebased[i], rebased[i - 1]) {
                (Some(current), Some(previous)) if previous != 0.0 => {
                    let original = values[i].expect("defined") / values[i - 1].expect("defined");
                    prop_assert!(close(current / previous, original));
                }
                (Some(_), None) => prop_assert!(false, "chain resumed at {}", i),
                _ => {}
            }
        }
    }

    #[test]
    fn backward_ratios_match_original((values, anchor) in series()) {
        prop_assume!(values[anchor].is_some());
        let rebased = rebase_values(&values, anchor).expect("anchor defined");
        for i in (0..anchor).rev() {
            match (rebased[i], rebased[i + 1]) {
                (Some(current), Some(next)) if next != 0.0 => {
                    let original = values[i].expect("defined") / values[i + 1].expect("defined");
                    prop_assert!(close(current / next, original));
                }
                (Some(_), None) => prop_assert!(false, "chain resumed at {}", i),
                _ => {}
            }
        }
    }

    #[test]
    fn break_is_permanent_in_each_direction((values, anchor) in series()) {
        prop_assume!(values[anchor].is_some());
        let rebased = rebase_values(&values, anchor).expect("anchor defined");
        if let Some(first_gap) = (anchor..values.len()).find(|&i| rebased[i].is_none()) {
            prop_assert!(rebased[first_gap..].iter().all(Option::is_none));
        }
        if let Some(first_gap) = (0..anchor).rev().find(|&i| rebased[i].is_none()) {
            prop_assert!(rebased[..=first_gap].iter().all(Option::is_none));
        }
    }

    #[test]
    fn rebase_is_idempotent_for_same_anchor((values, anchor) in series()) {
        prop_assert_eq!(rebase_values(&values, anchor), rebase_values(&values, anchor));
    }
}
