use parley_core::{IssueId, IssueValue, ModelConfig, Offer};
use parley_model::{FrequencyModel, WeightTracker};
use proptest::prelude::*;

fn issue_ids(n: usize) -> Vec<IssueId> {
    (0..n).map(|i| IssueId(i as i32)).collect()
}

fn arb_offer(issues: usize) -> impl Strategy<Value = Offer> {
    prop::collection::vec(0u8..4, issues).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i as i32, format!("v{v}")))
            .collect()
    })
}

/// Number of issues plus a stream of complete offers over them.
fn arb_history() -> impl Strategy<Value = (usize, Vec<Offer>)> {
    (1usize..5).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_offer(n), 1..30)))
}

fn arb_pair() -> impl Strategy<Value = (usize, Offer, Offer)> {
    (1usize..5).prop_flat_map(|n| (Just(n), arb_offer(n), arb_offer(n)))
}

// ── Frequency table ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn counts_match_occurrences((n, offers) in arb_history()) {
        let mut model = FrequencyModel::new(issue_ids(n), ModelConfig::new(0.01)).unwrap();
        for offer in &offers {
            model.receive_offer(offer);
        }

        for issue in issue_ids(n) {
            for v in 0..4u8 {
                let value = IssueValue::from(format!("v{v}"));
                let expected = offers
                    .iter()
                    .filter(|o| o.get(issue) == Some(&value))
                    .count() as u64;
                prop_assert_eq!(model.count(issue, &value), expected);
            }
        }
    }

    #[test]
    fn counts_never_decrease((n, offers) in arb_history()) {
        let mut model = FrequencyModel::new(issue_ids(n), ModelConfig::new(0.01)).unwrap();
        let mut previous = model.frequencies().to_sorted();

        for offer in &offers {
            model.receive_offer(offer);
            let current = model.frequencies().to_sorted();
            for (issue, values) in &previous {
                for (value, count) in values {
                    let now = current[issue][value];
                    prop_assert!(now >= *count, "{issue}/{value}: {now} < {count}");
                }
            }
            previous = current;
        }
    }

    #[test]
    fn round_counter_equals_offers_received((n, offers) in arb_history()) {
        let mut model = FrequencyModel::new(issue_ids(n), ModelConfig::default()).unwrap();
        for (i, offer) in offers.iter().enumerate() {
            model.receive_offer(offer);
            prop_assert_eq!(model.round_count(), i as u64 + 1);
        }
    }
}

// ── Weight tracker ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn weight_update_is_exact_without_penalty(
        (n, previous, next) in arb_pair(),
        delta in 0.0001f64..0.5,
    ) {
        let config = ModelConfig::new(delta);
        let mut tracker = WeightTracker::new(&issue_ids(n), &config);
        let before = tracker.to_sorted();
        tracker.observe(Some(&previous), &next);

        for issue in issue_ids(n) {
            let expected = if previous.get(issue) == next.get(issue) {
                before[&issue] + delta
            } else {
                before[&issue]
            };
            prop_assert_eq!(tracker.get(issue), Some(expected));
        }
    }

    #[test]
    fn weight_update_is_exact_with_penalty(
        (n, previous, next) in arb_pair(),
        delta in 0.0001f64..0.5,
        multa in 0.0001f64..0.5,
    ) {
        let config = ModelConfig::new(delta).with_penalty(multa);
        let mut tracker = WeightTracker::new(&issue_ids(n), &config);
        let before = tracker.to_sorted();
        tracker.observe(Some(&previous), &next);

        for issue in issue_ids(n) {
            let value = next.get(issue).unwrap();
            let expected = if previous.contains_value(value) {
                before[&issue] - multa
            } else if previous.get(issue) == Some(value) {
                before[&issue] + delta
            } else {
                before[&issue]
            };
            prop_assert_eq!(tracker.get(issue), Some(expected));
        }
    }

    #[test]
    fn repeated_penalties_are_not_clamped(
        n in 1usize..5,
        repeats in 1usize..40,
        multa in 0.01f64..0.5,
    ) {
        let config = ModelConfig::new(0.001).with_penalty(multa);
        let mut model = FrequencyModel::new(issue_ids(n), config).unwrap();
        let offer: Offer = (0..n as i32).map(|i| (i, "same")).collect();

        model.receive_offer(&offer);
        let mut expected = 1.0 / n as f64;
        for _ in 0..repeats {
            model.receive_offer(&offer);
            expected -= multa;
        }

        for issue in issue_ids(n) {
            prop_assert_eq!(model.weight(issue), Some(expected));
        }
        if expected < 0.0 {
            prop_assert!(model.weights().values().all(|w| *w < 0.0));
        }
    }
}

// ── Scoring ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unseen_issue_contributes_zero(
        (n, offers) in arb_history(),
        candidate_value in 0u8..4,
    ) {
        let mut model = FrequencyModel::new(issue_ids(n), ModelConfig::new(0.05)).unwrap();
        for offer in &offers {
            model.receive_offer(offer);
        }

        let unseen = IssueId(1_000);
        let candidate = Offer::new().with(unseen, format!("v{candidate_value}"));
        let breakdown = model.breakdown(&candidate).unwrap();
        prop_assert_eq!(breakdown.contributions[0].contribution, 0.0);
        prop_assert_eq!(model.evaluate(&candidate).unwrap(), 0.0);
    }

    #[test]
    fn lazy_rescale_boundary(
        (n, offers) in arb_history(),
        candidate in arb_offer(4),
        delta in 0.001f64..0.3,
    ) {
        let mut model = FrequencyModel::new(issue_ids(n), ModelConfig::new(delta)).unwrap();
        for offer in &offers {
            model.receive_offer(offer);
        }

        let sum_before = model.weights_sum();
        let first = model.evaluate(&candidate).unwrap();
        let second = model.evaluate(&candidate).unwrap();

        if sum_before <= 1.0 {
            prop_assert_eq!(first, second);
        } else {
            prop_assert!(second <= first, "{second} > {first}");
        }
    }

    #[test]
    fn breakdown_predicts_evaluate((n, offers) in arb_history(), candidate in arb_offer(4)) {
        let mut model = FrequencyModel::new(issue_ids(n), ModelConfig::new(0.1)).unwrap();
        for offer in &offers {
            model.receive_offer(offer);
        }

        let breakdown = model.breakdown(&candidate).unwrap();
        let utility = model.evaluate(&candidate).unwrap();
        prop_assert_eq!(breakdown.utility, utility);
    }
}
