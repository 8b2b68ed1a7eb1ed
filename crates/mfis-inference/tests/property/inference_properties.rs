use std::collections::HashMap;

use mfis_core::{ConsequentMethod, DefuzzMethod, GridPolicy, MembershipCurve, RuleList};
use mfis_inference::{aggregation, antecedent, consequent, defuzzify};
use proptest::prelude::*;
use test_fixtures::{credit_catalogue, credit_rules, index_set, key, rule};

const GRID: usize = 11;

fn arb_degrees() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=1.0, GRID)
}

fn arb_nonzero_degrees() -> impl Strategy<Value = Vec<f64>> {
    arb_degrees().prop_filter("needs area", |y| y.iter().sum::<f64>() > 0.0)
}

fn curve(y: Vec<f64>) -> MembershipCurve {
    MembershipCurve::on_index_grid(y).unwrap()
}

// ── Antecedent strengths ────────────────────────────────────────────────

proptest! {
    #[test]
    fn rule_strength_is_min_of_degrees_and_bounded(age in -10i64..20, income in -10i64..20) {
        let catalogue = credit_catalogue();
        let data = HashMap::from([("Age", age), ("Income", income)]);
        for r in &credit_rules() {
            let strength = antecedent::rule_strength(r, &data, &catalogue).unwrap();
            prop_assert!((0.0..=1.0).contains(&strength));
            let expected = r
                .antecedents()
                .iter()
                .map(|k| catalogue.get(k).unwrap().degree_at(data[k.variable()]))
                .fold(1.0, f64::min);
            prop_assert_eq!(strength, expected);
        }
    }

    #[test]
    fn similarity_is_max_strength_per_consequent(age in -2i64..7, income in -2i64..7) {
        let catalogue = credit_catalogue();
        // Two rules share the HighR consequent.
        let rules = RuleList::new(vec![
            rule("R1", &["Age=Young"], "Risk=HighR"),
            rule("R2", &["Income=Low"], "Risk=HighR"),
            rule("R3", &["Age=Elder", "Income=High"], "Risk=LowR"),
        ]);
        let data = HashMap::from([("Age", age), ("Income", income)]);
        let outcome = antecedent::evaluate(&rules, &data, &catalogue).unwrap();

        for (risk, similarity) in &outcome.similarities {
            let expected = rules
                .iter()
                .enumerate()
                .filter(|(_, r)| r.consequent() == risk)
                .map(|(i, _)| outcome.firings.strength(i).unwrap())
                .fold(0.0, f64::max);
            prop_assert_eq!(*similarity, expected);
        }
        prop_assert_eq!(outcome.similarities[&key("Risk=MediumR")], 0.0);
    }

    #[test]
    fn clamping_reads_boundary_degrees(below in i64::MIN..0, above in 5i64..i64::MAX) {
        let set = index_set("Age=Young", &[1.0, 1.0, 0.5, 0.0, 0.3]);
        prop_assert_eq!(set.degree_at(below), 1.0);
        prop_assert_eq!(set.degree_at(above), 0.3);
        prop_assert_eq!(set.degree_at(4), 0.3);
    }
}

// ── Consequent qualification ────────────────────────────────────────────

proptest! {
    #[test]
    fn clip_bounds(y in arb_degrees(), s in 0.0f64..=1.0) {
        let set = index_set("Risk=MediumR", &y);
        let clipped = consequent::qualify(&set, s, ConsequentMethod::Clip);
        for (&orig, &q) in y.iter().zip(clipped.y()) {
            prop_assert!(q <= orig);
            prop_assert!(q <= s);
            if orig >= s {
                prop_assert_eq!(q, s);
            }
        }
    }

    #[test]
    fn scale_is_exact_product(y in arb_degrees(), s in 0.0f64..=1.0) {
        let set = index_set("Risk=MediumR", &y);
        let scaled = consequent::qualify(&set, s, ConsequentMethod::Scale);
        for (&orig, &q) in y.iter().zip(scaled.y()) {
            prop_assert_eq!(q, s * orig);
        }
    }
}

// ── Aggregation algebra ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn aggregation_is_idempotent(a in arb_degrees()) {
        let a = curve(a);
        let u = aggregation::union(&a, &a, GridPolicy::Strict).unwrap();
        prop_assert_eq!(u, a);
    }

    #[test]
    fn aggregation_is_order_independent(a in arb_degrees(), b in arb_degrees(), c in arb_degrees()) {
        let (a, b, c) = (curve(a), curve(b), curve(c));
        let all = aggregation::aggregate([&a, &b, &c], GridPolicy::Strict).unwrap();

        let ab = aggregation::union(&a, &b, GridPolicy::Strict).unwrap();
        let ab_c = aggregation::union(&ab, &c, GridPolicy::Strict).unwrap();
        prop_assert_eq!(&ab_c, &all);

        let cb = aggregation::union(&c, &b, GridPolicy::Strict).unwrap();
        let cb_a = aggregation::union(&cb, &a, GridPolicy::Strict).unwrap();
        prop_assert_eq!(&cb_a, &all);
    }

    #[test]
    fn interpolated_union_dominates_both_inputs_on_shared_points(
        a in arb_degrees(),
        b in prop::collection::vec(0.0f64..=1.0, 6),
    ) {
        let a = curve(a);
        // b lives on the even points 0, 2, ..., 10.
        let bx: Vec<f64> = (0..6).map(|i| (2 * i) as f64).collect();
        let b = MembershipCurve::new(bx, b).unwrap();
        let u = aggregation::union(&a, &b, GridPolicy::Interpolate).unwrap();
        prop_assert_eq!(u.x(), a.x());
        for (i, &x) in u.x().iter().enumerate() {
            prop_assert!(u.y()[i] >= a.y()[i]);
            prop_assert!(u.y()[i] >= aggregation::interpolate(&b, x));
        }
    }
}

// ── Defuzzification ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn defuzzification_is_deterministic_and_in_domain(y in arb_nonzero_degrees()) {
        let agg = curve(y);
        for method in DefuzzMethod::ALL {
            let first = defuzzify::defuzzify(&agg, method).unwrap();
            let second = defuzzify::defuzzify(&agg.clone(), method).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
            let upper = (GRID - 1) as f64 + 1e-9;
            prop_assert!((-1e-9..=upper).contains(&first), "{} out of domain: {}", method, first);
        }
    }

    #[test]
    fn maxima_are_ordered(y in arb_nonzero_degrees()) {
        let agg = curve(y);
        let som = defuzzify::smallest_of_maximum(&agg).unwrap();
        let mom = defuzzify::mean_of_maximum(&agg).unwrap();
        let lom = defuzzify::largest_of_maximum(&agg).unwrap();
        prop_assert!(som <= mom && mom <= lom);
    }

    #[test]
    fn single_point_aggregate_agrees_everywhere(index in 0usize..GRID) {
        let mut y = vec![0.0; GRID];
        y[index] = 1.0;
        let agg = curve(y);
        for method in DefuzzMethod::ALL {
            prop_assert_eq!(defuzzify::defuzzify(&agg, method).unwrap(), index as f64);
        }
    }
}
