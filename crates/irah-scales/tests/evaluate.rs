use std::collections::BTreeSet;

use irah_core::models::inputs::{
    Asg, CharlsonInputs, Comorbidity, FugulinInputs, FugulinModel, ScaleInputs,
};
use irah_core::models::tier::{FugulinTier, RiskTier};
use irah_scales::evaluate::{classify, evaluate, risk_tier};

fn healthy_baseline() -> ScaleInputs {
    ScaleInputs::default()
}

#[test]
fn healthy_baseline_scores_zero() {
    let result = evaluate(&healthy_baseline());
    assert_eq!(result.composite, 0.0);
    assert!(!result.trigger);
    assert_eq!(result.tier, RiskTier::Low);
    assert_eq!(result.fugulin_total, 12);
    assert_eq!(result.fugulin_tier, FugulinTier::Minimal);
}

#[test]
fn worst_case_scores_one_hundred() {
    let inputs = ScaleInputs {
        fugulin: FugulinInputs::new(FugulinModel::Full, vec![4; 12]),
        charlson: CharlsonInputs {
            conditions: BTreeSet::from([
                Comorbidity::MetastaticSolidTumor,
                Comorbidity::Aids,
                Comorbidity::ModerateSevereLiverDisease,
            ]),
            age: 90,
            age_adjustment: true,
        },
        mrc: 0,
        asg: Asg::C,
        fois: 1,
        polypharmacy: 20,
    };
    let result = evaluate(&inputs);
    assert_eq!(result.composite, 100.0);
    assert!(result.trigger);
    assert_eq!(result.tier, RiskTier::High);
}

#[test]
fn composite_always_within_bounds() {
    // A spread of arbitrary inputs; the composite must stay in [0, 100].
    for mrc in [0u8, 20, 45, 60] {
        for fois in [1u8, 4, 7] {
            for poly in [0u16, 8, 15] {
                let inputs = ScaleInputs {
                    fugulin: FugulinInputs::new(FugulinModel::Full, vec![3; 12]),
                    mrc,
                    fois,
                    polypharmacy: poly,
                    ..healthy_baseline()
                };
                let result = evaluate(&inputs);
                assert!(
                    (0.0..=100.0).contains(&result.composite),
                    "composite {} out of range",
                    result.composite
                );
            }
        }
    }
}

#[test]
fn trigger_truth_table() {
    let base = healthy_baseline();

    let fois_3 = ScaleInputs { fois: 3, ..base.clone() };
    assert!(evaluate(&fois_3).trigger);
    let fois_4 = ScaleInputs { fois: 4, ..base.clone() };
    assert!(!evaluate(&fois_4).trigger);

    let poly_13 = ScaleInputs { polypharmacy: 13, ..base.clone() };
    assert!(evaluate(&poly_13).trigger);
    let poly_12 = ScaleInputs { polypharmacy: 12, ..base.clone() };
    assert!(!evaluate(&poly_12).trigger);

    let mrc_35 = ScaleInputs { mrc: 35, ..base.clone() };
    assert!(evaluate(&mrc_35).trigger);
    let mrc_36 = ScaleInputs { mrc: 36, ..base };
    assert!(!evaluate(&mrc_36).trigger);
}

#[test]
fn trigger_forces_high_tier_but_not_the_number() {
    // Only MRC contributes: composite 15.0, far below the Moderate
    // threshold, yet the trigger forces High.
    let inputs = ScaleInputs { mrc: 0, ..healthy_baseline() };
    let result = evaluate(&inputs);
    assert_eq!(result.composite, 15.0);
    assert!(result.trigger);
    assert_eq!(result.tier, RiskTier::High);
}

#[test]
fn fois_zero_clamps_to_one_and_triggers() {
    let inputs = ScaleInputs { fois: 0, ..healthy_baseline() };
    let result = evaluate(&inputs);
    assert!(result.trigger);
    assert_eq!(result.breakdown.fois.normalized, 100.0);
}

#[test]
fn tier_thresholds() {
    assert_eq!(risk_tier(0.0), RiskTier::Low);
    assert_eq!(risk_tier(33.9), RiskTier::Low);
    assert_eq!(risk_tier(34.0), RiskTier::Moderate);
    assert_eq!(risk_tier(66.9), RiskTier::Moderate);
    assert_eq!(risk_tier(67.0), RiskTier::High);
    assert_eq!(risk_tier(100.0), RiskTier::High);

    assert_eq!(classify(10.0, true), RiskTier::High);
    assert_eq!(classify(10.0, false), RiskTier::Low);
}

#[test]
fn composite_rounds_half_away_from_zero() {
    // MRC 57 is the only contribution: (3/60)*100*0.15 = 0.75 exactly,
    // which must round up to 0.8, pinning the rounding convention.
    let inputs = ScaleInputs { mrc: 57, ..healthy_baseline() };
    assert_eq!(evaluate(&inputs).composite, 0.8);
}

#[test]
fn documented_worked_example() {
    // Charlson: IAM + ICC (1+1), age 65 with adjustment (+2) → total 4.
    // Fugulin (reduced model) total 20 → Intermediate band (25).
    // MRC 40, ASG B, FOIS 5, polypharmacy 3 → no trigger.
    let inputs = ScaleInputs {
        fugulin: FugulinInputs::new(
            FugulinModel::Reduced,
            vec![2, 2, 2, 2, 2, 2, 2, 2, 4],
        ),
        charlson: CharlsonInputs {
            conditions: BTreeSet::from([
                Comorbidity::MyocardialInfarction,
                Comorbidity::CongestiveHeartFailure,
            ]),
            age: 65,
            age_adjustment: true,
        },
        mrc: 40,
        asg: Asg::B,
        fois: 5,
        polypharmacy: 3,
    };

    let result = evaluate(&inputs);
    assert_eq!(result.charlson_base, 2);
    assert_eq!(result.charlson_age_points, 2);
    assert_eq!(result.charlson_total, 4);
    assert!((result.breakdown.charlson.normalized - 30.769_230_769).abs() < 1e-6);
    assert_eq!(result.fugulin_total, 20);
    assert_eq!(result.fugulin_tier, FugulinTier::Intermediate);
    assert_eq!(result.breakdown.fugulin.normalized, 25.0);
    assert!(!result.trigger);
    assert_eq!(result.composite, 29.7);
    assert_eq!(result.tier, RiskTier::Low);
}

#[test]
fn age_adjustment_only_applies_when_enabled() {
    let mut inputs = healthy_baseline();
    inputs.charlson.age = 72;
    inputs.charlson.age_adjustment = false;
    assert_eq!(evaluate(&inputs).charlson_age_points, 0);

    inputs.charlson.age_adjustment = true;
    let result = evaluate(&inputs);
    assert_eq!(result.charlson_age_points, 3);
    assert_eq!(result.charlson_total, 3);
}

#[test]
fn fugulin_input_length_is_total() {
    // Surplus entries beyond the model's domain count are ignored.
    assert_eq!(FugulinInputs::new(FugulinModel::Full, vec![4; 20]).total(), 48);
    // Missing entries count as level 1.
    assert_eq!(FugulinInputs::new(FugulinModel::Full, vec![]).total(), 12);
    assert_eq!(FugulinInputs::new(FugulinModel::Reduced, vec![4; 9]).total(), 36);
    // Levels clamp into the 1–4 ordinal range.
    assert_eq!(FugulinInputs::new(FugulinModel::Reduced, vec![9; 9]).total(), 36);
    assert_eq!(FugulinInputs::new(FugulinModel::Reduced, vec![0; 9]).total(), 9);
}

#[test]
fn evaluation_is_deterministic() {
    let inputs = ScaleInputs {
        mrc: 22,
        asg: Asg::B,
        fois: 4,
        polypharmacy: 8,
        ..healthy_baseline()
    };
    assert_eq!(evaluate(&inputs), evaluate(&inputs));
}
