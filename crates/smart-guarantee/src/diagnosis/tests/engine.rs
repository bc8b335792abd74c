use super::common::*;

use crate::diagnosis::domain::{RecommendationType, RiskLevel};
use crate::diagnosis::engine::{
    calculate_approval_probability, calculate_guarantee_fee_rate, calculate_guarantee_limit,
    generate_diagnosis_result, score_breakdown, ScoreFactor, MAX_GUARANTEE_LIMIT,
};

#[test]
fn food_service_applicant_scores_seventy_two() {
    let input = food_service_input();
    let result = generate_diagnosis_result(&input, &industries());

    assert_eq!(result.approval_probability, 72);
    assert_eq!(result.guarantee_limit, 26_000_000);
    assert_eq!(result.guarantee_fee_rate, 2.0);
    assert_eq!(result.risk_level, RiskLevel::C);
    assert_eq!(result.recommendation_type, RecommendationType::MediumApproval);
    assert_eq!(result.input, input);
}

#[test]
fn breakdown_lists_every_component_in_weight_order() {
    let breakdown = score_breakdown(&food_service_input());

    let factors: Vec<_> = breakdown.components.iter().map(|c| c.factor).collect();
    assert_eq!(
        factors,
        vec![
            ScoreFactor::CreditRating,
            ScoreFactor::Revenue,
            ScoreFactor::BusinessPeriod,
            ScoreFactor::ExistingDebt,
            ScoreFactor::Collateral,
        ]
    );

    let scores: Vec<_> = breakdown.components.iter().map(|c| c.score).collect();
    assert_eq!(scores, vec![60.0, 100.0, 20.0, 100.0, 100.0]);

    let weights: f64 = breakdown.components.iter().map(|c| c.weight).sum();
    assert_close(weights, 1.0);
    assert_close(breakdown.total, 72.0);

    let credit = breakdown
        .component(ScoreFactor::CreditRating)
        .expect("credit component");
    assert_close(credit.weighted, 18.0);
}

#[test]
fn retail_applicant_rounds_down_to_grade_b() {
    let input = retail_input();
    let breakdown = score_breakdown(&input);
    assert_close(breakdown.total, 77.25);

    let result = generate_diagnosis_result(&input, &industries());
    assert_eq!(result.approval_probability, 77);
    assert_eq!(result.guarantee_limit, 74_000_000);
    assert_eq!(result.guarantee_fee_rate, 2.1);
    assert_eq!(result.risk_level, RiskLevel::B);
    assert_eq!(result.recommendation_type, RecommendationType::HighApproval);
}

#[test]
fn strongest_profile_hits_the_limit_cap() {
    let input = draft(4, 1_000_000_000, 10.0, 1, 0, true, 300_000_000)
        .validate()
        .expect("valid");
    let result = generate_diagnosis_result(&input, &industries());

    assert_eq!(result.approval_probability, 100);
    assert_eq!(result.guarantee_limit, MAX_GUARANTEE_LIMIT);
    assert_eq!(result.guarantee_fee_rate, 2.1);
    assert_eq!(result.risk_level, RiskLevel::A);
}

#[test]
fn small_revenue_rounds_limit_to_zero() {
    let input = draft(3, 60_000, 5.0, 1, 0, true, 5_000_000)
        .validate()
        .expect("valid");
    let result = generate_diagnosis_result(&input, &industries());

    assert_eq!(result.approval_probability, 100);
    assert_eq!(result.guarantee_limit, 0);
    assert_eq!(result.guarantee_fee_rate, 1.4);
}

#[test]
fn weakest_profiles_fall_into_grade_e() {
    let heavy_debt = draft(1, 1_000_000, 0.5, 10, 1_000_000, false, 1_000_000)
        .validate()
        .expect("valid");
    let result = generate_diagnosis_result(&heavy_debt, &industries());
    assert_eq!(result.approval_probability, 35);
    assert_eq!(result.guarantee_limit, 0);
    assert_eq!(result.guarantee_fee_rate, 2.5);
    assert_eq!(result.risk_level, RiskLevel::E);
    assert_eq!(result.recommendation_type, RecommendationType::LowApproval);

    let tiny_revenue = draft(1, 10_000, 0.5, 10, 10_000, false, 1_000_000)
        .validate()
        .expect("valid");
    assert_eq!(calculate_approval_probability(&tiny_revenue), 15);
}

#[test]
fn debt_above_revenue_zeroes_the_debt_component() {
    let input = draft(7, 2_000_000, 2.0, 8, 3_000_000, false, 50_000_000)
        .validate()
        .expect("valid");
    let breakdown = score_breakdown(&input);
    let debt = breakdown
        .component(ScoreFactor::ExistingDebt)
        .expect("debt component");
    assert_eq!(debt.score, 0.0);

    let result = generate_diagnosis_result(&input, &industries());
    assert_eq!(result.approval_probability, 47);
    assert_eq!(result.guarantee_limit, 2_000_000);
    assert_eq!(result.guarantee_fee_rate, 2.5);
    assert_eq!(result.risk_level, RiskLevel::D);
    assert_eq!(result.recommendation_type, RecommendationType::LowApproval);
}

#[test]
fn collateral_and_debt_shift_probability_and_limit() {
    let without_collateral = draft(1, 10_000_000, 1.0, 5, 0, false, 30_000_000)
        .validate()
        .expect("valid");
    assert_eq!(calculate_approval_probability(&without_collateral), 67);
    assert_eq!(calculate_guarantee_limit(&without_collateral, 67), 24_000_000);

    let indebted = draft(1, 10_000_000, 1.0, 5, 20_000_000, true, 30_000_000)
        .validate()
        .expect("valid");
    assert_eq!(calculate_approval_probability(&indebted), 57);
    assert_eq!(calculate_guarantee_limit(&indebted, 57), 21_000_000);
    assert_eq!(calculate_guarantee_fee_rate(&indebted, &industries()), 2.0);
}

#[test]
fn unknown_industry_uses_default_adjustment() {
    let input = input_for_industry(99, 1);
    assert_eq!(calculate_guarantee_fee_rate(&input, &industries()), 1.7);
}

#[test]
fn fee_grid_follows_industry_and_rating() {
    let best = [
        1.6, 1.7, 1.4, 1.9, 1.6, 1.7, 1.8, 1.7, 1.4, 1.3, 1.7, 1.4, 1.9, 1.8, 1.4,
    ];
    let worst = [
        2.5, 2.6, 2.3, 2.8, 2.5, 2.6, 2.7, 2.6, 2.3, 2.2, 2.6, 2.3, 2.8, 2.7, 2.3,
    ];
    let catalog = industries();

    for (index, (expected_best, expected_worst)) in best.iter().zip(worst.iter()).enumerate() {
        let industry = index as u8 + 1;
        assert_eq!(
            calculate_guarantee_fee_rate(&input_for_industry(industry, 1), &catalog),
            *expected_best,
            "industry {industry} at grade 1"
        );
        assert_eq!(
            calculate_guarantee_fee_rate(&input_for_industry(industry, 10), &catalog),
            *expected_worst,
            "industry {industry} at grade 10"
        );
    }
}

#[test]
fn large_requests_carry_a_surcharge() {
    let mut input = input_for_industry(1, 5);
    input.requested_amount = 100_000_000;
    assert_eq!(calculate_guarantee_fee_rate(&input, &industries()), 2.0);

    input.requested_amount = 100_000_001;
    assert_eq!(calculate_guarantee_fee_rate(&input, &industries()), 2.2);
}

#[test]
fn probability_never_rises_as_credit_worsens() {
    let mut previous = u8::MAX;
    for rating in 1..=10 {
        let probability = calculate_approval_probability(&input_for_industry(1, rating));
        assert!(probability <= previous, "grade {rating} scored {probability}");
        previous = probability;
    }
}

#[test]
fn collateral_never_lowers_probability() {
    for rating in 1..=10 {
        let mut secured = input_for_industry(5, rating);
        secured.has_collateral = true;
        let mut unsecured = secured.clone();
        unsecured.has_collateral = false;

        assert!(
            calculate_approval_probability(&secured) >= calculate_approval_probability(&unsecured)
        );
    }
}

#[test]
fn scoring_is_deterministic() {
    let engine = engine();
    let input = retail_input();
    assert_eq!(engine.score(&input), engine.score(&input));

    let (result, breakdown) = engine.score_with_breakdown(&input);
    assert_eq!(result, engine.score(&input));
    assert_eq!(breakdown, score_breakdown(&input));
}

#[test]
fn limit_is_a_capped_multiple_of_a_million() {
    for rating in 1..=10 {
        let input = input_for_industry(2, rating);
        let result = engine().score(&input);
        assert_eq!(result.guarantee_limit % 1_000_000, 0);
        assert!(result.guarantee_limit <= MAX_GUARANTEE_LIMIT);
    }
}

#[test]
fn grade_boundaries() {
    let cases = [
        (100, RiskLevel::A),
        (85, RiskLevel::A),
        (84, RiskLevel::B),
        (75, RiskLevel::B),
        (74, RiskLevel::C),
        (60, RiskLevel::C),
        (59, RiskLevel::D),
        (45, RiskLevel::D),
        (44, RiskLevel::E),
        (0, RiskLevel::E),
    ];
    for (probability, expected) in cases {
        assert_eq!(RiskLevel::from_probability(probability), expected, "{probability}");
    }
}

#[test]
fn recommendation_boundaries() {
    assert_eq!(
        RecommendationType::from_probability(75),
        RecommendationType::HighApproval
    );
    assert_eq!(
        RecommendationType::from_probability(74),
        RecommendationType::MediumApproval
    );
    assert_eq!(
        RecommendationType::from_probability(50),
        RecommendationType::MediumApproval
    );
    assert_eq!(
        RecommendationType::from_probability(49),
        RecommendationType::LowApproval
    );
}
