
use super::*;

#[test]
fn zero_score_is_low_under_both_schemes() {
    let t = Thresholds::default();
    assert_eq!(classify_score(0.0, Scheme::OddsRatio, &t), RiskLevel::Low);
    assert_eq!(classify_score(0.0, Scheme::DosageBeta, &t), RiskLevel::Low);
}

#[test]
fn odds_boundaries_are_strict() {
    let t = Thresholds::default();
    // Exactly at a cut point stays in the lower band.
    assert_eq!(classify_score(4.0, Scheme::OddsRatio, &t), RiskLevel::Low);
    assert_eq!(classify_score(4.0001, Scheme::OddsRatio, &t), RiskLevel::Moderate);
    assert_eq!(classify_score(8.0, Scheme::OddsRatio, &t), RiskLevel::Moderate);
    assert_eq!(classify_score(8.0001, Scheme::OddsRatio, &t), RiskLevel::High);
}

#[test]
fn beta_boundaries_are_inclusive() {
    let t = Thresholds::default();
    assert_eq!(classify_score(0.79, Scheme::DosageBeta, &t), RiskLevel::Low);
    assert_eq!(classify_score(0.8, Scheme::DosageBeta, &t), RiskLevel::Moderate);
    assert_eq!(classify_score(1.49, Scheme::DosageBeta, &t), RiskLevel::Moderate);
    assert_eq!(classify_score(1.5, Scheme::DosageBeta, &t), RiskLevel::High);
}

#[test]
fn progress_only_for_beta_scheme() {
    assert_eq!(progress_fraction(0.84, Scheme::OddsRatio), None);
    let p = progress_fraction(0.84, Scheme::DosageBeta).expect("progress");
    assert!((p - 0.42).abs() < 1e-12);
}

#[test]
fn progress_caps_at_one() {
    let p = progress_fraction(3.2, Scheme::DosageBeta).expect("progress");
    assert_eq!(p, 1.0);
}

#[test]
fn run_stage_bundles_level_and_progress() {
    let ctx = run_stage3_classify(0.84, Scheme::DosageBeta);
    assert_eq!(ctx.level, RiskLevel::Moderate);
    assert!(ctx.progress.is_some());

    let ctx = run_stage3_classify(9.0, Scheme::OddsRatio);
    assert_eq!(ctx.level, RiskLevel::High);
    assert_eq!(ctx.progress, None);
}
