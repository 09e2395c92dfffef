use crate::model::risk::RiskLevel;
use crate::model::thresholds::Thresholds;
use crate::panels::defs::Scheme;

#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext {
    pub level: RiskLevel,
    /// Dosage-beta only: `min(score / 2.0, 1.0)`, meant for a progress-style
    /// indicator. Not a probability.
    pub progress: Option<f64>,
}

pub fn run_stage3_classify(score: f64, scheme: Scheme) -> ClassifyContext {
    let thresholds = Thresholds::default();
    ClassifyContext {
        level: classify_score(score, scheme, &thresholds),
        progress: progress_fraction(score, scheme),
    }
}

/// Maps an aggregate score to a risk level. Odds-ratio scores use strict
/// `>` at both cut points, dosage-beta scores inclusive `>=`; the asymmetry
/// is intentional and must stay.
pub fn classify_score(score: f64, scheme: Scheme, t: &Thresholds) -> RiskLevel {
    match scheme {
        Scheme::OddsRatio => {
            if score > t.odds_high {
                RiskLevel::High
            } else if score > t.odds_moderate {
                RiskLevel::Moderate
            } else {
                RiskLevel::Low
            }
        }
        Scheme::DosageBeta => {
            if score >= t.beta_high {
                RiskLevel::High
            } else if score >= t.beta_moderate {
                RiskLevel::Moderate
            } else {
                RiskLevel::Low
            }
        }
    }
}

pub fn progress_fraction(score: f64, scheme: Scheme) -> Option<f64> {
    match scheme {
        Scheme::DosageBeta => Some((score / 2.0).min(1.0)),
        Scheme::OddsRatio => None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
