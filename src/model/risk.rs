use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Genetic Risk",
            RiskLevel::Moderate => "Moderate Genetic Risk",
            RiskLevel::High => "High Genetic Risk",
        }
    }

    pub fn ordered() -> &'static [RiskLevel] {
        &[RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High]
    }
}
