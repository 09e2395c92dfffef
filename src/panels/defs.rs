use serde::{Deserialize, Serialize};

/// Weighting scheme of a SNP panel. Exactly one scheme is active per run;
/// the loader rejects panels that mix the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Categorical: a multiplicative odds ratio added once when the genotype
    /// matches the SNP's risk-genotype whitelist.
    OddsRatio,
    /// Additive: a beta coefficient per risk-allele copy (0, 1 or 2).
    DosageBeta,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::OddsRatio => "odds_ratio",
            Scheme::DosageBeta => "dosage_beta",
        }
    }
}

/// Per-SNP effect size under one of the two schemes.
///
/// Odds-ratio whitelists are matched literally against the genotype string,
/// so a heterozygous genotype counts only in the orderings the table lists.
/// The shipped tables carry the source orderings verbatim; collapsing them
/// to allele counts would silently change scoring.
#[derive(Debug, Clone, Serialize)]
pub enum Weight {
    OddsRatio {
        risk_genotypes: Vec<String>,
        odds_ratio: f64,
    },
    DosageBeta {
        beta: f64,
    },
}

impl Weight {
    pub fn scheme(&self) -> Scheme {
        match self {
            Weight::OddsRatio { .. } => Scheme::OddsRatio,
            Weight::DosageBeta { .. } => Scheme::DosageBeta,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Weight::OddsRatio { odds_ratio, .. } => *odds_ratio,
            Weight::DosageBeta { beta } => *beta,
        }
    }
}

/// Immutable reference entry for one tracked SNP.
#[derive(Debug, Clone, Serialize)]
pub struct SnpRecord {
    pub id: String,
    /// Gene symbol, informational only.
    pub gene: String,
    pub risk_allele: char,
    pub weight: Weight,
}

/// A loaded reference table: one scheme, records in file order.
#[derive(Debug, Clone, Serialize)]
pub struct SnpPanel {
    pub scheme: Scheme,
    pub snps: Vec<SnpRecord>,
}

impl SnpPanel {
    pub fn len(&self) -> usize {
        self.snps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snps.is_empty()
    }
}
