use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::genotype::normalize;
use crate::panels::defs::{SnpPanel, Weight};

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One scored panel SNP. `copies` is present under the dosage-beta scheme
/// only; under the odds-ratio scheme inclusion in the output already means
/// the genotype matched the whitelist.
#[derive(Debug, Clone, Serialize)]
pub struct SnpContribution {
    pub id: String,
    pub gene: String,
    pub genotype: String,
    pub risk_allele: char,
    pub copies: Option<u8>,
    pub weight: f64,
    /// Rounded to 3 decimals for display; the aggregate accumulates the
    /// unrounded value.
    pub contribution: f64,
}

#[derive(Debug, Clone)]
pub struct ScoreContext {
    /// Contributions in panel table order.
    pub contributions: Vec<SnpContribution>,
    /// Full-precision aggregate score.
    pub total: f64,
    /// Panel SNPs for which a valid genotype was supplied.
    pub genotyped: usize,
}

/// Scores the genotype map against the panel, in panel table order, and
/// writes `contributions.tsv`.
///
/// Panel SNPs without a map entry are skipped, as is anything that fails
/// genotype normalization; unknown map keys never contribute. Under the
/// odds-ratio scheme only whitelist matches are reported; under the
/// dosage-beta scheme every genotyped SNP is reported, including zero-copy
/// ones, so the breakdown stays transparent.
pub fn run_stage2_score(
    genotypes: &HashMap<String, String>,
    panel: &SnpPanel,
    out_dir: &Path,
) -> Result<ScoreContext, Stage2Error> {
    let (contributions, total, genotyped) = score_panel(genotypes, panel);
    write_contributions(out_dir, &contributions)?;
    Ok(ScoreContext {
        contributions,
        total,
        genotyped,
    })
}

/// Pure scoring core shared by `score` and tests.
pub fn score_panel(
    genotypes: &HashMap<String, String>,
    panel: &SnpPanel,
) -> (Vec<SnpContribution>, f64, usize) {
    let mut contributions = Vec::new();
    let mut total = 0.0f64;
    let mut genotyped = 0usize;

    for snp in &panel.snps {
        let Some(raw) = genotypes.get(&snp.id) else {
            continue;
        };
        let Some(genotype) = normalize(raw) else {
            continue;
        };
        genotyped += 1;

        match &snp.weight {
            Weight::OddsRatio {
                risk_genotypes,
                odds_ratio,
            } => {
                // Literal match against the whitelist orderings; "CT" does
                // not match a "TC" entry.
                if risk_genotypes.iter().any(|g| g == genotype.as_str()) {
                    total += odds_ratio;
                    contributions.push(SnpContribution {
                        id: snp.id.clone(),
                        gene: snp.gene.clone(),
                        genotype: genotype.as_str().to_string(),
                        risk_allele: snp.risk_allele,
                        copies: None,
                        weight: *odds_ratio,
                        contribution: round3(*odds_ratio),
                    });
                }
            }
            Weight::DosageBeta { beta } => {
                let copies = genotype.copies_of(snp.risk_allele);
                let contribution = beta * f64::from(copies);
                total += contribution;
                contributions.push(SnpContribution {
                    id: snp.id.clone(),
                    gene: snp.gene.clone(),
                    genotype: genotype.as_str().to_string(),
                    risk_allele: snp.risk_allele,
                    copies: Some(copies),
                    weight: *beta,
                    contribution: round3(contribution),
                });
            }
        }
    }

    (contributions, total, genotyped)
}

pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn write_contributions(out_dir: &Path, contributions: &[SnpContribution]) -> Result<(), Stage2Error> {
    let mut buf = String::new();
    buf.push_str("snp_id\tgene\tgenotype\trisk_allele\tcopies\tweight\tcontribution\n");
    for c in contributions {
        let copies = match c.copies {
            Some(n) => n.to_string(),
            None => ".".to_string(),
        };
        buf.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.3}\n",
            c.id, c.gene, c.genotype, c.risk_allele, copies, c.weight, c.contribution
        ));
    }
    std::fs::write(out_dir.join("contributions.tsv"), buf)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
