use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::panels::defs::SnpPanel;
use crate::pipeline::stage1_ingest::IngestContext;
use crate::pipeline::stage2_score::{ScoreContext, SnpContribution, round3};
use crate::pipeline::stage3_classify::ClassifyContext;
use crate::report::json::write_summary;
use crate::report::text::render_report;

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalSummary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub scoring: ScoringSummary,
    pub contributions: Vec<SnpContribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub genotypes_provided: usize,
    pub manual_entries: usize,
    pub panel_snps: usize,
    pub panel_snps_genotyped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringSummary {
    pub scheme: String,
    /// Aggregate score rounded to display precision.
    pub score: f64,
    pub risk_level: String,
    pub risk_label: String,
    pub progress: Option<f64>,
}

/// Assembles the final summary and writes `summary.json` and `report.txt`.
pub fn run_stage4_report(
    ingest: &IngestContext,
    panel: &SnpPanel,
    scores: &ScoreContext,
    classify: &ClassifyContext,
    out_dir: &Path,
) -> Result<FinalSummary, Stage4Error> {
    let summary = FinalSummary {
        tool: ToolSummary {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputSummary {
            genotypes_provided: ingest.genotypes.len(),
            manual_entries: ingest.manual_entries,
            panel_snps: panel.len(),
            panel_snps_genotyped: scores.genotyped,
        },
        scoring: ScoringSummary {
            scheme: panel.scheme.as_str().to_string(),
            score: round3(scores.total),
            risk_level: classify.level.as_str().to_string(),
            risk_label: classify.level.label().to_string(),
            progress: classify.progress,
        },
        contributions: scores.contributions.clone(),
    };

    write_summary(out_dir, &summary)?;
    std::fs::write(out_dir.join("report.txt"), render_report(&summary))?;

    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
