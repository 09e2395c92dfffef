use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::panels::defs::Scheme;
use crate::panels::loader::{default_panels_dir, load_panel_from_dir};
use crate::pipeline::stage1_ingest::run_stage1_ingest;
use crate::pipeline::stage2_score::run_stage2_score;
use crate::pipeline::stage3_classify::run_stage3_classify;
use crate::pipeline::stage4_report::run_stage4_report;
use crate::report::text::render_report;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Genotype report file (2-column or 23andMe-style 4-column text)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Manual genotype entry as SNPID=GENOTYPE (repeatable; wins over file)
    #[arg(long = "genotype", value_parser = parse_genotype_pair)]
    genotypes: Vec<(String, String)>,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Weighting scheme
    #[arg(long, value_enum, default_value = "dosage-beta")]
    pub(crate) scheme: SchemeArg,

    /// Optional panel directory override
    #[arg(long)]
    panels: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeArg {
    OddsRatio,
    DosageBeta,
}

impl From<SchemeArg> for Scheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::OddsRatio => Scheme::OddsRatio,
            SchemeArg::DosageBeta => Scheme::DosageBeta,
        }
    }
}

fn parse_genotype_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((id, genotype)) if !id.is_empty() && !genotype.is_empty() => {
            Ok((id.to_string(), genotype.to_string()))
        }
        _ => Err(format!("expected SNPID=GENOTYPE, got {s:?}")),
    }
}

pub fn handle(args: ScoreArgs) -> anyhow::Result<()> {
    if args.input.is_none() && args.genotypes.is_empty() {
        anyhow::bail!("no genotype input: pass --input and/or --genotype");
    }
    std::fs::create_dir_all(&args.out)?;

    let scheme: Scheme = args.scheme.into();
    let panels_dir = args.panels.unwrap_or_else(default_panels_dir);
    let panel = load_panel_from_dir(&panels_dir, scheme)?;

    let start = Instant::now();
    info!(stage = "stage1_ingest", "starting stage");
    let ingest = run_stage1_ingest(args.input.as_deref(), &args.genotypes, &args.out)?;
    info!(
        stage = "stage1_ingest",
        elapsed_ms = start.elapsed().as_millis(),
        genotypes = ingest.genotypes.len(),
        skipped_lines = ingest.stats.skipped_lines,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_score", "starting stage");
    let scores = run_stage2_score(&ingest.genotypes, &panel, &args.out)?;
    info!(
        stage = "stage2_score",
        elapsed_ms = start.elapsed().as_millis(),
        genotyped = scores.genotyped,
        contributions = scores.contributions.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_classify", "starting stage");
    let classify = run_stage3_classify(scores.total, scheme);
    info!(
        stage = "stage3_classify",
        elapsed_ms = start.elapsed().as_millis(),
        risk_level = classify.level.as_str(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage4_report", "starting stage");
    let summary = run_stage4_report(&ingest, &panel, &scores, &classify, &args.out)?;
    info!(
        stage = "stage4_report",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    print!("{}", render_report(&summary));
    Ok(())
}
