use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::genotype::normalize;
use crate::panels::loader::{default_panels_dir, load_all_panels};
use crate::pipeline::stage1_ingest::{IngestContext, run_stage1_ingest};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Genotype report file
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Optional panel directory override
    #[arg(long)]
    panels: Option<PathBuf>,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    info!(stage = "stage1_ingest", "starting stage");
    let ingest = run_stage1_ingest(Some(&args.input), &[], &args.out)?;
    info!(
        stage = "stage1_ingest",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    let panels_dir = args.panels.unwrap_or_else(default_panels_dir);
    let panels = load_all_panels(&panels_dir)?;
    let tracked: HashSet<&str> = panels
        .iter()
        .flat_map(|p| p.snps.iter().map(|s| s.id.as_str()))
        .collect();

    write_validate(&args.out, &ingest, &tracked)?;
    Ok(())
}

fn write_validate(
    out_dir: &PathBuf,
    ingest: &IngestContext,
    tracked: &HashSet<&str>,
) -> anyhow::Result<()> {
    let covered = ingest
        .genotypes
        .keys()
        .filter(|id| tracked.contains(id.as_str()))
        .count();
    let valid_genotypes = ingest
        .genotypes
        .values()
        .filter(|g| normalize(g).is_some())
        .count();

    let mut lines = Vec::new();
    lines.push(("total_lines", ingest.stats.total_lines.to_string()));
    lines.push(("data_lines", ingest.stats.data_lines.to_string()));
    lines.push(("skipped_lines", ingest.stats.skipped_lines.to_string()));
    lines.push(("duplicate_ids", ingest.stats.duplicate_ids.to_string()));
    lines.push(("genotypes", ingest.genotypes.len().to_string()));
    lines.push(("valid_genotypes", valid_genotypes.to_string()));
    lines.push(("tracked_snps", tracked.len().to_string()));
    lines.push(("tracked_snps_covered", covered.to_string()));

    let path = out_dir.join("validate.tsv");
    let mut buf = String::new();
    for (k, v) in lines {
        buf.push_str(k);
        buf.push('\t');
        buf.push_str(&v);
        buf.push('\n');
    }
    std::fs::write(path, buf)?;
    Ok(())
}
