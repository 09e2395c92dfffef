use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::panels::loader::{default_panels_dir, load_all_panels};

#[derive(Args, Debug)]
pub struct PanelArgs {
    #[command(subcommand)]
    command: PanelCommand,
}

#[derive(Subcommand, Debug)]
enum PanelCommand {
    List,
    Dump(PanelDumpArgs),
}

#[derive(Args, Debug)]
pub struct PanelDumpArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

pub fn handle(args: PanelArgs) -> anyhow::Result<()> {
    match args.command {
        PanelCommand::List => list_panels(),
        PanelCommand::Dump(args) => dump_panels(args),
    }
}

fn list_panels() -> anyhow::Result<()> {
    let dir = default_panels_dir();
    let panels = load_all_panels(&dir)?;
    println!("scheme\tsnp_id\tgene\trisk_allele\tweight");
    for panel in panels {
        for snp in panel.snps {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                panel.scheme.as_str(),
                snp.id,
                snp.gene,
                snp.risk_allele,
                snp.weight.value()
            );
        }
    }
    Ok(())
}

fn dump_panels(args: PanelDumpArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;
    let dir = default_panels_dir();
    let panels = load_all_panels(&dir)?;
    let json = serde_json::to_string_pretty(&panels)?;
    let path = args.out.join("panels_manifest.json");
    std::fs::write(path, json)?;
    Ok(())
}
