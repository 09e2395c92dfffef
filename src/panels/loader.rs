use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::genotype::ALLELES;
use crate::panels::defs::{Scheme, SnpPanel, SnpRecord, Weight};

#[derive(Debug, Error)]
pub enum PanelLoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no panel for scheme {scheme} in {dir}")]
    SchemeNotFound { scheme: &'static str, dir: String },
    #[error("panel {file} declares scheme {scheme} but snp {snp} carries a different weight form")]
    MixedScheme {
        file: String,
        scheme: &'static str,
        snp: String,
    },
    #[error("snp {snp} in {file}: {reason}")]
    InvalidSnp {
        file: String,
        snp: String,
        reason: String,
    },
    #[error("panel {0} contains no snps")]
    Empty(String),
}

#[derive(serde::Deserialize)]
struct PanelFile {
    scheme: Scheme,
    #[serde(default)]
    snp: Vec<SnpRow>,
}

#[derive(serde::Deserialize)]
struct SnpRow {
    id: String,
    gene: String,
    risk_allele: String,
    #[serde(default)]
    risk_genotypes: Option<Vec<String>>,
    #[serde(default)]
    odds_ratio: Option<f64>,
    #[serde(default)]
    beta: Option<f64>,
}

/// Loads the panel for `scheme` from a directory of TOML files. Each file
/// declares its scheme at the top level; the first file declaring the
/// requested scheme wins (files are visited in sorted order).
pub fn load_panel_from_dir(dir: &Path, scheme: Scheme) -> Result<SnpPanel, PanelLoadError> {
    let mut files = list_toml_files(dir)?;
    files.sort();

    for file in files {
        let text = fs::read_to_string(&file)?;
        let parsed: PanelFile = toml::from_str(&text)?;
        if parsed.scheme == scheme {
            return build_panel(&file, parsed);
        }
    }

    Err(PanelLoadError::SchemeNotFound {
        scheme: scheme.as_str(),
        dir: dir.to_string_lossy().to_string(),
    })
}

/// Loads every panel file in the directory, in sorted file order.
pub fn load_all_panels(dir: &Path) -> Result<Vec<SnpPanel>, PanelLoadError> {
    let mut files = list_toml_files(dir)?;
    files.sort();

    let mut panels = Vec::new();
    for file in files {
        let text = fs::read_to_string(&file)?;
        let parsed: PanelFile = toml::from_str(&text)?;
        panels.push(build_panel(&file, parsed)?);
    }
    Ok(panels)
}

fn build_panel(file: &Path, parsed: PanelFile) -> Result<SnpPanel, PanelLoadError> {
    let file_name = file.to_string_lossy().to_string();
    if parsed.snp.is_empty() {
        return Err(PanelLoadError::Empty(file_name));
    }

    let mut snps = Vec::with_capacity(parsed.snp.len());
    for row in parsed.snp {
        let risk_allele = parse_risk_allele(&file_name, &row)?;
        let weight = parse_weight(&file_name, &row)?;
        if weight.scheme() != parsed.scheme {
            return Err(PanelLoadError::MixedScheme {
                file: file_name,
                scheme: parsed.scheme.as_str(),
                snp: row.id,
            });
        }
        snps.push(SnpRecord {
            id: row.id,
            gene: row.gene,
            risk_allele,
            weight,
        });
    }

    Ok(SnpPanel {
        scheme: parsed.scheme,
        snps,
    })
}

fn parse_risk_allele(file: &str, row: &SnpRow) -> Result<char, PanelLoadError> {
    let mut chars = row.risk_allele.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if ALLELES.contains(&c) => Ok(c),
        _ => Err(PanelLoadError::InvalidSnp {
            file: file.to_string(),
            snp: row.id.clone(),
            reason: format!("risk_allele must be one of A/C/G/T, got {:?}", row.risk_allele),
        }),
    }
}

fn parse_weight(file: &str, row: &SnpRow) -> Result<Weight, PanelLoadError> {
    match (&row.odds_ratio, &row.risk_genotypes, &row.beta) {
        (Some(odds_ratio), Some(risk_genotypes), None) => Ok(Weight::OddsRatio {
            risk_genotypes: risk_genotypes.clone(),
            odds_ratio: *odds_ratio,
        }),
        (None, None, Some(beta)) => Ok(Weight::DosageBeta { beta: *beta }),
        _ => Err(PanelLoadError::InvalidSnp {
            file: file.to_string(),
            snp: row.id.clone(),
            reason: "expected either odds_ratio with risk_genotypes, or beta".to_string(),
        }),
    }
}

pub fn default_panels_dir() -> PathBuf {
    let relative = Path::new("assets").join("panels");
    if relative.is_dir() {
        return relative;
    }

    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("panels");
    if manifest.is_dir() {
        return manifest;
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        let sibling = dir.join("assets").join("panels");
        if sibling.is_dir() {
            return sibling;
        }
        let parent = dir.join("..").join("assets").join("panels");
        if parent.is_dir() {
            return parent;
        }
    }

    relative
}

fn list_toml_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/src_inline/panels/loader.rs"]
mod tests;
