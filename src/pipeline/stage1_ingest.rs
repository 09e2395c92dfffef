use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::genotype::parse::{ParseStats, parse_report};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is not valid UTF-8 text: {0}")]
    InvalidEncoding(PathBuf),
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
}

#[derive(Debug, Clone)]
pub struct IngestContext {
    /// SNP id -> raw uppercased genotype string. Keys are case-sensitive as
    /// found in the file; values are not validated against the allele
    /// alphabet here.
    pub genotypes: HashMap<String, String>,
    pub stats: ParseStats,
    pub manual_entries: usize,
}

/// Assembles the genotype map from an optional report file and manual
/// `id=GT` entries, and writes `genotypes.tsv` to the output directory.
/// Manual entries are applied after the file, so they win on overlap.
///
/// The only hard input failure is a file that cannot be decoded as text;
/// every malformed line inside a decodable file degrades by omission.
pub fn run_stage1_ingest(
    input: Option<&Path>,
    manual: &[(String, String)],
    out_dir: &Path,
) -> Result<IngestContext, Stage1Error> {
    let (mut genotypes, stats) = match input {
        Some(path) => {
            let text = read_report_text(path)?;
            parse_report(&text)
        }
        None => (HashMap::new(), ParseStats::default()),
    };

    for (id, genotype) in manual {
        if genotypes
            .insert(id.clone(), genotype.to_ascii_uppercase())
            .is_some()
        {
            debug!(snp = id.as_str(), "manual entry overrides file genotype");
        }
    }

    write_genotypes(out_dir, &genotypes)?;

    Ok(IngestContext {
        genotypes,
        stats,
        manual_entries: manual.len(),
    })
}

/// Reads the report file into a string, decompressing `.gz` inputs when the
/// `gz` feature is enabled.
pub fn read_report_text(path: &Path) -> Result<String, Stage1Error> {
    let mut file = std::fs::File::open(path)?;
    let mut bytes = Vec::new();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let mut decoder = flate2::read::GzDecoder::new(file);
            decoder.read_to_end(&mut bytes)?;
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(Stage1Error::GzipNotEnabled(path.to_path_buf()));
        }
    } else {
        file.read_to_end(&mut bytes)?;
    }

    String::from_utf8(bytes).map_err(|_| Stage1Error::InvalidEncoding(path.to_path_buf()))
}

fn write_genotypes(out_dir: &Path, genotypes: &HashMap<String, String>) -> Result<(), Stage1Error> {
    let mut ids: Vec<&String> = genotypes.keys().collect();
    ids.sort();

    let mut buf = String::new();
    buf.push_str("snp_id\tgenotype\n");
    for id in ids {
        buf.push_str(id);
        buf.push('\t');
        buf.push_str(&genotypes[id]);
        buf.push('\n');
    }
    std::fs::write(out_dir.join("genotypes.tsv"), buf)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_ingest.rs"]
mod tests;
