use std::collections::HashMap;

use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct ParseStats {
    pub total_lines: usize,
    pub data_lines: usize,
    pub skipped_lines: usize,
    pub duplicate_ids: usize,
}

/// Parses a genotype report into a map of SNP id -> uppercased genotype
/// string.
///
/// The input is line oriented and loosely structured. Lines that are empty,
/// start with `#`, or start with the literal column-header token `rsid` are
/// skipped. Remaining lines are split on whitespace: a 2-token line is
/// `(id, genotype)`, a line with 4 or more tokens is 23andMe-style
/// `(id, chromosome, position, genotype)` with token 3 taken as the genotype.
/// Any other token count is unparseable and skipped silently.
///
/// Genotypes are uppercased but NOT validated against the allele alphabet
/// here; scoring omits anything that does not normalize. Duplicate ids are
/// last-wins. This function never fails; decode failure is handled before
/// the text reaches it.
pub fn parse_report(text: &str) -> (HashMap<String, String>, ParseStats) {
    let mut genotypes = HashMap::new();
    let mut stats = ParseStats::default();

    for (line_no, line) in text.lines().enumerate() {
        stats.total_lines += 1;
        if line.is_empty() || line.starts_with('#') || line.starts_with("rsid") {
            stats.skipped_lines += 1;
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (id, genotype) = match tokens.len() {
            2 => (tokens[0], tokens[1]),
            n if n >= 4 => (tokens[0], tokens[3]),
            _ => {
                debug!(line = line_no + 1, tokens = tokens.len(), "skipping unparseable line");
                stats.skipped_lines += 1;
                continue;
            }
        };

        if genotypes
            .insert(id.to_string(), genotype.to_ascii_uppercase())
            .is_some()
        {
            stats.duplicate_ids += 1;
        }
        stats.data_lines += 1;
    }

    (genotypes, stats)
}

#[cfg(test)]
#[path = "../../tests/src_inline/genotype/parse.rs"]
mod tests;
