
use super::*;
use crate::panels::defs::{Scheme, SnpRecord};
use crate::panels::loader::load_panel_from_dir;
use std::path::Path;
use tempfile::tempdir;

fn odds_snp(id: &str, risk_genotypes: &[&str], odds_ratio: f64) -> SnpRecord {
    SnpRecord {
        id: id.to_string(),
        gene: "GENE".to_string(),
        risk_allele: 'T',
        weight: Weight::OddsRatio {
            risk_genotypes: risk_genotypes.iter().map(|s| s.to_string()).collect(),
            odds_ratio,
        },
    }
}

fn beta_snp(id: &str, risk_allele: char, beta: f64) -> SnpRecord {
    SnpRecord {
        id: id.to_string(),
        gene: "GENE".to_string(),
        risk_allele,
        weight: Weight::DosageBeta { beta },
    }
}

fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_map_scores_zero() {
    let panel = SnpPanel {
        scheme: Scheme::DosageBeta,
        snps: vec![beta_snp("rs1", 'T', 0.3)],
    };
    let (contributions, total, genotyped) = score_panel(&HashMap::new(), &panel);
    assert!(contributions.is_empty());
    assert_eq!(total, 0.0);
    assert_eq!(genotyped, 0);
}

#[test]
fn odds_whitelist_match_adds_weight() {
    let panel = SnpPanel {
        scheme: Scheme::OddsRatio,
        snps: vec![odds_snp("rs1", &["TT", "CT"], 1.37)],
    };
    let (contributions, total, _) = score_panel(&map(&[("rs1", "CT")]), &panel);
    assert_eq!(contributions.len(), 1);
    assert_eq!(contributions[0].copies, None);
    assert!((total - 1.37).abs() < 1e-12);
}

#[test]
fn odds_non_matching_genotype_is_excluded() {
    let panel = SnpPanel {
        scheme: Scheme::OddsRatio,
        snps: vec![odds_snp("rs1", &["TT", "CT"], 1.37)],
    };
    let (contributions, total, genotyped) = score_panel(&map(&[("rs1", "CC")]), &panel);
    assert!(contributions.is_empty());
    assert_eq!(total, 0.0);
    // The genotype was valid; it just did not match.
    assert_eq!(genotyped, 1);
}

#[test]
fn odds_match_is_orientation_sensitive() {
    // The whitelist lists only "TC"; the reversed "CT" must not match.
    let panel = SnpPanel {
        scheme: Scheme::OddsRatio,
        snps: vec![odds_snp("rs1", &["CC", "TC"], 1.12)],
    };
    let (contributions, total, _) = score_panel(&map(&[("rs1", "CT")]), &panel);
    assert!(contributions.is_empty());
    assert_eq!(total, 0.0);

    let (contributions, total, _) = score_panel(&map(&[("rs1", "TC")]), &panel);
    assert_eq!(contributions.len(), 1);
    assert!((total - 1.12).abs() < 1e-12);
}

#[test]
fn beta_counts_allele_copies() {
    let panel = SnpPanel {
        scheme: Scheme::DosageBeta,
        snps: vec![beta_snp("rs1", 'T', 0.31)],
    };
    let (c, total, _) = score_panel(&map(&[("rs1", "TT")]), &panel);
    assert_eq!(c[0].copies, Some(2));
    assert!((total - 0.62).abs() < 1e-12);

    let (c, total, _) = score_panel(&map(&[("rs1", "CT")]), &panel);
    assert_eq!(c[0].copies, Some(1));
    assert!((total - 0.31).abs() < 1e-12);

    let (c, total, _) = score_panel(&map(&[("rs1", "TC")]), &panel);
    assert_eq!(c[0].copies, Some(1));
    assert!((total - 0.31).abs() < 1e-12);
}

#[test]
fn beta_zero_copies_still_reported() {
    let panel = SnpPanel {
        scheme: Scheme::DosageBeta,
        snps: vec![beta_snp("rs1", 'T', 0.31)],
    };
    let (contributions, total, _) = score_panel(&map(&[("rs1", "CC")]), &panel);
    assert_eq!(contributions.len(), 1);
    assert_eq!(contributions[0].copies, Some(0));
    assert_eq!(contributions[0].contribution, 0.0);
    assert_eq!(total, 0.0);
}

#[test]
fn invalid_genotype_is_omitted() {
    let panel = SnpPanel {
        scheme: Scheme::DosageBeta,
        snps: vec![beta_snp("rs1", 'T', 0.31)],
    };
    let (contributions, total, genotyped) = score_panel(&map(&[("rs1", "--")]), &panel);
    assert!(contributions.is_empty());
    assert_eq!(total, 0.0);
    assert_eq!(genotyped, 0);
}

#[test]
fn unknown_map_keys_never_contribute() {
    let panel = SnpPanel {
        scheme: Scheme::DosageBeta,
        snps: vec![beta_snp("rs1", 'T', 0.31)],
    };
    let (contributions, total, _) = score_panel(&map(&[("rs999", "TT")]), &panel);
    assert!(contributions.is_empty());
    assert_eq!(total, 0.0);
}

#[test]
fn contributions_follow_panel_order() {
    let panel = SnpPanel {
        scheme: Scheme::DosageBeta,
        snps: vec![
            beta_snp("rs2", 'T', 0.1),
            beta_snp("rs1", 'T', 0.2),
            beta_snp("rs3", 'T', 0.3),
        ],
    };
    let (contributions, _, _) =
        score_panel(&map(&[("rs1", "TT"), ("rs2", "TT"), ("rs3", "TT")]), &panel);
    let ids: Vec<&str> = contributions.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["rs2", "rs1", "rs3"]);
}

#[test]
fn reference_beta_panel_end_to_end() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/panels");
    let panel = load_panel_from_dir(&dir, Scheme::DosageBeta).expect("load panel");
    let genotypes = map(&[("rs7903146", "TT"), ("rs1801282", "CG")]);
    let (contributions, total, genotyped) = score_panel(&genotypes, &panel);
    assert_eq!(genotyped, 2);
    assert_eq!(contributions.len(), 2);
    assert!((contributions[0].contribution - 0.62).abs() < 1e-12);
    assert!((contributions[1].contribution - 0.22).abs() < 1e-12);
    assert!((total - 0.84).abs() < 1e-9);
}

#[test]
fn contributions_tsv_written() {
    let dir = tempdir().expect("tempdir");
    let panel = SnpPanel {
        scheme: Scheme::DosageBeta,
        snps: vec![beta_snp("rs1", 'T', 0.31)],
    };
    let ctx = run_stage2_score(&map(&[("rs1", "CT")]), &panel, dir.path()).expect("score");
    assert_eq!(ctx.contributions.len(), 1);
    let text = std::fs::read_to_string(dir.path().join("contributions.tsv")).expect("read");
    assert!(text.starts_with("snp_id\t"));
    assert!(text.contains("rs1\tGENE\tCT\tT\t1\t0.31\t0.310\n"));
}
