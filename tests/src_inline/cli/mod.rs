
use super::*;
use clap::Parser;

#[test]
fn score_scheme_default_is_dosage_beta() {
    let cli = Cli::parse_from(["t2d-prs", "score", "--input", "genome.txt", "--out", "out"]);
    match cli.command {
        Command::Score(args) => {
            assert_eq!(args.scheme, score::SchemeArg::DosageBeta);
        }
        _ => panic!("expected score command"),
    }
}

#[test]
fn score_scheme_odds_ratio_parses() {
    let cli = Cli::parse_from([
        "t2d-prs",
        "score",
        "--input",
        "genome.txt",
        "--out",
        "out",
        "--scheme",
        "odds-ratio",
    ]);
    match cli.command {
        Command::Score(args) => {
            assert_eq!(args.scheme, score::SchemeArg::OddsRatio);
        }
        _ => panic!("expected score command"),
    }
}

#[test]
fn score_accepts_repeated_genotype_pairs() {
    let cli = Cli::parse_from([
        "t2d-prs",
        "score",
        "--genotype",
        "rs7903146=TT",
        "--genotype",
        "rs1801282=CG",
        "--out",
        "out",
    ]);
    match cli.command {
        Command::Score(_) => {}
        _ => panic!("expected score command"),
    }
}

#[test]
fn malformed_genotype_pair_is_rejected() {
    let result = Cli::try_parse_from([
        "t2d-prs",
        "score",
        "--genotype",
        "rs7903146",
        "--out",
        "out",
    ]);
    assert!(result.is_err());
}
