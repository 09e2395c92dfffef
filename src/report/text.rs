use crate::pipeline::stage4_report::FinalSummary;

pub fn render_report(summary: &FinalSummary) -> String {
    let mut out = String::new();
    out.push_str("T2D Genetic Risk Report\n");
    out.push_str("=======================\n\n");
    out.push_str("This is a simplified educational estimate, not a diagnostic. ");
    out.push_str("Consult a healthcare provider for clinical insights.\n\n");

    out.push_str("Input overview:\n");
    out.push_str(&format!(
        "- Genotypes provided: {}\n",
        summary.input.genotypes_provided
    ));
    out.push_str(&format!("- Panel SNPs: {}\n", summary.input.panel_snps));
    out.push_str(&format!(
        "- Panel SNPs genotyped: {}\n\n",
        summary.input.panel_snps_genotyped
    ));

    if summary.contributions.is_empty() {
        out.push_str("No known risk genotypes were found.\n\n");
    } else {
        out.push_str("Per-SNP breakdown:\n");
        for c in &summary.contributions {
            match c.copies {
                Some(copies) => out.push_str(&format!(
                    "- {} ({}): {} -> {} of {} (beta {}, contribution {:.3})\n",
                    c.id,
                    c.gene,
                    c.genotype,
                    copies_phrase(copies),
                    c.risk_allele,
                    c.weight,
                    c.contribution
                )),
                None => out.push_str(&format!(
                    "- {} ({}): {} (odds ratio {})\n",
                    c.id, c.gene, c.genotype, c.weight
                )),
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("Total score: {:.3}\n", summary.scoring.score));
    out.push_str(&format!(
        "Estimated genetic risk level: {}\n",
        summary.scoring.risk_label
    ));
    if let Some(progress) = summary.scoring.progress {
        out.push_str(&format!("Score fraction of 2.0 cap: {:.2}\n", progress));
    }

    out
}

fn copies_phrase(copies: u8) -> String {
    match copies {
        1 => "1 copy".to_string(),
        n => format!("{} copies", n),
    }
}
