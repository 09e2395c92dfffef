pub mod parse;

/// Allele alphabet for biallelic SNP genotypes.
pub const ALLELES: [char; 4] = ['A', 'C', 'G', 'T'];

/// A validated two-letter genotype, uppercase, alphabet {A,C,G,T}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genotype(String);

impl Genotype {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of copies of `allele` in the pair (0, 1 or 2).
    /// Character order does not matter: "AG" and "GA" count alike.
    pub fn copies_of(&self, allele: char) -> u8 {
        self.0.chars().filter(|c| *c == allele).count() as u8
    }
}

impl std::fmt::Display for Genotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a raw genotype string. Returns `None` for anything that is not
/// a two-letter {A,C,G,T} pair after trimming and uppercasing; callers treat
/// that as "no genotype provided" rather than an error.
pub fn normalize(raw: &str) -> Option<Genotype> {
    let cleaned = raw.trim().to_ascii_uppercase();
    if cleaned.chars().count() != 2 {
        return None;
    }
    if !cleaned.chars().all(|c| ALLELES.contains(&c)) {
        return None;
    }
    Some(Genotype(cleaned))
}

#[cfg(test)]
#[path = "../../tests/src_inline/genotype/mod.rs"]
mod tests;
