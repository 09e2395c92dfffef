/// Fixed classification cut points. Not configurable and not derived from
/// the panel.
///
/// The boundary semantics differ between schemes and both are load-bearing:
/// odds-ratio scores classify with strict `>`, dosage-beta scores with
/// inclusive `>=`. An odds score of exactly 8.0 is Moderate; a beta score of
/// exactly 1.5 is High.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub odds_high: f64,
    pub odds_moderate: f64,
    pub beta_high: f64,
    pub beta_moderate: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            odds_high: 8.0,
            odds_moderate: 4.0,
            beta_high: 1.5,
            beta_moderate: 0.8,
        }
    }
}
