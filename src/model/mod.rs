pub mod risk;
pub mod thresholds;
