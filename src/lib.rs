pub mod cli;
pub mod genotype;
pub mod model;
pub mod panels;
pub mod pipeline;
pub mod report;

pub mod prelude {
    pub use crate::genotype::Genotype;
    pub use crate::panels::defs::{Scheme, SnpPanel};
    pub use crate::pipeline::stage2_score::ScoreContext;
}
