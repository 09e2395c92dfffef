pub mod stage1_ingest;
pub mod stage2_score;
pub mod stage3_classify;
pub mod stage4_report;
