use crate::pipeline::stage4_report::{FinalSummary, Stage4Error};

pub type Summary = FinalSummary;

pub fn write_summary(out_dir: &std::path::Path, summary: &Summary) -> Result<(), Stage4Error> {
    let json = serde_json::to_string_pretty(summary)?;
    let path = out_dir.join("summary.json");
    std::fs::write(path, json)?;
    Ok(())
}
