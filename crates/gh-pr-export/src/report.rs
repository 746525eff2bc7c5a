//! Report persistence
//!
//! Serializes the collected records once and writes the identical content
//! to both report files.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::collect::Record;

const JSON_FILE: &str = "my_prs.json";
const TXT_FILE: &str = "my_prs.txt";

/// Paths the report was written to
#[derive(Debug, Clone)]
pub struct WrittenReport {
    pub json: PathBuf,
    pub txt: PathBuf,
}

/// Write `records` as pretty-printed JSON to both report files.
///
/// The output directory is created if missing; existing files are
/// overwritten unconditionally. An empty record list writes `[]`.
pub fn write_report(output_dir: &Path, records: &[Record]) -> Result<WrittenReport> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            output_dir.display()
        )
    })?;

    let content = serde_json::to_string_pretty(records).context("Failed to serialize report")?;

    let json = output_dir.join(JSON_FILE);
    let txt = output_dir.join(TXT_FILE);
    fs::write(&json, &content).with_context(|| format!("Failed to write {}", json.display()))?;
    fs::write(&txt, &content).with_context(|| format!("Failed to write {}", txt.display()))?;

    info!(
        "Saved {} PRs to {} and {}",
        records.len(),
        json.display(),
        txt.display()
    );

    Ok(WrittenReport { json, txt })
}
