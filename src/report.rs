use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::ComponentHealth;
use crate::sim::WaveReport;

#[derive(Serialize)]
struct HealthRow<'a> {
    component: &'a str,
    level: usize,
    health: f64,
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush a finished (or in-progress) run to JSONL files in `output_dir`.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `waves.jsonl` — one WaveReport per line, in wave order
/// - `health.jsonl` — one `{component, level, health}` row per slot
pub fn write_session_report(
    reports: &[WaveReport],
    health: &ComponentHealth,
    output_dir: &Path,
) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("waves.jsonl"), reports.iter())?;
    write_jsonl(
        &output_dir.join("health.jsonl"),
        health.iter().map(|(component, level, health)| HealthRow {
            component: component.label(),
            level,
            health,
        }),
    )?;

    Ok(())
}
