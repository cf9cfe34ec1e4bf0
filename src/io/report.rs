use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;

use crate::{
    foundation::error::{PixrouteError, PixrouteResult},
    io::image_io::ensure_parent_dir,
    trace::orchestrator::TracedResult,
};

/// JSON view of a [`TracedResult`]: coordinates only.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TraceReport {
    /// Grid width.
    pub width: u32,
    /// Grid height.
    pub height: u32,
    /// One `[[x, y], ...]` list per path.
    pub paths: Vec<Vec<[u32; 2]>>,
    /// Start cells dropped by the out-of-bounds policy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<[u32; 2]>,
}

impl From<&TracedResult> for TraceReport {
    fn from(traced: &TracedResult) -> Self {
        Self {
            width: traced.width,
            height: traced.height,
            paths: traced
                .paths
                .iter()
                .map(|p| p.coords().map(|(x, y)| [x, y]).collect())
                .collect(),
            skipped: traced.skipped.iter().map(|&(x, y)| [x, y]).collect(),
        }
    }
}

/// Write the trace report for `traced` as pretty JSON.
pub fn write_report(path: &Path, traced: &TracedResult) -> PixrouteResult<()> {
    ensure_parent_dir(path)?;
    let report = TraceReport::from(traced);
    let f = File::create(path)
        .with_context(|| format!("create report '{}'", path.display()))
        .map_err(|e| PixrouteError::write(format!("{e:#}")))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &report)
        .map_err(anyhow::Error::from)
        .and_then(|()| w.flush().map_err(anyhow::Error::from))
        .with_context(|| format!("write report '{}'", path.display()))
        .map_err(|e| PixrouteError::write(format!("{e:#}")))
}

#[cfg(test)]
#[path = "../../tests/unit/io/report.rs"]
mod tests;
