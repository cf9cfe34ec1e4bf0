use std::path::PathBuf;

use crate::{
    foundation::error::PixrouteResult,
    grid::model::Grid,
    io::image_io::{load_image, write_image},
    io::report::write_report,
    render::raster::{Raster, RenderSettings, render_paths},
    trace::orchestrator::{TraceSettings, TracedResult, orchestrate},
};

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "input.png";
/// Output file written when no path is given.
pub const DEFAULT_OUTPUT: &str = "output.png";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Everything [`run`] needs.
pub struct PipelineConfig {
    /// Source image.
    pub input: PathBuf,
    /// Destination image; the extension picks the format.
    pub output: PathBuf,
    /// Trace knobs.
    pub trace: TraceSettings,
    /// Render colors.
    pub render: RenderSettings,
    /// Optional JSON report of the traced paths.
    pub report: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            trace: TraceSettings::default(),
            render: RenderSettings::default(),
            report: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters reported after a successful run.
pub struct PipelineSummary {
    /// Start cells found in the input.
    pub starts: usize,
    /// Paths traced to a stop cell.
    pub paths: usize,
    /// Traces dropped by the out-of-bounds policy.
    pub skipped: usize,
    /// Distinct pixels painted in the output.
    pub painted: usize,
}

/// Decode + trace + render an in-memory image.
pub fn trace_image(
    image: &image::RgbaImage,
    trace: &TraceSettings,
    render: &RenderSettings,
) -> PixrouteResult<(TracedResult, Raster)> {
    let grid = Grid::from_image(image)?;
    let traced = orchestrate(&grid, trace)?;
    let raster = render_paths(&traced, render);
    Ok((traced, raster))
}

/// Load the input, trace every path, and write the rendered output.
///
/// Nothing is written when decoding or tracing fails.
#[tracing::instrument(skip(config), fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &PipelineConfig) -> PixrouteResult<PipelineSummary> {
    config.trace.validate()?;

    let image = load_image(&config.input)?;
    let (traced, raster) = trace_image(&image, &config.trace, &config.render)?;

    write_image(&config.output, &raster)?;
    if let Some(report) = &config.report {
        write_report(report, &traced)?;
    }

    let summary = PipelineSummary {
        starts: traced.paths.len() + traced.skipped.len(),
        paths: traced.paths.len(),
        skipped: traced.skipped.len(),
        painted: traced.painted().len(),
    };
    tracing::info!(
        starts = summary.starts,
        paths = summary.paths,
        skipped = summary.skipped,
        painted = summary.painted,
        "pipeline finished"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
