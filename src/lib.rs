//! pixroute turns color-coded pixels into traced polylines.
//!
//! An input image is read as a grid of cells. Five fixed colors carry meaning: two start markers
//! (heading up or left), a stop marker, and left/right quarter turns. Every other color is
//! pass-through. Each start cell is walked step by step until it enters a stop cell, and every
//! visited cell is painted black onto a fresh image of the same size.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: `RgbaImage -> Grid` (one [`Cell`] per pixel, directive decoded from color)
//! 2. **Trace**: `Grid -> TracedResult` (one [`Path`] per start cell, optionally on a worker pool)
//! 3. **Render**: `TracedResult -> Raster` (traced cells painted over a blank background)
//! 4. **Write**: `Raster -> image file` (format from the extension, plus an optional JSON report of the paths)
//!
//! The grid is immutable after decoding; traces share it read-only and never see each other.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod decode;
mod foundation;
mod grid;
mod io;
mod pipeline;
mod render;
mod trace;

#[cfg(test)]
#[path = "../tests/unit/fixtures.rs"]
mod fixtures;

pub use decode::directive::{DIRECTIVE_TABLE, Directive, decode_directive};
pub use foundation::core::{Rgba8, TravelVector};
pub use foundation::error::{PixrouteError, PixrouteResult};
pub use grid::model::{Cell, Grid};
pub use io::image_io::{decode_image, load_image, write_image};
pub use io::report::{TraceReport, write_report};
pub use pipeline::{
    DEFAULT_INPUT, DEFAULT_OUTPUT, PipelineConfig, PipelineSummary, run, trace_image,
};
pub use render::raster::{Raster, RenderSettings, render_paths};
pub use trace::orchestrator::{
    OutOfBoundsPolicy, TraceSettings, TraceThreading, TracedResult, orchestrate,
};
pub use trace::tracer::{DEFAULT_MAX_STEPS, Path, trace_path};
pub use trace::turn::{Turn, next_vector, start_vector};
