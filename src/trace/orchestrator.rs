use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::{
    foundation::error::{PixrouteError, PixrouteResult},
    grid::model::{Cell, Grid},
    trace::tracer::{DEFAULT_MAX_STEPS, Path, trace_path},
};

/// What to do with a trace that runs off the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutOfBoundsPolicy {
    /// Fail the whole run on the first out-of-bounds trace.
    #[default]
    Abort,
    /// Drop the failing trace and keep the others.
    Skip,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Fan-out controls for tracing many start cells.
pub struct TraceThreading {
    /// Trace start cells on a worker pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Knobs for [`orchestrate`].
pub struct TraceSettings {
    /// Per-trace step budget.
    pub max_steps: usize,
    /// Out-of-bounds handling.
    pub on_out_of_bounds: OutOfBoundsPolicy,
    /// Worker pool configuration.
    pub threading: TraceThreading,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            on_out_of_bounds: OutOfBoundsPolicy::Abort,
            threading: TraceThreading::default(),
        }
    }
}

impl TraceSettings {
    /// Reject settings that can never produce a path.
    pub fn validate(&self) -> PixrouteResult<()> {
        if self.max_steps == 0 {
            return Err(PixrouteError::validation("trace 'max_steps' must be >= 1"));
        }
        if let Some(n) = self.threading.threads
            && n == 0
        {
            return Err(PixrouteError::validation(
                "trace threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Every path traced from a grid, plus the grid dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracedResult {
    /// Grid width.
    pub width: u32,
    /// Grid height.
    pub height: u32,
    /// One path per successful start cell, in row-major start order.
    pub paths: Vec<Path>,
    /// Start cells whose trace was dropped under [`OutOfBoundsPolicy::Skip`].
    pub skipped: Vec<(u32, u32)>,
}

impl TracedResult {
    /// Total visited cells across all paths, overlaps counted twice.
    pub fn cell_count(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }

    /// Distinct `(x, y)` coordinates visited by any path.
    pub fn painted(&self) -> BTreeSet<(u32, u32)> {
        self.paths.iter().flat_map(Path::coords).collect()
    }
}

/// Find every start cell in `grid` and trace each one independently.
#[tracing::instrument(skip(grid, settings), fields(width = grid.width(), height = grid.height()))]
pub fn orchestrate(grid: &Grid, settings: &TraceSettings) -> PixrouteResult<TracedResult> {
    settings.validate()?;

    let starts: Vec<&Cell> = grid.start_cells().collect();
    tracing::info!(starts = starts.len(), "found start cells");

    let pool = if settings.threading.parallel && starts.len() > 1 {
        Some(build_thread_pool(settings.threading.threads)?)
    } else {
        None
    };
    let trace_one = |start: &&Cell| trace_path(grid, start, settings.max_steps);

    // Abort stops at the first failing trace instead of finishing the rest.
    if settings.on_out_of_bounds == OutOfBoundsPolicy::Abort {
        let paths: Vec<Path> = match &pool {
            Some(pool) => pool.install(|| {
                starts
                    .par_iter()
                    .map(trace_one)
                    .collect::<PixrouteResult<_>>()
            })?,
            None => starts.iter().map(trace_one).collect::<PixrouteResult<_>>()?,
        };
        return Ok(TracedResult {
            width: grid.width(),
            height: grid.height(),
            paths,
            skipped: Vec::new(),
        });
    }

    let traced: Vec<PixrouteResult<Path>> = match &pool {
        Some(pool) => pool.install(|| starts.par_iter().map(trace_one).collect()),
        None => starts.iter().map(trace_one).collect(),
    };

    let mut paths = Vec::with_capacity(traced.len());
    let mut skipped = Vec::new();
    for (start, result) in starts.iter().zip(traced) {
        match result {
            Ok(path) => paths.push(path),
            Err(err) if err.is_out_of_bounds() => {
                tracing::warn!(x = start.x, y = start.y, "skipping trace: {err}");
                skipped.push(start.coord());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(TracedResult {
        width: grid.width(),
        height: grid.height(),
        paths,
        skipped,
    })
}

fn build_thread_pool(threads: Option<usize>) -> PixrouteResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PixrouteError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/trace/orchestrator.rs"]
mod tests;
