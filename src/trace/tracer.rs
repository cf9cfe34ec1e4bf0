use crate::{
    foundation::error::{PixrouteError, PixrouteResult},
    grid::model::{Cell, Grid},
    trace::turn::{Turn, next_vector, start_vector},
};

/// Default per-trace step budget.
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Ordered cells visited by one trace: a start cell first, a stop cell last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Visited cells in walk order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The start cell.
    pub fn start(&self) -> &Cell {
        &self.cells[0]
    }

    /// The last visited cell.
    pub fn end(&self) -> &Cell {
        &self.cells[self.cells.len() - 1]
    }

    /// Number of visited cells (never zero).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` only for a path with no cells, which tracing never yields.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `(x, y)` of every visited cell.
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells.iter().map(Cell::coord)
    }
}

/// Walk `grid` from `start` until a stop cell is entered.
///
/// Fails with [`PixrouteError::OutOfBounds`] when the walk leaves the grid and with
/// [`PixrouteError::StepLimit`] after `max_steps` steps without stopping.
pub fn trace_path(grid: &Grid, start: &Cell, max_steps: usize) -> PixrouteResult<Path> {
    let mut vector = start_vector(start.directive).ok_or_else(|| {
        PixrouteError::validation(format!(
            "cell ({}, {}) is not a start cell ({:?})",
            start.x, start.y, start.directive
        ))
    })?;

    let mut cells = vec![*start];
    let mut current = start;
    loop {
        if cells.len() > max_steps {
            return Err(PixrouteError::StepLimit {
                start: start.coord(),
                max_steps,
            });
        }

        let next = grid.step(start, current, vector)?;
        cells.push(*next);
        match next_vector(vector, next.directive) {
            Turn::Terminate => break,
            Turn::Continue(v) => {
                vector = v;
                current = next;
            }
        }
    }

    tracing::debug!(
        start_x = start.x,
        start_y = start.y,
        len = cells.len(),
        "traced path"
    );
    Ok(Path { cells })
}

#[cfg(test)]
#[path = "../../tests/unit/trace/tracer.rs"]
mod tests;
