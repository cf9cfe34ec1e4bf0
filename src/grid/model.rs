use crate::{
    decode::directive::{Directive, decode_directive},
    foundation::core::{Rgba8, TravelVector},
    foundation::error::{PixrouteError, PixrouteResult},
};

/// One decoded pixel position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Column, `0 <= x < width`.
    pub x: u32,
    /// Row, `0 <= y < height`.
    pub y: u32,
    /// Sampled color.
    pub color: Rgba8,
    /// Directive decoded from `color`.
    pub directive: Directive,
}

impl Cell {
    /// `(x, y)` of this cell.
    pub fn coord(&self) -> (u32, u32) {
        (self.x, self.y)
    }
}

/// The decoded image as a read-only lattice of [`Cell`]s.
///
/// Storage is a flat row-major buffer; `(x, y)` lives at `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Decode a tightly packed RGBA8 buffer (row-major, `width * height * 4` bytes).
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> PixrouteResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixrouteError::image_access(format!(
                "image has empty dimensions {width}x{height}"
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| PixrouteError::image_access("image dimensions overflow"))?;
        if rgba.len() != expected {
            return Err(PixrouteError::image_access(format!(
                "rgba buffer length {} does not match {width}x{height}",
                rgba.len()
            )));
        }

        let mut cells = Vec::with_capacity(expected / 4);
        for (idx, px) in rgba.chunks_exact(4).enumerate() {
            let x = (idx % width as usize) as u32;
            let y = (idx / width as usize) as u32;
            let color = Rgba8::new(px[0], px[1], px[2], px[3]);
            cells.push(Cell {
                x,
                y,
                color,
                directive: decode_directive(color),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Decode an already loaded image.
    #[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
    pub fn from_image(image: &image::RgbaImage) -> PixrouteResult<Self> {
        let (width, height) = image.dimensions();
        Self::from_rgba8(width, height, image.as_raw())
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Lookup that yields `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<&Cell> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Lookup that treats an outside coordinate as an access error.
    pub fn cell(&self, x: u32, y: u32) -> PixrouteResult<&Cell> {
        self.get(i64::from(x), i64::from(y)).ok_or_else(|| {
            PixrouteError::image_access(format!(
                "cell ({x}, {y}) is outside the {}x{} grid",
                self.width, self.height
            ))
        })
    }

    /// Neighbour of `from` one step along `vector`.
    ///
    /// `start` only feeds the error report.
    pub fn step(&self, start: &Cell, from: &Cell, vector: TravelVector) -> PixrouteResult<&Cell> {
        let (dx, dy) = vector.delta();
        let at = (i64::from(from.x) + dx, i64::from(from.y) + dy);
        self.get(at.0, at.1).ok_or(PixrouteError::OutOfBounds {
            start: start.coord(),
            at,
            vector,
            width: self.width,
            height: self.height,
        })
    }

    /// Cells whose directive begins a path, row-major.
    pub fn start_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.directive.is_start())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/model.rs"]
mod tests;
