use crate::{foundation::core::Rgba8, trace::orchestrator::TracedResult};

/// RGBA8 output buffer, straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Raster {
    /// A `width x height` buffer filled with `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgba8) -> Self {
        let n = width as usize * height as usize;
        let px = fill.to_array();
        let mut data = Vec::with_capacity(n * 4);
        for _ in 0..n {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Color at `(x, y)`, `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some(Rgba8::new(px[0], px[1], px[2], px[3]))
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Colors used by [`render_paths`].
pub struct RenderSettings {
    /// Value of every untouched pixel.
    pub background: Rgba8,
    /// Value of every traced pixel.
    pub ink: Rgba8,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: Rgba8::TRANSPARENT,
            ink: Rgba8::BLACK,
        }
    }
}

/// Paint every cell of every path onto a fresh background.
///
/// Overlapping paths simply paint the same pixel again.
#[tracing::instrument(skip(traced, settings), fields(paths = traced.paths.len()))]
pub fn render_paths(traced: &TracedResult, settings: &RenderSettings) -> Raster {
    let mut raster = Raster::filled(traced.width, traced.height, settings.background);
    for path in &traced.paths {
        for (x, y) in path.coords() {
            raster.set_pixel(x, y, settings.ink);
        }
    }
    raster
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
