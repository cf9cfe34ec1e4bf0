use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{PixrouteError, PixrouteResult},
    render::raster::Raster,
};

/// Decode encoded image bytes (any format `image` understands) into RGBA8.
pub fn decode_image(bytes: &[u8]) -> PixrouteResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| PixrouteError::image_access(format!("{e:#}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode the image at `path`.
pub fn load_image(path: &Path) -> PixrouteResult<image::RgbaImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read image '{}'", path.display()))
        .map_err(|e| PixrouteError::image_access(format!("{e:#}")))?;
    decode_image(&bytes).map_err(|e| match e {
        PixrouteError::ImageAccess(msg) => {
            PixrouteError::image_access(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

/// Encode `raster` at `path` in the format named by its extension, creating the parent
/// directory if needed.
///
/// Fails before touching the filesystem when the extension is not a known image format.
pub fn write_image(path: &Path, raster: &Raster) -> PixrouteResult<()> {
    let format = image::ImageFormat::from_path(path)
        .with_context(|| format!("pick output format for '{}'", path.display()))
        .map_err(|e| PixrouteError::write(format!("{e:#}")))?;
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        format,
    )
    .with_context(|| format!("write {format:?} image '{}'", path.display()))
    .map_err(|e| PixrouteError::write(format!("{e:#}")))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> PixrouteResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))
            .map_err(|e| PixrouteError::write(format!("{e:#}")))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/image_io.rs"]
mod tests;
