//! Grids drawn as ASCII for unit tests.
//!
//! `U` start-up, `L` start-left, `S` stop, `<` left turn, `>` right turn, anything else blank.

use crate::{foundation::core::Rgba8, grid::model::Grid};

pub(crate) const START_UP: Rgba8 = Rgba8::new(7, 84, 19, 255);
pub(crate) const START_LEFT: Rgba8 = Rgba8::new(139, 57, 137, 255);
pub(crate) const STOP: Rgba8 = Rgba8::new(51, 69, 169, 255);
pub(crate) const TURN_RIGHT: Rgba8 = Rgba8::new(182, 149, 72, 255);
pub(crate) const TURN_LEFT: Rgba8 = Rgba8::new(123, 131, 154, 255);
pub(crate) const BLANK: Rgba8 = Rgba8::new(255, 255, 255, 255);

pub(crate) fn color_for(ch: char) -> Rgba8 {
    match ch {
        'U' => START_UP,
        'L' => START_LEFT,
        'S' => STOP,
        '<' => TURN_LEFT,
        '>' => TURN_RIGHT,
        _ => BLANK,
    }
}

pub(crate) fn rgba_from_ascii(rows: &[&str]) -> (u32, u32, Vec<u8>) {
    let height = rows.len() as u32;
    let width = rows[0].chars().count() as u32;
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for row in rows {
        assert_eq!(row.chars().count() as u32, width, "ragged row {row:?}");
        for ch in row.chars() {
            data.extend_from_slice(&color_for(ch).to_array());
        }
    }
    (width, height, data)
}

pub(crate) fn grid_from_ascii(rows: &[&str]) -> Grid {
    let (width, height, data) = rgba_from_ascii(rows);
    Grid::from_rgba8(width, height, &data).unwrap()
}

pub(crate) fn image_from_ascii(rows: &[&str]) -> image::RgbaImage {
    let (width, height, data) = rgba_from_ascii(rows);
    image::RgbaImage::from_raw(width, height, data).unwrap()
}
