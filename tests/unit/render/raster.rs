use super::*;
use crate::{
    fixtures::grid_from_ascii,
    trace::orchestrator::{TraceSettings, orchestrate},
};

#[test]
fn paints_exactly_the_union_of_paths() {
    let grid = grid_from_ascii(&["S..S.", ".....", "...>L", "U...."]);
    let traced = orchestrate(&grid, &TraceSettings::default()).unwrap();
    let raster = render_paths(&traced, &RenderSettings::default());
    assert_eq!((raster.width, raster.height), (5, 4));
    assert_eq!(raster.data.len(), 5 * 4 * 4);

    let painted = traced.painted();
    for y in 0..4 {
        for x in 0..5 {
            let px = raster.pixel(x, y).unwrap();
            if painted.contains(&(x, y)) {
                assert_eq!(px, Rgba8::BLACK, "({x}, {y})");
            } else {
                assert_eq!(px, Rgba8::TRANSPARENT, "({x}, {y})");
            }
        }
    }
}

#[test]
fn overlap_is_idempotent() {
    let grid = grid_from_ascii(&["S", ".", "U", "U"]);
    let traced = orchestrate(&grid, &TraceSettings::default()).unwrap();
    let raster = render_paths(&traced, &RenderSettings::default());
    for y in 0..4 {
        assert_eq!(raster.pixel(0, y), Some(Rgba8::BLACK));
    }
}

#[test]
fn no_paths_leaves_background() {
    let grid = grid_from_ascii(&["...", "..."]);
    let traced = orchestrate(&grid, &TraceSettings::default()).unwrap();
    let settings = RenderSettings {
        background: Rgba8::new(255, 255, 255, 255),
        ..RenderSettings::default()
    };
    let raster = render_paths(&traced, &settings);
    assert!(raster.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn pixel_outside_is_none() {
    let raster = Raster::filled(2, 1, Rgba8::BLACK);
    assert_eq!(raster.pixel(1, 0), Some(Rgba8::BLACK));
    assert_eq!(raster.pixel(2, 0), None);
    assert_eq!(raster.pixel(0, 1), None);
}
