use super::*;
use crate::fixtures::{STOP, START_UP, grid_from_ascii, image_from_ascii};

#[test]
fn covers_every_coordinate_once() {
    let grid = grid_from_ascii(&["U.S", "<>.", "..L", ".S."]);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 4);
    assert_eq!(grid.cells().len(), 12);
    for y in 0..4 {
        for x in 0..3 {
            let c = grid.cell(x, y).unwrap();
            assert_eq!(c.coord(), (x, y));
        }
    }
}

#[test]
fn cells_carry_color_and_directive() {
    let grid = grid_from_ascii(&["U.S"]);
    let start = grid.cell(0, 0).unwrap();
    assert_eq!(start.color, START_UP);
    assert_eq!(start.directive, Directive::StartUp);
    let stop = grid.cell(2, 0).unwrap();
    assert_eq!(stop.color, STOP);
    assert_eq!(stop.directive, Directive::Stop);
    assert_eq!(grid.cell(1, 0).unwrap().directive, Directive::None);
}

#[test]
fn outside_lookups_are_errors_not_defaults() {
    let grid = grid_from_ascii(&["..", ".."]);
    assert!(grid.get(-1, 0).is_none());
    assert!(grid.get(0, -1).is_none());
    assert!(grid.get(2, 0).is_none());
    assert!(grid.get(0, 2).is_none());
    assert!(matches!(
        grid.cell(2, 1),
        Err(PixrouteError::ImageAccess(_))
    ));
}

#[test]
fn step_reports_out_of_bounds() {
    let grid = grid_from_ascii(&["L.S"]);
    let start = grid.cell(0, 0).unwrap();
    let err = grid.step(start, start, TravelVector::Left).unwrap_err();
    match err {
        PixrouteError::OutOfBounds {
            start,
            at,
            vector,
            width,
            height,
        } => {
            assert_eq!(start, (0, 0));
            assert_eq!(at, (-1, 0));
            assert_eq!(vector, TravelVector::Left);
            assert_eq!((width, height), (3, 1));
        }
        other => panic!("unexpected error: {other}"),
    }

    let right = grid.step(start, start, TravelVector::Right).unwrap();
    assert_eq!(right.coord(), (1, 0));
}

#[test]
fn empty_or_mismatched_buffers_are_rejected() {
    assert!(matches!(
        Grid::from_rgba8(0, 3, &[]),
        Err(PixrouteError::ImageAccess(_))
    ));
    assert!(matches!(
        Grid::from_rgba8(3, 0, &[]),
        Err(PixrouteError::ImageAccess(_))
    ));
    assert!(matches!(
        Grid::from_rgba8(2, 2, &[0u8; 12]),
        Err(PixrouteError::ImageAccess(_))
    ));
}

#[test]
fn start_cells_are_row_major() {
    let grid = grid_from_ascii(&["..L", "U..", ".U."]);
    let starts: Vec<_> = grid.start_cells().map(Cell::coord).collect();
    assert_eq!(starts, vec![(2, 0), (0, 1), (1, 2)]);
}

#[test]
fn from_image_matches_raw_buffer() {
    let rows = ["U<", ".S"];
    let img = image_from_ascii(&rows);
    assert_eq!(Grid::from_image(&img).unwrap(), grid_from_ascii(&rows));
}
