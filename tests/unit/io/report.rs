use super::*;
use crate::{
    fixtures::grid_from_ascii,
    trace::orchestrator::{OutOfBoundsPolicy, TraceSettings, orchestrate},
};

#[test]
fn report_lists_coordinates_per_path() {
    let grid = grid_from_ascii(&["L.S", "S..", "U.."]);
    let settings = TraceSettings {
        on_out_of_bounds: OutOfBoundsPolicy::Skip,
        ..TraceSettings::default()
    };
    let traced = orchestrate(&grid, &settings).unwrap();
    let report = TraceReport::from(&traced);
    assert_eq!((report.width, report.height), (3, 3));
    assert_eq!(report.paths, vec![vec![[0, 2], [0, 1]]]);
    assert_eq!(report.skipped, vec![[0, 0]]);
}

#[test]
fn report_json_shape() {
    let grid = grid_from_ascii(&["S", "U"]);
    let traced = orchestrate(&grid, &TraceSettings::default()).unwrap();
    let json = serde_json::to_value(TraceReport::from(&traced)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "width": 1,
            "height": 2,
            "paths": [[[0, 1], [0, 0]]]
        })
    );
}

#[test]
fn write_report_reads_back() {
    let path = std::path::PathBuf::from("target")
        .join("report_unit")
        .join("paths.json");
    let grid = grid_from_ascii(&["S", ".", "U"]);
    let traced = orchestrate(&grid, &TraceSettings::default()).unwrap();
    write_report(&path, &traced).unwrap();

    let back: TraceReport =
        serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(back, TraceReport::from(&traced));
}
