//! Figure construction and export tests.

use geodesy::LatLon;
use route_common::{BoundingBox, Grid2, WindField, WindFieldSet};
use renderer::figure::{CHART_HEIGHT, CHART_WIDTH, SHEET_HEIGHT, SHEET_WIDTH};
use renderer::{ChartOptions, MapFigure};

fn test_extent() -> BoundingBox {
    BoundingBox::new(-10.0, 40.0, 10.0, 60.0)
}

fn test_winds() -> WindFieldSet {
    let mut set = WindFieldSet::new();
    for hour in [0u32, 3, 6] {
        let field = WindField::new(
            Grid2::filled(4, 4, 10.0),
            Grid2::filled(4, 4, 0.0),
            Grid2::from_fn(4, 4, |r, _| 42.0 + 4.0 * r as f64),
            Grid2::from_fn(4, 4, |_, c| -8.0 + 4.0 * c as f64),
        )
        .unwrap();
        set.insert(hour, field);
    }
    set
}

#[test]
fn test_new_chart_dimensions() {
    let fig = MapFigure::new_chart(test_extent(), 96, &ChartOptions::default()).unwrap();
    assert_eq!(fig.panel_count(), 1);

    let panel = fig.panel(0).unwrap();
    assert_eq!(panel.width(), CHART_WIDTH);
    assert_eq!(panel.height(), CHART_HEIGHT);
}

#[test]
fn test_chart_png_round_trips_dimensions() {
    let fig = MapFigure::new_chart(test_extent(), 96, &ChartOptions::default()).unwrap();
    let png = fig.to_png().unwrap();

    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), CHART_WIDTH);
    assert_eq!(decoded.height(), CHART_HEIGHT);
}

#[test]
fn test_forecast_sheet_stacks_panels() {
    let fig = MapFigure::new_forecast_sheet(
        LatLon::new(42.0, -8.0),
        LatLon::new(58.0, 8.0),
        96,
        &test_winds(),
        3,
        &ChartOptions::default(),
    )
    .unwrap();

    assert_eq!(fig.panel_count(), 3);
    let (pixels, width, height) = fig.to_rgba();
    assert_eq!(width, SHEET_WIDTH as usize);
    assert_eq!(height, 3 * SHEET_HEIGHT as usize);
    assert_eq!(pixels.len(), width * height * 4);
}

#[test]
fn test_forecast_sheet_overlays_route_on_first_panel_only() {
    let winds = test_winds();
    let fig = MapFigure::new_forecast_sheet(
        LatLon::new(42.0, -8.0),
        LatLon::new(58.0, 8.0),
        96,
        &winds,
        2,
        &ChartOptions::default(),
    )
    .unwrap();

    let first: Vec<u8> = fig.panel(0).unwrap().pixmap().data().to_vec();
    let second: Vec<u8> = fig.panel(1).unwrap().pixmap().data().to_vec();
    // Hours 0 and 1 bucket to the same wind field and the panels share a
    // basemap, so the only difference is the route overlay on panel 0.
    assert_ne!(first, second);
}

#[test]
fn test_empty_forecast_sheet_has_no_panels() {
    let fig = MapFigure::new_forecast_sheet(
        LatLon::new(42.0, -8.0),
        LatLon::new(58.0, 8.0),
        96,
        &test_winds(),
        0,
        &ChartOptions::default(),
    )
    .unwrap();
    assert_eq!(fig.panel_count(), 0);
    assert!(fig.to_png().is_err());
}

#[test]
fn test_panel_index_out_of_range() {
    let fig = MapFigure::new_chart(test_extent(), 96, &ChartOptions::default()).unwrap();
    assert!(fig.panel(1).is_err());
}
