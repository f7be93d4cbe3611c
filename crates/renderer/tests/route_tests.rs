//! Route and legend overlay tests.

use geodesy::LatLon;
use route_common::{BoundingBox, RouteParams};
use renderer::{plot_gcr, plot_legend, plot_route, route_colour, ChartOptions, MapFigure};

fn chart() -> MapFigure {
    MapFigure::new_chart(
        BoundingBox::new(-10.0, 40.0, 10.0, 60.0),
        96,
        &ChartOptions::default(),
    )
    .unwrap()
}

fn diagonal_route() -> RouteParams {
    RouteParams::new(
        "min_fuel",
        vec![42.0, 50.0, 58.0],
        vec![-8.0, 0.0, 8.0],
        12.345,
        3,
    )
}

#[test]
fn test_plot_route_registers_legend_entry() {
    let mut fig = chart();
    plot_route(&mut fig, 0, &diagonal_route(), route_colour(0).unwrap()).unwrap();

    let entries = fig.legend_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "min_fuel (fuel: 12.35t, time: 3h)");
}

#[test]
fn test_plot_route_changes_pixels() {
    let mut fig = chart();
    let (before, _, _) = fig.to_rgba();
    plot_route(&mut fig, 0, &diagonal_route(), route_colour(1).unwrap()).unwrap();
    let (after, _, _) = fig.to_rgba();
    assert_ne!(before, after);
}

#[test]
fn test_plot_route_rejects_mismatched_steps() {
    let mut fig = chart();
    let bad = RouteParams::new("broken", vec![42.0, 50.0], vec![-8.0], 1.0, 1);
    assert!(plot_route(&mut fig, 0, &bad, route_colour(0).unwrap()).is_err());
    // Nothing registered for the failed overlay
    assert!(fig.legend_entries().is_empty());
}

#[test]
fn test_plot_route_rejects_bad_panel() {
    let mut fig = chart();
    assert!(plot_route(&mut fig, 7, &diagonal_route(), route_colour(0).unwrap()).is_err());
}

#[test]
fn test_plot_gcr_changes_pixels() {
    let mut fig = chart();
    let (before, _, _) = fig.to_rgba();
    plot_gcr(
        &mut fig,
        0,
        LatLon::new(42.0, -8.0),
        LatLon::new(58.0, 8.0),
    )
    .unwrap();
    let (after, _, _) = fig.to_rgba();
    assert_ne!(before, after);
}

#[test]
fn test_plot_legend_without_entries_is_noop() {
    let mut fig = chart();
    let (before, _, _) = fig.to_rgba();
    plot_legend(&mut fig, 0).unwrap();
    let (after, _, _) = fig.to_rgba();
    assert_eq!(before, after);
}

#[test]
fn test_plot_legend_draws_box_without_font() {
    let mut fig = chart();
    plot_route(&mut fig, 0, &diagonal_route(), route_colour(0).unwrap()).unwrap();

    let (before, _, _) = fig.to_rgba();
    plot_legend(&mut fig, 0).unwrap();
    let (after, _, _) = fig.to_rgba();
    // Swatches and the background box are drawn even with no font set
    assert_ne!(before, after);
}

#[test]
fn test_five_distinct_route_colours() {
    let mut seen = Vec::new();
    for i in 0..5 {
        let colour = route_colour(i).unwrap();
        assert!(!seen.contains(&colour), "palette entry {} repeats", i);
        seen.push(colour);
    }
    assert!(route_colour(5).is_err());
    assert!(route_colour(100).is_err());
}
