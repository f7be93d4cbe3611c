//! Wind barb overlay tests.

use std::f64::consts::PI;

use route_common::{BoundingBox, Grid2, WindField};
use renderer::barbs::uv_to_speed_direction;
use renderer::{plot_barbs, BarbPreprocess, BarbStyle, ChartOptions, MapFigure};

// ============================================================================
// uv_to_speed_direction
//
// Directions use mathematical angle convention (counterclockwise from +X);
// U/V follow meteorological convention (U > 0 blows eastward).
// ============================================================================

#[test]
fn test_uv_calm_wind() {
    let (speed, _) = uv_to_speed_direction(0.0, 0.0);
    assert!(speed < 0.001);
}

#[test]
fn test_uv_speed_3_4_5() {
    for (u, v) in [(3.0, 4.0), (3.0, -4.0), (-3.0, 4.0), (-3.0, -4.0)] {
        let (speed, _) = uv_to_speed_direction(u, v);
        assert!((speed - 5.0).abs() < 0.01);
    }
}

#[test]
fn test_uv_cardinal_directions() {
    // Wind FROM north
    let (_, dir) = uv_to_speed_direction(0.0, -10.0);
    assert!((dir - PI / 2.0).abs() < 0.01);
    // Wind FROM east
    let (_, dir) = uv_to_speed_direction(-10.0, 0.0);
    assert!(dir.abs() < 0.01);
    // Wind FROM south
    let (_, dir) = uv_to_speed_direction(0.0, 10.0);
    assert!((dir - 3.0 * PI / 2.0).abs() < 0.01);
    // Wind FROM west
    let (_, dir) = uv_to_speed_direction(10.0, 0.0);
    assert!((dir - PI).abs() < 0.01);
}

// ============================================================================
// plot_barbs
// ============================================================================

fn chart() -> MapFigure {
    MapFigure::new_chart(
        BoundingBox::new(-10.0, 40.0, 10.0, 60.0),
        96,
        &ChartOptions::default(),
    )
    .unwrap()
}

fn uniform_wind(rows: usize, cols: usize, u: f64, v: f64) -> WindField {
    WindField::new(
        Grid2::filled(rows, cols, u),
        Grid2::filled(rows, cols, v),
        Grid2::from_fn(rows, cols, |r, _| 41.0 + 18.0 * r as f64 / rows.max(2) as f64),
        Grid2::from_fn(rows, cols, |_, c| -9.0 + 18.0 * c as f64 / cols.max(2) as f64),
    )
    .unwrap()
}

#[test]
fn test_plot_barbs_draws_glyphs() {
    let mut fig = chart();
    let wind = uniform_wind(6, 6, 12.0, 5.0);

    let (before, _, _) = fig.to_rgba();
    plot_barbs(
        &mut fig,
        0,
        &wind,
        &BarbPreprocess::none(),
        &BarbStyle::default(),
    )
    .unwrap();
    let (after, _, _) = fig.to_rgba();
    assert_ne!(before, after);
}

#[test]
fn test_plot_barbs_skips_nan_cells() {
    let mut fig = chart();
    let wind = uniform_wind(4, 4, f64::NAN, f64::NAN);
    // All-NaN wind renders nothing but is not an error
    let (before, _, _) = fig.to_rgba();
    plot_barbs(
        &mut fig,
        0,
        &wind,
        &BarbPreprocess::none(),
        &BarbStyle::default(),
    )
    .unwrap();
    let (after, _, _) = fig.to_rgba();
    assert_eq!(before, after);
}

#[test]
fn test_plot_barbs_cmems_preprocessing() {
    let mut fig = chart();
    // 11 rows -> 10 after the duplicated-row drop, divisible by 5; 22 cols
    // divisible by 11
    let wind = uniform_wind(11, 22, 8.0, 0.0);
    plot_barbs(
        &mut fig,
        0,
        &wind,
        &BarbPreprocess::cmems(),
        &BarbStyle::default(),
    )
    .unwrap();
}

#[test]
fn test_plot_barbs_rebin_mismatch_errors() {
    let mut fig = chart();
    // 10 columns are not divisible by the CMEMS rebin factor of 11
    let wind = uniform_wind(11, 10, 8.0, 0.0);
    let err = plot_barbs(
        &mut fig,
        0,
        &wind,
        &BarbPreprocess::cmems(),
        &BarbStyle::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("rebin factor"));
}

#[test]
fn test_plot_barbs_bad_panel_errors() {
    let mut fig = chart();
    let wind = uniform_wind(4, 4, 5.0, 5.0);
    assert!(plot_barbs(
        &mut fig,
        3,
        &wind,
        &BarbPreprocess::none(),
        &BarbStyle::default(),
    )
    .is_err());
}
