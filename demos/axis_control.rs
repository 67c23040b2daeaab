//! Axis configuration across three plots: ranges, tick grids, labeled
//! ticks, labels, and a 3D pass.
//!
//! Run with: cargo run --example axis_control

use std::f64::consts::{E, PI};

use plotpipe::prelude::*;

fn main() -> Result<()> {
    let mut session = Session::gnuplot()?;

    let x: Vec<f64> = (-100..101).map(|i| f64::from(i) * 0.025 * PI).collect();
    let sin_x: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    // First plot: explicit range, stepped tick grid, axis labels.
    let id = session.add(Figure::line(DataSeries::from_xy(x.clone(), sin_x.clone())?))?;
    if let Some(figure) = session.figure_mut(id) {
        figure.set_title("sin(x)");
    }
    session.set_range(Axis::Y, -2.0, 2.0)?;
    session.set_ticks_by_step(Axis::X, -4.0, 0.5, 4.0)?;
    session.set_label(Axis::X, "time [s]", 0.0)?;
    session.set_label(Axis::Y, "Amplitude [mm]", 90.0)?;
    session.show()?;
    session.send_raw("pause mouse close")?;

    // Second plot: labeled tick annotations on both axes.
    session.clear()?;
    let id = session.add(Figure::line(DataSeries::from_xy(x.clone(), sin_x.clone())?))?;
    if let Some(figure) = session.figure_mut(id) {
        figure.set_title("sin(x)");
    }
    session.set_range(Axis::X, 0.0, 8.0)?;
    session.add_ticks(Axis::X, &[("pi", PI), ("e", E)])?;
    session.set_ticks(
        Axis::Y,
        vec![-4.0, -2.0, -1.0, -0.5, -0.25, 0.0, 0.25, 0.5, 1.0, 2.0, 4.0],
    )?;
    session.add_ticks(Axis::Y, &[("-pi", -PI), ("-e", -E)])?;
    session.show()?;
    session.send_raw("pause mouse close")?;

    // Third plot: 3D line with per-axis tick control.
    session.clear()?;
    session.set_plot_kind(PlotKind::Splot);
    session.add(Figure::line_3d(DataSeries::from_xyz(
        x,
        sin_x.clone(),
        sin_x,
    )?))?;
    session.remove_ticks(Axis::X)?;
    session.set_ticks_spaced(Axis::Y, -2.0, 2.0, 11)?;
    session.set_range(Axis::Z, -1.0, 1.0)?;
    session.set_label(Axis::Z, "z", 45.0)?;
    session.add_ticks(Axis::Z, &[("min", -0.75), ("max", 0.75)])?;
    session.show()?;
    session.send_raw("pause mouse close")?;

    session.close()?;
    Ok(())
}
