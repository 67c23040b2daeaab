//! Minimal workflow: plot one sine line in a gnuplot window.
//!
//! Run with: cargo run --example getting_started

use plotpipe::prelude::*;

fn main() -> Result<()> {
    let mut session = Session::gnuplot()?;

    let x: Vec<f64> = (-100..101)
        .map(|i| f64::from(i) * 0.025 * std::f64::consts::PI)
        .collect();
    let sin_x: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    let id = session.add(Figure::line(DataSeries::from_xy(x, sin_x)?))?;
    if let Some(figure) = session.figure_mut(id) {
        figure.set_title("First example: sin(x)");
    }

    session.show()?;

    // Keep the window open until it is closed by hand.
    session.send_raw("pause mouse close")?;
    session.close()?;
    Ok(())
}
