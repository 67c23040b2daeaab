//! Styling several figures on one plot: colors, dashes, markers, widths.
//!
//! Run with: cargo run --example figure_styles

use plotpipe::prelude::*;

fn main() -> Result<()> {
    let mut session = Session::gnuplot()?;

    let x: Vec<f64> = (-100..101)
        .map(|i| f64::from(i) * 0.025 * std::f64::consts::PI)
        .collect();
    let ones: Vec<f64> = x.iter().map(|_| 1.0).collect();
    let sin_x: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let cos_x: Vec<f64> = x.iter().map(|v| v.cos()).collect();

    let flat = session.add(Figure::line(DataSeries::from_xy(x.clone(), ones)?))?;
    if let Some(figure) = session.figure_mut(flat) {
        figure.set_title("y=1");
    }

    let diagonal = session.add(Figure::line(DataSeries::from_xy(x.clone(), x.clone())?))?;
    if let Some(figure) = session.figure_mut(diagonal) {
        figure
            .set_title("y=x")
            .set_color(Color::Red)
            .set_dash(DashStyle::SmallDash)
            .set_width(4.0);
    }

    let sine = session.add(Figure::line(DataSeries::from_xy(x.clone(), sin_x)?))?;
    if let Some(figure) = session.figure_mut(sine) {
        figure
            .set_title("y=sin(x)")
            .set_color(Color::SteelBlue)
            .set_dash(DashStyle::DashDotted)
            .set_width(2.0);
    }

    let cosine = session.add(Figure::scatter(DataSeries::from_xy(x, cos_x)?))?;
    if let Some(figure) = session.figure_mut(cosine) {
        figure
            .set_title("y=cos(x)")
            .set_color(Color::Orange)
            .set_marker(Marker::BlankCircle)
            .set_size(1.5);
    }

    session.set_range(Axis::Y, -1.5, 1.5)?;
    session.show()?;

    session.send_raw("pause mouse close")?;
    session.close()?;
    Ok(())
}
