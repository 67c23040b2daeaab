//! Plotting session: figure registry, axis and legend state, and the
//! show pass that streams everything to the engine.
//!
//! A [`Session`] owns one [`CommandSink`] plus all per-session state the
//! engine mirrors. Nothing here is global; two sessions never share
//! figures, axes, or identifiers.
//!
//! # Workflow
//!
//! ```no_run
//! use plotpipe::{DataSeries, Figure, Session};
//!
//! # fn main() -> plotpipe::Result<()> {
//! let mut session = Session::gnuplot()?;
//!
//! let x: Vec<f64> = (0..100).map(f64::from).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
//! let id = session.add(Figure::line(DataSeries::from_xy(x, y)?))?;
//!
//! if let Some(figure) = session.figure_mut(id) {
//!     figure.set_title("sin(x)");
//! }
//! session.show()?;
//! session.close()?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::process::ExitStatus;

use crate::axis::{Axes, Axis};
use crate::figure::{Figure, PlotKind};
use crate::legend::{Legend, LegendPosition};
use crate::sink::{BufferSink, CommandSink, GnuplotProcess};
use crate::Result;

/// One plotting session over a command sink.
///
/// Figures live in an ordered registry keyed by the identifier `add`
/// hands out; a show pass walks the registry in registration order.
#[derive(Debug)]
pub struct Session<S: CommandSink> {
    sink: S,
    figures: BTreeMap<usize, Figure>,
    next_id: usize,
    axes: Axes,
    legend: Legend,
    plot_kind: PlotKind,
}

impl Session<GnuplotProcess> {
    /// Session over a freshly spawned `gnuplot` from the search path.
    pub fn gnuplot() -> Result<Self> {
        Self::new(GnuplotProcess::spawn()?)
    }

    /// Closes the engine's input and waits for it to exit.
    pub fn close(self) -> Result<ExitStatus> {
        self.sink.close()
    }
}

impl Session<BufferSink> {
    /// Session recording its protocol output in memory.
    pub fn buffered() -> Result<Self> {
        Self::new(BufferSink::new())
    }
}

impl<S: CommandSink> Session<S> {
    /// Wraps a sink and sends the engine its startup configuration.
    pub fn new(mut sink: S) -> Result<Self> {
        sink.send_line("unset colorbox")?;
        Ok(Self {
            sink,
            figures: BTreeMap::new(),
            next_id: 1,
            axes: Axes::new(),
            legend: Legend::new(),
            plot_kind: PlotKind::Plot,
        })
    }

    // ------------------------------------------------------------------
    // Figure registry
    // ------------------------------------------------------------------

    /// Registers a figure and returns its session-unique identifier.
    ///
    /// Identifiers start at 1 and keep counting across registry clears.
    /// A figure whose shape needs a one-off mode command gets that
    /// command sent here, once, at registration.
    pub fn add(&mut self, figure: Figure) -> Result<usize> {
        if let Some(setup) = figure.setup_command() {
            self.sink.send_line(setup)?;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.figures.insert(id, figure);
        Ok(id)
    }

    /// Registered figure by identifier.
    #[must_use]
    pub fn figure(&self, id: usize) -> Option<&Figure> {
        self.figures.get(&id)
    }

    /// Mutable access to a registered figure, for styling after `add`.
    #[must_use]
    pub fn figure_mut(&mut self, id: usize) -> Option<&mut Figure> {
        self.figures.get_mut(&id)
    }

    /// Number of registered figures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Sends the engine a full state reset and empties the registry.
    ///
    /// Axes return to their defaults; the legend and the plot kind keep
    /// their settings, and identifiers keep counting.
    pub fn clear(&mut self) -> Result<()> {
        self.sink.send_line("reset")?;
        self.figures.clear();
        self.axes = Axes::new();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Show pass
    // ------------------------------------------------------------------

    /// Streams every registered figure to the engine as one plot.
    ///
    /// Emits a single combined command line holding each figure's header
    /// fragment comma-joined in registration order, then each figure's
    /// data rows with their own terminator, in the same order. An empty
    /// registry emits nothing.
    ///
    /// Data rows are produced before the headers are rendered so that
    /// sample-transforming figures (histograms) see their style updated
    /// in the same pass.
    pub fn show(&mut self) -> Result<()> {
        if self.figures.is_empty() {
            return Ok(());
        }

        let mut blocks = Vec::with_capacity(self.figures.len());
        for figure in self.figures.values_mut() {
            blocks.push(figure.data_rows()?);
        }
        let headers = self
            .figures
            .values()
            .map(Figure::header_line)
            .collect::<Result<Vec<_>>>()?;

        let command = format!("\n{}{}", self.plot_kind.keyword(), headers.join(","));
        self.sink.send_line(&command)?;
        for block in &blocks {
            for row in block {
                self.sink.send_line(row)?;
            }
        }
        self.sink.flush()
    }

    /// Asks the engine to redraw the last plot.
    pub fn replot(&mut self) -> Result<()> {
        self.sink.send_line("replot")
    }

    /// Selects between 2D and 3D plotting for subsequent show passes.
    pub fn set_plot_kind(&mut self, kind: PlotKind) {
        self.plot_kind = kind;
    }

    /// Plot kind used by the next show pass.
    #[must_use]
    pub fn plot_kind(&self) -> PlotKind {
        self.plot_kind
    }

    // ------------------------------------------------------------------
    // Axes
    // ------------------------------------------------------------------

    /// Axis state the session currently mirrors to the engine.
    #[must_use]
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Sets the span of one axis and sends the range command.
    pub fn set_range(&mut self, axis: Axis, min: f64, max: f64) -> Result<()> {
        let command = self.axes.set_range(axis, min, max)?;
        self.sink.send_line(&command)
    }

    /// Replaces one axis's tick positions and sends the tick command.
    pub fn set_ticks(&mut self, axis: Axis, values: Vec<f64>) -> Result<()> {
        let command = self.axes.set_ticks(axis, values)?;
        self.sink.send_line(&command)
    }

    /// Ticks on an arithmetic grid from `start` to `stop` by `step`.
    pub fn set_ticks_by_step(
        &mut self,
        axis: Axis,
        start: f64,
        step: f64,
        stop: f64,
    ) -> Result<()> {
        let command = self.axes.set_ticks_by_step(axis, start, step, stop)?;
        self.sink.send_line(&command)
    }

    /// `count` evenly spaced ticks between `start` and `stop`.
    pub fn set_ticks_spaced(
        &mut self,
        axis: Axis,
        start: f64,
        stop: f64,
        count: usize,
    ) -> Result<()> {
        let command = self.axes.set_ticks_spaced(axis, start, stop, count)?;
        self.sink.send_line(&command)
    }

    /// Adds labeled ticks to one axis, one command per label.
    pub fn add_ticks(&mut self, axis: Axis, labeled: &[(&str, f64)]) -> Result<()> {
        for command in self.axes.add_ticks(axis, labeled) {
            self.sink.send_line(&command)?;
        }
        Ok(())
    }

    /// Blanks one axis's tick display format.
    pub fn remove_ticks(&mut self, axis: Axis) -> Result<()> {
        let command = self.axes.remove_ticks(axis);
        self.sink.send_line(&command)
    }

    /// Sets one axis's label text and rotation.
    pub fn set_label(&mut self, axis: Axis, text: &str, rotation: f64) -> Result<()> {
        let command = self.axes.set_label(axis, text, rotation);
        self.sink.send_line(&command)
    }

    // ------------------------------------------------------------------
    // Legend
    // ------------------------------------------------------------------

    /// Legend state of the session.
    #[must_use]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Anchors the legend and sends the key command.
    pub fn set_legend(&mut self, position: LegendPosition) -> Result<()> {
        let command = self.legend.set_position(position);
        self.sink.send_line(&command)
    }

    // ------------------------------------------------------------------
    // Auxiliary engine commands
    // ------------------------------------------------------------------

    /// Autoscales the named axes, e.g. `"xy"`.
    pub fn set_autoscale(&mut self, axes: &str) -> Result<()> {
        self.sink.send_line(&format!("set autoscale {axes}"))
    }

    /// Isoline density used when drawing surfaces.
    pub fn set_isolines(&mut self, count: u32) -> Result<()> {
        self.sink.send_line(&format!("set isosamples {count}"))
    }

    /// Hidden-surface removal for 3D plots.
    pub fn set_hidden_surface(&mut self) -> Result<()> {
        self.sink.send_line("set hidden3d")
    }

    /// Translucent solid fill style with the given alpha.
    pub fn set_fill_alpha(&mut self, alpha: f64) -> Result<()> {
        self.sink
            .send_line(&format!("set style fill transparent solid {alpha}"))
    }

    /// Sends one raw command line unchanged.
    pub fn send_raw(&mut self, command: &str) -> Result<()> {
        self.sink.send_line(command)
    }

    // ------------------------------------------------------------------
    // Sink access
    // ------------------------------------------------------------------

    /// The sink behind the session.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the session, handing back its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSeries;
    use crate::style::Color;

    fn xy(n: usize) -> DataSeries {
        let x: Vec<f64> = (0..n).map(|v| v as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
        DataSeries::from_xy(x, y).unwrap()
    }

    #[test]
    fn test_new_suppresses_colorbox() {
        let session = Session::buffered().unwrap();
        assert_eq!(session.sink().lines(), &["unset colorbox"]);
    }

    #[test]
    fn test_add_assigns_increasing_positive_ids() {
        let mut session = Session::buffered().unwrap();
        let first = session.add(Figure::scatter(xy(3))).unwrap();
        let second = session.add(Figure::line(xy(3))).unwrap();
        assert_eq!((first, second), (1, 2));
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut session = Session::buffered().unwrap();
        let first = session.add(Figure::scatter(xy(3))).unwrap();
        session.clear().unwrap();
        let second = session.add(Figure::scatter(xy(3))).unwrap();
        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn test_show_empty_registry_emits_nothing() {
        let mut session = Session::buffered().unwrap();
        session.show().unwrap();
        assert_eq!(session.sink().lines(), &["unset colorbox"]);
    }

    #[test]
    fn test_show_single_figure() {
        let mut session = Session::buffered().unwrap();
        session.add(Figure::scatter(xy(2))).unwrap();
        session.show().unwrap();

        let lines = session.sink().lines();
        assert_eq!(
            lines[1],
            "\nplot '-' u 1:2 with points ps 1 pt 7 lc rgb 'black' title '' "
        );
        assert_eq!(&lines[2..], &["0 0", "1 2", "e"]);
    }

    #[test]
    fn test_show_respects_plot_kind() {
        let x: Vec<f64> = (0..3).map(f64::from).collect();
        let series = DataSeries::from_xyz(x.clone(), x.clone(), x).unwrap();

        let mut session = Session::buffered().unwrap();
        session.set_plot_kind(PlotKind::Splot);
        session.add(Figure::line_3d(series)).unwrap();
        session.show().unwrap();

        assert!(session.sink().lines()[1].starts_with("\nsplot '-' u 1:2:3 with lines"));
    }

    #[test]
    fn test_boxplot_setup_sent_at_registration() {
        let mut session = Session::buffered().unwrap();
        session
            .add(Figure::boxplot(DataSeries::from_x(vec![1.0, 2.0])))
            .unwrap();
        assert_eq!(session.sink().lines()[1], "set style data boxplot");
    }

    #[test]
    fn test_clear_resets_axes_keeps_legend() {
        let mut session = Session::buffered().unwrap();
        session.set_range(Axis::X, 0.0, 9.0).unwrap();
        session.set_legend(LegendPosition::LeftBottom).unwrap();
        session.add(Figure::scatter(xy(2))).unwrap();

        session.clear().unwrap();

        assert!(session.is_empty());
        assert_eq!(session.axes().range(Axis::X).limits(), [-1.0, 1.0]);
        assert_eq!(session.legend().position(), LegendPosition::LeftBottom);
        assert_eq!(session.sink().lines().last().map(String::as_str), Some("reset"));
    }

    #[test]
    fn test_axis_commands_forwarded() {
        let mut session = Session::buffered().unwrap();
        session.set_range(Axis::Y, -2.0, 2.0).unwrap();
        session.set_ticks(Axis::X, vec![3.0, 1.0, 2.0]).unwrap();
        session.add_ticks(Axis::X, &[("pi", 3.14)]).unwrap();
        session.remove_ticks(Axis::Z).unwrap();
        session.set_label(Axis::Y, "Amplitude [mm]", 90.0).unwrap();

        let lines = session.sink().lines();
        assert_eq!(lines[1], "set yrange [-2:2]");
        assert_eq!(lines[2], "set xtics (1,2,3)");
        assert_eq!(lines[3], "set xtics add ('pi' 3.14)");
        assert_eq!(lines[4], "set ztics format ''");
        assert_eq!(lines[5], "set ylabel 'Amplitude [mm]' rotate by 90");
    }

    #[test]
    fn test_invalid_range_sends_nothing() {
        let mut session = Session::buffered().unwrap();
        assert!(session.set_range(Axis::X, 3.0, -3.0).is_err());
        assert_eq!(session.sink().lines(), &["unset colorbox"]);
    }

    #[test]
    fn test_figure_mut_restyles_registered_figure() {
        let mut session = Session::buffered().unwrap();
        let id = session.add(Figure::scatter(xy(2))).unwrap();
        session
            .figure_mut(id)
            .map(|figure| figure.set_color(Color::Red).set_title("doubling"))
            .unwrap();
        session.show().unwrap();

        let command = &session.sink().lines()[1];
        assert!(command.contains("lc rgb 'red'"));
        assert!(command.contains("title 'doubling'"));
    }

    #[test]
    fn test_auxiliary_commands() {
        let mut session = Session::buffered().unwrap();
        session.set_isolines(40).unwrap();
        session.set_hidden_surface().unwrap();
        session.set_fill_alpha(0.4).unwrap();
        session.set_autoscale("xy").unwrap();
        session.replot().unwrap();

        let lines = session.sink().lines();
        assert_eq!(lines[1], "set isosamples 40");
        assert_eq!(lines[2], "set hidden3d");
        assert_eq!(lines[3], "set style fill transparent solid 0.4");
        assert_eq!(lines[4], "set autoscale xy");
        assert_eq!(lines[5], "replot");
    }

    #[test]
    fn test_histogram_header_reflects_binned_width() {
        let samples: Vec<f64> = (0..16).map(f64::from).collect();
        let mut session = Session::buffered().unwrap();
        session.add(Figure::histogram(DataSeries::from_x(samples))).unwrap();
        session.show().unwrap();

        // 4 bins of width 3.75 leave a box width of 3.375 in the header.
        assert!(session.sink().lines()[1].contains("u 1:(3.375) smooth freq with boxes"));
    }
}
