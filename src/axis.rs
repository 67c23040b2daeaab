//! Axis configuration: ranges, tick marks, and labels.
//!
//! Each of the three axes carries an [`AxisRange`], an [`AxisTicks`] set,
//! and an [`AxisLabel`], grouped under [`Axes`]. Setters mutate the stored
//! model and hand back the `set` command that brings the engine in line
//! with it; the caller decides when to forward those commands to a sink.

use crate::error::{Error, Result};

/// Absorbs float rounding so a stop value that lands on the step grid is
/// still included in generated tick sequences.
const GRID_EPSILON: f64 = 1e-9;

/// Tick values every axis starts with.
const DEFAULT_TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

// ============================================================================
// Axis selector
// ============================================================================

/// One of the three plot axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Horizontal axis.
    #[default]
    X,
    /// Vertical axis.
    Y,
    /// Depth axis, used by 3D plots.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Lowercase axis letter used in `set` commands.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            _ => Err(Error::InvalidAxis { index }),
        }
    }
}

// ============================================================================
// Range
// ============================================================================

/// Numeric span of one axis. The minimum stays strictly below the maximum.
#[derive(Debug, Clone)]
pub struct AxisRange {
    axis: Axis,
    limits: [f64; 2],
}

impl AxisRange {
    /// Range of `[-1, 1]` on the given axis.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            limits: [-1.0, 1.0],
        }
    }

    /// Range with explicit limits, rejecting `min >= max`.
    pub fn with_limits(axis: Axis, min: f64, max: f64) -> Result<Self> {
        let mut range = Self::new(axis);
        range.set_range(min, max)?;
        Ok(range)
    }

    /// Stored `[min, max]` pair.
    #[must_use]
    pub fn limits(&self) -> [f64; 2] {
        self.limits
    }

    /// Stores a new span and returns the matching range command.
    ///
    /// A minimum at or above the maximum leaves the stored span untouched
    /// and fails with [`Error::InvalidRange`].
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<String> {
        if min >= max {
            return Err(Error::InvalidRange { min, max });
        }
        self.limits = [min, max];
        Ok(self.command())
    }

    /// Range command for the stored span.
    #[must_use]
    pub fn command(&self) -> String {
        format!(
            "set {}range [{}:{}]",
            self.axis.name(),
            self.limits[0],
            self.limits[1]
        )
    }
}

// ============================================================================
// Ticks
// ============================================================================

/// Tick positions of one axis, kept sorted ascending.
///
/// Values may repeat; nothing deduplicates ticks placed on the same
/// position.
#[derive(Debug, Clone)]
pub struct AxisTicks {
    axis: Axis,
    values: Vec<f64>,
}

impl AxisTicks {
    /// Default symmetric ticks `[-1, -0.5, 0, 0.5, 1]`.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            values: DEFAULT_TICKS.to_vec(),
        }
    }

    /// Ticks with explicit positions, rejecting an empty set.
    pub fn with_values(axis: Axis, values: Vec<f64>) -> Result<Self> {
        let mut ticks = Self::new(axis);
        ticks.set_ticks(values)?;
        Ok(ticks)
    }

    /// Stored positions, sorted ascending.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Replaces the stored positions and returns the tick command.
    ///
    /// Input order does not matter; positions are sorted before they are
    /// stored or rendered. An empty input leaves the stored set untouched
    /// and fails with [`Error::EmptyTicks`].
    pub fn set_ticks(&mut self, mut values: Vec<f64>) -> Result<String> {
        if values.is_empty() {
            return Err(Error::EmptyTicks);
        }
        values.sort_by(f64::total_cmp);
        self.values = values;
        Ok(self.command())
    }

    /// Ticks on an arithmetic grid from `start` to `stop` by `step`.
    pub fn set_ticks_by_step(&mut self, start: f64, step: f64, stop: f64) -> Result<String> {
        self.set_ticks(linear_range(start, step, stop))
    }

    /// `count` evenly spaced ticks between `start` and `stop` inclusive.
    pub fn set_ticks_spaced(&mut self, start: f64, stop: f64, count: usize) -> Result<String> {
        self.set_ticks(linear_spaced(start, stop, count))
    }

    /// Appends labeled positions and returns one `add` command per entry.
    ///
    /// Commands come back in input order; the stored set re-sorts after
    /// the merge.
    pub fn add_ticks(&mut self, labeled: &[(&str, f64)]) -> Vec<String> {
        let commands = labeled
            .iter()
            .map(|(label, value)| {
                self.values.push(*value);
                format!("set {}tics add ('{}' {})", self.axis.name(), label, value)
            })
            .collect();
        self.values.sort_by(f64::total_cmp);
        commands
    }

    /// Command blanking the tick display format. Stored positions remain.
    #[must_use]
    pub fn remove_command(&self) -> String {
        format!("set {}tics format ''", self.axis.name())
    }

    /// Tick command listing every stored position.
    #[must_use]
    pub fn command(&self) -> String {
        let joined = self
            .values
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("set {}tics ({})", self.axis.name(), joined)
    }
}

/// Arithmetic progression from `start` to `stop` inclusive by `step`.
///
/// Returns an empty sequence when the step cannot reach the stop, which
/// the tick setter then rejects.
fn linear_range(start: f64, step: f64, stop: f64) -> Vec<f64> {
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let span = (stop - start) / step;
    if span < 0.0 {
        return Vec::new();
    }
    let count = (span + GRID_EPSILON) as usize;
    (0..=count).map(|i| start + step * i as f64).collect()
}

/// `count` evenly spaced values from `start` to `stop` inclusive.
fn linear_spaced(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![stop],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

// ============================================================================
// Label
// ============================================================================

/// Text label of one axis with its rotation in degrees.
///
/// The Y axis starts at 90 degrees so its label runs along the axis; the
/// others start unrotated.
#[derive(Debug, Clone)]
pub struct AxisLabel {
    axis: Axis,
    text: String,
    rotation: f64,
}

impl AxisLabel {
    /// Empty label with the axis-appropriate default rotation.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        let rotation = match axis {
            Axis::Y => 90.0,
            Axis::X | Axis::Z => 0.0,
        };
        Self {
            axis,
            text: String::new(),
            rotation,
        }
    }

    /// Stored label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stored rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Stores text and rotation, returning the label command.
    pub fn set_label(&mut self, text: impl Into<String>, rotation: f64) -> String {
        self.text = text.into();
        self.rotation = rotation;
        self.command()
    }

    /// Label command for the stored text and rotation.
    #[must_use]
    pub fn command(&self) -> String {
        format!(
            "set {}label '{}' rotate by {}",
            self.axis.name(),
            self.text,
            self.rotation
        )
    }
}

// ============================================================================
// Axes aggregate
// ============================================================================

/// Range, ticks, and label for all three axes.
#[derive(Debug, Clone)]
pub struct Axes {
    ranges: [AxisRange; 3],
    ticks: [AxisTicks; 3],
    labels: [AxisLabel; 3],
}

impl Axes {
    /// All three axes at their defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ranges: Axis::ALL.map(AxisRange::new),
            ticks: Axis::ALL.map(AxisTicks::new),
            labels: Axis::ALL.map(AxisLabel::new),
        }
    }

    /// Range model of one axis.
    #[must_use]
    pub fn range(&self, axis: Axis) -> &AxisRange {
        &self.ranges[axis.index()]
    }

    /// Tick model of one axis.
    #[must_use]
    pub fn ticks(&self, axis: Axis) -> &AxisTicks {
        &self.ticks[axis.index()]
    }

    /// Label model of one axis.
    #[must_use]
    pub fn label(&self, axis: Axis) -> &AxisLabel {
        &self.labels[axis.index()]
    }

    /// Sets the span of one axis. See [`AxisRange::set_range`].
    pub fn set_range(&mut self, axis: Axis, min: f64, max: f64) -> Result<String> {
        self.ranges[axis.index()].set_range(min, max)
    }

    /// Replaces the tick positions of one axis. See [`AxisTicks::set_ticks`].
    pub fn set_ticks(&mut self, axis: Axis, values: Vec<f64>) -> Result<String> {
        self.ticks[axis.index()].set_ticks(values)
    }

    /// Ticks on an arithmetic grid. See [`AxisTicks::set_ticks_by_step`].
    pub fn set_ticks_by_step(
        &mut self,
        axis: Axis,
        start: f64,
        step: f64,
        stop: f64,
    ) -> Result<String> {
        self.ticks[axis.index()].set_ticks_by_step(start, step, stop)
    }

    /// Evenly spaced ticks. See [`AxisTicks::set_ticks_spaced`].
    pub fn set_ticks_spaced(
        &mut self,
        axis: Axis,
        start: f64,
        stop: f64,
        count: usize,
    ) -> Result<String> {
        self.ticks[axis.index()].set_ticks_spaced(start, stop, count)
    }

    /// Appends labeled ticks to one axis. See [`AxisTicks::add_ticks`].
    pub fn add_ticks(&mut self, axis: Axis, labeled: &[(&str, f64)]) -> Vec<String> {
        self.ticks[axis.index()].add_ticks(labeled)
    }

    /// Command blanking one axis's tick display format.
    #[must_use]
    pub fn remove_ticks(&self, axis: Axis) -> String {
        self.ticks[axis.index()].remove_command()
    }

    /// Sets the label of one axis. See [`AxisLabel::set_label`].
    pub fn set_label(&mut self, axis: Axis, text: impl Into<String>, rotation: f64) -> String {
        self.labels[axis.index()].set_label(text, rotation)
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_names() {
        assert_eq!(Axis::X.name(), "x");
        assert_eq!(Axis::Y.name(), "y");
        assert_eq!(Axis::Z.name(), "z");
    }

    #[test]
    fn test_axis_from_index() {
        assert_eq!(Axis::try_from(0).unwrap(), Axis::X);
        assert_eq!(Axis::try_from(1).unwrap(), Axis::Y);
        assert_eq!(Axis::try_from(2).unwrap(), Axis::Z);

        let err = Axis::try_from(3).unwrap_err();
        assert_eq!(err.to_string(), "no axis with index 3 (expected 0..=2)");
    }

    #[test]
    fn test_range_default() {
        let range = AxisRange::new(Axis::X);
        assert_eq!(range.limits(), [-1.0, 1.0]);
    }

    #[test]
    fn test_range_with_limits() {
        let range = AxisRange::with_limits(Axis::Z, -5.0, 5.0).unwrap();
        assert_eq!(range.limits(), [-5.0, 5.0]);
    }

    #[test]
    fn test_set_range_command() {
        let mut range = AxisRange::new(Axis::Z);
        let command = range.set_range(-10.0, 10.0).unwrap();
        assert_eq!(command, "set zrange [-10:10]");
    }

    #[test]
    fn test_set_range_rejects_inverted() {
        let mut range = AxisRange::new(Axis::X);
        let err = range.set_range(10.0, -10.0).unwrap_err();
        assert_eq!(err.to_string(), "10 is not lower than -10");
        assert_eq!(range.limits(), [-1.0, 1.0]);
    }

    #[test]
    fn test_set_range_rejects_degenerate() {
        let mut range = AxisRange::new(Axis::X);
        assert!(range.set_range(5.0, 5.0).is_err());
        assert_eq!(range.limits(), [-1.0, 1.0]);
    }

    #[test]
    fn test_ticks_default() {
        let ticks = AxisTicks::new(Axis::X);
        assert_eq!(ticks.values(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_set_ticks_sorts_input() {
        let mut ticks = AxisTicks::new(Axis::Z);
        let command = ticks
            .set_ticks(vec![5.0, 4.0, 0.0, 2.0, 1.0, 3.0])
            .unwrap();
        assert_eq!(command, "set ztics (0,1,2,3,4,5)");
        assert_eq!(ticks.values(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_set_ticks_rejects_empty() {
        let mut ticks = AxisTicks::new(Axis::X);
        let err = ticks.set_ticks(Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "tick values cannot be empty");
        assert_eq!(ticks.values(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_ticks_by_step() {
        let mut ticks = AxisTicks::new(Axis::X);
        let command = ticks.set_ticks_by_step(-2.0, 0.5, 2.0).unwrap();
        assert_eq!(command, "set xtics (-2,-1.5,-1,-0.5,0,0.5,1,1.5,2)");
        assert_eq!(ticks.values().len(), 9);
    }

    #[test]
    fn test_ticks_spaced() {
        let mut ticks = AxisTicks::new(Axis::Y);
        let command = ticks.set_ticks_spaced(-2.0, 2.0, 5).unwrap();
        assert_eq!(command, "set ytics (-2,-1,0,1,2)");

        ticks.set_ticks_spaced(-2.0, 2.0, 11).unwrap();
        assert_eq!(ticks.values().len(), 11);
        assert_eq!(ticks.values()[0], -2.0);
        assert_eq!(ticks.values()[10], 2.0);
    }

    #[test]
    fn test_ticks_generators_reject_empty_sequences() {
        let mut ticks = AxisTicks::new(Axis::X);
        assert!(ticks.set_ticks_by_step(0.0, 0.0, 1.0).is_err());
        assert!(ticks.set_ticks_by_step(0.0, 1.0, -1.0).is_err());
        assert!(ticks.set_ticks_spaced(0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_add_ticks_single() {
        let mut ticks =
            AxisTicks::with_values(Axis::Z, linear_range(-2.0, 0.5, 2.0)).unwrap();
        let commands = ticks.add_ticks(&[("pi", 3.14)]);

        assert_eq!(commands, vec!["set ztics add ('pi' 3.14)".to_owned()]);
        assert_eq!(
            ticks.values(),
            &[-2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 3.14]
        );
    }

    #[test]
    fn test_add_ticks_multiple() {
        let mut ticks =
            AxisTicks::with_values(Axis::Z, linear_range(-2.0, 0.5, 2.0)).unwrap();
        let commands = ticks.add_ticks(&[("pi", 3.14), ("phi", 1.618), ("-e", -2.71)]);

        assert_eq!(
            commands,
            vec![
                "set ztics add ('pi' 3.14)".to_owned(),
                "set ztics add ('phi' 1.618)".to_owned(),
                "set ztics add ('-e' -2.71)".to_owned(),
            ]
        );
        assert_eq!(
            ticks.values(),
            &[-2.71, -2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 1.618, 2.0, 3.14]
        );
    }

    #[test]
    fn test_add_ticks_keeps_duplicates() {
        let mut ticks = AxisTicks::with_values(Axis::X, vec![0.0, 1.0]).unwrap();
        ticks.add_ticks(&[("one", 1.0)]);
        assert_eq!(ticks.values(), &[0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_remove_ticks_keeps_values() {
        let ticks = AxisTicks::new(Axis::X);
        assert_eq!(ticks.remove_command(), "set xtics format ''");
        assert_eq!(ticks.values().len(), 5);
    }

    #[test]
    fn test_label_defaults() {
        assert_eq!(AxisLabel::new(Axis::X).rotation(), 0.0);
        assert_eq!(AxisLabel::new(Axis::Y).rotation(), 90.0);
        assert_eq!(AxisLabel::new(Axis::Z).rotation(), 0.0);
        assert_eq!(AxisLabel::new(Axis::X).text(), "");
    }

    #[test]
    fn test_set_label_command() {
        let mut label = AxisLabel::new(Axis::Z);
        let command = label.set_label("NewLabel", 45.0);
        assert_eq!(command, "set zlabel 'NewLabel' rotate by 45");
        assert_eq!(label.text(), "NewLabel");
        assert_eq!(label.rotation(), 45.0);
    }

    #[test]
    fn test_axes_dispatch() {
        let mut axes = Axes::new();
        assert_eq!(
            axes.set_range(Axis::Y, 0.0, 4.0).unwrap(),
            "set yrange [0:4]"
        );
        assert_eq!(
            axes.set_label(Axis::X, "time [s]", 0.0),
            "set xlabel 'time [s]' rotate by 0"
        );
        assert_eq!(axes.remove_ticks(Axis::X), "set xtics format ''");
        assert_eq!(axes.range(Axis::Y).limits(), [0.0, 4.0]);
        assert_eq!(axes.range(Axis::X).limits(), [-1.0, 1.0]);
    }
}
