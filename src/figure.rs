//! Figure definitions and their gnuplot rendering.
//!
//! A [`Figure`] pairs a [`DataSeries`] with a [`Style`] and a [`Shape`] tag
//! that selects the gnuplot drawing mode. Every figure renders to three
//! pieces of protocol text:
//!
//! - an options fragment (`u 1:2 with points ps 1 pt 7 lc rgb 'black'`),
//! - a header line embedding the inline-data initializer and the title,
//! - the data rows that follow the combined plot command.
//!
//! Shapes are a closed enum rather than an open trait object. Adding a
//! drawing mode means adding a variant here and a template arm below, which
//! keeps every protocol string in one place.

use crate::data::{DataSeries, TERMINATOR};
use crate::error::{Error, Result};
use crate::style::{Color, DashStyle, Marker, Style};

/// Inline-data initializer telling gnuplot the rows follow the command.
const PLOT_INIT: &str = " '-' ";

/// Upper bound on histogram bin count regardless of sample size.
const MAX_BINS: f64 = 100.0;

// ============================================================================
// Plot Kind
// ============================================================================

/// Top-level gnuplot command a figure is drawn under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    /// 2D plotting via the `plot` command.
    #[default]
    Plot,
    /// 3D plotting via the `splot` command.
    Splot,
}

impl PlotKind {
    /// Command keyword emitted at the start of a combined plot line.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Plot => "plot",
            Self::Splot => "splot",
        }
    }
}

// ============================================================================
// Shape
// ============================================================================

/// Drawing mode of a figure.
///
/// Each variant maps to one gnuplot `with` style and a fixed set of
/// style fields that participate in its options fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Markers at each point.
    Scatter,
    /// A polyline through the points.
    Line,
    /// A polyline with markers at each vertex.
    LinePoints,
    /// The region between two curves, filled.
    FilledCurve,
    /// Points with vertical error bars.
    YErrorBars,
    /// Vertical sticks from the baseline to each point.
    Impulses,
    /// Boxes of fixed width centered on each x position.
    Bars,
    /// Arrows from (x, y) along (dx, dy).
    VectorField,
    /// A symbolic expression evaluated by gnuplot itself.
    Function,
    /// Frequency histogram binned from raw samples.
    Histogram,
    /// Box-and-whisker summary of raw samples.
    Boxplot,
}

impl Shape {
    /// The `with` clause this shape draws under, when it has one.
    ///
    /// `Function` relies on gnuplot's default style and `Boxplot` is
    /// configured through `set style data`, so neither carries a clause.
    #[must_use]
    pub fn with_clause(self) -> Option<&'static str> {
        match self {
            Self::Scatter => Some("with points"),
            Self::Line => Some("with lines"),
            Self::LinePoints => Some("with linespoints"),
            Self::FilledCurve => Some("with filledcurve"),
            Self::YErrorBars => Some("with yerr"),
            Self::Impulses => Some("with impulses"),
            Self::Bars | Self::Histogram => Some("with boxes"),
            Self::VectorField => Some("with vector"),
            Self::Function | Self::Boxplot => None,
        }
    }

    /// Fewest data columns the shape can be drawn from.
    fn min_columns(self) -> usize {
        match self {
            Self::Function => 0,
            Self::Histogram | Self::Boxplot => 1,
            Self::Scatter | Self::Line | Self::LinePoints | Self::Impulses | Self::Bars => 2,
            Self::FilledCurve | Self::YErrorBars => 3,
            Self::VectorField => 4,
        }
    }

    /// Whether the shape consumes raw samples rather than coordinates.
    fn takes_samples(self) -> bool {
        matches!(self, Self::Histogram | Self::Boxplot)
    }
}

// ============================================================================
// Figure
// ============================================================================

/// One renderable element of a plot: data, style, and drawing mode.
#[derive(Debug, Clone)]
pub struct Figure {
    series: Option<DataSeries>,
    style: Style,
    shape: Shape,
    kind: PlotKind,
}

impl Figure {
    fn new(series: Option<DataSeries>, shape: Shape, kind: PlotKind) -> Self {
        Self {
            series,
            style: Style::new(),
            shape,
            kind,
        }
    }

    /// 2D scatter of markers.
    #[must_use]
    pub fn scatter(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::Scatter, PlotKind::Plot)
    }

    /// 3D scatter of markers. Requires at least three columns.
    #[must_use]
    pub fn scatter_3d(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::Scatter, PlotKind::Splot)
    }

    /// 2D polyline.
    #[must_use]
    pub fn line(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::Line, PlotKind::Plot)
    }

    /// 3D polyline. Requires at least three columns.
    #[must_use]
    pub fn line_3d(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::Line, PlotKind::Splot)
    }

    /// 2D polyline with markers.
    #[must_use]
    pub fn line_points(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::LinePoints, PlotKind::Plot)
    }

    /// 3D polyline with markers. Requires at least three columns.
    #[must_use]
    pub fn line_points_3d(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::LinePoints, PlotKind::Splot)
    }

    /// Filled band between `y1` and `y2` over `x`. Requires three columns.
    #[must_use]
    pub fn filled_curve(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::FilledCurve, PlotKind::Plot)
    }

    /// Points with vertical error bars from `(x, y, dy)` columns.
    #[must_use]
    pub fn y_error_bars(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::YErrorBars, PlotKind::Plot)
    }

    /// Vertical sticks from the y baseline to each point.
    #[must_use]
    pub fn impulses(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::Impulses, PlotKind::Plot)
    }

    /// Boxes of the style's width centered on each x position.
    #[must_use]
    pub fn bars(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::Bars, PlotKind::Plot)
    }

    /// Arrow field from `(x, y, dx, dy)` columns. Requires four columns.
    #[must_use]
    pub fn vector_field(series: DataSeries) -> Self {
        Self::new(Some(series), Shape::VectorField, PlotKind::Plot)
    }

    /// Symbolic expression drawn by gnuplot, e.g. `sin(x)/x`.
    ///
    /// Carries no data rows of its own and skips the inline-data
    /// initializer in its header.
    #[must_use]
    pub fn function(expression: impl Into<String>) -> Self {
        let mut figure = Self::new(None, Shape::Function, PlotKind::Plot);
        figure.style.function = expression.into();
        figure
    }

    /// Frequency histogram binned from a single column of samples.
    ///
    /// Binning happens when the data rows are produced, and it overwrites
    /// the style width with the box width derived from the samples.
    #[must_use]
    pub fn histogram(samples: DataSeries) -> Self {
        Self::new(Some(samples), Shape::Histogram, PlotKind::Plot)
    }

    /// Box-and-whisker figure over a single column of samples.
    #[must_use]
    pub fn boxplot(samples: DataSeries) -> Self {
        Self::new(Some(samples), Shape::Boxplot, PlotKind::Plot)
    }

    // ------------------------------------------------------------------
    // Style setters
    // ------------------------------------------------------------------

    /// Sets the marker size used by point-drawing shapes.
    pub fn set_size(&mut self, size: f64) -> &mut Self {
        self.style.size = size;
        self
    }

    /// Sets the drawing color.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.style.color = color;
        self
    }

    /// Sets the line width, or the box width for bar-like shapes.
    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.style.width = width;
        self
    }

    /// Sets the dash pattern used by line-drawing shapes.
    pub fn set_dash(&mut self, dash: DashStyle) -> &mut Self {
        self.style.dash = dash;
        self
    }

    /// Sets the point marker used by point-drawing shapes.
    pub fn set_marker(&mut self, marker: Marker) -> &mut Self {
        self.style.marker = marker;
        self
    }

    /// Sets the legend title. Empty titles still occupy a legend slot.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.style.title = title.into();
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current style of the figure.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Drawing mode tag.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Plot command this figure belongs under.
    #[must_use]
    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    /// Series length, zero for function figures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.as_ref().map_or(0, DataSeries::len)
    }

    /// Whether the figure carries no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Columns the figure must find in its series before rendering.
    ///
    /// 3D-tagged figures always read at least three columns, whatever
    /// their shape's own floor is.
    fn required_columns(&self) -> usize {
        let base = self.shape.min_columns();
        match self.kind {
            PlotKind::Plot => base,
            PlotKind::Splot => base.max(3),
        }
    }

    /// Validated access to the series behind a data-carrying shape.
    fn checked_series(&self) -> Result<&DataSeries> {
        let required = self.required_columns();
        let series = self.series.as_ref().ok_or(Error::DimensionMismatch {
            required,
            actual: 0,
        })?;
        let actual = series.dims();
        let exact = self.shape.takes_samples();
        if actual < required || (exact && actual != required) {
            return Err(Error::DimensionMismatch { required, actual });
        }
        Ok(series)
    }

    /// The per-figure options fragment of the combined plot command.
    ///
    /// This is everything between the inline-data initializer and the
    /// title clause: column selection, the `with` style, and the style
    /// fields the shape consumes.
    pub fn options_fragment(&self) -> Result<String> {
        if self.shape == Shape::Function {
            return Ok(format!(
                " {} {}",
                self.style.function,
                self.style.color_fragment()
            ));
        }

        let descriptor = self.checked_series()?.column_descriptor();
        let style = &self.style;
        let fragment = match self.shape {
            Shape::Scatter => format!(
                "u {} with points {} {} {}",
                descriptor,
                style.size_fragment(),
                style.marker_fragment(),
                style.color_fragment()
            ),
            Shape::Line => format!(
                "u {} with lines {} {} {}",
                descriptor,
                style.width_fragment(),
                style.dash_fragment(),
                style.color_fragment()
            ),
            Shape::LinePoints => format!(
                "u {} with linespoints {} {} {} {} {}",
                descriptor,
                style.width_fragment(),
                style.dash_fragment(),
                style.size_fragment(),
                style.marker_fragment(),
                style.color_fragment()
            ),
            Shape::FilledCurve => format!(
                "u 1:2:3 with filledcurve {} {} {}",
                style.width_fragment(),
                style.dash_fragment(),
                style.color_fragment()
            ),
            Shape::YErrorBars => format!(
                "u 1:2:3 with yerr {} {} {}",
                style.size_fragment(),
                style.marker_fragment(),
                style.color_fragment()
            ),
            Shape::Impulses => format!(
                "u {} with impulses {} {} {}",
                descriptor,
                style.width_fragment(),
                style.dash_fragment(),
                style.color_fragment()
            ),
            Shape::Bars => format!(
                "u 1:2:({}) with boxes {}",
                style.width,
                style.color_fragment()
            ),
            Shape::VectorField => format!(
                "u 1:2:3:4 with vector {} {}",
                style.width_fragment(),
                style.color_fragment()
            ),
            Shape::Histogram => format!(
                "u 1:({}) smooth freq with boxes {}",
                style.width,
                style.color_fragment()
            ),
            Shape::Boxplot => format!(
                "u (0.0):1:({}) {} {}",
                style.width,
                style.marker_fragment(),
                style.color_fragment()
            ),
            Shape::Function => unreachable!("handled above"),
        };
        Ok(fragment)
    }

    /// This figure's slice of the combined plot line.
    ///
    /// Data-carrying shapes start with the `'-'` inline initializer;
    /// function figures start directly with their expression.
    pub fn header_line(&self) -> Result<String> {
        let init = match self.shape {
            Shape::Function => "",
            _ => PLOT_INIT,
        };
        Ok(format!(
            "{}{} title '{}' ",
            init,
            self.options_fragment()?,
            self.style.title
        ))
    }

    /// Data rows sent after the combined plot command, terminator included.
    ///
    /// Histogram figures bin their samples here and store the resulting
    /// box width back into the style, so the header rendered afterwards
    /// reflects the binning. Function figures contribute no rows.
    pub fn data_rows(&mut self) -> Result<Vec<String>> {
        match self.shape {
            Shape::Function => Ok(Vec::new()),
            Shape::Histogram => self.binned_rows(),
            _ => Ok(self.checked_series()?.rows().collect()),
        }
    }

    /// One-off mode command a shape needs before its first use.
    #[must_use]
    pub fn setup_command(&self) -> Option<&'static str> {
        match self.shape {
            Shape::Boxplot => Some("set style data boxplot"),
            _ => None,
        }
    }

    /// Bins histogram samples into box midpoints.
    ///
    /// Bin count is `ceil(sqrt(n))` capped at 100; each sample maps to the
    /// midpoint of its bin and the style width becomes 0.9 of the bin
    /// width so adjacent boxes keep a visible gap.
    fn binned_rows(&mut self) -> Result<Vec<String>> {
        let samples: Vec<f64> = {
            let series = self.checked_series()?;
            series.column(0).map_or_else(Vec::new, <[f64]>::to_vec)
        };
        if samples.is_empty() {
            return Ok(vec![TERMINATOR.to_owned()]);
        }

        let bins = (samples.len() as f64).sqrt().ceil().min(MAX_BINS);
        let (min, max) = samples.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
        let width = (max - min) / bins;
        self.style.width = 0.9 * width;

        let mut rows: Vec<String> = samples
            .iter()
            .map(|&sample| {
                let midpoint = width * (sample / width).floor() + width / 2.0;
                format!("{midpoint}")
            })
            .collect();
        rows.push(TERMINATOR.to_owned());
        Ok(rows)
    }
}

// ============================================================================
// Tests
// ============================================================================
