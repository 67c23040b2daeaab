//! Columnar data series and the row stream sent after each plot command.
//!
//! A [`DataSeries`] holds 1 to 4 parallel numeric columns and knows how to
//! serialize itself for gnuplot's inline-data mode: one space-joined line per
//! row, closed by the [`TERMINATOR`] line.

use std::fmt::Write as _;

use crate::error::{Error, Result};

/// The line that ends every inline data block.
pub const TERMINATOR: &str = "e";

/// An immutable set of 1 to 4 equal-length numeric columns.
///
/// Column count doubles as the dimensionality tag: 1 = bare value stream,
/// 2 = x/y, 3 = x/y/z, 4 = x/y/dx/dy for vector fields. Values are rendered
/// with `f64`'s `Display`, the shortest form that round-trips.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    columns: Vec<Vec<f64>>,
}

impl DataSeries {
    /// Create a single-column series (histogram samples, boxplot samples).
    #[must_use]
    pub fn from_x(x: impl AsRef<[f64]>) -> Self {
        Self {
            columns: vec![x.as_ref().to_vec()],
        }
    }

    /// Create an x/y series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnMismatch`] when the columns differ in length.
    pub fn from_xy(x: impl AsRef<[f64]>, y: impl AsRef<[f64]>) -> Result<Self> {
        Self::from_columns(vec![x.as_ref().to_vec(), y.as_ref().to_vec()])
    }

    /// Create an x/y/z series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnMismatch`] when the columns differ in length.
    pub fn from_xyz(
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        z: impl AsRef<[f64]>,
    ) -> Result<Self> {
        Self::from_columns(vec![
            x.as_ref().to_vec(),
            y.as_ref().to_vec(),
            z.as_ref().to_vec(),
        ])
    }

    /// Create an x/y/dx/dy series for vector fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnMismatch`] when the columns differ in length.
    pub fn from_xydxdy(
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        dx: impl AsRef<[f64]>,
        dy: impl AsRef<[f64]>,
    ) -> Result<Self> {
        Self::from_columns(vec![
            x.as_ref().to_vec(),
            y.as_ref().to_vec(),
            dx.as_ref().to_vec(),
            dy.as_ref().to_vec(),
        ])
    }

    fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        debug_assert!((1..=4).contains(&columns.len()));
        let lengths: Vec<usize> = columns.iter().map(Vec::len).collect();
        if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
            return Err(Error::ColumnMismatch { lengths });
        }
        Ok(Self { columns })
    }

    /// Number of columns (1 to 4).
    #[must_use]
    pub fn dims(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns[0].len()
    }

    /// Whether the series holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns[0].is_empty()
    }

    /// One column by zero-based index.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// The `using` clause listing the column indices: `1`, `1:2`, `1:2:3`,
    /// or `1:2:3:4` depending on the column count.
    #[must_use]
    pub fn column_descriptor(&self) -> String {
        let mut descriptor = String::from("1");
        for dim in 2..=self.dims() {
            let _ = write!(descriptor, ":{dim}");
        }
        descriptor
    }

    /// Row stream: one line per row, then the [`TERMINATOR`] line.
    ///
    /// The series is immutable, so repeated calls yield identical sequences.
    #[must_use]
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            series: self,
            next: 0,
            terminated: false,
        }
    }

    fn format_row(&self, index: usize) -> String {
        let mut row = String::new();
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                row.push(' ');
            }
            let _ = write!(row, "{}", column[index]);
        }
        row
    }
}

/// Iterator over the serialized rows of a [`DataSeries`].
///
/// Yields every data row in order, then exactly one [`TERMINATOR`] line.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    series: &'a DataSeries,
    next: usize,
    terminated: bool,
}

impl Iterator for Rows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next < self.series.len() {
            let index = self.next;
            self.next += 1;
            Some(self.series.format_row(index))
        } else if self.terminated {
            None
        } else {
            self.terminated = true;
            Some(TERMINATOR.to_string())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.series.len() - self.next + usize::from(!self.terminated);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
