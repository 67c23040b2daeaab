//! # plotpipe
//!
//! Typed front-end for driving [gnuplot](http://www.gnuplot.info/) through
//! its textual command protocol.
//!
//! Callers describe plots with ordinary Rust values: a [`DataSeries`] of
//! parallel coordinate columns, a [`Figure`] picking the drawing shape and
//! style, axis and legend models on a [`Session`]. The session translates
//! those values into the exact command and inline-data text the engine
//! expects on its standard input, and hands the lines to a pluggable
//! [`CommandSink`].
//!
//! ## Features
//!
//! - **Eleven figure shapes**: scatter, line, line+points, filled curves,
//!   error bars, impulses, bars, vector fields, bare function expressions,
//!   histograms, and boxplots, in 2D and 3D where the engine supports it
//! - **Axis control**: ranges, explicit or generated tick grids, labeled
//!   tick annotations, axis labels with rotation
//! - **Inspectable protocol**: swap the process sink for a buffer and
//!   assert on every line the engine would have received
//!
//! ## Quick Start
//!
//! ```rust
//! use plotpipe::prelude::*;
//!
//! fn main() -> plotpipe::Result<()> {
//!     // Record the protocol in memory; use Session::gnuplot() to drive
//!     // a real engine instead.
//!     let mut session = Session::buffered()?;
//!
//!     let x: Vec<f64> = (0..50).map(f64::from).collect();
//!     let y: Vec<f64> = x.iter().map(|v| v * v).collect();
//!     let id = session.add(Figure::scatter(DataSeries::from_xy(x, y)?))?;
//!     if let Some(figure) = session.figure_mut(id) {
//!         figure.set_color(Color::Navy).set_title("squares");
//!     }
//!
//!     session.set_range(Axis::X, 0.0, 50.0)?;
//!     session.set_legend(LegendPosition::LeftTop)?;
//!     session.show()?;
//!
//!     assert!(session.sink().output().contains("with points"));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Parallel coordinate columns and their row stream.
pub mod data;

/// Visual style attributes and their protocol fragments.
pub mod style;

/// Figure shapes and their rendering to plot commands.
pub mod figure;

// ============================================================================
// Plot State Modules
// ============================================================================

/// Axis ranges, ticks, and labels.
pub mod axis;

/// Legend placement.
pub mod legend;

/// The per-session figure registry and show pass.
pub mod session;

// ============================================================================
// Transport
// ============================================================================

/// Sinks that carry protocol lines to the engine.
pub mod sink;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for plotpipe operations.
pub mod error;

pub use error::{Error, Result};

pub use axis::{Axes, Axis, AxisLabel, AxisRange, AxisTicks};
pub use data::DataSeries;
pub use figure::{Figure, PlotKind, Shape};
pub use legend::{Legend, LegendPosition};
pub use session::Session;
pub use sink::{BufferSink, CommandSink, GnuplotProcess};
pub use style::{Color, DashStyle, Marker, Style};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use plotpipe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::{Axes, Axis};
    pub use crate::data::DataSeries;
    pub use crate::error::{Error, Result};
    pub use crate::figure::{Figure, PlotKind, Shape};
    pub use crate::legend::{Legend, LegendPosition};
    pub use crate::session::Session;
    pub use crate::sink::{BufferSink, CommandSink, GnuplotProcess};
    pub use crate::style::{Color, DashStyle, Marker, Style};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_crate_surface_compiles() {
        let session = Session::buffered().unwrap();
        assert!(session.is_empty());
        assert_eq!(Color::Black.name(), "black");
    }
}
