//! Visual style attributes and their protocol fragments.
//!
//! Every attribute a figure can carry (point size, color, line width, dash
//! pattern, marker, title, function expression) lives in [`Style`], and each
//! one knows how to render itself as the gnuplot option fragment the figure
//! shapes splice into their plot commands.

/// Named colors accepted by gnuplot's `rgb` color specifiers.
///
/// The fragment form is the lowercased variant name, so every variant must
/// stay a single word that gnuplot recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Default plotting color.
    #[default]
    Black,
    /// Neutral grey.
    Grey,
    /// Bright red.
    Red,
    /// Web green.
    Green,
    /// Pure blue.
    Blue,
    /// Dark navy blue.
    Navy,
    /// Muted steel blue.
    SteelBlue,
    /// Light sky blue.
    SkyBlue,
    /// Cyan.
    Cyan,
    /// Turquoise.
    Turquoise,
    /// Gold.
    Gold,
    /// Yellow.
    Yellow,
    /// Orange.
    Orange,
    /// Coral.
    Coral,
    /// Salmon pink.
    Salmon,
    /// Pink.
    Pink,
    /// Magenta.
    Magenta,
    /// Purple.
    Purple,
    /// Violet.
    Violet,
    /// Brown.
    Brown,
}

impl Color {
    /// The gnuplot color name: the variant name in lowercase.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Grey => "grey",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Navy => "navy",
            Color::SteelBlue => "steelblue",
            Color::SkyBlue => "skyblue",
            Color::Cyan => "cyan",
            Color::Turquoise => "turquoise",
            Color::Gold => "gold",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Coral => "coral",
            Color::Salmon => "salmon",
            Color::Pink => "pink",
            Color::Magenta => "magenta",
            Color::Purple => "purple",
            Color::Violet => "violet",
            Color::Brown => "brown",
        }
    }
}

/// Point markers, numbered after gnuplot's `pointtype` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Plus sign.
    Plus = 1,
    /// Diagonal cross.
    Cross = 2,
    /// Asterisk.
    Asterisk = 3,
    /// Hollow square.
    BlankSquare = 4,
    /// Filled square.
    ColoredSquare = 5,
    /// Hollow circle.
    BlankCircle = 6,
    /// Filled circle (default).
    #[default]
    ColoredCircle = 7,
    /// Hollow triangle.
    BlankTriangle = 8,
    /// Filled triangle.
    ColoredTriangle = 9,
    /// Hollow downward triangle.
    BlankInvertedTriangle = 10,
    /// Filled downward triangle.
    ColoredInvertedTriangle = 11,
    /// Hollow diamond.
    BlankDiamond = 12,
    /// Filled diamond.
    ColoredDiamond = 13,
    /// Hollow pentagon.
    BlankPentagon = 14,
    /// Filled pentagon.
    ColoredPentagon = 15,
}

impl Marker {
    /// The gnuplot `pointtype` code.
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Dash patterns, numbered after gnuplot's `dashtype` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    /// Unbroken line (default).
    #[default]
    Solid = 1,
    /// Short dashes.
    SmallDash = 2,
    /// Dots.
    Dotted = 3,
    /// Dash-dot alternation.
    DashDotted = 4,
    /// Dash-dot-dot alternation.
    DashDoubleDotted = 5,
}

impl DashStyle {
    /// The gnuplot `dashtype` code.
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Visual attributes of one figure.
///
/// Plain data: every field is independently assignable and only observed when
/// a figure assembles its option fragments. The `function` field is used only
/// by function figures and stays empty everywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Point size (`ps`).
    pub size: f64,
    /// Line and point color (`lc rgb`).
    pub color: Color,
    /// Line width (`lw`).
    pub width: f64,
    /// Dash pattern (`dt`).
    pub dash: DashStyle,
    /// Point marker (`pt`).
    pub marker: Marker,
    /// Legend title for the figure.
    pub title: String,
    /// Function expression for function figures, e.g. `"sin(x)"`.
    pub function: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            size: 1.0,
            color: Color::Black,
            width: 1.0,
            dash: DashStyle::Solid,
            marker: Marker::ColoredCircle,
            title: String::new(),
            function: String::new(),
        }
    }
}

impl Style {
    /// Create a style with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point size fragment, e.g. `ps 1`.
    #[must_use]
    pub fn size_fragment(&self) -> String {
        format!("ps {}", self.size)
    }

    /// Color fragment, e.g. `lc rgb 'black'`.
    #[must_use]
    pub fn color_fragment(&self) -> String {
        format!("lc rgb '{}'", self.color.name())
    }

    /// Line width fragment, e.g. `lw 1`.
    #[must_use]
    pub fn width_fragment(&self) -> String {
        format!("lw {}", self.width)
    }

    /// Dash pattern fragment, e.g. `dt 1`.
    #[must_use]
    pub fn dash_fragment(&self) -> String {
        format!("dt {}", self.dash.code())
    }

    /// Marker fragment, e.g. `pt 7`.
    #[must_use]
    pub fn marker_fragment(&self) -> String {
        format!("pt {}", self.marker.code())
    }

    /// Title fragment, e.g. `title 'velocity'`.
    #[must_use]
    pub fn title_fragment(&self) -> String {
        format!("title '{}'", self.title)
    }
}
