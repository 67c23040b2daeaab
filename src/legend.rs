//! Legend placement and its `set key` command.

/// Anchor of the plot legend, one of nine positions on a 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LegendPosition {
    /// Top-left corner.
    LeftTop,
    /// Top edge, centered.
    CenterTop,
    /// Top-right corner.
    #[default]
    RightTop,
    /// Left edge, centered.
    LeftCenter,
    /// Middle of the plot.
    Center,
    /// Right edge, centered.
    RightCenter,
    /// Bottom-left corner.
    LeftBottom,
    /// Bottom edge, centered.
    CenterBottom,
    /// Bottom-right corner.
    RightBottom,
}

impl LegendPosition {
    /// Position words as the engine expects them in `set key`.
    #[must_use]
    pub fn words(self) -> &'static str {
        match self {
            Self::LeftTop => "left top",
            Self::CenterTop => "center top",
            Self::RightTop => "right top",
            Self::LeftCenter => "left center",
            Self::Center => "center",
            Self::RightCenter => "right center",
            Self::LeftBottom => "left bottom",
            Self::CenterBottom => "center bottom",
            Self::RightBottom => "right bottom",
        }
    }
}

/// Legend model of one session. Persists across registry clears.
#[derive(Debug, Clone, Default)]
pub struct Legend {
    position: LegendPosition,
}

impl Legend {
    /// Legend anchored at the default top-right position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored anchor.
    #[must_use]
    pub fn position(&self) -> LegendPosition {
        self.position
    }

    /// Stores a new anchor and returns the matching key command.
    pub fn set_position(&mut self, position: LegendPosition) -> String {
        self.position = position;
        self.command()
    }

    /// Key command for the stored anchor.
    #[must_use]
    pub fn command(&self) -> String {
        format!("set key {}", self.position.words())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position() {
        let legend = Legend::new();
        assert_eq!(legend.position(), LegendPosition::RightTop);
        assert_eq!(legend.command(), "set key right top");
    }

    #[test]
    fn test_set_position() {
        let mut legend = Legend::new();
        let command = legend.set_position(LegendPosition::Center);
        assert_eq!(legend.position(), LegendPosition::Center);
        assert_eq!(command, "set key center");
    }

    #[test]
    fn test_position_words() {
        assert_eq!(LegendPosition::LeftTop.words(), "left top");
        assert_eq!(LegendPosition::RightBottom.words(), "right bottom");
        assert_eq!(LegendPosition::CenterBottom.words(), "center bottom");
        assert_eq!(LegendPosition::LeftCenter.words(), "left center");
    }

    #[test]
    fn test_words_are_lowercase() {
        for position in [
            LegendPosition::LeftTop,
            LegendPosition::CenterTop,
            LegendPosition::RightTop,
            LegendPosition::LeftCenter,
            LegendPosition::Center,
            LegendPosition::RightCenter,
            LegendPosition::LeftBottom,
            LegendPosition::CenterBottom,
            LegendPosition::RightBottom,
        ] {
            assert!(position
                .words()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == ' '));
        }
    }
}
