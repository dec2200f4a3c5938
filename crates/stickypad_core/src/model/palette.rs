//! Host-supplied color palette for note creation.
//!
//! # Responsibility
//! - Validate the fixed color list handed in by the host view layer.
//! - Assign colors cycled by creation order.
//!
//! # Invariants
//! - A palette is never empty.
//! - Every entry is a well-formed `#RRGGBB` value.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// Colors shipped with the widget, in assignment order.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#F472B6", "#F87171", "#4ADE80", "#FDE047", "#67E8F9", "#A78BFA",
];

/// Palette construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    EmptyPalette,
    InvalidColor(String),
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "palette must contain at least one color"),
            Self::InvalidColor(value) => {
                write!(f, "palette color is not a `#RRGGBB` value: {value}")
            }
        }
    }
}

impl Error for PaletteError {}

/// Validated fixed color list, cycled by creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Validates and wraps a host-provided color list.
    pub fn new(colors: Vec<String>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        for color in &colors {
            if !HEX_COLOR_RE.is_match(color) {
                return Err(PaletteError::InvalidColor(color.clone()));
            }
        }
        Ok(Self { colors })
    }

    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept for call-site symmetry with collection APIs.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the note created at `position` in the collection.
    ///
    /// Positions wrap around, so colors cycle with period `len()`.
    pub fn color_for(&self, position: usize) -> &str {
        &self.colors[position % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Palette, PaletteError, DEFAULT_PALETTE};

    #[test]
    fn default_palette_matches_shipped_colors() {
        let palette = Palette::default();
        assert_eq!(palette.len(), DEFAULT_PALETTE.len());
        assert_eq!(palette.color_for(0), "#F472B6");
        assert_eq!(palette.color_for(5), "#A78BFA");
    }

    #[test]
    fn colors_cycle_with_palette_period() {
        let palette = Palette::new(vec![
            "#111111".to_string(),
            "#222222".to_string(),
            "#333333".to_string(),
        ])
        .unwrap();

        assert_eq!(palette.color_for(0), "#111111");
        assert_eq!(palette.color_for(3), "#111111");
        assert_eq!(palette.color_for(4), "#222222");
    }

    #[test]
    fn rejects_empty_palette() {
        let err = Palette::new(Vec::new()).unwrap_err();
        assert_eq!(err, PaletteError::EmptyPalette);
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["F472B6", "#F472B", "#F472BG", "#f472b6ff", "red"] {
            let err = Palette::new(vec![bad.to_string()]).unwrap_err();
            assert_eq!(err, PaletteError::InvalidColor(bad.to_string()));
        }
    }

    #[test]
    fn accepts_lower_and_upper_hex_digits() {
        assert!(Palette::new(vec!["#f472b6".to_string()]).is_ok());
        assert!(Palette::new(vec!["#F472B6".to_string()]).is_ok());
    }
}
