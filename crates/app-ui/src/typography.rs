//! Typography system for Meridian People
//!
//! A small fixed type ramp: an 11px base size, the Poppins family, and six
//! heading levels. Typography does not vary with the display mode.

use crate::tokens::font_weight;
use serde::{Deserialize, Serialize};

/// Base font size in pixels
pub const BASE_FONT_SIZE: f32 = 11.0;

/// Application font family
pub const FONT_FAMILY: &str = "Poppins";

// =============================================================================
// Text Style
// =============================================================================

/// A free-standing text style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight
    pub font_weight: u16,
    /// Line height as a percentage string (e.g., "150%")
    pub line_height: String,
    /// Letter spacing in em units
    pub letter_spacing: f32,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: "150%".to_string(),
            letter_spacing: 0.0,
        }
    }

    /// Set the line height
    pub fn with_line_height(mut self, line_height: impl Into<String>) -> Self {
        self.line_height = line_height.into();
        self
    }

    /// Set the letter spacing
    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Label style for navigation rail items (14px medium, tight tracking)
    pub fn nav_label() -> Self {
        Self::new(14.0, font_weight::MEDIUM).with_letter_spacing(-0.03)
    }
}

// =============================================================================
// Headings
// =============================================================================

/// Heading level identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// Heading 1
    H1,
    /// Heading 2
    H2,
    /// Heading 3
    H3,
    /// Heading 4
    H4,
    /// Heading 5
    H5,
    /// Heading 6
    H6,
}

/// A heading style definition
///
/// The lower levels carry no explicit weight and inherit the body weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight, when the level pins one
    pub font_weight: Option<u16>,
}

impl HeadingStyle {
    fn new(font_size: f32, font_weight: Option<u16>) -> Self {
        Self {
            font_size,
            font_weight,
        }
    }
}

// =============================================================================
// Typography
// =============================================================================

/// Complete typography settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Base font size in pixels
    pub font_size: f32,
    /// Font family
    pub font_family: String,
    /// Heading 1 style
    pub h1: HeadingStyle,
    /// Heading 2 style
    pub h2: HeadingStyle,
    /// Heading 3 style
    pub h3: HeadingStyle,
    /// Heading 4 style
    pub h4: HeadingStyle,
    /// Heading 5 style
    pub h5: HeadingStyle,
    /// Heading 6 style
    pub h6: HeadingStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_size: BASE_FONT_SIZE,
            font_family: FONT_FAMILY.to_string(),
            h1: HeadingStyle::new(38.0, Some(font_weight::BOLD)),
            h2: HeadingStyle::new(32.0, Some(font_weight::SEMI_BOLD)),
            h3: HeadingStyle::new(24.0, Some(font_weight::MEDIUM)),
            h4: HeadingStyle::new(20.0, None),
            h5: HeadingStyle::new(16.0, None),
            h6: HeadingStyle::new(14.0, None),
        }
    }
}

impl Typography {
    /// Get the style for a heading level
    pub fn heading(&self, level: HeadingLevel) -> &HeadingStyle {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
            HeadingLevel::H4 => &self.h4,
            HeadingLevel::H5 => &self.h5,
            HeadingLevel::H6 => &self.h6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_settings() {
        let typo = Typography::default();
        assert_eq!(typo.font_size, 11.0);
        assert_eq!(typo.font_family, "Poppins");
    }

    #[test]
    fn test_heading_ramp() {
        let typo = Typography::default();
        assert_eq!(typo.h1.font_size, 38.0);
        assert_eq!(typo.h1.font_weight, Some(700));
        assert_eq!(typo.h2.font_size, 32.0);
        assert_eq!(typo.h2.font_weight, Some(600));
        assert_eq!(typo.h3.font_size, 24.0);
        assert_eq!(typo.h3.font_weight, Some(500));
        // h4 through h6 inherit the body weight
        assert_eq!(typo.h4.font_weight, None);
        assert_eq!(typo.h5.font_weight, None);
        assert_eq!(typo.h6.font_weight, None);
        assert_eq!(typo.h6.font_size, 14.0);
    }

    #[test]
    fn test_heading_accessor() {
        let typo = Typography::default();
        assert_eq!(typo.heading(HeadingLevel::H1), &typo.h1);
        assert_eq!(typo.heading(HeadingLevel::H5), &typo.h5);
    }

    #[test]
    fn test_heading_sizes_descend() {
        let typo = Typography::default();
        let sizes = [
            typo.h1.font_size,
            typo.h2.font_size,
            typo.h3.font_size,
            typo.h4.font_size,
            typo.h5.font_size,
            typo.h6.font_size,
        ];
        assert!(sizes.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_nav_label_style() {
        let style = TextStyle::nav_label();
        assert_eq!(style.font_size, 14.0);
        assert_eq!(style.font_weight, 500);
        assert_eq!(style.line_height, "150%");
        assert_eq!(style.letter_spacing, -0.03);
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::new(12.0, 400)
            .with_line_height("120%")
            .with_letter_spacing(0.02);
        assert_eq!(style.line_height, "120%");
        assert_eq!(style.letter_spacing, 0.02);
    }

    #[test]
    fn test_typography_serialization_round_trip() {
        let typo = Typography::default();
        let json = serde_json::to_string(&typo).unwrap();
        let parsed: Typography = serde_json::from_str(&json).unwrap();
        assert_eq!(typo, parsed);
    }
}
