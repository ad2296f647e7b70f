//! Design tokens for Meridian People
//!
//! This module provides the non-color design primitives: responsive
//! breakpoints, the spacing unit, corner radii, icon sizing, and font
//! weights.

use serde::{Deserialize, Serialize};

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Named breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Extra small (>= 0px)
    Xs,
    /// Small (>= 600px)
    Sm,
    /// Medium (>= 960px)
    Md,
    /// Large (>= 1280px)
    Lg,
    /// Extra large (>= 1920px)
    Xl,
}

/// Breakpoint widths in pixels
pub mod breakpoints {
    /// Extra small threshold (0px)
    pub const XS: u32 = 0;
    /// Small threshold (600px)
    pub const SM: u32 = 600;
    /// Medium threshold (960px)
    pub const MD: u32 = 960;
    /// Large threshold (1280px)
    pub const LG: u32 = 1280;
    /// Extra large threshold (1920px)
    pub const XL: u32 = 1920;
}

/// Responsive breakpoint thresholds
///
/// Fixed pixel values, identical across modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Extra small threshold
    pub xs: u32,
    /// Small threshold
    pub sm: u32,
    /// Medium threshold
    pub md: u32,
    /// Large threshold
    pub lg: u32,
    /// Extra large threshold
    pub xl: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: breakpoints::XS,
            sm: breakpoints::SM,
            md: breakpoints::MD,
            lg: breakpoints::LG,
            xl: breakpoints::XL,
        }
    }
}

impl Breakpoints {
    /// Get the breakpoint a viewport width falls into
    pub fn current(&self, width: u32) -> Breakpoint {
        if width >= self.xl {
            Breakpoint::Xl
        } else if width >= self.lg {
            Breakpoint::Lg
        } else if width >= self.md {
            Breakpoint::Md
        } else if width >= self.sm {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }

    /// Check whether a viewport width is at or above a breakpoint
    pub fn up(&self, breakpoint: Breakpoint, width: u32) -> bool {
        width
            >= match breakpoint {
                Breakpoint::Xs => self.xs,
                Breakpoint::Sm => self.sm,
                Breakpoint::Md => self.md,
                Breakpoint::Lg => self.lg,
                Breakpoint::Xl => self.xl,
            }
    }
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale based on an 8px unit
pub mod spacing {
    /// Base spacing unit (8px)
    pub const UNIT: f32 = 8.0;

    /// Spacing for a number of units
    pub fn units(n: f32) -> f32 {
        n * UNIT
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Standard corner radius (8px), used by nav items and buttons
    pub const MD: f32 = 8.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Navigation rail icon (20px)
        pub const NAV: f32 = 20.0;
    }
}

// =============================================================================
// Font Weight Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}
