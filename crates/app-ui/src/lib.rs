//! User interface foundation for Meridian People
//!
//! This crate provides the shell's design system: per-mode token tables,
//! the derived theme configuration, typography, and the sidebar link item
//! component.
//!
//! # Design System
//!
//! The brand color is Meridian orange (#ff7300). Two display modes are
//! supported:
//! - [`theme::Mode::Light`] - bright chrome on a white background
//! - [`theme::Mode::Dark`] - dark chrome on a near-black background
//!
//! # Modules
//!
//! - [`theme`] - token tables, palette mapping, component overrides
//! - [`tokens`] - breakpoints, spacing, radii, icon sizing, font weights
//! - [`typography`] - base type settings and the heading ramp
//! - [`components`] - sidebar link item rendering
//!
//! # Example
//!
//! ```rust
//! use app_ui::components::LinkItem;
//! use app_ui::theme::{build_theme, Mode};
//!
//! let theme = build_theme(Mode::Dark);
//! let item = LinkItem::new("Leave").with_icon("calendar").with_active(true);
//! let styles = item.computed_styles(&theme);
//! assert_eq!(styles.color, theme.palette.navigation.clicked);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use components::{IndicatorDirection, LinkItem, LinkItemStyles};
pub use theme::{
    alpha, build_theme, dark_theme, dark_tokens, light_theme, light_tokens, parse_hex_color,
    rgb_to_hex, tokens as mode_tokens, Color, Mode, Palette, Theme, ThemeState, TokenTable,
};
pub use tokens::{breakpoints, font_weight, radius, sizing, spacing, Breakpoint, Breakpoints};
pub use typography::{HeadingLevel, HeadingStyle, TextStyle, Typography};
