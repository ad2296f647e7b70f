//! Design system and theme provider for Meridian People
//!
//! This module provides the theming system for the shell: per-mode design
//! token tables and the derived style configuration (palette, typography,
//! component overrides, breakpoints) consumed by the rendering layer.
//!
//! # Modes
//!
//! Two modes are supported:
//! - Light: bright chrome on a white background
//! - Dark: dark chrome on a near-black background
//!
//! The brand color is Meridian orange (#ff7300); the navigation rail is
//! always rendered on the dark nav surface, so its tokens are shared by
//! both modes.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{build_theme, Mode};
//!
//! let theme = build_theme(Mode::Dark);
//! let header_bg = &theme.overrides.data_grid.column_header_background;
//! let nav_text = &theme.palette.navigation.link;
//! ```

use crate::tokens::Breakpoints;
use crate::typography::Typography;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a CSS color string (e.g., "#ffffff" or "#ffffff8f")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Apply an opacity to a hex color, producing an rgba() string
///
/// Falls back to the input unchanged when it is not a parseable hex color.
pub fn alpha(color: &str, opacity: f32) -> Color {
    match parse_hex_color(color) {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, opacity),
        None => color.to_string(),
    }
}

// =============================================================================
// Mode
// =============================================================================

/// Display mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Light mode
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl Mode {
    /// Check if this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, Mode::Dark)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Light => write!(f, "light"),
            Mode::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

// =============================================================================
// Token Scales
// =============================================================================

/// Legacy grey scale with 7 stops from 100 (lightest chrome) to 700
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreyScale {
    /// Stop 100
    pub g100: Color,
    /// Stop 200
    pub g200: Color,
    /// Stop 300
    pub g300: Color,
    /// Stop 400
    pub g400: Color,
    /// Stop 500
    pub g500: Color,
    /// Stop 600
    pub g600: Color,
    /// Stop 700
    pub g700: Color,
}

impl GreyScale {
    /// Get a color by its numeric stop (100, 200, ..., 700)
    pub fn get(&self, stop: u16) -> Option<&Color> {
        match stop {
            100 => Some(&self.g100),
            200 => Some(&self.g200),
            300 => Some(&self.g300),
            400 => Some(&self.g400),
            500 => Some(&self.g500),
            600 => Some(&self.g600),
            700 => Some(&self.g700),
            _ => None,
        }
    }
}

/// Legacy accent scale with stops 100/200/300 (used by primary and secondary)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentScale {
    /// Stop 100
    pub s100: Color,
    /// Stop 200
    pub s200: Color,
    /// Stop 300
    pub s300: Color,
}

/// Single-stop status tones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTones {
    /// Success tone (stop 100)
    pub success: Color,
    /// Warning tone (stop 100)
    pub warning: Color,
    /// Error tone (stop 100)
    pub error: Color,
}

/// Neutral ramp, 5 to 95 in steps of 5, plus pure white and black
///
/// Shared by both modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeutralScale {
    /// Stop 5
    pub n5: Color,
    /// Stop 10
    pub n10: Color,
    /// Stop 15
    pub n15: Color,
    /// Stop 20
    pub n20: Color,
    /// Stop 25
    pub n25: Color,
    /// Stop 30
    pub n30: Color,
    /// Stop 35
    pub n35: Color,
    /// Stop 40
    pub n40: Color,
    /// Stop 45
    pub n45: Color,
    /// Stop 50
    pub n50: Color,
    /// Stop 55
    pub n55: Color,
    /// Stop 60
    pub n60: Color,
    /// Stop 65
    pub n65: Color,
    /// Stop 70
    pub n70: Color,
    /// Stop 75
    pub n75: Color,
    /// Stop 80
    pub n80: Color,
    /// Stop 85
    pub n85: Color,
    /// Stop 90
    pub n90: Color,
    /// Stop 95
    pub n95: Color,
    /// Pure white
    pub white: Color,
    /// Pure black
    pub black: Color,
}

impl NeutralScale {
    /// Get a color by its numeric stop (5, 10, ..., 95)
    pub fn get(&self, stop: u16) -> Option<&Color> {
        match stop {
            5 => Some(&self.n5),
            10 => Some(&self.n10),
            15 => Some(&self.n15),
            20 => Some(&self.n20),
            25 => Some(&self.n25),
            30 => Some(&self.n30),
            35 => Some(&self.n35),
            40 => Some(&self.n40),
            45 => Some(&self.n45),
            50 => Some(&self.n50),
            55 => Some(&self.n55),
            60 => Some(&self.n60),
            65 => Some(&self.n65),
            70 => Some(&self.n70),
            75 => Some(&self.n75),
            80 => Some(&self.n80),
            85 => Some(&self.n85),
            90 => Some(&self.n90),
            95 => Some(&self.n95),
            _ => None,
        }
    }
}

/// Brand color ramp around Meridian orange
///
/// Stops run 95 (lightest tint) down to 5 (deepest shade) in steps of 5,
/// with no 50 stop: the flagship `base` color sits in its place. Shared by
/// both modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandScale {
    /// Flagship brand color
    pub base: Color,
    /// Stop 95
    pub s95: Color,
    /// Stop 90
    pub s90: Color,
    /// Stop 85
    pub s85: Color,
    /// Stop 80
    pub s80: Color,
    /// Stop 75
    pub s75: Color,
    /// Stop 70
    pub s70: Color,
    /// Stop 65
    pub s65: Color,
    /// Stop 60
    pub s60: Color,
    /// Stop 55
    pub s55: Color,
    /// Stop 45
    pub s45: Color,
    /// Stop 40
    pub s40: Color,
    /// Stop 35
    pub s35: Color,
    /// Stop 30
    pub s30: Color,
    /// Stop 25
    pub s25: Color,
    /// Stop 20
    pub s20: Color,
    /// Stop 15
    pub s15: Color,
    /// Stop 10
    pub s10: Color,
    /// Stop 5
    pub s5: Color,
}

/// Secondary brand surface colors, shared by both modes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSecondary {
    /// Base surface color
    pub base: Color,
    /// Light variant
    pub light: Color,
    /// Dark variant
    pub dark: Color,
}

/// Text emphasis tones (100 = highest emphasis)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTones {
    /// Primary text
    pub t100: Color,
    /// Secondary text
    pub t200: Color,
    /// Muted text
    pub t300: Color,
}

/// Border tones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderTones {
    /// Light border
    pub light: Color,
    /// Medium border
    pub medium: Color,
    /// Dark border
    pub dark: Color,
}

/// Background surface tokens
///
/// `dark` and `nav` are deliberately unset in light mode: there is no dark
/// surface and the nav rail keeps its own shared tokens, so light mode
/// signals "no override" for those slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTokens {
    /// Main app surface
    pub main: Color,
    /// Lighter companion to the main surface
    pub main_light: Color,
    /// Elevated dark surface (dark mode only)
    pub dark: Option<Color>,
    /// Navigation rail surface (dark mode only)
    pub nav: Option<Color>,
    /// Primary surface
    pub primary: Color,
    /// Light primary surface
    pub primary_light: Color,
    /// Secondary surface
    pub secondary: Color,
    /// Light secondary surface
    pub secondary_light: Color,
}

/// Navigation rail colors, shared by both modes
///
/// The rail always sits on the dark nav surface, so these do not change
/// with the mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTokens {
    /// Resting link text
    pub link: Color,
    /// Rail accent wash
    pub bg: Color,
    /// Link text under the pointer
    pub hover: Color,
    /// Link background under the pointer
    pub hover_bg: Color,
    /// Active/expanded link text
    pub clicked: Color,
    /// Active/expanded link background
    pub clicked_bg: Color,
}

/// Complete design token table for one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTable {
    /// Legacy grey scale
    pub grey: GreyScale,
    /// Legacy primary accent scale
    pub primary: AccentScale,
    /// Legacy secondary accent scale
    pub secondary: AccentScale,
    /// Status tones
    pub status: StatusTones,
    /// Chrome gradient
    pub gradient: Color,
    /// Neutral ramp
    pub neutral: NeutralScale,
    /// Brand color ramp
    pub design_primary: BrandScale,
    /// Secondary brand surfaces
    pub design_secondary: DesignSecondary,
    /// Text tones
    pub text: TextTones,
    /// Border tones
    pub border: BorderTones,
    /// Background surfaces
    pub background: BackgroundTokens,
    /// Navigation rail colors
    pub navigation: NavigationTokens,
}

/// Neutral ramp shared by both modes
fn neutral_scale() -> NeutralScale {
    NeutralScale {
        n5: "#0d0d0d".to_string(),
        n10: "#1a1a1a".to_string(),
        n15: "#262626".to_string(),
        n20: "#333333".to_string(),
        n25: "#404040".to_string(),
        n30: "#4d4d4d".to_string(),
        n35: "#595959".to_string(),
        n40: "#666666".to_string(),
        n45: "#737373".to_string(),
        n50: "#808080".to_string(),
        n55: "#8c8c8c".to_string(),
        n60: "#999999".to_string(),
        n65: "#a6a6a6".to_string(),
        n70: "#b2b2b2".to_string(),
        n75: "#bfbfbf".to_string(),
        n80: "#cccccc".to_string(),
        n85: "#d9d9d9".to_string(),
        n90: "#e5e5e5".to_string(),
        n95: "#f2f2f2".to_string(),
        white: "#ffffff".to_string(),
        black: "#000000".to_string(),
    }
}

/// Brand ramp shared by both modes
fn brand_scale() -> BrandScale {
    BrandScale {
        base: "#ff7300".to_string(), // Meridian orange
        s95: "#fcf1e8".to_string(),
        s90: "#ffe3cc".to_string(),
        s85: "#ffd5b2".to_string(),
        s80: "#ffc799".to_string(),
        s75: "#ffb980".to_string(),
        s70: "#ffab66".to_string(),
        s65: "#ff9d4d".to_string(),
        s60: "#ff8f33".to_string(),
        s55: "#ff811a".to_string(),
        s45: "#e56800".to_string(),
        s40: "#cc5c00".to_string(),
        s35: "#b25100".to_string(),
        s30: "#994500".to_string(),
        s25: "#803a00".to_string(),
        s20: "#662e00".to_string(),
        s15: "#4d2300".to_string(),
        s10: "#331700".to_string(),
        s5: "#1a0c00".to_string(),
    }
}

/// Secondary brand surfaces shared by both modes
fn design_secondary() -> DesignSecondary {
    DesignSecondary {
        base: "#212a30".to_string(),
        light: "#f3f5f7".to_string(),
        dark: "#171a1c".to_string(),
    }
}

/// Navigation rail colors shared by both modes
fn navigation_tokens() -> NavigationTokens {
    NavigationTokens {
        link: "#ffffff8f".to_string(),
        bg: "rgba(255, 115, 0, 0.2)".to_string(),
        hover: "#ffffffd9".to_string(),
        hover_bg: "#ffffff0a".to_string(),
        clicked: "#ffffff".to_string(),
        clicked_bg: "#ffffff14".to_string(),
    }
}

/// Build the dark mode token table
pub fn dark_tokens() -> TokenTable {
    TokenTable {
        grey: GreyScale {
            g100: "#d1d3d4".to_string(),
            g200: "#a8abad".to_string(),
            g300: "#7f8285".to_string(),
            g400: "#5a5d61".to_string(),
            g500: "#444a4e".to_string(),
            g600: "#363b40".to_string(),
            g700: "#2a2d31".to_string(),
        },
        primary: AccentScale {
            s100: "#d1d3d4".to_string(),
            s200: "#555b5f".to_string(),
            s300: "#373c40".to_string(),
        },
        secondary: AccentScale {
            s100: "#d1d4d8".to_string(),
            s200: "#52585c".to_string(),
            s300: "#3d4246".to_string(),
        },
        status: StatusTones {
            success: "#4caf50".to_string(),
            warning: "#a89a63".to_string(),
            error: "#fe4336".to_string(),
        },
        gradient: "linear-gradient(to bottom, #363b40, #2a2d31)".to_string(),
        neutral: neutral_scale(),
        design_primary: brand_scale(),
        design_secondary: design_secondary(),
        text: TextTones {
            t100: "#ffffff".to_string(),
            t200: "#ffffffd9".to_string(),
            t300: "#ffffff8f".to_string(),
        },
        border: BorderTones {
            light: "#262626".to_string(),
            medium: "#404040".to_string(),
            dark: "#4d4d4d".to_string(),
        },
        background: BackgroundTokens {
            main: "#1a1a1a".to_string(),
            main_light: "#121212".to_string(),
            dark: Some("#262626".to_string()),
            nav: Some("#212121".to_string()),
            primary: "#1a1a1a".to_string(),
            primary_light: "#331700".to_string(),
            secondary: "#0d0d0d".to_string(),
            secondary_light: "#171a1c".to_string(),
        },
        navigation: navigation_tokens(),
    }
}

/// Build the light mode token table
pub fn light_tokens() -> TokenTable {
    TokenTable {
        grey: GreyScale {
            g100: "#ffffff".to_string(),
            g200: "#d1d3d4".to_string(),
            g300: "#b1b3b5".to_string(),
            g400: "#949698".to_string(),
            g500: "#777a7c".to_string(),
            g600: "#5a5d61".to_string(),
            g700: "#444a4e".to_string(),
        },
        primary: AccentScale {
            s100: "#787d81".to_string(),
            s200: "#63696d".to_string(),
            s300: "#444a4e".to_string(),
        },
        secondary: AccentScale {
            s100: "#868c90".to_string(),
            s200: "#6c7276".to_string(),
            s300: "#52585c".to_string(),
        },
        status: StatusTones {
            success: "#388e3c".to_string(),
            warning: "#c1ad70".to_string(),
            error: "#fe4336".to_string(),
        },
        gradient: "linear-gradient(to bottom, #f1f2f3, #d1d3d4)".to_string(),
        neutral: neutral_scale(),
        design_primary: brand_scale(),
        design_secondary: design_secondary(),
        text: TextTones {
            t100: "#000000".to_string(),
            t200: "#000000cc".to_string(),
            t300: "#0000008f".to_string(),
        },
        border: BorderTones {
            light: "#e5e5e5".to_string(),
            medium: "#cccccc".to_string(),
            dark: "#d9d9d9".to_string(),
        },
        background: BackgroundTokens {
            main: "#ffffff".to_string(),
            main_light: "#f7f7f7".to_string(),
            // No dark surface and no nav override in light mode
            dark: None,
            nav: None,
            primary: "#ffffff".to_string(),
            primary_light: "#ffe3cc".to_string(),
            secondary: "#212a30".to_string(),
            secondary_light: "#f3f5f7".to_string(),
        },
        navigation: navigation_tokens(),
    }
}

/// Select the token table for a mode
pub fn tokens(mode: Mode) -> TokenTable {
    match mode {
        Mode::Light => light_tokens(),
        Mode::Dark => dark_tokens(),
    }
}

// =============================================================================
// Derived Palette
// =============================================================================

/// Main/dark pair for an accent slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSlot {
    /// Main color
    pub main: Color,
    /// Dark variant
    pub dark: Color,
}

/// Single-color slot for a status tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSlot {
    /// Main color
    pub main: Color,
}

/// Background slots consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundPalette {
    /// Default app background
    pub base: Color,
    /// Form surface
    pub form: Color,
    /// Banner surface
    pub banner: Color,
    /// Autocomplete dropdown surface
    pub autocomplete: Color,
    /// Data grid body surface
    pub data_grid: Color,
    /// Outer layout surface
    pub layout: Color,
    /// Chrome gradient
    pub gradient: Color,
    /// Main surface token
    pub main: Color,
    /// Lighter companion to the main surface
    pub main_light: Color,
    /// Elevated dark surface (dark mode only)
    pub dark: Option<Color>,
    /// Navigation rail surface (dark mode only)
    pub nav: Option<Color>,
    /// Primary surface token
    pub primary: Color,
    /// Light primary surface token
    pub primary_light: Color,
    /// Secondary surface token
    pub secondary: Color,
    /// Light secondary surface token
    pub secondary_light: Color,
}

/// Derived color palette for one mode
///
/// Accent slots are a fixed, hand-authored mapping onto the token table.
/// The mapping differs between modes (e.g. `primary.main` resolves to
/// `primary[100]` in dark mode but `primary[300]` in light mode), so it is
/// written out per mode rather than computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Mode this palette was derived for
    pub mode: Mode,
    /// Primary accent
    pub primary: PaletteSlot,
    /// Secondary accent
    pub secondary: PaletteSlot,
    /// Success tone
    pub success: ToneSlot,
    /// Warning tone
    pub warning: ToneSlot,
    /// Error tone
    pub error: ToneSlot,
    /// Background slots
    pub background: BackgroundPalette,
    /// Neutral ramp passthrough
    pub neutral: NeutralScale,
    /// Brand ramp passthrough
    pub design_primary: BrandScale,
    /// Secondary brand surfaces passthrough
    pub design_secondary: DesignSecondary,
    /// Text tones passthrough
    pub text_tokens: TextTones,
    /// Border tones passthrough
    pub border: BorderTones,
    /// Navigation rail colors passthrough
    pub navigation: NavigationTokens,
}

fn build_palette(mode: Mode, t: &TokenTable) -> Palette {
    let (primary, secondary, background) = match mode {
        Mode::Dark => (
            PaletteSlot {
                main: t.primary.s100.clone(),
                dark: t.primary.s300.clone(),
            },
            PaletteSlot {
                main: t.grey.g200.clone(),
                dark: t.secondary.s200.clone(),
            },
            BackgroundPalette {
                base: t.grey.g700.clone(),
                form: t.grey.g600.clone(),
                banner: t.primary.s200.clone(),
                autocomplete: t.grey.g400.clone(),
                data_grid: t.grey.g500.clone(),
                layout: t.grey.g100.clone(),
                gradient: t.gradient.clone(),
                main: t.background.main.clone(),
                main_light: t.background.main_light.clone(),
                dark: t.background.dark.clone(),
                nav: t.background.nav.clone(),
                primary: t.background.primary.clone(),
                primary_light: t.background.primary_light.clone(),
                secondary: t.background.secondary.clone(),
                secondary_light: t.background.secondary_light.clone(),
            },
        ),
        Mode::Light => (
            PaletteSlot {
                main: t.primary.s300.clone(),
                dark: t.primary.s300.clone(),
            },
            PaletteSlot {
                main: t.secondary.s200.clone(),
                dark: t.secondary.s300.clone(),
            },
            BackgroundPalette {
                base: t.grey.g100.clone(),
                form: t.grey.g100.clone(),
                banner: t.primary.s200.clone(),
                autocomplete: t.grey.g400.clone(),
                data_grid: t.grey.g300.clone(),
                layout: t.grey.g100.clone(),
                gradient: t.gradient.clone(),
                main: t.background.main.clone(),
                main_light: t.background.main_light.clone(),
                dark: t.background.dark.clone(),
                nav: t.background.nav.clone(),
                primary: t.background.primary.clone(),
                primary_light: t.background.primary_light.clone(),
                secondary: t.background.secondary.clone(),
                secondary_light: t.background.secondary_light.clone(),
            },
        ),
    };

    Palette {
        mode,
        primary,
        secondary,
        success: ToneSlot {
            main: t.status.success.clone(),
        },
        warning: ToneSlot {
            main: t.status.warning.clone(),
        },
        error: ToneSlot {
            main: t.status.error.clone(),
        },
        background,
        neutral: t.neutral.clone(),
        design_primary: t.design_primary.clone(),
        design_secondary: t.design_secondary.clone(),
        text_tokens: t.text.clone(),
        border: t.border.clone(),
        navigation: t.navigation.clone(),
    }
}

// =============================================================================
// Component Overrides
// =============================================================================

/// Data grid style overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataGridOverride {
    /// Column header background (brand-tinted wash over the grid)
    pub column_header_background: Color,
    /// Column header font weight
    pub column_header_font_weight: u16,
    /// Column header title font weight
    pub column_header_title_font_weight: u16,
}

/// Contained button style overrides
///
/// The primary button keeps the brand orange in both modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonOverride {
    /// Background color
    pub contained_background: Color,
    /// Background color under the pointer
    pub contained_hover_background: Color,
    /// Label font weight
    pub font_weight: u16,
    /// Label letter spacing
    pub letter_spacing: String,
    /// Inner padding, vertical then horizontal
    pub padding: String,
    /// Corner radius in pixels
    pub border_radius: f32,
    /// Label color
    pub text_color: Color,
}

/// Global baseline overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineOverride {
    /// Inset fill painted over the browser's autofill highlight
    pub autofill_background: Color,
}

/// Per-component style overrides layered on top of the palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentOverrides {
    /// Data grid overrides
    pub data_grid: DataGridOverride,
    /// Contained button overrides
    pub button: ButtonOverride,
    /// Baseline overrides
    pub baseline: BaselineOverride,
}

fn build_overrides(mode: Mode, t: &TokenTable) -> ComponentOverrides {
    let header_opacity = match mode {
        Mode::Dark => 0.9,
        Mode::Light => 0.2,
    };
    let autofill_background = match mode {
        Mode::Dark => t.grey.g700.clone(),
        Mode::Light => t.grey.g100.clone(),
    };

    ComponentOverrides {
        data_grid: DataGridOverride {
            column_header_background: alpha(&t.primary.s300, header_opacity),
            column_header_font_weight: 1000,
            column_header_title_font_weight: 1000,
        },
        button: ButtonOverride {
            contained_background: "#ff7300".to_string(),
            contained_hover_background: "#e76000".to_string(),
            font_weight: 700,
            letter_spacing: "2px".to_string(),
            padding: "9px 12px".to_string(),
            border_radius: 8.0,
            text_color: "#ffffff".to_string(),
        },
        baseline: BaselineOverride {
            autofill_background,
        },
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Complete derived style configuration for one mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Mode this theme was built for
    pub mode: Mode,
    /// Derived color palette
    pub palette: Palette,
    /// Typography settings (identical across modes)
    pub typography: Typography,
    /// Component style overrides
    pub overrides: ComponentOverrides,
    /// Responsive breakpoints (identical across modes)
    pub breakpoints: Breakpoints,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }
}

/// Build the complete style configuration for a mode
///
/// Total and deterministic: the same mode always yields the same theme.
pub fn build_theme(mode: Mode) -> Theme {
    let table = tokens(mode);
    Theme {
        mode,
        palette: build_palette(mode, &table),
        typography: Typography::default(),
        overrides: build_overrides(mode, &table),
        breakpoints: Breakpoints::default(),
    }
}

/// Build the light theme
pub fn light_theme() -> Theme {
    build_theme(Mode::Light)
}

/// Build the dark theme
pub fn dark_theme() -> Theme {
    build_theme(Mode::Dark)
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Theme provider state
///
/// An explicit configuration object passed down to the rendering layer.
/// The theme is rebuilt on every mode switch and immutable in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current mode
    pub mode: Mode,
    /// Current theme (regenerated on deserialization)
    #[serde(skip, default = "light_theme")]
    pub theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Mode::Light)
    }
}

impl ThemeState {
    /// Create a new theme state for the given mode
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            theme: build_theme(mode),
        }
    }

    /// Switch the current mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.theme = build_theme(mode);
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#ff7300"), Some((255, 115, 0)));
        assert_eq!(parse_hex_color("ff7300"), Some((255, 115, 0)));
        // Alpha suffix is ignored for the RGB components
        assert_eq!(parse_hex_color("#ffffff8f"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#ff"), None); // Too short
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(255, 115, 0), "#ff7300");
    }

    #[test]
    fn test_alpha() {
        assert_eq!(alpha("#ff7300", 0.2), "rgba(255, 115, 0, 0.2)");
        assert_eq!(alpha("#373c40", 0.9), "rgba(55, 60, 64, 0.9)");
        // Unparseable input passes through
        assert_eq!(alpha("transparent", 0.5), "transparent");
    }

    // ==========================================================================
    // Mode Tests
    // ==========================================================================

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Light.to_string(), "light");
        assert_eq!(Mode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("light".parse::<Mode>().unwrap(), Mode::Light);
        assert_eq!("dark".parse::<Mode>().unwrap(), Mode::Dark);
        assert_eq!("DARK".parse::<Mode>().unwrap(), Mode::Dark);
        assert!("dim".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&Mode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Mode::Dark);
    }

    // ==========================================================================
    // Token Table Tests
    // ==========================================================================

    #[test]
    fn test_dark_tokens() {
        let t = dark_tokens();
        assert_eq!(t.grey.g700, "#2a2d31");
        assert_eq!(t.primary.s100, "#d1d3d4");
        assert_eq!(t.primary.s300, "#373c40");
        assert_eq!(t.text.t100, "#ffffff");
        assert_eq!(t.background.dark.as_deref(), Some("#262626"));
        assert_eq!(t.background.nav.as_deref(), Some("#212121"));
    }

    #[test]
    fn test_light_tokens() {
        let t = light_tokens();
        assert_eq!(t.grey.g100, "#ffffff");
        assert_eq!(t.primary.s300, "#444a4e");
        assert_eq!(t.text.t100, "#000000");
        // Deliberately unset slots
        assert_eq!(t.background.dark, None);
        assert_eq!(t.background.nav, None);
    }

    #[test]
    fn test_tokens_shared_across_modes() {
        let light = light_tokens();
        let dark = dark_tokens();

        // Neutral ramp, brand ramp, secondary surfaces, and the navigation
        // rail do not vary with the mode
        assert_eq!(light.neutral, dark.neutral);
        assert_eq!(light.design_primary, dark.design_primary);
        assert_eq!(light.design_secondary, dark.design_secondary);
        assert_eq!(light.navigation, dark.navigation);

        assert_eq!(light.design_primary.base, "#ff7300");
        assert_eq!(light.neutral.n50, "#808080");
        assert_eq!(light.navigation.clicked_bg, "#ffffff14");
    }

    #[test]
    fn test_error_tone_mode_independent() {
        assert_eq!(light_tokens().status.error, dark_tokens().status.error);
    }

    #[test]
    fn test_grey_scale_get() {
        let t = dark_tokens();
        assert_eq!(t.grey.get(100), Some(&"#d1d3d4".to_string()));
        assert_eq!(t.grey.get(700), Some(&"#2a2d31".to_string()));
        assert_eq!(t.grey.get(150), None);
    }

    #[test]
    fn test_neutral_scale_get() {
        let n = neutral_scale();
        assert_eq!(n.get(5), Some(&"#0d0d0d".to_string()));
        assert_eq!(n.get(95), Some(&"#f2f2f2".to_string()));
        assert_eq!(n.get(50), Some(&"#808080".to_string()));
        assert_eq!(n.get(42), None);
    }

    // ==========================================================================
    // Palette Mapping Tests
    // ==========================================================================

    #[test]
    fn test_dark_palette_mapping() {
        let theme = dark_theme();
        let t = dark_tokens();

        assert_eq!(theme.palette.primary.main, t.primary.s100);
        assert_eq!(theme.palette.primary.dark, t.primary.s300);
        assert_eq!(theme.palette.secondary.main, t.grey.g200);
        assert_eq!(theme.palette.secondary.dark, t.secondary.s200);
        assert_eq!(theme.palette.background.base, t.grey.g700);
        assert_eq!(theme.palette.background.form, t.grey.g600);
        assert_eq!(theme.palette.background.data_grid, t.grey.g500);
        assert_eq!(theme.palette.background.layout, t.grey.g100);
    }

    #[test]
    fn test_light_palette_mapping() {
        let theme = light_theme();
        let t = light_tokens();

        // primary.main points at a different token path than in dark mode
        assert_eq!(theme.palette.primary.main, t.primary.s300);
        assert_eq!(theme.palette.primary.dark, t.primary.s300);
        assert_eq!(theme.palette.secondary.main, t.secondary.s200);
        assert_eq!(theme.palette.secondary.dark, t.secondary.s300);
        assert_eq!(theme.palette.background.base, t.grey.g100);
        assert_eq!(theme.palette.background.form, t.grey.g100);
        assert_eq!(theme.palette.background.data_grid, t.grey.g300);
    }

    #[test]
    fn test_palette_shared_slots() {
        for mode in [Mode::Light, Mode::Dark] {
            let theme = build_theme(mode);
            let t = tokens(mode);
            assert_eq!(theme.palette.background.banner, t.primary.s200);
            assert_eq!(theme.palette.success.main, t.status.success);
            assert_eq!(theme.palette.warning.main, t.status.warning);
            assert_eq!(theme.palette.error.main, t.status.error);
            assert_eq!(theme.palette.background.autocomplete, t.grey.g400);
        }
    }

    // ==========================================================================
    // Override Tests
    // ==========================================================================

    #[test]
    fn test_data_grid_header_background() {
        let dark = dark_theme();
        let light = light_theme();

        // primary[300] at 90% in dark mode, 20% in light mode
        assert_eq!(
            dark.overrides.data_grid.column_header_background,
            "rgba(55, 60, 64, 0.9)"
        );
        assert_eq!(
            light.overrides.data_grid.column_header_background,
            "rgba(68, 74, 78, 0.2)"
        );
        assert_eq!(dark.overrides.data_grid.column_header_font_weight, 1000);
    }

    #[test]
    fn test_button_override_mode_independent() {
        let dark = dark_theme();
        let light = light_theme();

        assert_eq!(dark.overrides.button, light.overrides.button);
        assert_eq!(dark.overrides.button.contained_background, "#ff7300");
        assert_eq!(dark.overrides.button.contained_hover_background, "#e76000");
        assert_eq!(dark.overrides.button.font_weight, 700);
        assert_eq!(dark.overrides.button.letter_spacing, "2px");
        assert_eq!(dark.overrides.button.padding, "9px 12px");
        assert_eq!(dark.overrides.button.border_radius, 8.0);
    }

    #[test]
    fn test_autofill_override() {
        assert_eq!(
            dark_theme().overrides.baseline.autofill_background,
            dark_tokens().grey.g700
        );
        assert_eq!(
            light_theme().overrides.baseline.autofill_background,
            light_tokens().grey.g100
        );
    }

    // ==========================================================================
    // Theme Tests
    // ==========================================================================

    #[test]
    fn test_build_theme_deterministic() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(build_theme(mode), build_theme(mode));
        }
    }

    #[test]
    fn test_breakpoints_and_typography_mode_independent() {
        let light = light_theme();
        let dark = dark_theme();
        assert_eq!(light.breakpoints, dark.breakpoints);
        assert_eq!(light.typography, dark.typography);
    }

    #[test]
    fn test_is_dark() {
        assert!(dark_theme().is_dark());
        assert!(!light_theme().is_dark());
    }

    #[test]
    fn test_theme_serialization_round_trip() {
        let theme = dark_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, parsed);
    }

    // ==========================================================================
    // Theme State Tests
    // ==========================================================================

    #[test]
    fn test_theme_state_default() {
        let state = ThemeState::default();
        assert_eq!(state.mode, Mode::Light);
        assert!(!state.current_theme().is_dark());
    }

    #[test]
    fn test_theme_state_set_mode() {
        let mut state = ThemeState::default();
        state.set_mode(Mode::Dark);
        assert_eq!(state.mode, Mode::Dark);
        assert!(state.current_theme().is_dark());
        assert_eq!(state.current_theme(), &dark_theme());
    }
}
