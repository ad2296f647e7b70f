//! Navigation components for Meridian People
//!
//! This module provides the sidebar link item: a presentational component
//! whose visual description is a pure function of its state and the active
//! theme. The surrounding navigation container supplies the state fields
//! and reacts to pointer events; the component itself holds nothing.

use crate::theme::{Color, Theme};
use crate::tokens::{radius, sizing, spacing};
use crate::typography::TextStyle;
use serde::{Deserialize, Serialize};

// =============================================================================
// Link Item
// =============================================================================

/// Direction of the trailing expand/collapse indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorDirection {
    /// Children are expanded; pointing up collapses them
    Up,
    /// Children are collapsed; pointing down expands them
    Down,
}

/// Presentation state of a sidebar link item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Label text
    pub label: String,
    /// Icon name, when the entry carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the sidebar is in its wide (open) layout
    pub open: bool,
    /// Whether this entry matches the current route
    pub is_active: bool,
    /// Whether the pointer is over this entry
    ///
    /// Accepted for parity with the container's state but not consulted:
    /// hover visuals are driven by the pointer-over pseudo-state alone.
    pub is_hovered: bool,
    /// Whether this entry's children are expanded
    pub is_expanded: bool,
    /// Whether this entry has child entries
    pub has_children: bool,
}

impl LinkItem {
    /// Create a new link item with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            open: false,
            is_active: false,
            is_hovered: false,
            is_expanded: false,
            has_children: false,
        }
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the wide-layout flag
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Set the hovered flag
    pub fn with_hovered(mut self, hovered: bool) -> Self {
        self.is_hovered = hovered;
        self
    }

    /// Set the expanded flag
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.is_expanded = expanded;
        self
    }

    /// Set the has-children flag
    pub fn with_children(mut self, has_children: bool) -> Self {
        self.has_children = has_children;
        self
    }

    /// Whether this entry is visually highlighted
    pub fn is_highlighted(&self) -> bool {
        self.is_active || self.is_expanded
    }

    /// Whether the icon should be rendered
    pub fn shows_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Whether the label text should be rendered
    ///
    /// Labels only appear in the wide layout; the narrow rail is icon-only.
    pub fn shows_label(&self) -> bool {
        self.open
    }

    /// The trailing indicator to render, if any
    ///
    /// Only entries with children show one, and only in the wide layout.
    pub fn indicator(&self) -> Option<IndicatorDirection> {
        if self.has_children && self.open {
            if self.is_expanded {
                Some(IndicatorDirection::Up)
            } else {
                Some(IndicatorDirection::Down)
            }
        } else {
            None
        }
    }

    /// Compute the visual description for this item under a theme
    pub fn computed_styles(&self, theme: &Theme) -> LinkItemStyles {
        let nav = &theme.palette.navigation;

        let (background, color) = if self.is_highlighted() {
            (nav.clicked_bg.clone(), nav.clicked.clone())
        } else {
            ("transparent".to_string(), nav.link.clone())
        };

        LinkItemStyles {
            background,
            color,
            hover_background: nav.hover_bg.clone(),
            hover_color: nav.hover.clone(),
            gap: spacing::units(1.0),
            padding: spacing::units(1.0),
            border_radius: radius::MD,
            icon_size: sizing::icon::NAV,
            label: TextStyle::nav_label(),
            transition: "all 0.2s".to_string(),
        }
    }
}

/// Computed visual description of a link item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItemStyles {
    /// Background color
    pub background: Color,
    /// Text and icon color
    pub color: Color,
    /// Background color under the pointer (pseudo-state)
    pub hover_background: Color,
    /// Text color under the pointer (pseudo-state)
    pub hover_color: Color,
    /// Gap between icon and label in pixels
    pub gap: f32,
    /// Inner padding in pixels
    pub padding: f32,
    /// Corner radius in pixels
    pub border_radius: f32,
    /// Icon square size in pixels
    pub icon_size: f32,
    /// Label text style (rendered only in the wide layout)
    pub label: TextStyle,
    /// CSS transition shorthand
    pub transition: String,
}
