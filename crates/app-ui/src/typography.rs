//! Typography for Nestaway
//!
//! Text styles are plain data. Sizes that depend on the device are
//! computed from [`DeviceMetrics`] when a screen is constructed, never
//! cached process-wide.

use crate::theme::{colors, Color};
use crate::tokens::{DeviceMetrics, SizeClass};
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Form labels (14px)
    pub const LABEL: f32 = 14.0;
    /// Section heading (22px)
    pub const SECTION: f32 = 22.0;

    /// Screen title sizes
    pub mod title {
        /// Title on small devices (28px)
        pub const SMALL: f32 = 28.0;
        /// Title everywhere else (34px)
        pub const REGULAR: f32 = 34.0;
    }
}

/// Font weights
pub mod font_weight {
    /// Light (300)
    pub const LIGHT: u16 = 300;
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Semi-bold (600)
    pub const SEMIBOLD: u16 = 600;
}

/// Title size for a device class
pub fn title_size(size_class: SizeClass) -> f32 {
    match size_class {
        SizeClass::Small => font_size::title::SMALL,
        SizeClass::Regular => font_size::title::REGULAR,
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (300, 400, 600)
    pub font_weight: u16,
    /// Text color
    pub color: Color,
}

impl TextStyle {
    /// Create a new text style in the default body color
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            color: colors::GRAY_04.to_string(),
        }
    }

    /// Set color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Light title sized for the device, used by the logged-out screens
    pub fn screen_title(metrics: &DeviceMetrics) -> Self {
        Self::new(title_size(metrics.size_class()), font_weight::LIGHT)
    }

    /// Section heading on white screens
    pub fn section_heading() -> Self {
        Self::new(font_size::SECTION, font_weight::SEMIBOLD)
    }

    /// Uppercase form label
    pub fn label() -> Self {
        Self::new(font_size::LABEL, font_weight::REGULAR)
    }
}
