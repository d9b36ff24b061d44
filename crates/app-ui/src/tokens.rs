//! Design tokens for Nestaway
//!
//! This module provides spacing, sizing and device-class tokens shared by
//! the screens.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// 20px - Medium
    pub const SPACE_MD: f32 = 20.0;
    /// 30px - Large, form gutters
    pub const SPACE_LG: f32 = 30.0;
    /// 40px - Extra large, section gaps
    pub const SPACE_XL: f32 = 40.0;
    /// 70px - Clearance below a transparent header
    pub const HEADER_CLEARANCE: f32 = 70.0;
    /// 80px - Clearance below the floating search bar
    pub const SEARCH_BAR_CLEARANCE: f32 = 80.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Tab bar icon (22px)
        pub const TAB: f32 = 22.0;
        /// Header navigation icon (30px)
        pub const HEADER: f32 = 30.0;
    }
}

// =============================================================================
// Device Tokens
// =============================================================================

/// Operating system reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android
    Android,
    /// iOS
    #[default]
    Ios,
    /// Anything else (desktop, web)
    Other,
}

/// Coarse device classification used to scale headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// Short Android screens
    Small,
    /// Everything else
    #[default]
    Regular,
}

/// Window height below which an Android device counts as small
pub const SMALL_ANDROID_HEIGHT: f32 = 600.0;

/// Window metrics supplied by the host when a screen is built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMetrics {
    /// Host operating system
    pub platform: Platform,
    /// Window width in density-independent pixels
    pub width: f32,
    /// Window height in density-independent pixels
    pub height: f32,
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self {
            platform: Platform::Ios,
            width: 375.0,
            height: 812.0,
        }
    }
}

impl DeviceMetrics {
    /// Create metrics
    pub fn new(platform: Platform, width: f32, height: f32) -> Self {
        Self {
            platform,
            width,
            height,
        }
    }

    /// Classify the device
    pub fn size_class(&self) -> SizeClass {
        if self.platform == Platform::Android && self.height < SMALL_ANDROID_HEIGHT {
            SizeClass::Small
        } else {
            SizeClass::Regular
        }
    }
}
