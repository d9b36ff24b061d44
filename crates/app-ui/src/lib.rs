//! User interface layer for Nestaway
//!
//! This crate provides the UI-side models the renderer consumes: screens,
//! navigation, the color palette, design tokens and typography. Nothing
//! here draws; every screen produces a serializable view.
//!
//! # Modules
//!
//! - [`theme`] - Color palette
//! - [`tokens`] - Spacing, sizing and device metrics
//! - [`typography`] - Text styles
//! - [`screens`] - Log in and explore screens
//! - [`navigation`] - Routes, stacks and the shared navigator
//!
//! # Example
//!
//! ```rust
//! use app_ui::tokens::{DeviceMetrics, Platform};
//! use app_ui::typography::TextStyle;
//!
//! let metrics = DeviceMetrics::new(Platform::Android, 320.0, 560.0);
//! assert_eq!(TextStyle::screen_title(&metrics).font_size, 28.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use navigation::{
    NavigationStack, NavigationState, NavigationTab, Route, Router, SharedNavigator,
};
pub use screens::{ExploreScreen, ExploreView, LoginScreen, LoginView};
pub use tokens::{DeviceMetrics, Platform, SizeClass};
pub use typography::TextStyle;
