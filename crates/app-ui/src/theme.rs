//! Color palette for Nestaway
//!
//! The app uses a small flat palette: a teal-green brand color for the
//! logged-out flow, a dark orange for error states, and a dark gray for
//! text on white screens.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::colors;
//! use app_ui::typography::TextStyle;
//!
//! let style = TextStyle::label().with_color(colors::WHITE);
//! assert_eq!(style.color, "#FFFFFF");
//! ```

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

// =============================================================================
// Palette
// =============================================================================

/// Named palette colors
pub mod colors {
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// Brand green, logged-out backgrounds
    pub const GREEN_01: &str = "#008388";
    /// Error background
    pub const DARK_ORANGE: &str = "#D93900";
    /// Dark gray, body text on white
    pub const GRAY_04: &str = "#484848";
    /// Search bar shadow, black at 15% opacity
    pub const SHADOW: &str = "#00000026";
}
