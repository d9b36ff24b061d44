//! Application screens
//!
//! Each screen is a small controller that produces a serializable view
//! for the renderer and routes user actions into state and navigation.

use serde::Serialize;

use crate::navigation::Route;

pub mod explore;
pub mod login;

pub use explore::{ExploreScreen, ExploreView};
pub use login::{LoginScreen, LoginView};

/// Which side of the header a button sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderSide {
    /// Leading button
    Left,
    /// Trailing button
    Right,
}

/// What a header button does when pressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "route", rename_all = "camelCase")]
pub enum HeaderAction {
    /// Pop the current screen
    GoBack,
    /// Push a route
    Navigate(Route),
}

/// A text or icon button in the navigation header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderButton {
    /// Button text
    pub text: Option<&'static str>,
    /// Icon name
    pub icon: Option<&'static str>,
    /// Icon size in pixels
    pub icon_size: Option<f32>,
    /// Foreground color
    pub color: &'static str,
    /// Press action
    pub action: HeaderAction,
}

/// Navigation header configuration for a screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    /// Leading button
    pub left: HeaderButton,
    /// Trailing button
    pub right: HeaderButton,
    /// Header draws over the screen background
    pub transparent: bool,
    /// Tint for the back indicator and title
    pub tint_color: &'static str,
}
