//! Explore tab
//!
//! A search bar over a heading and the category carousel. Typing in the
//! search bar narrows the bundled categories.

use app_core::explore::{categories, search_categories, Category};
use serde::Serialize;

use crate::navigation::{NavigationTab, Route};
use crate::theme::{colors, Color};
use crate::tokens::{sizing, spacing};
use crate::typography::TextStyle;

/// Tab bar registration for a screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarItem {
    /// Uppercase label under the icon
    pub label: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Icon size in pixels
    pub icon_size: f32,
}

/// Floating search bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBarView {
    /// Hint shown while the query is empty
    pub placeholder: &'static str,
    /// Current query
    pub query: String,
    /// Drop shadow under the bar
    pub shadow_color: &'static str,
}

/// Spacing of the explore tab
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreLayout {
    /// Padding above the scrolling content, clearing the search bar
    pub top_padding: f32,
    /// Padding below the scrolling content
    pub bottom_padding: f32,
    /// Heading inset from the left edge
    pub heading_padding_left: f32,
    /// Gap between the heading and the categories
    pub heading_padding_bottom: f32,
    /// Gap below the category carousel
    pub categories_margin_bottom: f32,
}

impl Default for ExploreLayout {
    fn default() -> Self {
        Self {
            top_padding: spacing::SEARCH_BAR_CLEARANCE,
            bottom_padding: spacing::SEARCH_BAR_CLEARANCE,
            heading_padding_left: spacing::SPACE_MD,
            heading_padding_bottom: spacing::SPACE_MD,
            categories_margin_bottom: spacing::SPACE_XL,
        }
    }
}

/// Everything the renderer needs to draw the explore tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreView {
    /// Screen background
    pub background_color: Color,
    /// Content spacing
    pub layout: ExploreLayout,
    /// Search bar
    pub search_bar: SearchBarView,
    /// Section heading
    pub heading: &'static str,
    /// Heading style
    pub heading_style: TextStyle,
    /// Categories matching the query, in display order
    pub categories: Vec<Category>,
}

/// Explore tab screen
#[derive(Debug, Clone)]
pub struct ExploreScreen {
    catalogue: Vec<Category>,
    query: String,
}

impl Default for ExploreScreen {
    fn default() -> Self {
        Self::new(categories())
    }
}

impl ExploreScreen {
    /// Create the screen over a category list
    pub fn new(catalogue: Vec<Category>) -> Self {
        Self {
            catalogue,
            query: String::new(),
        }
    }

    /// Restore the screen from a deep link
    pub fn from_route(route: &Route) -> Self {
        let mut screen = Self::default();
        if let Route::Explore { q: Some(q) } = route {
            screen.on_search_changed(q);
        }
        screen
    }

    /// Tab bar registration
    pub fn tab_bar_item() -> TabBarItem {
        let tab = NavigationTab::Explore;
        TabBarItem {
            label: tab.label(),
            icon: tab.icon(),
            icon_size: sizing::icon::TAB,
        }
    }

    /// Search bar text changed
    pub fn on_search_changed(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Route that reopens the screen in its current state
    pub fn route(&self) -> Route {
        let q = self.query.trim();
        Route::Explore {
            q: (!q.is_empty()).then(|| q.to_string()),
        }
    }

    /// Build the current view
    pub fn view(&self) -> ExploreView {
        ExploreView {
            background_color: colors::WHITE.to_string(),
            layout: ExploreLayout::default(),
            search_bar: SearchBarView {
                placeholder: "Try \"Cape Town\"",
                query: self.query.clone(),
                shadow_color: colors::SHADOW,
            },
            heading: "Explore Airbnb",
            heading_style: TextStyle::section_heading().with_color(colors::GRAY_04),
            categories: search_categories(&self.catalogue, &self.query)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
