//! Explore catalogue
//!
//! The explore tab shows a fixed list of browse categories. The list is
//! static data bundled with the app; searching narrows it locally.

use serde::{Deserialize, Serialize};

/// A browse category on the explore tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name
    pub name: String,
    /// Bundled image asset for the category tile
    pub image: String,
}

impl Category {
    /// Create a category
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Case-insensitive substring match on the name
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

const CATEGORY_DATA: &[(&str, &str)] = &[
    ("Experiences", "experiences.png"),
    ("Restaurants", "restaurants.png"),
    ("Homes", "homes.png"),
    ("Adventures", "adventures.png"),
    ("Luxe", "luxe.png"),
];

/// The bundled category list, in display order
pub fn categories() -> Vec<Category> {
    CATEGORY_DATA
        .iter()
        .map(|(name, image)| Category::new(*name, *image))
        .collect()
}

/// Categories whose name contains `query`, in display order
///
/// An empty or all-whitespace query returns the whole list.
pub fn search_categories<'a>(list: &'a [Category], query: &str) -> Vec<&'a Category> {
    list.iter().filter(|c| c.matches(query)).collect()
}
