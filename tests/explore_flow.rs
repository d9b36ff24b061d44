//! Explore tab integration tests

use app_core::explore::categories;
use app_ui::navigation::{NavigationState, NavigationTab, Route, Router};
use app_ui::screens::ExploreScreen;

#[test]
fn test_logging_initialises_once() {
    assert!(nestaway::init_logging("info").is_ok());
    assert!(nestaway::init_logging("info").is_err());
}

#[test]
fn test_search_deep_link_round_trip() {
    let mut screen = ExploreScreen::default();
    screen.on_search_changed("Home");
    let path = screen.route().to_path();
    assert_eq!(path, "/explore?q=Home");

    let restored = ExploreScreen::from_route(&Router::new().match_path(&path));
    let names: Vec<String> = restored.view().categories.into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Homes"]);
}

#[test]
fn test_explore_is_the_default_tab() {
    let state = NavigationState::new();
    assert_eq!(state.active_tab, NavigationTab::Explore);
    assert_eq!(*state.current_route(), Route::Explore { q: None });
    assert_eq!(ExploreScreen::from_route(state.current_route()).view().categories, categories());
}
