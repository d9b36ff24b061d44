//! Navigation system for Nestaway
//!
//! This module provides a type-safe navigation framework with:
//! - Route definitions with deep linking support
//! - Tab navigation for the logged-in app
//! - A logged-out flow stack (landing, log in, onboarding prompts)
//! - A shared navigator that screen controllers signal into

use app_state::login::NavigationHost;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Logged-out flow
    /// Landing screen
    #[default]
    LoggedOut,
    /// Log in form
    Login,
    /// Password reset
    ForgotPassword,
    /// Sign up
    CreateAccount,
    /// Notification opt-in shown right after logging in
    TurnOnNotification,

    // Main tabs
    /// Explore tab
    Explore {
        /// Search bar query
        #[serde(skip_serializing_if = "Option::is_none")]
        q: Option<String>,
    },
    /// Saved listings
    Saved,
    /// Trips
    Trips,
    /// Inbox
    Inbox,
    /// Profile
    Profile,

    // Error
    /// Not found
    NotFound,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::LoggedOut => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::CreateAccount => "/create-account".to_string(),
            Route::TurnOnNotification => "/turn-on-notifications".to_string(),
            Route::Explore { q } => match q {
                Some(q) => format!("/explore?q={}", urlencoding::encode(q)),
                None => "/explore".to_string(),
            },
            Route::Saved => "/saved".to_string(),
            Route::Trips => "/trips".to_string(),
            Route::Inbox => "/inbox".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::LoggedOut => "Welcome",
            Route::Login => "Log In",
            Route::ForgotPassword => "Forgot Password",
            Route::CreateAccount => "Create Account",
            Route::TurnOnNotification => "Turn On Notifications",
            Route::Explore { .. } => "Explore",
            Route::Saved => "Saved",
            Route::Trips => "Trips",
            Route::Inbox => "Inbox",
            Route::Profile => "Profile",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Explore tab
    #[default]
    Explore,
    /// Saved tab
    Saved,
    /// Trips tab
    Trips,
    /// Inbox tab
    Inbox,
    /// Profile tab
    Profile,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        self.root().clone()
    }

    fn root(&self) -> &'static Route {
        static EXPLORE: Route = Route::Explore { q: None };
        static SAVED: Route = Route::Saved;
        static TRIPS: Route = Route::Trips;
        static INBOX: Route = Route::Inbox;
        static PROFILE: Route = Route::Profile;
        match self {
            NavigationTab::Explore => &EXPLORE,
            NavigationTab::Saved => &SAVED,
            NavigationTab::Trips => &TRIPS,
            NavigationTab::Inbox => &INBOX,
            NavigationTab::Profile => &PROFILE,
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Explore => "search",
            NavigationTab::Saved => "heart-o",
            NavigationTab::Trips => "suitcase",
            NavigationTab::Inbox => "comment-o",
            NavigationTab::Profile => "user-o",
        }
    }

    /// Get tab bar label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Explore => "EXPLORE",
            NavigationTab::Saved => "SAVED",
            NavigationTab::Trips => "TRIPS",
            NavigationTab::Inbox => "INBOX",
            NavigationTab::Profile => "PROFILE",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 5] {
        [
            NavigationTab::Explore,
            NavigationTab::Saved,
            NavigationTab::Trips,
            NavigationTab::Inbox,
            NavigationTab::Profile,
        ]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack; never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Root entry
    root: StackEntry,
    /// Entries pushed above the root (bottom to top)
    pushed: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root),
            pushed: Vec::new(),
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.pushed.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.pushed.pop().is_some()
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.pushed.clear();
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    /// Routes from bottom to top
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        std::iter::once(&self.root.route).chain(self.pushed.iter().map(|e| &e.route))
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Stacks for each tab
    pub tab_stacks: HashMap<NavigationTab, NavigationStack>,
    /// Logged-out flow, shown over the tabs while present
    pub flow: Option<NavigationStack>,
}

impl Default for NavigationState {
    fn default() -> Self {
        let tab_stacks = NavigationTab::all()
            .into_iter()
            .map(|tab| (tab, NavigationStack::new(tab.root_route())))
            .collect();

        Self {
            active_tab: NavigationTab::Explore,
            tab_stacks,
            flow: None,
        }
    }
}

impl NavigationState {
    /// Create a navigation state showing the tabs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigation state starting on the landing screen
    pub fn logged_out() -> Self {
        let mut state = Self::default();
        state.start_logged_out_flow();
        state
    }

    /// Present the logged-out flow from its landing screen
    pub fn start_logged_out_flow(&mut self) {
        self.flow = Some(NavigationStack::new(Route::LoggedOut));
    }

    /// Leave the logged-out flow and land on the explore tab
    pub fn finish_logged_out_flow(&mut self) {
        self.flow = None;
        self.reset_to_tab(NavigationTab::Explore);
    }

    /// Whether the logged-out flow is showing
    pub fn in_logged_out_flow(&self) -> bool {
        self.flow.is_some()
    }

    fn tab_stack_mut(&mut self, tab: NavigationTab) -> &mut NavigationStack {
        self.tab_stacks
            .entry(tab)
            .or_insert_with(|| NavigationStack::new(tab.root_route()))
    }

    /// Get the stack that receives pushes
    ///
    /// `None` when the active tab has no stack yet; it is created on the
    /// first push.
    pub fn current_stack(&self) -> Option<&NavigationStack> {
        match &self.flow {
            Some(flow) => Some(flow),
            None => self.tab_stacks.get(&self.active_tab),
        }
    }

    fn current_stack_mut(&mut self) -> &mut NavigationStack {
        let NavigationState {
            active_tab,
            tab_stacks,
            flow,
        } = self;
        match flow {
            Some(flow) => flow,
            None => tab_stacks
                .entry(*active_tab)
                .or_insert_with(|| NavigationStack::new(active_tab.root_route())),
        }
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        match self.current_stack() {
            Some(stack) => stack.current(),
            None => self.active_tab.root(),
        }
    }

    /// Navigate to a route
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(path = %route.to_path(), "navigate");
        self.current_stack_mut().push(route);
    }

    /// Go back
    pub fn go_back(&mut self) -> bool {
        self.current_stack_mut().pop()
    }

    /// Switch to a tab
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        self.active_tab = tab;
    }

    /// Reset to tab root
    pub fn reset_to_tab(&mut self, tab: NavigationTab) {
        self.tab_stack_mut(tab).pop_to_root();
        self.active_tab = tab;
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.current_stack().is_some_and(NavigationStack::can_go_back)
    }
}

// =============================================================================
// Shared Navigator
// =============================================================================

/// Navigation state shared between the host and screen controllers
///
/// Implements [`NavigationHost`]: a successful login pushes the
/// notification opt-in screen.
#[derive(Debug, Clone, Default)]
pub struct SharedNavigator {
    state: Arc<Mutex<NavigationState>>,
}

impl SharedNavigator {
    /// Wrap a navigation state
    pub fn new(state: NavigationState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Navigate to a route
    pub fn navigate(&self, route: Route) {
        self.state.lock().navigate(route);
    }

    /// Go back
    pub fn go_back(&self) -> bool {
        self.state.lock().go_back()
    }

    /// Current route
    pub fn current_route(&self) -> Route {
        self.state.lock().current_route().clone()
    }

    /// Copy of the whole navigation state
    pub fn snapshot(&self) -> NavigationState {
        self.state.lock().clone()
    }

    /// Run `f` with mutable access to the state
    pub fn update<R>(&self, f: impl FnOnce(&mut NavigationState) -> R) -> R {
        f(&mut self.state.lock())
    }
}

impl NavigationHost for SharedNavigator {
    fn proceed(&self) {
        self.navigate(Route::TurnOnNotification);
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<String>,
    /// Route builder
    builder: fn(&RouteParams) -> Route,
}

/// URL Router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        // Logged-out flow
        router.add_route("/", |_| Route::LoggedOut);
        router.add_route("/login", |_| Route::Login);
        router.add_route("/forgot-password", |_| Route::ForgotPassword);
        router.add_route("/create-account", |_| Route::CreateAccount);
        router.add_route("/turn-on-notifications", |_| Route::TurnOnNotification);

        // Tabs
        router.add_route("/explore", |params| Route::Explore {
            q: params.get("q").cloned(),
        });
        router.add_route("/saved", |_| Route::Saved);
        router.add_route("/trips", |_| Route::Trips);
        router.add_route("/inbox", |_| Route::Inbox);
        router.add_route("/profile", |_| Route::Profile);

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(&RouteParams) -> Route) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = match path.split_once('?') {
            Some((pathname, query)) => (pathname, Some(query)),
            None => (path, None),
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        let params = Self::parse_query(query);

        self.patterns
            .iter()
            .find(|pattern| {
                pattern
                    .segments
                    .iter()
                    .map(String::as_str)
                    .eq(path_segments.iter().copied())
            })
            .map(|pattern| (pattern.builder)(&params))
            .unwrap_or(Route::NotFound)
    }

    /// Parse query string into params
    fn parse_query(query: Option<&str>) -> RouteParams {
        let mut params = RouteParams::new();
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params.insert(key.to_string(), decoded.into_owned());
                    }
                }
            }
        }
        params
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::LoggedOut.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Explore { q: None }.to_path(), "/explore");
        assert_eq!(
            Route::Explore {
                q: Some("cape town".to_string())
            }
            .to_path(),
            "/explore?q=cape%20town"
        );
    }

    #[test]
    fn test_default_route_and_titles() {
        assert_eq!(Route::default(), Route::LoggedOut);
        assert_eq!(Route::default().title(), "Welcome");
        assert_eq!(Route::Explore { q: Some("x".to_string()) }.title(), "Explore");
    }

    #[test]
    fn test_router_round_trips_paths() {
        let router = Router::new();
        for route in [
            Route::LoggedOut,
            Route::Login,
            Route::ForgotPassword,
            Route::TurnOnNotification,
            Route::Explore {
                q: Some("Cape Town".to_string()),
            },
            Route::Inbox,
        ] {
            assert_eq!(router.match_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_router_not_found() {
        let router = Router::new();
        assert_eq!(router.match_path("/nonexistent/path"), Route::NotFound);
    }

    #[test]
    fn test_tab_labels_and_icons() {
        assert_eq!(NavigationTab::Explore.label(), "EXPLORE");
        assert_eq!(NavigationTab::Explore.icon(), "search");
        assert_eq!(NavigationTab::Explore.root_route(), Route::Explore { q: None });
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::LoggedOut);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(Route::Login);
        assert_eq!(stack.depth(), 2);
        assert_eq!(*stack.current(), Route::Login);

        assert!(stack.pop());
        assert_eq!(*stack.current(), Route::LoggedOut);

        // Can't pop past root
        assert!(!stack.pop());
    }

    #[test]
    fn test_logged_out_flow() {
        let mut state = NavigationState::logged_out();
        assert!(state.in_logged_out_flow());
        assert_eq!(*state.current_route(), Route::LoggedOut);

        state.navigate(Route::Login);
        state.navigate(Route::TurnOnNotification);
        let routes: Vec<_> = state.current_stack().unwrap().routes().cloned().collect();
        assert_eq!(
            routes,
            [Route::LoggedOut, Route::Login, Route::TurnOnNotification]
        );

        state.finish_logged_out_flow();
        assert!(!state.in_logged_out_flow());
        assert_eq!(*state.current_route(), Route::Explore { q: None });
    }

    #[test]
    fn test_switch_tab_keeps_stacks() {
        let mut state = NavigationState::new();
        state.navigate(Route::Explore {
            q: Some("homes".to_string()),
        });
        state.switch_tab(NavigationTab::Trips);
        assert_eq!(*state.current_route(), Route::Trips);

        state.switch_tab(NavigationTab::Explore);
        assert!(state.can_go_back());
        state.reset_to_tab(NavigationTab::Explore);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_shared_navigator_proceed() {
        let navigator = SharedNavigator::new(NavigationState::logged_out());
        navigator.navigate(Route::Login);
        navigator.proceed();
        assert_eq!(navigator.current_route(), Route::TurnOnNotification);
        assert!(navigator.go_back());
        assert_eq!(navigator.current_route(), Route::Login);
    }

    #[test]
    fn test_navigation_state_serialization() {
        let state = NavigationState::logged_out();
        let json = serde_json::to_string(&state).unwrap();
        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }

    #[test]
    fn test_state_without_tab_stacks() {
        let json = r#"{"active_tab":"explore","tab_stacks":{},"flow":null}"#;
        let mut state: NavigationState = serde_json::from_str(json).unwrap();
        assert!(state.current_stack().is_none());
        assert_eq!(*state.current_route(), Route::Explore { q: None });
        assert!(!state.can_go_back());

        state.switch_tab(NavigationTab::Trips);
        assert_eq!(*state.current_route(), Route::Trips);

        state.navigate(Route::Profile);
        assert_eq!(*state.current_route(), Route::Profile);
        assert_eq!(state.current_stack().map(NavigationStack::depth), Some(2));
        assert!(state.go_back());
        assert_eq!(*state.current_route(), Route::Trips);
    }
}
