//! Login flow integration tests
//!
//! Drives the log in screen end to end: navigation stack, form controller,
//! authentication collaborator and the rendered view.

use app_core::auth::{AuthError, Authenticator, StubAuthenticator};
use app_core::config::AppConfig;
use app_state::login::{SubmitError, SubmitOutcome, TransportFailure};
use app_ui::navigation::{NavigationState, Route, SharedNavigator};
use app_ui::screens::LoginScreen;
use app_ui::theme::colors;
use app_ui::tokens::{DeviceMetrics, Platform};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

fn logged_out_at_login() -> SharedNavigator {
    let navigator = SharedNavigator::new(NavigationState::logged_out());
    navigator.navigate(Route::Login);
    navigator
}

fn demo_accounts(config: &AppConfig) -> StubAuthenticator {
    StubAuthenticator::from_config(&config.login).with_account("a@b.com", "secret")
}

/// Answers after a very long time
struct Sluggish;

#[async_trait]
impl Authenticator for Sluggish {
    async fn authenticate(&self, _email: &str, _password: &str) -> Result<bool, AuthError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(true)
    }
}

#[tokio::test(start_paused = true)]
async fn test_login_then_land_on_explore() {
    let config = AppConfig::default();
    let navigator = logged_out_at_login();
    let screen = LoginScreen::new(
        &DeviceMetrics::default(),
        Arc::new(demo_accounts(&config)),
        navigator.clone(),
        &config,
    );

    screen.on_email_changed("a@b.com");
    screen.on_password_changed("secret");
    assert!(!screen.view().next_disabled);

    assert_eq!(screen.press_next().await, Ok(SubmitOutcome::Authenticated));

    let state = screen.view().form;
    assert!(!state.submission_in_flight);
    assert!(!state.last_submission_failed);

    let nav_state = navigator.snapshot();
    let stack: Vec<Route> = nav_state.current_stack().unwrap().routes().cloned().collect();
    assert_eq!(stack, [Route::LoggedOut, Route::Login, Route::TurnOnNotification]);

    navigator.update(|state| state.finish_logged_out_flow());
    assert_eq!(navigator.current_route(), Route::Explore { q: None });

    // The finished form refuses to log in twice
    assert_eq!(screen.press_next().await, Err(SubmitError::Completed));
}

#[tokio::test(start_paused = true)]
async fn test_wrong_password_then_correction() {
    let config = AppConfig::default();
    let navigator = logged_out_at_login();
    let screen = LoginScreen::new(
        &DeviceMetrics::new(Platform::Android, 320.0, 560.0),
        Arc::new(demo_accounts(&config)),
        navigator.clone(),
        &config,
    );
    assert_eq!(screen.view().title_style.font_size, 28.0);

    screen.on_email_changed("a@b.com");
    screen.on_password_changed("secrets");
    assert_eq!(screen.press_next().await, Ok(SubmitOutcome::Rejected));

    let view = screen.view();
    assert_eq!(view.background_color, colors::DARK_ORANGE);
    assert!(view.notification.is_some());
    assert_eq!(view.form.email, "a@b.com");
    assert_eq!(view.form.password, "secrets");
    assert_eq!(navigator.current_route(), Route::Login);

    screen.close_notification();
    screen.on_password_changed("secret");
    assert_eq!(screen.press_next().await, Ok(SubmitOutcome::Authenticated));
    assert_eq!(navigator.current_route(), Route::TurnOnNotification);
}

#[tokio::test(start_paused = true)]
async fn test_configured_timeout_surfaces_as_transport_failure() {
    let config = AppConfig::from_json_str(r#"{"login": {"authTimeoutMs": 3000}}"#).unwrap();
    let navigator = logged_out_at_login();
    let screen = LoginScreen::new(
        &DeviceMetrics::default(),
        Arc::new(Sluggish),
        navigator.clone(),
        &config,
    );
    assert_eq!(screen.controller().auth_timeout(), Duration::from_secs(3));

    screen.on_email_changed("a@b.com");
    screen.on_password_changed("secret");

    let start = tokio::time::Instant::now();
    assert_eq!(
        screen.press_next().await,
        Ok(SubmitOutcome::TransportFailed(TransportFailure::TimedOut))
    );
    assert!(start.elapsed() >= Duration::from_secs(3));
    assert!(start.elapsed() < Duration::from_secs(3600));

    let view = screen.view();
    assert!(!view.loader_visible);
    assert!(!view.next_disabled);
    assert_eq!(
        view.notification.map(|n| n.first_line),
        Some("That took too long.")
    );
    assert_eq!(navigator.current_route(), Route::Login);
}

#[tokio::test(start_paused = true)]
async fn test_incomplete_form_never_calls_service() {
    let navigator = logged_out_at_login();
    let screen = LoginScreen::new(
        &DeviceMetrics::default(),
        Arc::new(StubAuthenticator::default().with_outage(AuthError::Unavailable)),
        navigator,
        &AppConfig::default(),
    );

    screen.on_email_changed("a@b");
    screen.on_password_changed("secret");
    assert!(screen.view().next_disabled);
    assert_eq!(screen.press_next().await, Err(SubmitError::NotReady));
    assert!(screen.view().notification.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_stub_slower_than_timeout_times_out() {
    let config =
        AppConfig::from_json_str(r#"{"login": {"authTimeoutMs": 1000, "stubDelayMs": 2500}}"#)
            .unwrap();
    let navigator = logged_out_at_login();
    let screen = LoginScreen::new(
        &DeviceMetrics::default(),
        Arc::new(demo_accounts(&config)),
        navigator.clone(),
        &config,
    );

    screen.on_email_changed("a@b.com");
    screen.on_password_changed("secret");
    assert_eq!(
        screen.press_next().await,
        Ok(SubmitOutcome::TransportFailed(TransportFailure::TimedOut))
    );
    assert_eq!(navigator.current_route(), Route::Login);
}
