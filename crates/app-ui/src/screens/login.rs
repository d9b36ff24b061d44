//! Log in screen
//!
//! Binds a [`LoginFormController`] to the navigation stack and turns its
//! state into a [`LoginView`] the renderer can draw directly.

use app_core::auth::Authenticator;
use app_core::config::AppConfig;
use app_state::login::{FormState, LoginFormController, Result, SubmitOutcome, TransportFailure};
use serde::Serialize;
use std::sync::Arc;

use crate::navigation::{Route, SharedNavigator};
use crate::screens::{HeaderAction, HeaderButton, HeaderConfig, HeaderSide};
use crate::theme::{colors, Color};
use crate::tokens::{sizing, spacing, DeviceMetrics};
use crate::typography::TextStyle;

/// Kind of text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Email keyboard, no autocorrect
    Email,
    /// Obscured text
    Password,
}

/// One form field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    /// Uppercase label above the field
    pub label: &'static str,
    /// Label style
    pub label_style: TextStyle,
    /// Keyboard / masking hint
    pub input_type: InputType,
    /// Show the "looks valid" checkmark
    pub show_checkmark: bool,
    /// Take focus when the screen opens
    pub auto_focus: bool,
    /// Gap below the field
    pub margin_bottom: f32,
}

/// Spacing of the log in form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginLayout {
    /// Offset of the form below the transparent header
    pub top_clearance: f32,
    /// Left and right form padding
    pub horizontal_padding: f32,
    /// Padding above the title
    pub top_padding: f32,
    /// Gap between the title and the first field
    pub title_margin_bottom: f32,
}

impl Default for LoginLayout {
    fn default() -> Self {
        Self {
            top_clearance: spacing::HEADER_CLEARANCE,
            horizontal_padding: spacing::SPACE_LG,
            top_padding: spacing::SPACE_MD,
            title_margin_bottom: spacing::SPACE_XL,
        }
    }
}

/// Error banner at the bottom of the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    /// Bold first line
    pub first_line: &'static str,
    /// Second line
    pub second_line: &'static str,
}

impl NotificationView {
    fn for_state(state: &FormState) -> Option<Self> {
        if state.last_submission_failed {
            return Some(Self {
                first_line: "Those credentials don't look right.",
                second_line: "Please try again.",
            });
        }
        state.transport_failure.as_ref().map(|failure| match failure {
            TransportFailure::TimedOut => Self {
                first_line: "That took too long.",
                second_line: "Please try again.",
            },
            TransportFailure::Transport(_) => Self {
                first_line: "We couldn't reach the server.",
                second_line: "Check your connection and try again.",
            },
        })
    }
}

/// Everything the renderer needs to draw the log in screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    /// Screen title
    pub title: &'static str,
    /// Title style, sized for the device
    pub title_style: TextStyle,
    /// Screen background
    pub background_color: Color,
    /// Form spacing
    pub layout: LoginLayout,
    /// Email field
    pub email_field: FieldView,
    /// Password field
    pub password_field: FieldView,
    /// Next arrow is disabled
    pub next_disabled: bool,
    /// Loading overlay is visible
    pub loader_visible: bool,
    /// Error banner, if any
    pub notification: Option<NotificationView>,
    /// Form state the view was built from
    pub form: FormState,
}

/// Log in screen
#[derive(Clone)]
pub struct LoginScreen {
    controller: LoginFormController,
    navigator: SharedNavigator,
    title_style: TextStyle,
}

impl LoginScreen {
    /// Build the screen for a device
    ///
    /// The title size is fixed here from `metrics`.
    pub fn new(
        metrics: &DeviceMetrics,
        authenticator: Arc<dyn Authenticator>,
        navigator: SharedNavigator,
        config: &AppConfig,
    ) -> Self {
        let controller = LoginFormController::new(authenticator, Arc::new(navigator.clone()))
            .with_config(config);
        Self {
            controller,
            navigator,
            title_style: TextStyle::screen_title(metrics).with_color(colors::WHITE),
        }
    }

    /// Header configuration: back chevron on the left, "Forgot Password" on the right
    pub fn header() -> HeaderConfig {
        HeaderConfig {
            left: HeaderButton {
                text: None,
                icon: Some("angle-left"),
                icon_size: Some(sizing::icon::HEADER),
                color: colors::WHITE,
                action: HeaderAction::GoBack,
            },
            right: HeaderButton {
                text: Some("Forgot Password"),
                icon: None,
                icon_size: None,
                color: colors::WHITE,
                action: HeaderAction::Navigate(Route::ForgotPassword),
            },
            transparent: true,
            tint_color: colors::WHITE,
        }
    }

    /// Handle a header button press
    pub fn press_header(&self, side: HeaderSide) {
        let button = match side {
            HeaderSide::Left => Self::header().left,
            HeaderSide::Right => Self::header().right,
        };
        match button.action {
            HeaderAction::GoBack => {
                self.navigator.go_back();
            }
            HeaderAction::Navigate(route) => self.navigator.navigate(route),
        }
    }

    /// The underlying form controller
    pub fn controller(&self) -> &LoginFormController {
        &self.controller
    }

    /// Email field changed
    pub fn on_email_changed(&self, input: &str) {
        self.controller.on_email_changed(input);
    }

    /// Password field changed
    pub fn on_password_changed(&self, input: &str) {
        self.controller.on_password_changed(input);
    }

    /// Close button on the error banner
    pub fn close_notification(&self) {
        self.controller.dismiss_failure_notification();
    }

    /// Next arrow pressed
    pub async fn press_next(&self) -> Result<SubmitOutcome> {
        self.controller.submit().await
    }

    /// Build the current view
    pub fn view(&self) -> LoginView {
        let form = self.controller.snapshot();
        let notification = NotificationView::for_state(&form);
        let background_color = if notification.is_some() {
            colors::DARK_ORANGE
        } else {
            colors::GREEN_01
        };
        let label_style = TextStyle::label().with_color(colors::WHITE);

        LoginView {
            title: Route::Login.title(),
            title_style: self.title_style.clone(),
            background_color: background_color.to_string(),
            layout: LoginLayout::default(),
            email_field: FieldView {
                label: "EMAIL ADDRESS",
                label_style: label_style.clone(),
                input_type: InputType::Email,
                show_checkmark: form.email_valid,
                auto_focus: true,
                margin_bottom: spacing::SPACE_LG,
            },
            password_field: FieldView {
                label: "PASSWORD",
                label_style,
                input_type: InputType::Password,
                show_checkmark: form.password_valid,
                auto_focus: false,
                margin_bottom: spacing::SPACE_LG,
            },
            next_disabled: !form.can_submit() || form.submission_in_flight,
            loader_visible: form.submission_in_flight,
            notification,
            form,
        }
    }
}
