//! Navigation outcomes and user-facing notices.
//!
//! The engines never navigate themselves; they return a [`Navigation`]
//! describing where the UI should go and which notice to show on arrival.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Notice messages
// ---------------------------------------------------------------------------

pub const MSG_MUST_LOG_IN: &str = "You must log in to view that page.";
pub const MSG_SESSION_EXPIRED: &str = "Your session has expired. Please log in and try again";
pub const MSG_SETUP_ONLY: &str = "That page is only accessible during setup";
pub const MSG_APPLICATION_MISSING: &str = "That application does not exist";
pub const MSG_APPLICATION_CREATED: &str = "Application created successfully";
pub const MSG_APPLICATION_UPDATED: &str = "Application updated successfully";
pub const MSG_CHANGES_CANCELED: &str = "Changes canceled";
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong, please try again";

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// UI destinations reachable from the application form and account list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    ApplicationList,
    /// Next first-run provisioning step after application setup.
    ConfigureSipTrunk,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::ApplicationList => "/internal/applications",
            Self::ConfigureSipTrunk => "/configure-sip-trunk",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A toast-style message for the notification layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub route: Route,
    pub notice: Option<Notice>,
}

impl Navigation {
    pub fn to(route: Route) -> Self {
        Self {
            route,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    /// Missing credential: go to login.
    pub fn login_required() -> Self {
        Self::to(Route::Login).with_notice(Notice::error(MSG_MUST_LOG_IN))
    }

    /// Credential rejected by the backend: go to login.
    pub fn session_expired() -> Self {
        Self::to(Route::Login).with_notice(Notice::error(MSG_SESSION_EXPIRED))
    }
}
