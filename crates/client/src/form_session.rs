//! One application form from mount to submit.
//!
//! [`ApplicationForm`] owns the [`FormSnapshot`] for its lifetime. Every
//! mutation goes through `&mut self`, so a dropped `mount` or `submit`
//! future can never write a stale result back into the form.

use std::sync::Arc;

use futures::future::try_join;
use tokio::sync::watch;

use telconf_core::catalog::ReferenceCatalogs;
use telconf_core::form::{ErrorDisplay, FieldEdit, FormMode, FormSnapshot, FormTarget};
use telconf_core::hydration::{hydrate, HydrationOutcome};
use telconf_core::navigation::{
    Navigation, Notice, Route, MSG_CHANGES_CANCELED, MSG_GENERIC_FAILURE,
};
use telconf_core::resources::Account;
use telconf_core::selectors::{account_choices, AccountChoices};
use telconf_core::submission::{plan_submission, success_navigation, SubmitTarget};
use telconf_core::validation::ValidationReport;

use crate::api::AdminApi;
use crate::error::{ApiError, FormError};
use crate::notify::NotificationBus;
use crate::session::SessionContext;

/// Notice raised when the hydration reads fail without a server message.
pub const MSG_ACCOUNTS_UNAVAILABLE: &str = "Unable to get accounts";

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    /// The snapshot is hydrated and editable.
    Ready,
    /// The form must not be shown.
    Redirect(Navigation),
    /// The reads failed; `message` is shown in place of the form.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationReport),
    /// Saved, or the session ended. The form is closed.
    Navigated(Navigation),
    /// The backend refused the write. The form keeps its state.
    Failed { message: String },
}

/// Where a submission is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

// ---------------------------------------------------------------------------
// ApplicationForm
// ---------------------------------------------------------------------------

pub struct ApplicationForm {
    api: Arc<dyn AdminApi>,
    session: Arc<dyn SessionContext>,
    notifications: Arc<NotificationBus>,
    catalogs: &'static ReferenceCatalogs,
    target: FormTarget,
    snapshot: Option<FormSnapshot>,
    accounts: Vec<Account>,
    applications_exist: bool,
    phase: watch::Sender<SubmitPhase>,
    loading: watch::Sender<bool>,
}

impl ApplicationForm {
    pub fn new(
        target: FormTarget,
        api: Arc<dyn AdminApi>,
        session: Arc<dyn SessionContext>,
        notifications: Arc<NotificationBus>,
        catalogs: &'static ReferenceCatalogs,
    ) -> Self {
        let (phase, _) = watch::channel(SubmitPhase::Idle);
        let (loading, _) = watch::channel(false);
        Self {
            api,
            session,
            notifications,
            catalogs,
            target,
            snapshot: None,
            accounts: Vec::new(),
            applications_exist: false,
            phase,
            loading,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.target.mode()
    }

    /// The hydrated snapshot; `None` before mount and after navigating away.
    pub fn snapshot(&self) -> Option<&FormSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self) -> SubmitPhase {
        *self.phase.borrow()
    }

    /// Follows [`phase`](Self::phase) while a submission is in flight.
    pub fn phase_updates(&self) -> watch::Receiver<SubmitPhase> {
        self.phase.subscribe()
    }

    /// Loading indicator. `true` while the hydration reads are in flight.
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Hydrate the form.
    ///
    /// Without a token nothing is fetched. Accounts and applications are read
    /// concurrently; the first failure fails the mount.
    pub async fn mount(&mut self) -> Result<MountOutcome, FormError> {
        let Some(token) = self.session.token() else {
            return Ok(MountOutcome::Redirect(
                self.navigate(Navigation::login_required()),
            ));
        };

        let fetched = {
            let _loading = StateGuard::raise(&self.loading, true, false);
            try_join(
                self.api.list_accounts(&token),
                self.api.list_applications(&token),
            )
            .await
        };

        let (accounts, applications) = match fetched {
            Ok(pair) => pair,
            Err(e) if e.is_unauthorized() => {
                return Ok(MountOutcome::Redirect(self.expire_session()));
            }
            Err(e) => {
                tracing::error!(mode = %self.mode(), error = %e, "Failed to load form data");
                self.notifications.publish(Notice::error(
                    e.server_message().unwrap_or(MSG_ACCOUNTS_UNAVAILABLE),
                ));
                return Ok(MountOutcome::Failed {
                    message: MSG_GENERIC_FAILURE.to_string(),
                });
            }
        };

        match hydrate(&self.target, &accounts, &applications, self.catalogs) {
            HydrationOutcome::Ready(snapshot) => {
                tracing::info!(
                    mode = %self.mode(),
                    accounts = accounts.len(),
                    applications = applications.len(),
                    "Form hydrated",
                );
                self.applications_exist = !applications.is_empty();
                self.accounts = accounts;
                self.snapshot = Some(snapshot);
                Ok(MountOutcome::Ready)
            }
            HydrationOutcome::Redirect(nav) => {
                tracing::info!(mode = %self.mode(), route = nav.route.path(), "Form redirected");
                Ok(MountOutcome::Redirect(self.navigate(nav)))
            }
        }
    }

    /// Apply one field edit, cascading speech selections.
    ///
    /// A language or voice outside the catalog
    /// ([`CoreError`](telconf_core::error::CoreError)) leaves the snapshot
    /// untouched and is returned as fatal.
    pub fn edit(&mut self, edit: FieldEdit) -> Result<(), FormError> {
        let snapshot = self.snapshot.as_mut().ok_or(FormError::NotMounted)?;
        if let Err(e) = snapshot.apply(edit, self.catalogs) {
            tracing::error!(error = %e, "Rejected field edit");
            return Err(e.into());
        }
        tracing::debug!(
            vendor = %snapshot.synthesis.vendor,
            language = %snapshot.synthesis.language,
            voice = %snapshot.synthesis.voice,
            recognizer_language = %snapshot.recognizer.language,
            "Speech selection",
        );
        Ok(())
    }

    /// Account selector contents for the current snapshot.
    pub fn account_choices(&self) -> AccountChoices {
        let selected = self.snapshot.as_ref().and_then(|s| s.account_sid.as_ref());
        account_choices(self.mode(), &self.accounts, selected)
    }

    /// Validate and persist the snapshot.
    ///
    /// Validation failures and backend refusals leave the form open with its
    /// state intact. Success and session expiry close it.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        self.phase.send_replace(SubmitPhase::Validating);
        let applications_exist = self.applications_exist;

        let plan = {
            let Some(snapshot) = self.snapshot.as_mut() else {
                self.phase.send_replace(SubmitPhase::Idle);
                return Err(FormError::NotMounted);
            };
            if !snapshot.run_validation() {
                self.phase.send_replace(SubmitPhase::Idle);
                tracing::debug!(
                    violations = snapshot.validation.violations().len(),
                    focus = ?snapshot.validation.focus(),
                    "Validation failed",
                );
                return Ok(SubmitOutcome::Invalid(snapshot.validation.clone()));
            }
            match plan_submission(snapshot, applications_exist) {
                Ok(plan) => plan,
                Err(e) => {
                    self.phase.send_replace(SubmitPhase::Idle);
                    return Err(e.into());
                }
            }
        };

        let Some(token) = self.session.token() else {
            self.phase.send_replace(SubmitPhase::Idle);
            self.snapshot = None;
            return Ok(SubmitOutcome::Navigated(
                self.navigate(Navigation::login_required()),
            ));
        };

        let result = {
            let _submitting =
                StateGuard::raise(&self.phase, SubmitPhase::Submitting, SubmitPhase::Idle);
            match &plan.target {
                SubmitTarget::Create => self.api.create_application(&token, &plan.payload).await,
                SubmitTarget::Update(sid) => {
                    self.api
                        .update_application(&token, sid, &plan.payload)
                        .await
                }
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    mode = %self.mode(),
                    method = plan.target.method(),
                    path = %plan.target.path(),
                    "Application saved",
                );
                self.snapshot = None;
                Ok(SubmitOutcome::Navigated(
                    self.navigate(success_navigation(self.mode())),
                ))
            }
            Err(e) if e.is_unauthorized() => Ok(SubmitOutcome::Navigated(self.expire_session())),
            Err(e) => Ok(SubmitOutcome::Failed {
                message: self.record_submit_failure(&e),
            }),
        }
    }

    /// Leave the form without saving. Only `edit` offers a cancel control.
    pub fn cancel(&mut self) -> Option<Navigation> {
        if self.mode() != FormMode::Edit {
            return None;
        }
        self.snapshot = None;
        Some(self.navigate(
            Navigation::to(Route::ApplicationList).with_notice(Notice::info(MSG_CHANGES_CANCELED)),
        ))
    }

    // ---- private helpers ----

    fn record_submit_failure(&mut self, error: &ApiError) -> String {
        tracing::warn!(mode = %self.mode(), error = %error, "Failed to save application");
        let message = error
            .server_message()
            .unwrap_or(MSG_GENERIC_FAILURE)
            .to_string();
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.error = Some(ErrorDisplay::Single(message.clone()));
        }
        message
    }

    fn expire_session(&mut self) -> Navigation {
        tracing::warn!(mode = %self.mode(), "Session expired");
        self.session.clear_session();
        self.snapshot = None;
        self.navigate(Navigation::session_expired())
    }

    /// Publish the navigation's notice and hand the navigation back.
    fn navigate(&self, nav: Navigation) -> Navigation {
        if let Some(notice) = &nav.notice {
            self.notifications.publish(notice.clone());
        }
        nav
    }
}

/// Holds a watched state at `active` until dropped, then restores `idle`.
struct StateGuard<'a, T: Copy> {
    state: &'a watch::Sender<T>,
    idle: T,
}

impl<'a, T: Copy> StateGuard<'a, T> {
    fn raise(state: &'a watch::Sender<T>, active: T, idle: T) -> Self {
        state.send_replace(active);
        Self { state, idle }
    }
}

impl<T: Copy> Drop for StateGuard<'_, T> {
    fn drop(&mut self) {
        self.state.send_replace(self.idle);
    }
}
