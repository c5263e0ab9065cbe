//! Account list and guarded account deletion.

use std::sync::Arc;

use futures::future::try_join;

use telconf_core::account_refs::{find_references, AccountReferences, AccountRow};
use telconf_core::navigation::{Navigation, Notice};
use telconf_core::types::Sid;

use crate::api::AdminApi;
use crate::error::ApiError;
use crate::notify::NotificationBus;
use crate::session::SessionContext;

pub const MSG_ACCOUNTS_LOAD_FAILED: &str = "Unable to get account data";
pub const MSG_ACCOUNT_DELETE_FAILED: &str = "Unable to delete account";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    Loaded(Vec<AccountRow>),
    Redirect(Navigation),
    /// A notice has been published.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Applications or phone numbers still reference the account.
    Blocked(AccountReferences),
    Redirect(Navigation),
    /// A notice has been published.
    Failed,
}

pub struct AccountsList {
    api: Arc<dyn AdminApi>,
    session: Arc<dyn SessionContext>,
    notifications: Arc<NotificationBus>,
}

impl AccountsList {
    pub fn new(
        api: Arc<dyn AdminApi>,
        session: Arc<dyn SessionContext>,
        notifications: Arc<NotificationBus>,
    ) -> Self {
        Self {
            api,
            session,
            notifications,
        }
    }

    pub async fn load(&self) -> ListOutcome {
        let Some(token) = self.session.token() else {
            return ListOutcome::Redirect(self.navigate(Navigation::login_required()));
        };

        match self.api.list_accounts(&token).await {
            Ok(accounts) => {
                tracing::info!(count = accounts.len(), "Accounts loaded");
                ListOutcome::Loaded(accounts.iter().map(AccountRow::from).collect())
            }
            Err(e) if e.is_unauthorized() => ListOutcome::Redirect(self.expire_session()),
            Err(e) => {
                self.report_failure(&e, MSG_ACCOUNTS_LOAD_FAILED);
                ListOutcome::Failed
            }
        }
    }

    /// Delete `sid` unless an application or phone number still uses it.
    ///
    /// Applications and phone numbers are read concurrently. Each kind of
    /// reference found is published as its own blocking notice.
    pub async fn delete(&self, sid: &Sid) -> DeleteOutcome {
        let Some(token) = self.session.token() else {
            return DeleteOutcome::Redirect(self.navigate(Navigation::login_required()));
        };

        let fetched = try_join(
            self.api.list_applications(&token),
            self.api.list_phone_numbers(&token),
        )
        .await;

        let result = match fetched {
            Ok((applications, phone_numbers)) => {
                let references = find_references(sid, &applications, &phone_numbers);
                if !references.is_empty() {
                    tracing::info!(
                        account_sid = %sid,
                        applications = references.applications.len(),
                        phone_numbers = references.phone_numbers.len(),
                        "Account deletion blocked",
                    );
                    for message in references.blocking_messages() {
                        self.notifications.publish(Notice::error(message));
                    }
                    return DeleteOutcome::Blocked(references);
                }
                self.api.delete_account(&token, sid).await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                tracing::info!(account_sid = %sid, "Account deleted");
                DeleteOutcome::Deleted
            }
            Err(e) if e.is_unauthorized() => DeleteOutcome::Redirect(self.expire_session()),
            Err(e) => {
                self.report_failure(&e, MSG_ACCOUNT_DELETE_FAILED);
                DeleteOutcome::Failed
            }
        }
    }

    // ---- private helpers ----

    fn report_failure(&self, error: &ApiError, fallback: &str) {
        tracing::warn!(error = %error, "{fallback}");
        self.notifications
            .publish(Notice::error(error.server_message().unwrap_or(fallback)));
    }

    fn expire_session(&self) -> Navigation {
        tracing::warn!("Session expired");
        self.session.clear_session();
        self.navigate(Navigation::session_expired())
    }

    fn navigate(&self, nav: Navigation) -> Navigation {
        if let Some(notice) = &nav.notice {
            self.notifications.publish(notice.clone());
        }
        nav
    }
}
