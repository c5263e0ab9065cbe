//! Account deletion guard.
//!
//! An account may only be deleted when no application and no phone number
//! references it. The references are reported by name so the operator can
//! see what is blocking the deletion.

use serde::Serialize;

use crate::resources::{Account, Application, PhoneNumber};
use crate::types::Sid;

/// Placeholder for blank values in the delete confirmation.
pub const NONE_PLACEHOLDER: &str = "[none]";

/// One row of the accounts table: the account with its registration hook
/// flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRow {
    pub sid: Sid,
    pub name: Option<String>,
    pub sip_realm: Option<String>,
    pub url: Option<String>,
    pub method: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        let hook = account.registration_hook.as_ref();
        Self {
            sid: account.account_sid.clone(),
            name: account.name.clone(),
            sip_realm: account.sip_realm.clone(),
            url: hook.and_then(|h| h.url.clone()),
            method: hook.and_then(|h| h.method.clone()),
            username: hook.and_then(|h| h.username.clone()),
            password: hook.and_then(|h| h.password.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountReferences {
    /// Names of referencing applications.
    pub applications: Vec<String>,
    /// Numbers of referencing phone numbers.
    pub phone_numbers: Vec<String>,
}

impl AccountReferences {
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty() && self.phone_numbers.is_empty()
    }

    /// One blocking message per kind of reference.
    pub fn blocking_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if !self.applications.is_empty() {
            messages.push(blocking_message(
                "application",
                &self.applications,
            ));
        }
        if !self.phone_numbers.is_empty() {
            messages.push(blocking_message(
                "phone number",
                &self.phone_numbers,
            ));
        }
        messages
    }
}

fn blocking_message(kind: &str, names: &[String]) -> String {
    let plural = if names.len() > 1 { "s" } else { "" };
    format!(
        "This account cannot be deleted because it is in use by the following {kind}{plural}: {}",
        names.join(", ")
    )
}

/// Collect everything that references `account_sid`.
pub fn find_references(
    account_sid: &Sid,
    applications: &[Application],
    phone_numbers: &[PhoneNumber],
) -> AccountReferences {
    AccountReferences {
        applications: applications
            .iter()
            .filter(|a| a.account_sid.as_ref() == Some(account_sid))
            .map(|a| a.name.clone().unwrap_or_default())
            .collect(),
        phone_numbers: phone_numbers
            .iter()
            .filter(|p| p.account_sid.as_ref() == Some(account_sid))
            .map(|p| p.number.clone())
            .collect(),
    }
}

/// Label/value lines shown when confirming an account deletion.
pub fn delete_confirmation_items(row: &AccountRow) -> Vec<(&'static str, String)> {
    let or_none = |value: Option<&str>| {
        value
            .filter(|v| !v.is_empty())
            .unwrap_or(NONE_PLACEHOLDER)
            .to_string()
    };
    vec![
        ("Name:", or_none(row.name.as_deref())),
        ("SIP Realm:", or_none(row.sip_realm.as_deref())),
        ("Registration Webhook:", or_none(row.url.as_deref())),
    ]
}
