//! Full-form validation.
//!
//! Every check in [`VALIDATION_ORDER`] runs on every pass and violations
//! accumulate. The order is the focus contract: the first violated check
//! decides which field receives input focus, later violations only flag
//! their fields and add a message.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::{ErrorDisplay, FieldId, FormSnapshot, HookKind};

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    NameRequired,
    CallHookUrlRequired,
    StatusHookUrlRequired,
    CallHookCredentials,
    StatusHookCredentials,
    AccountRequired,
}

/// Checks in the order they run and claim focus.
pub const VALIDATION_ORDER: [Check; 6] = [
    Check::NameRequired,
    Check::CallHookUrlRequired,
    Check::StatusHookUrlRequired,
    Check::CallHookCredentials,
    Check::StatusHookCredentials,
    Check::AccountRequired,
];

impl Check {
    /// Run this check against `snapshot`.
    pub fn evaluate(&self, snapshot: &FormSnapshot) -> Option<Violation> {
        match self {
            Self::NameRequired => (snapshot.mode.shows_identity_fields()
                && snapshot.name.is_empty())
            .then(|| Violation::single(*self, FieldId::Name, "Please provide a name.")),
            Self::CallHookUrlRequired => required_url(*self, snapshot, HookKind::Call),
            Self::StatusHookUrlRequired => required_url(*self, snapshot, HookKind::Status),
            Self::CallHookCredentials => paired_credentials(*self, snapshot, HookKind::Call),
            Self::StatusHookCredentials => paired_credentials(*self, snapshot, HookKind::Status),
            Self::AccountRequired => (snapshot.mode.shows_identity_fields()
                && !snapshot.account_sid.as_ref().is_some_and(|s| !s.is_empty()))
            .then(|| {
                Violation::single(
                    *self,
                    FieldId::Account,
                    "Please choose an account for this application to be associated with.",
                )
            }),
        }
    }
}

fn required_url(check: Check, snapshot: &FormSnapshot, kind: HookKind) -> Option<Violation> {
    snapshot.hook(kind).url.is_empty().then(|| {
        Violation::single(
            check,
            kind.url_field(),
            format!("Please enter a {}.", kind.label()),
        )
    })
}

fn paired_credentials(check: Check, snapshot: &FormSnapshot, kind: HookKind) -> Option<Violation> {
    let hook = snapshot.hook(kind);
    if !hook.has_partial_credentials() {
        return None;
    }
    // Focus goes to whichever half is missing.
    let focus = if hook.username.is_empty() {
        kind.username_field()
    } else {
        kind.password_field()
    };
    Some(Violation {
        check,
        fields: vec![kind.username_field(), kind.password_field()],
        focus,
        message: format!(
            "{} username and password must be either both filled out or both empty.",
            kind.label()
        ),
    })
}

// ---------------------------------------------------------------------------
// Violation / report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub check: Check,
    /// Fields flagged invalid by this violation.
    pub fields: Vec<FieldId>,
    /// Field to focus if this is the first violation.
    pub focus: FieldId,
    pub message: String,
}

impl Violation {
    fn single(check: Check, field: FieldId, message: impl Into<String>) -> Self {
        Self {
            check,
            fields: vec![field],
            focus: field,
            message: message.into(),
        }
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
    /// Flagged field -> index of the violation that flagged it.
    invalid: BTreeMap<FieldId, usize>,
    focus: Option<FieldId>,
}

impl ValidationReport {
    fn push(&mut self, violation: Violation) {
        let index = self.violations.len();
        for field in &violation.fields {
            self.invalid.entry(*field).or_insert(index);
        }
        self.focus.get_or_insert(violation.focus);
        self.violations.push(violation);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.invalid.contains_key(&field)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.invalid.keys().copied()
    }

    /// Field that receives focus; the first violation's focus field.
    pub fn focus(&self) -> Option<FieldId> {
        self.focus
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }

    /// Singular or list display of the messages.
    pub fn display(&self) -> Option<ErrorDisplay> {
        ErrorDisplay::from_messages(self.messages())
    }
}

/// Run every check in [`VALIDATION_ORDER`].
pub fn validate(snapshot: &FormSnapshot) -> ValidationReport {
    let mut report = ValidationReport::default();
    for check in VALIDATION_ORDER {
        if let Some(violation) = check.evaluate(snapshot) {
            report.push(violation);
        }
    }
    report
}

impl FormSnapshot {
    /// Reset previous flags, validate, and record the report and error
    /// display on the snapshot. Returns whether the snapshot is valid.
    pub fn run_validation(&mut self) -> bool {
        let report = validate(self);
        self.error = report.display();
        let valid = report.is_valid();
        self.validation = report;
        valid
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
