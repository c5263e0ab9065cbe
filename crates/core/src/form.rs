//! Application form state.
//!
//! A [`FormSnapshot`] is the complete mutable state of one edit session. It
//! is produced by hydration, mutated through [`FormSnapshot::apply`], and
//! consumed by validation and submission planning.

use serde::{Deserialize, Serialize};

use crate::cascade::{self, SynthesisChange};
use crate::catalog::{
    RecognizerVendor, ReferenceCatalogs, SynthesisVendor, DEFAULT_LANGUAGE, GOOGLE_STANDARD_VOICE,
};
use crate::error::CoreError;
use crate::resources::{HookPayload, HttpMethod};
use crate::types::Sid;
use crate::validation::ValidationReport;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Operating mode of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// First-run configuration of the sole application.
    Setup,
    Add,
    Edit,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Add => "add",
            Self::Edit => "edit",
        }
    }

    /// `add` and `edit` expose the name and account fields; `setup` does not.
    pub fn shows_identity_fields(&self) -> bool {
        matches!(self, Self::Add | Self::Edit)
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Setup => "Save and Continue",
            Self::Add => "Add Application",
            Self::Edit => "Save",
        }
    }
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the form was opened for. Only `Edit` names an existing application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormTarget {
    Setup,
    Add,
    Edit(Sid),
}

impl FormTarget {
    pub fn mode(&self) -> FormMode {
        match self {
            Self::Setup => FormMode::Setup,
            Self::Add => FormMode::Add,
            Self::Edit(_) => FormMode::Edit,
        }
    }
}

// ---------------------------------------------------------------------------
// Hooks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    /// Invoked for incoming calls.
    Call,
    /// Receives call status events.
    Status,
}

impl HookKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Call => "Calling Webhook",
            Self::Status => "Call Status Webhook",
        }
    }

    pub fn url_field(&self) -> FieldId {
        match self {
            Self::Call => FieldId::CallHookUrl,
            Self::Status => FieldId::StatusHookUrl,
        }
    }

    pub fn username_field(&self) -> FieldId {
        match self {
            Self::Call => FieldId::CallHookUsername,
            Self::Status => FieldId::StatusHookUsername,
        }
    }

    pub fn password_field(&self) -> FieldId {
        match self {
            Self::Call => FieldId::CallHookPassword,
            Self::Status => FieldId::StatusHookPassword,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HookConfig {
    pub url: String,
    pub method: HttpMethod,
    /// Whether HTTP basic authentication is shown and sent for this hook.
    pub auth_enabled: bool,
    pub username: String,
    pub password: String,
}

impl HookConfig {
    /// Exactly one of username and password is filled in.
    pub fn has_partial_credentials(&self) -> bool {
        self.username.is_empty() != self.password.is_empty()
    }

    /// Wire form of the hook. Credentials are `None` when auth is disabled
    /// or the value is empty.
    pub fn to_payload(&self) -> HookPayload {
        let credential = |value: &str| {
            (self.auth_enabled && !value.is_empty()).then(|| value.to_string())
        };
        HookPayload {
            url: self.url.clone(),
            method: self.method,
            username: credential(&self.username),
            password: credential(&self.password),
        }
    }
}

// ---------------------------------------------------------------------------
// Speech selections
// ---------------------------------------------------------------------------

/// Vendor, language and voice for text-to-speech. The voice belongs to the
/// language's voice list and the language to the vendor's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechSynthesisSelection {
    pub vendor: SynthesisVendor,
    pub language: String,
    pub voice: String,
}

impl Default for SpeechSynthesisSelection {
    fn default() -> Self {
        Self {
            vendor: SynthesisVendor::Google,
            language: DEFAULT_LANGUAGE.to_string(),
            voice: GOOGLE_STANDARD_VOICE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRecognizerSelection {
    pub vendor: RecognizerVendor,
    pub language: String,
}

impl Default for SpeechRecognizerSelection {
    fn default() -> Self {
        Self {
            vendor: RecognizerVendor::Google,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Fields and edits
// ---------------------------------------------------------------------------

/// Fields that can be flagged invalid and receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    CallHookUrl,
    CallHookUsername,
    CallHookPassword,
    StatusHookUrl,
    StatusHookUsername,
    StatusHookPassword,
    Account,
}

impl FieldId {
    /// Input element id.
    pub fn input_id(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CallHookUrl => "callWebhook",
            Self::CallHookUsername => "callWebhookUser",
            Self::CallHookPassword => "callWebhookPass",
            Self::StatusHookUrl => "statusWebhook",
            Self::StatusHookUsername => "statusWebhookUser",
            Self::StatusHookPassword => "statusWebhookPass",
            Self::Account => "account",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.input_id())
    }
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    HookUrl(HookKind, String),
    HookMethod(HookKind, HttpMethod),
    /// Disabling auth clears the hook's username and password.
    HookAuthEnabled(HookKind, bool),
    HookUsername(HookKind, String),
    HookPassword(HookKind, String),
    SynthesisVendor(SynthesisVendor),
    SynthesisLanguage(String),
    SynthesisVoice(String),
    RecognizerVendor(RecognizerVendor),
    RecognizerLanguage(String),
    Account(Option<Sid>),
}

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// How the form error area renders its messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "messages", rename_all = "snake_case")]
pub enum ErrorDisplay {
    Single(String),
    List(Vec<String>),
}

impl ErrorDisplay {
    /// `None` for no messages, `Single` for one, `List` for more.
    pub fn from_messages(mut messages: Vec<String>) -> Option<Self> {
        match messages.len() {
            0 => None,
            1 => messages.pop().map(Self::Single),
            _ => Some(Self::List(messages)),
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        match self {
            Self::Single(m) => vec![m.as_str()],
            Self::List(ms) => ms.iter().map(String::as_str).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// FormSnapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub mode: FormMode,
    /// Present when the form edits an existing application.
    pub application_sid: Option<Sid>,
    pub name: String,
    pub call_hook: HookConfig,
    pub status_hook: HookConfig,
    pub synthesis: SpeechSynthesisSelection,
    pub recognizer: SpeechRecognizerSelection,
    pub account_sid: Option<Sid>,
    /// Result of the last validation pass.
    pub validation: ValidationReport,
    /// Messages shown in the form error area.
    pub error: Option<ErrorDisplay>,
}

impl FormSnapshot {
    /// Blank snapshot with default hooks and speech selections.
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            application_sid: None,
            name: String::new(),
            call_hook: HookConfig::default(),
            status_hook: HookConfig::default(),
            synthesis: SpeechSynthesisSelection::default(),
            recognizer: SpeechRecognizerSelection::default(),
            account_sid: None,
            validation: ValidationReport::default(),
            error: None,
        }
    }

    pub fn hook(&self, kind: HookKind) -> &HookConfig {
        match kind {
            HookKind::Call => &self.call_hook,
            HookKind::Status => &self.status_hook,
        }
    }

    pub fn hook_mut(&mut self, kind: HookKind) -> &mut HookConfig {
        match kind {
            HookKind::Call => &mut self.call_hook,
            HookKind::Status => &mut self.status_hook,
        }
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.validation.is_invalid(field)
    }

    /// Apply one user edit. Speech synthesis edits go through the cascade;
    /// everything else is a direct assignment.
    pub fn apply(&mut self, edit: FieldEdit, catalogs: &ReferenceCatalogs) -> Result<(), CoreError> {
        match edit {
            FieldEdit::Name(name) => self.name = name,
            FieldEdit::HookUrl(kind, url) => self.hook_mut(kind).url = url,
            FieldEdit::HookMethod(kind, method) => self.hook_mut(kind).method = method,
            FieldEdit::HookAuthEnabled(kind, enabled) => {
                let hook = self.hook_mut(kind);
                hook.auth_enabled = enabled;
                if !enabled {
                    hook.username.clear();
                    hook.password.clear();
                }
            }
            FieldEdit::HookUsername(kind, username) => self.hook_mut(kind).username = username,
            FieldEdit::HookPassword(kind, password) => self.hook_mut(kind).password = password,
            FieldEdit::SynthesisVendor(vendor) => {
                self.synthesis =
                    cascade::reconcile(&self.synthesis, SynthesisChange::Vendor(vendor), catalogs)?;
            }
            FieldEdit::SynthesisLanguage(language) => {
                self.synthesis = cascade::reconcile(
                    &self.synthesis,
                    SynthesisChange::Language(language),
                    catalogs,
                )?;
            }
            FieldEdit::SynthesisVoice(voice) => {
                self.synthesis =
                    cascade::reconcile(&self.synthesis, SynthesisChange::Voice(voice), catalogs)?;
            }
            FieldEdit::RecognizerVendor(vendor) => self.recognizer.vendor = vendor,
            FieldEdit::RecognizerLanguage(language) => {
                self.recognizer =
                    cascade::reconcile_recognizer(&self.recognizer, language, catalogs)?;
            }
            FieldEdit::Account(account_sid) => self.account_sid = Sid::present(account_sid),
        }
        Ok(())
    }
}
