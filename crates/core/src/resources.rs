//! Wire shapes of the backend REST resources.
//!
//! Read shapes (`Account`, `Application`, `PhoneNumber`) are lenient: every
//! field the UI can live without is optional so that a sparse record from
//! the backend still deserializes. Write shapes (`ApplicationPayload`) are
//! strict and always carry every field.

use serde::{Deserialize, Serialize};

use crate::catalog::{RecognizerVendor, SynthesisVendor};
use crate::types::Sid;

// ---------------------------------------------------------------------------
// HttpMethod
// ---------------------------------------------------------------------------

/// HTTP verb the telephony backend uses when invoking a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }

    /// Case-insensitive parse of a stored method. Anything missing or
    /// unrecognised reads as `POST`.
    pub fn parse_lenient(s: Option<&str>) -> Self {
        match s {
            Some(m) if m.eq_ignore_ascii_case("get") => Self::Get,
            _ => Self::Post,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Read shapes
// ---------------------------------------------------------------------------

/// A webhook as stored on the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireHook {
    pub url: Option<String>,
    pub method: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Account registration webhook; same shape as an application hook.
pub type RegistrationHook = WireHook;

/// `GET /Accounts` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_sid: Sid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sip_realm: Option<String>,
    #[serde(default)]
    pub registration_hook: Option<RegistrationHook>,
}

/// `GET /Applications` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub application_sid: Sid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account_sid: Option<Sid>,
    #[serde(default)]
    pub call_hook: Option<WireHook>,
    #[serde(default)]
    pub call_status_hook: Option<WireHook>,
    #[serde(default)]
    pub speech_synthesis_vendor: Option<String>,
    #[serde(default)]
    pub speech_synthesis_language: Option<String>,
    #[serde(default)]
    pub speech_synthesis_voice: Option<String>,
    #[serde(default)]
    pub speech_recognizer_vendor: Option<String>,
    #[serde(default)]
    pub speech_recognizer_language: Option<String>,
}

/// `GET /PhoneNumbers` element. Only the fields the account reference check
/// reads are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(default)]
    pub phone_number_sid: Option<Sid>,
    pub number: String,
    #[serde(default)]
    pub account_sid: Option<Sid>,
}

// ---------------------------------------------------------------------------
// Write shapes
// ---------------------------------------------------------------------------

/// Hook body for create/update. `username`/`password` serialize as `null`
/// when the hook carries no credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookPayload {
    pub url: String,
    pub method: HttpMethod,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /Applications` and `PUT /Applications/{sid}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    pub account_sid: Option<Sid>,
    pub name: String,
    pub call_hook: HookPayload,
    pub call_status_hook: HookPayload,
    pub speech_synthesis_vendor: SynthesisVendor,
    pub speech_synthesis_language: String,
    pub speech_synthesis_voice: String,
    pub speech_recognizer_vendor: RecognizerVendor,
    pub speech_recognizer_language: String,
}
