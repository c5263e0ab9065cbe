//! Initial form state from fetched backend data.
//!
//! [`hydrate`] is the decision half of the Hydration Engine: given the form
//! target and the fetched account and application collections it either
//! produces the initial [`FormSnapshot`] or a redirect. Fetching, the login
//! guard and the loading indicator live in the client crate.

use crate::cascade;
use crate::catalog::{
    RecognizerVendor, ReferenceCatalogs, SynthesisVendor, DEFAULT_LANGUAGE,
};
use crate::form::{
    FormMode, FormSnapshot, FormTarget, HookConfig, SpeechRecognizerSelection,
    SpeechSynthesisSelection,
};
use crate::navigation::{Navigation, Notice, Route, MSG_APPLICATION_MISSING, MSG_SETUP_ONLY};
use crate::resources::{Account, Application, HttpMethod, WireHook};
use crate::types::Sid;

/// Name given to the application created during first-run setup.
pub const DEFAULT_APPLICATION_NAME: &str = "default application";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationOutcome {
    Ready(FormSnapshot),
    /// The form must not be shown; go elsewhere.
    Redirect(Navigation),
}

/// Produce the initial snapshot for `target`.
///
/// - `setup` is only reachable while at most one account and at most one
///   application exist.
/// - `add` pre-selects the account when exactly one exists.
/// - `edit` redirects when the application is not in `applications`.
/// - `setup` with no application seeds the default name and the sole
///   account; otherwise the application record is mapped into the form.
pub fn hydrate(
    target: &FormTarget,
    accounts: &[Account],
    applications: &[Application],
    catalogs: &ReferenceCatalogs,
) -> HydrationOutcome {
    let mode = target.mode();

    if mode == FormMode::Setup && (accounts.len() > 1 || applications.len() > 1) {
        return HydrationOutcome::Redirect(
            Navigation::to(Route::ApplicationList).with_notice(Notice::error(MSG_SETUP_ONLY)),
        );
    }

    let mut snapshot = FormSnapshot::new(mode);

    let current = match target {
        FormTarget::Add => {
            if let [only] = accounts {
                snapshot.account_sid = Some(only.account_sid.clone());
            }
            return HydrationOutcome::Ready(snapshot);
        }
        FormTarget::Setup => applications.first(),
        FormTarget::Edit(sid) => {
            let found = applications.iter().find(|a| &a.application_sid == sid);
            if found.is_none() {
                return HydrationOutcome::Redirect(
                    Navigation::to(Route::ApplicationList)
                        .with_notice(Notice::error(MSG_APPLICATION_MISSING)),
                );
            }
            found
        }
    };

    match current {
        None => {
            snapshot.name = DEFAULT_APPLICATION_NAME.to_string();
            snapshot.account_sid = accounts.first().map(|a| a.account_sid.clone());
        }
        Some(app) => populate(&mut snapshot, app, catalogs),
    }

    HydrationOutcome::Ready(snapshot)
}

fn populate(snapshot: &mut FormSnapshot, app: &Application, catalogs: &ReferenceCatalogs) {
    snapshot.application_sid = Some(app.application_sid.clone());
    snapshot.name = app.name.clone().unwrap_or_default();
    snapshot.call_hook = hook_from_wire(app.call_hook.as_ref());
    snapshot.status_hook = hook_from_wire(app.call_status_hook.as_ref());
    snapshot.synthesis = synthesis_from_wire(app, catalogs);
    snapshot.recognizer = recognizer_from_wire(app);
    snapshot.account_sid = Sid::present(app.account_sid.clone());
}

fn hook_from_wire(hook: Option<&WireHook>) -> HookConfig {
    let Some(hook) = hook else {
        return HookConfig::default();
    };
    let username = hook.username.clone().unwrap_or_default();
    let password = hook.password.clone().unwrap_or_default();
    HookConfig {
        url: hook.url.clone().unwrap_or_default(),
        method: HttpMethod::parse_lenient(hook.method.as_deref()),
        auth_enabled: !username.is_empty() || !password.is_empty(),
        username,
        password,
    }
}

/// Stored vendor/language/voice. An unknown vendor falls back to the default
/// selection; a missing language or voice is filled in the way a language
/// change would fill it.
fn synthesis_from_wire(app: &Application, catalogs: &ReferenceCatalogs) -> SpeechSynthesisSelection {
    let vendor = match non_empty(app.speech_synthesis_vendor.as_deref())
        .map(SynthesisVendor::from_str)
    {
        Some(Ok(vendor)) => vendor,
        _ => return SpeechSynthesisSelection::default(),
    };
    let language = non_empty(app.speech_synthesis_language.as_deref())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string();
    let voice = non_empty(app.speech_synthesis_voice.as_deref())
        .or_else(|| cascade::default_voice(vendor, &language, catalogs))
        .unwrap_or_default()
        .to_string();
    SpeechSynthesisSelection {
        vendor,
        language,
        voice,
    }
}

fn recognizer_from_wire(app: &Application) -> SpeechRecognizerSelection {
    let vendor = non_empty(app.speech_recognizer_vendor.as_deref())
        .and_then(|v| RecognizerVendor::from_str(v).ok())
        .unwrap_or_default();
    let language = non_empty(app.speech_recognizer_language.as_deref())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string();
    SpeechRecognizerSelection { vendor, language }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
