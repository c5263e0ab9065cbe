//! Submission planning.
//!
//! Turns a validated [`FormSnapshot`] into the persistence request (create
//! or update) and decides where the UI goes once that request succeeds.

use crate::error::CoreError;
use crate::form::{FormMode, FormSnapshot};
use crate::navigation::{
    Navigation, Notice, Route, MSG_APPLICATION_CREATED, MSG_APPLICATION_UPDATED,
};
use crate::resources::ApplicationPayload;
use crate::types::Sid;

/// Which resource the request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// `POST /Applications`
    Create,
    /// `PUT /Applications/{sid}`
    Update(Sid),
}

impl SubmitTarget {
    pub fn method(&self) -> &'static str {
        match self {
            Self::Create => "POST",
            Self::Update(_) => "PUT",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Create => "/Applications".to_string(),
            Self::Update(sid) => format!("/Applications/{sid}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPlan {
    pub target: SubmitTarget,
    pub payload: ApplicationPayload,
}

/// Whether submitting in `mode` creates a new application. `setup` creates
/// only when no application existed at hydration time.
pub fn creates_new(mode: FormMode, applications_exist: bool) -> bool {
    match mode {
        FormMode::Add => true,
        FormMode::Setup => !applications_exist,
        FormMode::Edit => false,
    }
}

/// Build the request for `snapshot`. Callers validate first.
pub fn plan_submission(
    snapshot: &FormSnapshot,
    applications_exist: bool,
) -> Result<SubmitPlan, CoreError> {
    let target = if creates_new(snapshot.mode, applications_exist) {
        SubmitTarget::Create
    } else {
        let sid = snapshot.application_sid.clone().ok_or_else(|| {
            CoreError::Internal(format!(
                "{} form has no application to update",
                snapshot.mode
            ))
        })?;
        SubmitTarget::Update(sid)
    };

    Ok(SubmitPlan {
        target,
        payload: build_payload(snapshot),
    })
}

/// Map the snapshot onto the application resource schema.
pub fn build_payload(snapshot: &FormSnapshot) -> ApplicationPayload {
    ApplicationPayload {
        account_sid: snapshot.account_sid.clone(),
        name: snapshot.name.clone(),
        call_hook: snapshot.call_hook.to_payload(),
        call_status_hook: snapshot.status_hook.to_payload(),
        speech_synthesis_vendor: snapshot.synthesis.vendor,
        speech_synthesis_language: snapshot.synthesis.language.clone(),
        speech_synthesis_voice: snapshot.synthesis.voice.clone(),
        speech_recognizer_vendor: snapshot.recognizer.vendor,
        speech_recognizer_language: snapshot.recognizer.language.clone(),
    }
}

/// Where to go after a successful save.
pub fn success_navigation(mode: FormMode) -> Navigation {
    match mode {
        FormMode::Setup => Navigation::to(Route::ConfigureSipTrunk),
        FormMode::Add => Navigation::to(Route::ApplicationList)
            .with_notice(Notice::success(MSG_APPLICATION_CREATED)),
        FormMode::Edit => Navigation::to(Route::ApplicationList)
            .with_notice(Notice::success(MSG_APPLICATION_UPDATED)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
