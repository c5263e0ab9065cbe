//! Form session flows against an in-memory backend.

mod common;

use assert_matches::assert_matches;

use telconf_client::error::FormError;
use telconf_client::form_session::{MountOutcome, SubmitOutcome, SubmitPhase};
use telconf_client::session::{MemorySession, SessionContext};
use telconf_core::catalog::SynthesisVendor;
use telconf_core::error::CoreError;
use telconf_core::form::{FieldEdit, FieldId, FormTarget, HookKind};
use telconf_core::navigation::{NoticeLevel, Route};
use telconf_core::types::Sid;

use common::{account, application, FakeApi, FakeFailure, Harness, Write};

// ---------------------------------------------------------------------------
// Mount
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mount_without_token_redirects_to_login() {
    let mut h = Harness::with_session(FakeApi::default(), MemorySession::logged_out());
    let mut form = h.form(FormTarget::Add);

    let outcome = form.mount().await.unwrap();

    let nav = assert_matches!(outcome, MountOutcome::Redirect(nav) => nav);
    assert_eq!(nav.route, Route::Login);
    assert!(h.api.calls().is_empty());
    let notices = h.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, "You must log in to view that page.");
}

#[tokio::test]
async fn add_with_single_account_preselects_it() {
    let h = Harness::new(FakeApi::new(vec![account("a1", "Main")], vec![]));
    let mut form = h.form(FormTarget::Add);

    assert_eq!(form.mount().await.unwrap(), MountOutcome::Ready);

    let snapshot = form.snapshot().unwrap();
    assert_eq!(snapshot.account_sid, Some(Sid::from("a1")));
    assert!(!form.account_choices().placeholder);
    assert_eq!(h.api.calls(), vec!["list_accounts", "list_applications"]);
}

#[tokio::test]
async fn add_with_many_accounts_forces_choice() {
    let h = Harness::new(FakeApi::new(
        vec![account("a1", "Main"), account("a2", "Lab")],
        vec![],
    ));
    let mut form = h.form(FormTarget::Add);
    form.mount().await.unwrap();

    assert_eq!(form.snapshot().unwrap().account_sid, None);
    let choices = form.account_choices();
    assert!(choices.placeholder);
    assert_eq!(choices.options.len(), 2);
}

#[tokio::test]
async fn setup_with_two_accounts_redirects() {
    let mut h = Harness::new(FakeApi::new(
        vec![account("a1", "Main"), account("a2", "Lab")],
        vec![],
    ));
    let mut form = h.form(FormTarget::Setup);

    let nav = assert_matches!(form.mount().await.unwrap(), MountOutcome::Redirect(nav) => nav);
    assert_eq!(nav.route, Route::ApplicationList);
    assert_eq!(
        nav.notice.unwrap().message,
        "That page is only accessible during setup"
    );
    assert!(form.snapshot().is_none());
    assert_eq!(h.notices().len(), 1);
}

#[tokio::test]
async fn edit_of_missing_application_redirects() {
    let mut h = Harness::new(FakeApi::new(
        vec![account("a1", "Main")],
        vec![application("app-1", "IVR", "a1")],
    ));
    let mut form = h.form(FormTarget::Edit(Sid::from("app-404")));

    let nav = assert_matches!(form.mount().await.unwrap(), MountOutcome::Redirect(nav) => nav);
    assert_eq!(nav.route, Route::ApplicationList);
    assert!(form.snapshot().is_none());

    let notices = h.notices();
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "That application does not exist");
}

#[tokio::test]
async fn mount_unauthorized_expires_session() {
    let mut api = FakeApi::new(vec![account("a1", "Main")], vec![]);
    api.fail_reads = Some(FakeFailure::Unauthorized);
    let mut h = Harness::new(api);
    let mut form = h.form(FormTarget::Add);

    let nav = assert_matches!(form.mount().await.unwrap(), MountOutcome::Redirect(nav) => nav);
    assert_eq!(nav.route, Route::Login);
    assert_eq!(h.session.token(), None);
    assert_eq!(
        h.notices()[0].message,
        "Your session has expired. Please log in and try again"
    );
}

#[tokio::test]
async fn mount_failure_reports_generic_message() {
    let mut api = FakeApi::new(vec![], vec![]);
    api.fail_reads = Some(FakeFailure::Status(500, None));
    let mut h = Harness::new(api);
    let mut form = h.form(FormTarget::Add);

    let outcome = form.mount().await.unwrap();

    assert_eq!(
        outcome,
        MountOutcome::Failed {
            message: "Something went wrong, please try again".into()
        }
    );
    assert!(form.snapshot().is_none());
    assert!(!*form.loading().borrow());
    assert_eq!(h.notices()[0].message, "Unable to get accounts");
    assert!(h.session.token().is_some());
}

#[tokio::test]
async fn mount_failure_prefers_server_message() {
    let mut api = FakeApi::new(vec![], vec![]);
    api.fail_reads = Some(FakeFailure::Status(503, Some("maintenance window")));
    let mut h = Harness::new(api);
    h.form(FormTarget::Add).mount().await.unwrap();
    assert_eq!(h.notices()[0].message, "maintenance window");
}

#[tokio::test]
async fn loading_flag_spans_the_reads() {
    let mut api = FakeApi::new(vec![account("a1", "Main")], vec![]);
    api.yield_on_read = true;
    let h = Harness::new(api);
    let mut form = h.form(FormTarget::Add);
    let mut rx = form.loading();

    let (outcome, raised) = tokio::join!(form.mount(), async {
        rx.wait_for(|loading| *loading).await.is_ok()
    });

    assert_eq!(outcome.unwrap(), MountOutcome::Ready);
    assert!(raised);
    assert!(!*form.loading().borrow());
}

#[tokio::test]
async fn edit_hydrates_from_record() {
    let mut app = application("app-1", "IVR", "a1");
    if let Some(hook) = app.call_hook.as_mut() {
        hook.username = Some("bob".into());
        hook.password = Some("secret".into());
    }
    let h = Harness::new(FakeApi::new(vec![account("a1", "Main")], vec![app]));
    let mut form = h.form(FormTarget::Edit(Sid::from("app-1")));
    form.mount().await.unwrap();

    let snapshot = form.snapshot().unwrap();
    assert_eq!(snapshot.name, "IVR");
    assert!(snapshot.call_hook.auth_enabled);
    assert!(!snapshot.status_hook.auth_enabled);
    assert_eq!(snapshot.status_hook.method.as_str(), "GET");
    assert!(!form.account_choices().placeholder);
}

// ---------------------------------------------------------------------------
// Edits
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_before_mount_is_rejected() {
    let h = Harness::new(FakeApi::default());
    let mut form = h.form(FormTarget::Add);
    assert_matches!(
        form.edit(FieldEdit::Name("x".into())),
        Err(FormError::NotMounted)
    );
}

#[tokio::test]
async fn vendor_edit_cascades() {
    let h = Harness::new(FakeApi::new(vec![account("a1", "Main")], vec![]));
    let mut form = h.form(FormTarget::Add);
    form.mount().await.unwrap();

    form.edit(FieldEdit::SynthesisVendor(SynthesisVendor::Aws)).unwrap();
    let synthesis = &form.snapshot().unwrap().synthesis;
    assert_eq!(synthesis.language, "en-US");
    assert_eq!(synthesis.voice, "Joanna");

    form.edit(FieldEdit::SynthesisLanguage("de-DE".into())).unwrap();
    form.edit(FieldEdit::SynthesisVendor(SynthesisVendor::Google)).unwrap();
    let synthesis = &form.snapshot().unwrap().synthesis;
    assert_eq!(synthesis.language, "de-DE");
    assert!(synthesis.voice.starts_with("de-DE"));
}

#[tokio::test]
async fn inconsistent_language_is_fatal_and_leaves_snapshot() {
    let h = Harness::new(FakeApi::new(vec![account("a1", "Main")], vec![]));
    let mut form = h.form(FormTarget::Add);
    form.mount().await.unwrap();
    let before = form.snapshot().unwrap().clone();

    let err = form
        .edit(FieldEdit::SynthesisLanguage("cy-GB".into()))
        .unwrap_err();

    assert_matches!(err, FormError::Core(CoreError::CatalogInconsistency { .. }));
    assert_eq!(form.snapshot().unwrap(), &before);
}

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn half_filled_credentials_block_submission() {
    let h = Harness::new(FakeApi::new(vec![account("a1", "Main")], vec![]));
    let mut form = h.form(FormTarget::Add);
    form.mount().await.unwrap();
    for edit in [
        FieldEdit::Name("IVR".into()),
        FieldEdit::HookUrl(HookKind::Call, "https://example.com/call".into()),
        FieldEdit::HookUrl(HookKind::Status, "https://example.com/status".into()),
        FieldEdit::HookAuthEnabled(HookKind::Call, true),
        FieldEdit::HookUsername(HookKind::Call, "bob".into()),
        FieldEdit::HookPassword(HookKind::Call, String::new()),
    ] {
        form.edit(edit).unwrap();
    }

    let report = assert_matches!(form.submit().await.unwrap(), SubmitOutcome::Invalid(r) => r);

    assert_eq!(report.violations().len(), 1);
    assert!(report.messages()[0].contains("Calling Webhook"));
    assert_eq!(report.focus(), Some(FieldId::CallHookPassword));
    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert!(form.snapshot().unwrap().error.is_some());
    assert_eq!(h.api.calls(), vec!["list_accounts", "list_applications"]);
}

#[tokio::test]
async fn add_creates_and_navigates() {
    let mut h = Harness::new(FakeApi::new(vec![account("a1", "Main")], vec![]));
    let mut form = h.form(FormTarget::Add);
    form.mount().await.unwrap();
    form.edit(FieldEdit::Name("IVR".into())).unwrap();
    form.edit(FieldEdit::HookUrl(HookKind::Call, "https://example.com/call".into()))
        .unwrap();
    form.edit(FieldEdit::HookUrl(HookKind::Status, "https://example.com/status".into()))
        .unwrap();

    let nav = assert_matches!(form.submit().await.unwrap(), SubmitOutcome::Navigated(nav) => nav);

    assert_eq!(nav.route, Route::ApplicationList);
    assert!(form.snapshot().is_none());
    let payload = assert_matches!(&h.api.writes()[..], [Write::Create(p)] => p.clone());
    assert_eq!(payload.account_sid, Some(Sid::from("a1")));
    assert_eq!(payload.call_hook.username, None);
    assert_eq!(
        h.notices().last().unwrap().message,
        "Application created successfully"
    );
}

#[tokio::test]
async fn successful_update_reports_updated() {
    let mut h = Harness::new(FakeApi::new(
        vec![account("a1", "Main")],
        vec![application("app-1", "IVR", "a1")],
    ));
    let mut form = h.form(FormTarget::Edit(Sid::from("app-1")));
    form.mount().await.unwrap();
    form.edit(FieldEdit::Name("IVR v2".into())).unwrap();

    let nav = assert_matches!(form.submit().await.unwrap(), SubmitOutcome::Navigated(nav) => nav);

    assert_eq!(nav.route, Route::ApplicationList);
    let notice = nav.notice.unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Application updated successfully");
    assert_matches!(
        &h.api.writes()[..],
        [Write::Update(sid, payload)] if sid.as_str() == "app-1" && payload.name == "IVR v2"
    );
    assert_eq!(h.notices().len(), 1);
}

#[tokio::test]
async fn setup_without_application_creates_default() {
    let h = Harness::new(FakeApi::new(vec![account("a1", "Main")], vec![]));
    let mut form = h.form(FormTarget::Setup);
    form.mount().await.unwrap();
    assert_eq!(form.snapshot().unwrap().name, "default application");
    form.edit(FieldEdit::HookUrl(HookKind::Call, "https://example.com/call".into()))
        .unwrap();
    form.edit(FieldEdit::HookUrl(HookKind::Status, "https://example.com/status".into()))
        .unwrap();

    let nav = assert_matches!(form.submit().await.unwrap(), SubmitOutcome::Navigated(nav) => nav);

    assert_eq!(nav.route, Route::ConfigureSipTrunk);
    assert_eq!(nav.notice, None);
    assert_matches!(&h.api.writes()[..], [Write::Create(p)] if p.name == "default application");
}

#[tokio::test]
async fn setup_with_existing_application_updates_it() {
    let h = Harness::new(FakeApi::new(
        vec![account("a1", "Main")],
        vec![application("app-1", "IVR", "a1")],
    ));
    let mut form = h.form(FormTarget::Setup);
    form.mount().await.unwrap();

    assert_matches!(form.submit().await.unwrap(), SubmitOutcome::Navigated(_));
    assert_matches!(&h.api.writes()[..], [Write::Update(sid, _)] if sid.as_str() == "app-1");
}

#[tokio::test]
async fn dropped_submit_returns_phase_to_idle() {
    let mut api = FakeApi::new(
        vec![account("a1", "Main")],
        vec![application("app-1", "IVR", "a1")],
    );
    api.yield_on_write = true;
    let h = Harness::new(api);
    let mut form = h.form(FormTarget::Edit(Sid::from("app-1")));
    form.mount().await.unwrap();
    let phase = form.phase_updates();

    {
        let mut submit = std::pin::pin!(form.submit());
        assert!(futures::poll!(submit.as_mut()).is_pending());
        assert_eq!(*phase.borrow(), SubmitPhase::Submitting);
    }

    assert_eq!(form.phase(), SubmitPhase::Idle);
    assert!(h.api.writes().is_empty());
    assert!(form.snapshot().is_some());
}

#[tokio::test]
async fn empty_account_is_not_submitted() {
    let h = Harness::new(FakeApi::new(
        vec![account("a1", "Main")],
        vec![application("app-1", "IVR", "")],
    ));
    let mut form = h.form(FormTarget::Edit(Sid::from("app-1")));
    form.mount().await.unwrap();
    assert_eq!(form.snapshot().unwrap().account_sid, None);

    let report = assert_matches!(form.submit().await.unwrap(), SubmitOutcome::Invalid(r) => r);
    assert_eq!(report.focus(), Some(FieldId::Account));
    assert!(h.api.writes().is_empty());
}

#[tokio::test]
async fn voice_outside_catalog_is_rejected() {
    let h = Harness::new(FakeApi::new(vec![account("a1", "Main")], vec![]));
    let mut form = h.form(FormTarget::Add);
    form.mount().await.unwrap();
    let before = form.snapshot().unwrap().clone();

    let err = form
        .edit(FieldEdit::SynthesisVoice("Joanna".into()))
        .unwrap_err();

    assert_matches!(err, FormError::Core(CoreError::VoiceInconsistency { .. }));
    assert_eq!(form.snapshot().unwrap(), &before);
}

#[tokio::test]
async fn submit_failure_keeps_form_open() {
    let mut api = FakeApi::new(
        vec![account("a1", "Main")],
        vec![application("app-1", "IVR", "a1")],
    );
    api.fail_writes = Some(FakeFailure::Status(422, Some("call_hook url is invalid")));
    let h = Harness::new(api);
    let mut form = h.form(FormTarget::Edit(Sid::from("app-1")));
    form.mount().await.unwrap();
    form.edit(FieldEdit::Name("IVR v2".into())).unwrap();

    let outcome = form.submit().await.unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "call_hook url is invalid".into()
        }
    );
    let snapshot = form.snapshot().unwrap();
    assert_eq!(snapshot.name, "IVR v2");
    assert_eq!(
        snapshot.error.as_ref().unwrap().messages(),
        vec!["call_hook url is invalid"]
    );
    assert_eq!(form.phase(), SubmitPhase::Idle);
}

#[tokio::test]
async fn submit_failure_without_message_is_generic() {
    let mut api = FakeApi::new(vec![account("a1", "Main")], vec![application("app-1", "IVR", "a1")]);
    api.fail_writes = Some(FakeFailure::Status(500, None));
    let h = Harness::new(api);
    let mut form = h.form(FormTarget::Setup);
    form.mount().await.unwrap();

    assert_eq!(
        form.submit().await.unwrap(),
        SubmitOutcome::Failed {
            message: "Something went wrong, please try again".into()
        }
    );
}

#[tokio::test]
async fn submit_unauthorized_expires_session() {
    let mut api = FakeApi::new(vec![account("a1", "Main")], vec![application("app-1", "IVR", "a1")]);
    api.fail_writes = Some(FakeFailure::Unauthorized);
    let mut h = Harness::new(api);
    let mut form = h.form(FormTarget::Setup);
    form.mount().await.unwrap();

    let nav = assert_matches!(form.submit().await.unwrap(), SubmitOutcome::Navigated(nav) => nav);

    assert_eq!(nav.route, Route::Login);
    assert_eq!(h.session.token(), None);
    assert!(form.snapshot().is_none());
    assert_eq!(
        h.notices().last().unwrap().message,
        "Your session has expired. Please log in and try again"
    );
}

// ---------------------------------------------------------------------------
// Cancel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cancel_only_in_edit() {
    let mut h = Harness::new(FakeApi::new(
        vec![account("a1", "Main")],
        vec![application("app-1", "IVR", "a1")],
    ));

    let mut add = h.form(FormTarget::Add);
    add.mount().await.unwrap();
    assert_eq!(add.cancel(), None);

    let mut edit = h.form(FormTarget::Edit(Sid::from("app-1")));
    edit.mount().await.unwrap();
    let nav = edit.cancel().unwrap();
    assert_eq!(nav.route, Route::ApplicationList);
    assert!(edit.snapshot().is_none());

    let notice = h.notices().pop().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "Changes canceled");
}
