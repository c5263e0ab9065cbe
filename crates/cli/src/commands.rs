//! Subcommand execution. Each command returns whether it succeeded.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::broadcast;

use telconf_client::accounts::{AccountsList, DeleteOutcome, ListOutcome};
use telconf_client::api::{AdminApi, ApiClient};
use telconf_client::config::ClientConfig;
use telconf_client::form_session::{ApplicationForm, MountOutcome, SubmitOutcome};
use telconf_client::notify::{NotificationBus, NotificationEvent};
use telconf_client::session::{FileSession, SessionContext};
use telconf_core::account_refs::delete_confirmation_items;
use telconf_core::catalog::{ReferenceCatalogs, SynthesisVendor};
use telconf_core::form::{FormSnapshot, FormTarget};
use telconf_core::navigation::{Navigation, Route};
use telconf_core::selectors::{language_options, voice_options};
use telconf_core::types::Sid;

use crate::args::{AccountsCommand, Command, FormArgs};

struct Services {
    api: Arc<dyn AdminApi>,
    session: Arc<FileSession>,
    notifications: Arc<NotificationBus>,
    notices: broadcast::Receiver<NotificationEvent>,
}

impl Services {
    fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let api = ApiClient::new(config).context("failed to build HTTP client")?;
        let notifications = Arc::new(NotificationBus::default());
        let notices = notifications.subscribe();
        Ok(Self {
            api: Arc::new(api),
            session: Arc::new(FileSession::new(config.token_file.clone())),
            notifications,
            notices,
        })
    }

    /// Print every notice raised so far.
    fn flush_notices(&mut self) {
        while let Ok(event) = self.notices.try_recv() {
            println!("[{}] {}", event.notice.level.as_str(), event.notice.message);
        }
    }
}

pub async fn run(command: Command, config: &ClientConfig) -> anyhow::Result<bool> {
    match command {
        Command::Login { token } => {
            let session = FileSession::new(config.token_file.clone());
            session
                .store_token(&token)
                .with_context(|| format!("failed to write {}", session.path().display()))?;
            tracing::info!(path = %session.path().display(), "Token stored");
            println!("Logged in.");
            Ok(true)
        }
        Command::Logout => {
            FileSession::new(config.token_file.clone()).clear_session();
            println!("Logged out.");
            Ok(true)
        }
        Command::Setup(fields) => run_form(config, FormTarget::Setup, &fields).await,
        Command::Add(fields) => run_form(config, FormTarget::Add, &fields).await,
        Command::Edit {
            application_sid,
            fields,
        } => run_form(config, FormTarget::Edit(Sid::from(application_sid)), &fields).await,
        Command::Accounts(AccountsCommand::List) => list_accounts(config).await,
        Command::Accounts(AccountsCommand::Delete { account_sid, yes }) => {
            delete_account(config, Sid::from(account_sid), yes).await
        }
        Command::Catalog { vendor, language } => {
            print_catalog(vendor, language.as_deref());
            Ok(true)
        }
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

async fn run_form(config: &ClientConfig, target: FormTarget, fields: &FormArgs) -> anyhow::Result<bool> {
    let mut svc = Services::new(config)?;
    let mut form = ApplicationForm::new(
        target,
        svc.api.clone(),
        svc.session.clone(),
        svc.notifications.clone(),
        ReferenceCatalogs::builtin(),
    );

    let mounted = form.mount().await?;
    let ok = match mounted {
        MountOutcome::Ready => {
            for edit in fields.edits() {
                form.edit(edit)?;
            }
            match form.submit().await? {
                SubmitOutcome::Navigated(nav) => {
                    print_navigation(&nav);
                    nav.route != Route::Login
                }
                SubmitOutcome::Invalid(report) => {
                    if let Some(snapshot) = form.snapshot() {
                        print_snapshot(snapshot);
                    }
                    for message in report.messages() {
                        println!("invalid: {message}");
                    }
                    if let Some(focus) = report.focus() {
                        println!("first field to fix: {focus}");
                    }
                    false
                }
                SubmitOutcome::Failed { message } => {
                    println!("error: {message}");
                    false
                }
            }
        }
        MountOutcome::Redirect(nav) => {
            print_navigation(&nav);
            false
        }
        MountOutcome::Failed { message } => {
            println!("error: {message}");
            false
        }
    };

    svc.flush_notices();
    Ok(ok)
}

fn print_snapshot(snapshot: &FormSnapshot) {
    println!("mode:        {}", snapshot.mode);
    println!("name:        {}", snapshot.name);
    println!("call hook:   {} {}", snapshot.call_hook.method, snapshot.call_hook.url);
    println!("status hook: {} {}", snapshot.status_hook.method, snapshot.status_hook.url);
    println!(
        "synthesis:   {} / {} / {}",
        snapshot.synthesis.vendor, snapshot.synthesis.language, snapshot.synthesis.voice
    );
    println!(
        "recognizer:  {} / {}",
        snapshot.recognizer.vendor, snapshot.recognizer.language
    );
    println!(
        "account:     {}",
        snapshot.account_sid.as_ref().map(Sid::as_str).unwrap_or("-")
    );
}

fn print_navigation(nav: &Navigation) {
    println!("-> {}", nav.route.path());
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

async fn list_accounts(config: &ClientConfig) -> anyhow::Result<bool> {
    let mut svc = Services::new(config)?;
    let list = AccountsList::new(svc.api.clone(), svc.session.clone(), svc.notifications.clone());

    let ok = match list.load().await {
        ListOutcome::Loaded(rows) => {
            for row in rows {
                println!(
                    "{}\t{}\t{}\t{}",
                    row.sid,
                    row.name.as_deref().unwrap_or(""),
                    row.sip_realm.as_deref().unwrap_or(""),
                    row.url.as_deref().unwrap_or(""),
                );
            }
            true
        }
        ListOutcome::Redirect(nav) => {
            print_navigation(&nav);
            false
        }
        ListOutcome::Failed => false,
    };

    svc.flush_notices();
    Ok(ok)
}

async fn delete_account(config: &ClientConfig, sid: Sid, confirmed: bool) -> anyhow::Result<bool> {
    let mut svc = Services::new(config)?;
    let list = AccountsList::new(svc.api.clone(), svc.session.clone(), svc.notifications.clone());

    if !confirmed {
        let ListOutcome::Loaded(rows) = list.load().await else {
            svc.flush_notices();
            return Ok(false);
        };
        let Some(row) = rows.iter().find(|r| r.sid == sid) else {
            println!("No account {sid}");
            return Ok(false);
        };
        println!("Delete this account?");
        for (label, value) in delete_confirmation_items(row) {
            println!("  {label:<22}{value}");
        }
        println!("Re-run with --yes to delete.");
        return Ok(false);
    }

    let ok = match list.delete(&sid).await {
        DeleteOutcome::Deleted => {
            println!("Deleted {sid}");
            true
        }
        DeleteOutcome::Redirect(nav) => {
            print_navigation(&nav);
            false
        }
        DeleteOutcome::Blocked(_) | DeleteOutcome::Failed => false,
    };

    svc.flush_notices();
    Ok(ok)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

fn print_catalog(vendor: SynthesisVendor, language: Option<&str>) {
    let catalogs = ReferenceCatalogs::builtin();
    match language {
        None => {
            for lang in language_options(catalogs, vendor) {
                println!("{}\t{}", lang.code, lang.name);
            }
        }
        Some(code) => {
            let voices = voice_options(catalogs, vendor, code);
            if voices.is_empty() {
                println!("{} does not offer {code}", vendor.label());
            }
            for voice in voices {
                println!("{}\t{}", voice.value, voice.name);
            }
        }
    }
}
