#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::broadcast;

use telconf_client::api::AdminApi;
use telconf_client::error::ApiError;
use telconf_client::form_session::ApplicationForm;
use telconf_client::notify::{NotificationBus, NotificationEvent};
use telconf_client::session::MemorySession;
use telconf_core::catalog::ReferenceCatalogs;
use telconf_core::form::FormTarget;
use telconf_core::navigation::Notice;
use telconf_core::resources::{Account, Application, ApplicationPayload, PhoneNumber, WireHook};
use telconf_core::types::Sid;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn account(sid: &str, name: &str) -> Account {
    Account {
        account_sid: Sid::from(sid),
        name: Some(name.to_string()),
        sip_realm: None,
        registration_hook: None,
    }
}

pub fn application(sid: &str, name: &str, account_sid: &str) -> Application {
    Application {
        application_sid: Sid::from(sid),
        name: Some(name.to_string()),
        account_sid: Some(Sid::from(account_sid)),
        call_hook: Some(WireHook {
            url: Some("https://example.com/call".into()),
            method: Some("post".into()),
            username: None,
            password: None,
        }),
        call_status_hook: Some(WireHook {
            url: Some("https://example.com/status".into()),
            method: Some("GET".into()),
            username: None,
            password: None,
        }),
        speech_synthesis_vendor: Some("google".into()),
        speech_synthesis_language: Some("en-US".into()),
        speech_synthesis_voice: Some("en-US-Standard-C".into()),
        speech_recognizer_vendor: Some("google".into()),
        speech_recognizer_language: Some("en-US".into()),
    }
}

pub fn phone_number(number: &str, account_sid: &str) -> PhoneNumber {
    PhoneNumber {
        phone_number_sid: Some(Sid::from(format!("pn-{number}"))),
        number: number.to_string(),
        account_sid: Some(Sid::from(account_sid)),
    }
}

// ---------------------------------------------------------------------------
// FakeApi
// ---------------------------------------------------------------------------

/// Failure a fake operation answers with.
#[derive(Debug, Clone)]
pub enum FakeFailure {
    Unauthorized,
    Status(u16, Option<&'static str>),
}

impl FakeFailure {
    fn to_error(&self) -> ApiError {
        match self {
            Self::Unauthorized => ApiError::Unauthorized,
            Self::Status(status, message) => ApiError::Status {
                status: *status,
                message: message.map(str::to_string),
            },
        }
    }
}

/// A write the fake received.
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    Create(ApplicationPayload),
    Update(Sid, ApplicationPayload),
    DeleteAccount(Sid),
}

#[derive(Default)]
pub struct FakeApi {
    pub accounts: Vec<Account>,
    pub applications: Vec<Application>,
    pub phone_numbers: Vec<PhoneNumber>,
    pub fail_reads: Option<FakeFailure>,
    pub fail_writes: Option<FakeFailure>,
    /// Yield once inside every read so concurrent observers get a turn.
    pub yield_on_read: bool,
    /// Yield once inside every write before it lands.
    pub yield_on_write: bool,
    calls: Mutex<Vec<&'static str>>,
    writes: Mutex<Vec<Write>>,
}

impl FakeApi {
    pub fn new(accounts: Vec<Account>, applications: Vec<Application>) -> Self {
        Self {
            accounts,
            applications,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.lock().unwrap().clone()
    }

    async fn read<T: Clone>(&self, call: &'static str, data: &[T]) -> Result<Vec<T>, ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.yield_on_read {
            tokio::task::yield_now().await;
        }
        match &self.fail_reads {
            Some(failure) => Err(failure.to_error()),
            None => Ok(data.to_vec()),
        }
    }

    async fn write(&self, call: &'static str, write: Write) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.yield_on_write {
            tokio::task::yield_now().await;
        }
        if let Some(failure) = &self.fail_writes {
            return Err(failure.to_error());
        }
        self.writes.lock().unwrap().push(write);
        Ok(())
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn list_accounts(&self, _token: &str) -> Result<Vec<Account>, ApiError> {
        self.read("list_accounts", &self.accounts).await
    }

    async fn list_applications(&self, _token: &str) -> Result<Vec<Application>, ApiError> {
        self.read("list_applications", &self.applications).await
    }

    async fn list_phone_numbers(&self, _token: &str) -> Result<Vec<PhoneNumber>, ApiError> {
        self.read("list_phone_numbers", &self.phone_numbers).await
    }

    async fn create_application(
        &self,
        _token: &str,
        payload: &ApplicationPayload,
    ) -> Result<(), ApiError> {
        self.write("create_application", Write::Create(payload.clone()))
            .await
    }

    async fn update_application(
        &self,
        _token: &str,
        sid: &Sid,
        payload: &ApplicationPayload,
    ) -> Result<(), ApiError> {
        self.write(
            "update_application",
            Write::Update(sid.clone(), payload.clone()),
        )
        .await
    }

    async fn delete_account(&self, _token: &str, sid: &Sid) -> Result<(), ApiError> {
        self.write("delete_account", Write::DeleteAccount(sid.clone()))
            .await
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

pub struct Harness {
    pub api: Arc<FakeApi>,
    pub session: Arc<MemorySession>,
    pub notifications: Arc<NotificationBus>,
    pub rx: broadcast::Receiver<NotificationEvent>,
}

impl Harness {
    pub fn new(api: FakeApi) -> Self {
        Self::with_session(api, MemorySession::new("test-token"))
    }

    pub fn with_session(api: FakeApi, session: MemorySession) -> Self {
        let notifications = Arc::new(NotificationBus::default());
        let rx = notifications.subscribe();
        Self {
            api: Arc::new(api),
            session: Arc::new(session),
            notifications,
            rx,
        }
    }

    pub fn form(&self, target: FormTarget) -> ApplicationForm {
        ApplicationForm::new(
            target,
            self.api.clone(),
            self.session.clone(),
            self.notifications.clone(),
            ReferenceCatalogs::builtin(),
        )
    }

    /// Every notice published so far.
    pub fn notices(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            notices.push(event.notice);
        }
        notices
    }
}
