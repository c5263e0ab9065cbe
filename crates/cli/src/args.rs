use clap::{Args, Parser, Subcommand};

use telconf_core::catalog::SynthesisVendor;
use telconf_core::form::{FieldEdit, HookKind};
use telconf_core::resources::HttpMethod;
use telconf_core::types::Sid;

#[derive(Debug, Parser)]
#[command(name = "telconf", version, about = "Configure telephony applications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the bearer token used for every request.
    Login {
        #[arg(long, env = "TELCONF_TOKEN")]
        token: String,
    },
    /// Forget the stored token.
    Logout,
    /// Configure the first application during initial setup.
    Setup(FormArgs),
    /// Create a new application.
    Add(FormArgs),
    /// Update an existing application.
    Edit {
        application_sid: String,
        #[command(flatten)]
        fields: FormArgs,
    },
    #[command(subcommand)]
    Accounts(AccountsCommand),
    /// List synthesis languages, or the voices of one language.
    Catalog {
        #[arg(long, value_parser = parse_vendor, default_value = "google")]
        vendor: SynthesisVendor,
        #[arg(long)]
        language: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AccountsCommand {
    List,
    Delete {
        account_sid: String,
        /// Delete without printing the confirmation summary first.
        #[arg(long)]
        yes: bool,
    },
}

/// Field values applied on top of the hydrated form.
#[derive(Debug, Default, Args)]
pub struct FormArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub call_hook_url: Option<String>,
    #[arg(long, value_parser = parse_method)]
    pub call_hook_method: Option<HttpMethod>,
    #[arg(long)]
    pub call_hook_user: Option<String>,
    #[arg(long)]
    pub call_hook_pass: Option<String>,
    /// Drop the calling webhook credentials.
    #[arg(long, conflicts_with_all = ["call_hook_user", "call_hook_pass"])]
    pub call_hook_no_auth: bool,

    #[arg(long)]
    pub status_hook_url: Option<String>,
    #[arg(long, value_parser = parse_method)]
    pub status_hook_method: Option<HttpMethod>,
    #[arg(long)]
    pub status_hook_user: Option<String>,
    #[arg(long)]
    pub status_hook_pass: Option<String>,
    /// Drop the call status webhook credentials.
    #[arg(long, conflicts_with_all = ["status_hook_user", "status_hook_pass"])]
    pub status_hook_no_auth: bool,

    #[arg(long, value_parser = parse_vendor)]
    pub synthesis_vendor: Option<SynthesisVendor>,
    #[arg(long)]
    pub synthesis_language: Option<String>,
    #[arg(long)]
    pub synthesis_voice: Option<String>,

    #[arg(long)]
    pub recognizer_language: Option<String>,

    #[arg(long)]
    pub account: Option<String>,
}

impl FormArgs {
    /// Edits in the order a user would make them: identity, hooks, then
    /// vendor before language before voice so the cascade runs as on screen.
    pub fn edits(&self) -> Vec<FieldEdit> {
        let mut edits = Vec::new();
        if let Some(name) = &self.name {
            edits.push(FieldEdit::Name(name.clone()));
        }
        push_hook_edits(
            &mut edits,
            HookKind::Call,
            &self.call_hook_url,
            self.call_hook_method,
            &self.call_hook_user,
            &self.call_hook_pass,
            self.call_hook_no_auth,
        );
        push_hook_edits(
            &mut edits,
            HookKind::Status,
            &self.status_hook_url,
            self.status_hook_method,
            &self.status_hook_user,
            &self.status_hook_pass,
            self.status_hook_no_auth,
        );
        if let Some(vendor) = self.synthesis_vendor {
            edits.push(FieldEdit::SynthesisVendor(vendor));
        }
        if let Some(language) = &self.synthesis_language {
            edits.push(FieldEdit::SynthesisLanguage(language.clone()));
        }
        if let Some(voice) = &self.synthesis_voice {
            edits.push(FieldEdit::SynthesisVoice(voice.clone()));
        }
        if let Some(language) = &self.recognizer_language {
            edits.push(FieldEdit::RecognizerLanguage(language.clone()));
        }
        if let Some(account) = &self.account {
            edits.push(FieldEdit::Account(Sid::present(Some(Sid::from(
                account.as_str(),
            )))));
        }
        edits
    }
}

fn push_hook_edits(
    edits: &mut Vec<FieldEdit>,
    kind: HookKind,
    url: &Option<String>,
    method: Option<HttpMethod>,
    username: &Option<String>,
    password: &Option<String>,
    no_auth: bool,
) {
    if let Some(url) = url {
        edits.push(FieldEdit::HookUrl(kind, url.clone()));
    }
    if let Some(method) = method {
        edits.push(FieldEdit::HookMethod(kind, method));
    }
    if no_auth {
        edits.push(FieldEdit::HookAuthEnabled(kind, false));
    } else if username.is_some() || password.is_some() {
        edits.push(FieldEdit::HookAuthEnabled(kind, true));
        if let Some(username) = username {
            edits.push(FieldEdit::HookUsername(kind, username.clone()));
        }
        if let Some(password) = password {
            edits.push(FieldEdit::HookPassword(kind, password.clone()));
        }
    }
}

fn parse_vendor(s: &str) -> Result<SynthesisVendor, String> {
    SynthesisVendor::from_str(&s.to_ascii_lowercase()).map_err(|e| e.to_string())
}

fn parse_method(s: &str) -> Result<HttpMethod, String> {
    match s.to_ascii_uppercase().as_str() {
        "GET" => Ok(HttpMethod::Get),
        "POST" => Ok(HttpMethod::Post),
        _ => Err(format!("Invalid HTTP method: '{s}'. Must be one of: GET, POST")),
    }
}
