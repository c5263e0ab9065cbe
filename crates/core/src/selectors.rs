//! Option lists for the form's selectors.

use serde::Serialize;

use crate::catalog::{
    RecognizerLanguage, RecognizerVendor, ReferenceCatalogs, SynthesisLanguage, SynthesisVendor,
    Voice,
};
use crate::form::FormMode;
use crate::resources::Account;
use crate::types::Sid;

/// Placeholder offered when the account has to be chosen explicitly.
pub const ACCOUNT_PLACEHOLDER: &str =
    "-- Choose the account this application will be associated with --";

pub fn language_options(
    catalogs: &ReferenceCatalogs,
    vendor: SynthesisVendor,
) -> &'static [SynthesisLanguage] {
    catalogs.synthesis_languages(vendor)
}

pub fn voice_options(
    catalogs: &ReferenceCatalogs,
    vendor: SynthesisVendor,
    language: &str,
) -> &'static [Voice] {
    catalogs.voice_options(vendor, language)
}

pub fn recognizer_options(
    catalogs: &ReferenceCatalogs,
    vendor: RecognizerVendor,
) -> &'static [RecognizerLanguage] {
    catalogs.recognizer_languages(vendor)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountOption {
    pub sid: Sid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountChoices {
    /// Whether the empty placeholder option is offered.
    pub placeholder: bool,
    pub options: Vec<AccountOption>,
}

/// Account selector contents. The placeholder is offered when there is more
/// than one account, or when editing an application whose account is not
/// the sole account.
pub fn account_choices(
    mode: FormMode,
    accounts: &[Account],
    selected: Option<&Sid>,
) -> AccountChoices {
    let placeholder = accounts.len() > 1
        || (mode == FormMode::Edit
            && accounts
                .first()
                .is_some_and(|a| selected != Some(&a.account_sid)));
    AccountChoices {
        placeholder,
        options: accounts
            .iter()
            .map(|a| AccountOption {
                sid: a.account_sid.clone(),
                name: a.name.clone().unwrap_or_default(),
            })
            .collect(),
    }
}
