//! Speech selection cascade.
//!
//! Vendors publish disjoint voice catalogs keyed by language, so changing
//! the vendor or the language has to re-derive the dependent fields or the
//! selection would point at a voice the new vendor does not have.
//! [`reconcile`] is a pure transformation from the previous selection and
//! one change to the next selection.

use crate::catalog::{
    ReferenceCatalogs, SynthesisVendor, DEFAULT_LANGUAGE, GOOGLE_STANDARD_VOICE,
};
use crate::error::CoreError;
use crate::form::{SpeechRecognizerSelection, SpeechSynthesisSelection};

/// One user-initiated change to the synthesis selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisChange {
    Vendor(SynthesisVendor),
    Language(String),
    Voice(String),
}

/// Compute the selection that follows `change`.
///
/// - Vendor: Google with `en-US` takes the standard voice. Otherwise the
///   current language is kept if the new vendor offers it (voice becomes
///   its first voice), else the language falls back to `en-US`.
/// - Language: Google with `en-US` takes the standard voice, otherwise the
///   first voice of the new language. The language must be in the vendor's
///   catalog.
/// - Voice: assigned if the vendor offers it for the current language.
///
/// A language with no voices is treated like a language the vendor does not
/// offer.
pub fn reconcile(
    previous: &SpeechSynthesisSelection,
    change: SynthesisChange,
    catalogs: &ReferenceCatalogs,
) -> Result<SpeechSynthesisSelection, CoreError> {
    match change {
        SynthesisChange::Vendor(vendor) => change_vendor(previous, vendor, catalogs),
        SynthesisChange::Language(language) => {
            change_language(previous.vendor, language, catalogs)
        }
        SynthesisChange::Voice(voice) => change_voice(previous, voice, catalogs),
    }
}

fn change_vendor(
    previous: &SpeechSynthesisSelection,
    vendor: SynthesisVendor,
    catalogs: &ReferenceCatalogs,
) -> Result<SpeechSynthesisSelection, CoreError> {
    if let Some(selection) = google_standard(vendor, &previous.language) {
        return Ok(selection);
    }

    if let Some(lang) = catalogs.find_language(vendor, &previous.language) {
        if let Some(voice) = lang.default_voice() {
            return Ok(SpeechSynthesisSelection {
                vendor,
                language: lang.code.to_string(),
                voice: voice.to_string(),
            });
        }
    }

    if let Some(selection) = google_standard(vendor, DEFAULT_LANGUAGE) {
        return Ok(selection);
    }
    let fallback = catalogs.require_language(vendor, DEFAULT_LANGUAGE)?;
    let voice = fallback
        .default_voice()
        .ok_or_else(|| CoreError::CatalogInconsistency {
            vendor: vendor.as_str(),
            language: fallback.code.to_string(),
        })?;
    Ok(SpeechSynthesisSelection {
        vendor,
        language: fallback.code.to_string(),
        voice: voice.to_string(),
    })
}

fn change_language(
    vendor: SynthesisVendor,
    language: String,
    catalogs: &ReferenceCatalogs,
) -> Result<SpeechSynthesisSelection, CoreError> {
    catalogs.require_language(vendor, &language)?;
    let Some(voice) = default_voice(vendor, &language, catalogs) else {
        return Err(CoreError::CatalogInconsistency {
            vendor: vendor.as_str(),
            language,
        });
    };
    Ok(SpeechSynthesisSelection {
        vendor,
        language,
        voice: voice.to_string(),
    })
}

fn change_voice(
    previous: &SpeechSynthesisSelection,
    voice: String,
    catalogs: &ReferenceCatalogs,
) -> Result<SpeechSynthesisSelection, CoreError> {
    if !catalogs.contains_voice(previous.vendor, &previous.language, &voice) {
        return Err(CoreError::VoiceInconsistency {
            vendor: previous.vendor.as_str(),
            language: previous.language.clone(),
            voice,
        });
    }
    Ok(SpeechSynthesisSelection {
        voice,
        ..previous.clone()
    })
}

/// Voice a language change lands on: the Google standard voice for Google
/// `en-US`, otherwise the language's first catalog voice.
pub fn default_voice(
    vendor: SynthesisVendor,
    language: &str,
    catalogs: &ReferenceCatalogs,
) -> Option<&'static str> {
    if vendor == SynthesisVendor::Google && language == DEFAULT_LANGUAGE {
        return Some(GOOGLE_STANDARD_VOICE);
    }
    catalogs
        .find_language(vendor, language)
        .and_then(|l| l.default_voice())
}

/// The Google `en-US` pairing, which always takes the standard voice.
fn google_standard(vendor: SynthesisVendor, language: &str) -> Option<SpeechSynthesisSelection> {
    (vendor == SynthesisVendor::Google && language == DEFAULT_LANGUAGE).then(|| {
        SpeechSynthesisSelection {
            vendor,
            language: DEFAULT_LANGUAGE.to_string(),
            voice: GOOGLE_STANDARD_VOICE.to_string(),
        }
    })
}

/// Recognizer language change. There is a single recognizer vendor and no
/// voice, so nothing cascades; the language must be in the catalog.
pub fn reconcile_recognizer(
    previous: &SpeechRecognizerSelection,
    language: String,
    catalogs: &ReferenceCatalogs,
) -> Result<SpeechRecognizerSelection, CoreError> {
    if !catalogs.has_recognizer_language(previous.vendor, &language) {
        return Err(CoreError::CatalogInconsistency {
            vendor: previous.vendor.as_str(),
            language,
        });
    }
    Ok(SpeechRecognizerSelection {
        vendor: previous.vendor,
        language,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
