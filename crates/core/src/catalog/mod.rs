//! Static speech reference catalogs.
//!
//! Maps each speech synthesis vendor to its supported languages and the
//! ordered voice list for each language, and the recognizer vendor to its
//! supported languages. The first voice of a language is its default.
//! Catalogs are immutable and shared process-wide through
//! [`ReferenceCatalogs::builtin`].

mod aws;
mod google;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Language every vendor is required to offer; used as the cascade fallback.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Distinguished Google voice for `en-US`. Wins over first-in-list selection.
pub const GOOGLE_STANDARD_VOICE: &str = "en-US-Standard-C";

// ---------------------------------------------------------------------------
// Vendors
// ---------------------------------------------------------------------------

/// Text-to-speech vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisVendor {
    #[default]
    Google,
    Aws,
}

impl SynthesisVendor {
    pub const ALL: [SynthesisVendor; 2] = [Self::Google, Self::Aws];

    /// Return the wire-format string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Aws => "aws",
        }
    }

    /// Parse from a wire-format string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "google" => Ok(Self::Google),
            "aws" => Ok(Self::Aws),
            _ => Err(CoreError::Validation(format!(
                "Invalid speech synthesis vendor: '{s}'. Must be one of: google, aws"
            ))),
        }
    }

    /// Display name used by selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Aws => "AWS",
        }
    }
}

impl std::fmt::Display for SynthesisVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speech-to-text vendor. Only Google is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerVendor {
    #[default]
    Google,
}

impl RecognizerVendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "google" => Ok(Self::Google),
            _ => Err(CoreError::Validation(format!(
                "Invalid speech recognizer vendor: '{s}'. Must be: google"
            ))),
        }
    }
}

impl std::fmt::Display for RecognizerVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voice {
    /// Vendor voice identifier, sent on the wire.
    pub value: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SynthesisLanguage {
    pub code: &'static str,
    pub name: &'static str,
    /// The first entry is the cascade default.
    pub voices: &'static [Voice],
}

impl SynthesisLanguage {
    /// First voice in the list; `None` for a language with no voices.
    pub fn default_voice(&self) -> Option<&'static str> {
        self.voices.first().map(|v| v.value)
    }

    pub fn has_voice(&self, voice: &str) -> bool {
        self.voices.iter().any(|v| v.value == voice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecognizerLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

// ---------------------------------------------------------------------------
// ReferenceCatalogs
// ---------------------------------------------------------------------------

/// Read-only lookup tables for synthesis and recognition.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCatalogs {
    google_synthesis: &'static [SynthesisLanguage],
    aws_synthesis: &'static [SynthesisLanguage],
    google_recognizer: &'static [RecognizerLanguage],
}

static BUILTIN: ReferenceCatalogs = ReferenceCatalogs {
    google_synthesis: google::SYNTHESIS,
    aws_synthesis: aws::SYNTHESIS,
    google_recognizer: google::RECOGNIZER,
};

impl ReferenceCatalogs {
    /// Build catalogs from explicit tables. A language without voices is
    /// never selected by the cascade.
    pub const fn new(
        google_synthesis: &'static [SynthesisLanguage],
        aws_synthesis: &'static [SynthesisLanguage],
        google_recognizer: &'static [RecognizerLanguage],
    ) -> Self {
        Self {
            google_synthesis,
            aws_synthesis,
            google_recognizer,
        }
    }

    /// The catalogs shipped with the crate.
    pub fn builtin() -> &'static ReferenceCatalogs {
        &BUILTIN
    }

    /// All synthesis languages offered by `vendor`, in selector order.
    pub fn synthesis_languages(&self, vendor: SynthesisVendor) -> &'static [SynthesisLanguage] {
        match vendor {
            SynthesisVendor::Google => self.google_synthesis,
            SynthesisVendor::Aws => self.aws_synthesis,
        }
    }

    pub fn find_language(
        &self,
        vendor: SynthesisVendor,
        code: &str,
    ) -> Option<&'static SynthesisLanguage> {
        self.synthesis_languages(vendor)
            .iter()
            .find(|l| l.code == code)
    }

    /// Like [`find_language`](Self::find_language) but treats a miss as a
    /// [`CoreError::CatalogInconsistency`].
    pub fn require_language(
        &self,
        vendor: SynthesisVendor,
        code: &str,
    ) -> Result<&'static SynthesisLanguage, CoreError> {
        self.find_language(vendor, code)
            .ok_or_else(|| CoreError::CatalogInconsistency {
                vendor: vendor.as_str(),
                language: code.to_string(),
            })
    }

    /// Voices for `(vendor, code)`; empty when the language is unknown.
    pub fn voice_options(&self, vendor: SynthesisVendor, code: &str) -> &'static [Voice] {
        self.find_language(vendor, code)
            .map(|l| l.voices)
            .unwrap_or(&[])
    }

    /// Whether `(vendor, language, voice)` denotes a consistent triple.
    pub fn contains_voice(&self, vendor: SynthesisVendor, language: &str, voice: &str) -> bool {
        self.find_language(vendor, language)
            .is_some_and(|l| l.has_voice(voice))
    }

    pub fn recognizer_languages(&self, vendor: RecognizerVendor) -> &'static [RecognizerLanguage] {
        match vendor {
            RecognizerVendor::Google => self.google_recognizer,
        }
    }

    pub fn has_recognizer_language(&self, vendor: RecognizerVendor, code: &str) -> bool {
        self.recognizer_languages(vendor)
            .iter()
            .any(|l| l.code == code)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
