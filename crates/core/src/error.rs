use crate::types::Sid;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Sid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A selected language is missing from a vendor catalog. The selectors
    /// only offer catalog members, so reaching this is a programming error.
    #[error("Catalog inconsistency: language '{language}' is not offered by {vendor}")]
    CatalogInconsistency {
        vendor: &'static str,
        language: String,
    },

    /// A selected voice is missing from the language's catalog entry.
    #[error("Catalog inconsistency: voice '{voice}' is not offered by {vendor} for '{language}'")]
    VoiceInconsistency {
        vendor: &'static str,
        language: String,
        voice: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
