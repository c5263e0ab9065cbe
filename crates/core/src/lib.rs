//! Dependent-field configuration engine for telephony applications.
//!
//! Pure logic only; no I/O. The client crate wires these pieces to the
//! backend REST API and the session.
//!
//! - [`catalog`]: static speech synthesis/recognition catalogs.
//! - [`cascade`]: vendor → language → voice reconciliation.
//! - [`hydration`]: initial [`FormSnapshot`](form::FormSnapshot) or redirect.
//! - [`validation`]: ordered full-form validation with focus selection.
//! - [`submission`]: create/update request planning and success navigation.
//! - [`account_refs`]: account deletion reference check.

pub mod account_refs;
pub mod cascade;
pub mod catalog;
pub mod error;
pub mod form;
pub mod hydration;
pub mod navigation;
pub mod resources;
pub mod selectors;
pub mod submission;
pub mod types;
pub mod validation;
