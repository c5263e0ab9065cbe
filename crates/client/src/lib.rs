//! Network and session side of the application configuration form.
//!
//! [`api::ApiClient`] talks to the admin REST backend; [`form_session`]
//! drives one form from mount to submit against any [`api::AdminApi`];
//! [`accounts`] covers the account list and guarded deletion.

pub mod accounts;
pub mod api;
pub mod config;
pub mod error;
pub mod form_session;
pub mod notify;
pub mod session;
