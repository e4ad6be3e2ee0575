//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns persistence, `form` models a submission, and `auth` runs
//! the signup/signin/logout sequences on top of both.

pub mod auth;
pub mod form;
pub mod session;
