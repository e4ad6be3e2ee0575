//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and the submission sequence to `state::auth`.

pub mod dashboard;
pub mod signin;
pub mod signup;
