//! Reusable form components.
//!
//! ARCHITECTURE
//! ============
//! Components render state owned by pages; they hold no state of their own
//! beyond presentation toggles such as password visibility.

pub mod form_banner;
pub mod password_field;
pub mod text_field;
