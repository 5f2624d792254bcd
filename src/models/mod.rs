//! Data models for form fields and generated tokens.
//!
//! These types are independent of UI and validation logic.

pub mod field;
pub mod token;

pub use field::{FieldKind, FieldName};
pub use token::{TokenColor, TokenSet};
