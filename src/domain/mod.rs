//! Domain types
//!
//! Profile records, their validation rules, and the sample data set.

pub mod profiles;
pub mod sample;
pub mod validation;

// Re-export commonly used types
pub use profiles::*;
pub use validation::{validate_profile, FieldError, ValidationErrors};
