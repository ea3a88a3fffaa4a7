//! Form input constraints applied before a project reaches the store.
//!
//! # Responsibility
//! - Evaluate declarative constraint records against raw field values.
//! - Turn raw form fields into a validated `ProjectDraft`.
//!
//! # Invariants
//! - Store operations never re-validate; callers go through `ProjectDraft`.

pub mod draft;
pub mod validation;

pub use draft::{InputField, InputValidationError, ProjectDraft};
pub use validation::{validate, InputValue, Validatable};
