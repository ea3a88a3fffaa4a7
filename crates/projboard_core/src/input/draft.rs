//! Validated project form input.

use crate::input::validation::{validate, Validatable};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: f64 = 1.0;

/// Project form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
    People,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Why raw form input was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    /// A declared constraint did not hold.
    ConstraintFailed(InputField),
    /// Headcount text is not a whole non-negative number.
    NotANumber { field: InputField, raw: String },
}

impl Display for InputValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConstraintFailed(field) => {
                write!(f, "{} does not satisfy its constraints", field.as_str())
            }
            Self::NotANumber { field, raw } => {
                write!(f, "{} must be a whole number, got `{raw}`", field.as_str())
            }
        }
    }
}

impl Error for InputValidationError {}

/// Form input that passed every constraint and may be added to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectDraft {
    /// Validates raw form fields.
    ///
    /// # Contract
    /// - title: required.
    /// - description: required, at least 5 characters.
    /// - people: required, whole number, at least 1. Empty text counts as 0.
    pub fn gather(
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<Self, InputValidationError> {
        if !validate(&Validatable::text(title).required()) {
            return Err(InputValidationError::ConstraintFailed(InputField::Title));
        }
        if !validate(
            &Validatable::text(description)
                .required()
                .min_length(DESCRIPTION_MIN_LENGTH),
        ) {
            return Err(InputValidationError::ConstraintFailed(
                InputField::Description,
            ));
        }

        let people_raw = people.trim();
        let people = if people_raw.is_empty() {
            0
        } else {
            people_raw
                .parse::<u32>()
                .map_err(|_| InputValidationError::NotANumber {
                    field: InputField::People,
                    raw: people_raw.to_string(),
                })?
        };
        if !validate(&Validatable::number(f64::from(people)).required().min(PEOPLE_MIN)) {
            return Err(InputValidationError::ConstraintFailed(InputField::People));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            people,
        })
    }
}
