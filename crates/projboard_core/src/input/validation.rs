//! Declarative constraint checks.

/// Raw field value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Number(f64),
}

/// Constraint record for one field.
///
/// Length bounds only apply to text; numeric bounds only apply to numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validatable {
    pub value: Option<InputValue>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(InputValue::Text(value.into())),
            ..Self::default()
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            value: Some(InputValue::Number(value)),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }
}

/// Returns whether `input` satisfies every constraint it declares.
pub fn validate(input: &Validatable) -> bool {
    let Some(value) = input.value.as_ref() else {
        return !input.required;
    };

    match value {
        InputValue::Text(text) => {
            let length = text.chars().count();
            if input.required && text.trim().is_empty() {
                return false;
            }
            if input.min_length.is_some_and(|min| length < min) {
                return false;
            }
            if input.max_length.is_some_and(|max| length > max) {
                return false;
            }
            true
        }
        InputValue::Number(number) => {
            // NaN fails any declared bound.
            if input.min.is_some_and(|min| number.is_nan() || *number < min) {
                return false;
            }
            if input.max.is_some_and(|max| number.is_nan() || *number > max) {
                return false;
            }
            true
        }
    }
}
