use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use strum::IntoEnumIterator;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::service::{KnownService, OTHER_SERVICE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// At least `min` grapheme clusters.
    MinLength { min: usize, message: &'static str },
    /// Exactly `length` grapheme clusters.
    ExactLength { length: usize, message: &'static str },
    DigitsOnly { message: &'static str },
    EmailAddress { message: &'static str },
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match self {
            Rule::MinLength { message, .. }
            | Rule::ExactLength { message, .. }
            | Rule::DigitsOnly { message }
            | Rule::EmailAddress { message } => *message,
        }
    }

    pub fn holds(&self, value: &str) -> bool {
        match self {
            Rule::MinLength { min, .. } => value.graphemes(true).count() >= *min,
            Rule::ExactLength { length, .. } => value.graphemes(true).count() == *length,
            Rule::DigitsOnly { .. } => !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()),
            Rule::EmailAddress { .. } => validator::validate_email(value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    pub field: Field,
    pub required_message: &'static str,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadSchema {
    pub fields: Vec<FieldSchema>,
    pub services: Vec<ServiceOption>,
}

static STANDARD: Lazy<LeadSchema> = Lazy::new(|| LeadSchema {
    fields: vec![
        FieldSchema {
            field: Field::Name,
            required_message: "Required",
            rules: vec![Rule::MinLength {
                min: 2,
                message: "Name must be at least 2 characters.",
            }],
        },
        FieldSchema {
            field: Field::Email,
            required_message: "Required",
            rules: vec![Rule::EmailAddress {
                message: "Please enter a valid email address.",
            }],
        },
        FieldSchema {
            field: Field::Phone,
            required_message: "Required",
            rules: vec![
                Rule::ExactLength {
                    length: 10,
                    message: "Phone number must be exactly 10 digits.",
                },
                Rule::DigitsOnly {
                    message: "Phone number can only contain digits.",
                },
            ],
        },
        FieldSchema {
            field: Field::Service,
            required_message: "Please select a service.",
            rules: vec![Rule::MinLength {
                min: 1,
                message: "Please select a service.",
            }],
        },
        FieldSchema {
            field: Field::Message,
            required_message: "Required",
            rules: vec![Rule::MinLength {
                min: 10,
                message: "Please describe your requirements in at least 10 characters.",
            }],
        },
    ],
    services: KnownService::iter()
        .map(|service| ServiceOption {
            value: service.into(),
            label: service.label(),
        })
        .chain(std::iter::once(ServiceOption {
            value: OTHER_SERVICE,
            label: "Other Services",
        }))
        .collect(),
});

impl LeadSchema {
    pub fn standard() -> &'static LeadSchema {
        &STANDARD
    }

    fn field(&self, field: Field) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Runs every rule for `field`; `None` stands for an absent value.
    pub fn check(&self, field: Field, value: Option<&str>) -> ValidationError {
        let Some(schema) = self.field(field) else {
            return ValidationError::default();
        };

        let violations = match value {
            None => vec![FieldViolation {
                field,
                message: schema.required_message,
            }],
            Some(value) => schema
                .rules
                .iter()
                .filter(|rule| !rule.holds(value))
                .map(|rule| FieldViolation {
                    field,
                    message: rule.message(),
                })
                .collect(),
        };

        ValidationError { violations }
    }

    pub fn ensure(&self, field: Field, value: Option<&str>) -> Result<(), ValidationError> {
        let errors = self.check(field, value);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: Field,
    pub message: &'static str,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule violation found in one input, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn merge(&mut self, other: ValidationError) {
        self.violations.extend(other.violations);
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.violations.iter().map(|v| v.field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
