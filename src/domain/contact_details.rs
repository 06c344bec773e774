use serde::Serialize;

use crate::domain::{Field, LeadSchema, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        LeadSchema::standard().ensure(Field::Name, Some(&s))?;
        Ok(Self(s))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A ten digit local phone number, without country prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        LeadSchema::standard().ensure(Field::Phone, Some(&s))?;
        Ok(Self(s))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectMessage(String);

impl ProjectMessage {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        LeadSchema::standard().ensure(Field::Message, Some(&s))?;
        Ok(Self(s))
    }
}

impl AsRef<str> for ProjectMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
