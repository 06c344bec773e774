use serde::{Deserialize, Serialize};

use crate::domain::{
    Email, Field, LeadSchema, PersonName, PhoneNumber, ProjectMessage, ServiceId, ValidationError,
};

/// Untrusted lead input as it arrives from a form. Absent fields stay `None`
/// so they can be reported as missing rather than as too short.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    pub name: PersonName,
    pub email: Email,
    pub phone: PhoneNumber,
    pub service: ServiceId,
    pub message: ProjectMessage,
}

impl TryFrom<LeadForm> for LeadSubmission {
    type Error = ValidationError;

    fn try_from(form: LeadForm) -> Result<Self, Self::Error> {
        let mut errors = ValidationError::default();

        let name = parse_field(Field::Name, form.name, PersonName::parse, &mut errors);
        let email = parse_field(Field::Email, form.email, Email::parse, &mut errors);
        let phone = parse_field(Field::Phone, form.phone, PhoneNumber::parse, &mut errors);
        let service = parse_field(Field::Service, form.service, ServiceId::parse, &mut errors);
        let message = parse_field(Field::Message, form.message, ProjectMessage::parse, &mut errors);

        match (name, email, phone, service, message) {
            (Some(name), Some(email), Some(phone), Some(service), Some(message)) => Ok(Self {
                name,
                email,
                phone,
                service,
                message,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_field<T>(
    field: Field,
    value: Option<String>,
    parse: fn(String) -> Result<T, ValidationError>,
    errors: &mut ValidationError,
) -> Option<T> {
    let parsed = match value {
        Some(value) => parse(value),
        None => Err(LeadSchema::standard().check(field, None)),
    };

    parsed.map_err(|e| errors.merge(e)).ok()
}
