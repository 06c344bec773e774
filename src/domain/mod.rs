mod contact_details;
mod email;
mod lead_submission;
mod schema;
mod service;

pub use contact_details::{PersonName, PhoneNumber, ProjectMessage};
pub use email::Email;
pub use lead_submission::{LeadForm, LeadSubmission};
pub use schema::{Field, FieldSchema, FieldViolation, LeadSchema, Rule, ServiceOption, ValidationError};
pub use service::{KnownService, ServiceId, FALLBACK_SERVICE_LABEL, OTHER_SERVICE};
