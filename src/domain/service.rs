use std::str::FromStr;

use serde::Serialize;

use crate::domain::{Field, LeadSchema, ValidationError};

pub const OTHER_SERVICE: &str = "other";
pub const FALLBACK_SERVICE_LABEL: &str = "Service Inquiry";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
    strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum KnownService {
    HeavyEquipmentErection,
    IndustrialEquipmentErection,
    MedicalEquipmentErection,
    DataCenterEquipmentErection,
    FactorySetup,
    EquipmentRelocation,
}

impl KnownService {
    pub fn label(self) -> &'static str {
        match self {
            KnownService::HeavyEquipmentErection => "Heavy Equipment Erection",
            KnownService::IndustrialEquipmentErection => "Industrial Equipment Erection",
            KnownService::MedicalEquipmentErection => "Medical Equipment Erection",
            KnownService::DataCenterEquipmentErection => "Data Center Equipment Erection",
            KnownService::FactorySetup => "Factory Setup & Installation",
            KnownService::EquipmentRelocation => "Equipment Relocation",
        }
    }
}

/// The service identifier a lead picked. Any non-empty text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        LeadSchema::standard().ensure(Field::Service, Some(&s))?;
        Ok(Self(s))
    }

    pub fn known(&self) -> Option<KnownService> {
        KnownService::from_str(&self.0).ok()
    }

    pub fn label(&self) -> &'static str {
        self.known()
            .map(KnownService::label)
            .unwrap_or(FALLBACK_SERVICE_LABEL)
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
