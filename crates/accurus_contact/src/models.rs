// --- File: crates/accurus_contact/src/models.rs ---
use crate::error::ContactError;
use crate::schedule::TimeSlot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preferred way to be contacted back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ContactMethod {
    /// Nothing selected yet.
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Email,
    Phone,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Unspecified => "",
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactMethod {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(ContactMethod::Unspecified),
            "Email" => Ok(ContactMethod::Email),
            "Phone" => Ok(ContactMethod::Phone),
            other => Err(ContactError::InvalidContactMethod(other.to_string())),
        }
    }
}

/// Every user-editable value of the contact form, including the three
/// scheduling selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ClinicName,
    FullName,
    Email,
    Phone,
    ContactMethod,
    Message,
    Service,
    AuditDate,
    AuditTime,
}

impl FormField {
    /// In template-parameter order.
    pub const ALL: [FormField; 9] = [
        FormField::FullName,
        FormField::ClinicName,
        FormField::Email,
        FormField::Phone,
        FormField::ContactMethod,
        FormField::Service,
        FormField::Message,
        FormField::AuditDate,
        FormField::AuditTime,
    ];

    /// Wire name, shared by the JSON body and the email template.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::ClinicName => "clinicName",
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::ContactMethod => "contactMethod",
            FormField::Message => "message",
            FormField::Service => "service",
            FormField::AuditDate => "auditDate",
            FormField::AuditTime => "auditTime",
        }
    }
}

impl FromStr for FormField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ContactError::UnknownField(s.to_string()))
    }
}

/// The values captured by the contact form.
///
/// Also the JSON body of `POST /contact/submit`; missing keys default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    #[cfg_attr(feature = "openapi", schema(example = "Maple Family Clinic"))]
    pub clinic_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Dana Smith"))]
    pub full_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "dana@example.com"))]
    pub email: String,
    pub phone: String,
    pub contact_method: ContactMethod,
    pub message: String,
    /// Plan the visitor arrived with, see the `plan` query parameter.
    pub service: String,
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-10"))]
    pub audit_date: String,
    #[cfg_attr(feature = "openapi", schema(example = "10:30 AM"))]
    pub audit_time: String,
}

impl ContactSubmission {
    /// Current value of `field` as text.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ClinicName => &self.clinic_name,
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::ContactMethod => self.contact_method.as_str(),
            FormField::Message => &self.message,
            FormField::Service => &self.service,
            FormField::AuditDate => &self.audit_date,
            FormField::AuditTime => &self.audit_time,
        }
    }

    /// Replaces exactly one field. On error nothing changes.
    pub fn set(&mut self, field: FormField, value: &str) -> Result<(), ContactError> {
        match field {
            FormField::ClinicName => self.clinic_name = value.to_string(),
            FormField::FullName => self.full_name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Phone => self.phone = value.to_string(),
            FormField::ContactMethod => self.contact_method = value.parse()?,
            FormField::Message => self.message = value.to_string(),
            FormField::Service => self.service = value.to_string(),
            FormField::AuditDate => self.audit_date = value.to_string(),
            FormField::AuditTime => {
                if !value.is_empty() && TimeSlot::parse(value).is_none() {
                    return Err(ContactError::InvalidTimeSlot(value.to_string()));
                }
                self.audit_time = value.to_string();
            }
        }
        Ok(())
    }

    /// Checks the invariants a deserialized body may violate.
    pub fn validate(&self) -> Result<(), ContactError> {
        if !self.audit_time.is_empty() && TimeSlot::parse(&self.audit_time).is_none() {
            return Err(ContactError::InvalidTimeSlot(self.audit_time.clone()));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == ContactSubmission::default()
    }
}

/// Query string of the contact page.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct PlanQuery {
    /// Pricing plan the visitor clicked through from, pre-selects the service.
    #[cfg_attr(feature = "openapi", param(example = "Growth"))]
    pub plan: Option<String>,
}
