use serde::Serialize;
use thiserror::Error;

/// The first registration rule a payload broke.
///
/// `Display` renders the text shown to the end user; [`RegistrationError::code`] gives a
/// stable identifier for callers that branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationError {
    #[error("name and surname required.")]
    NameInvalid,
    #[error("invalid tax ID.")]
    TaxIdInvalid,
    #[error("invalid phone number.")]
    PhoneInvalid,
    #[error("invalid email.")]
    EmailInvalid,
    #[error("password must be at least 6 characters.")]
    PasswordTooShort,
}

impl RegistrationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameInvalid => "name_invalid",
            Self::TaxIdInvalid => "tax_id_invalid",
            Self::PhoneInvalid => "phone_invalid",
            Self::EmailInvalid => "email_invalid",
            Self::PasswordTooShort => "password_too_short",
        }
    }
}
