use secrecy::Secret;
use serde::{Deserialize, Deserializer};

use crate::domain::customer::Customer;

use super::RegistrationError;

/// Raw registration form as submitted by the customer.
///
/// Every field is present but may be empty. Keys missing from a deserialized payload, or
/// sent as `null`, become empty text, so they fail their rule instead of failing
/// deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(alias = "cpf", alias = "taxId", deserialize_with = "null_as_empty")]
    pub tax_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty_secret")]
    pub email: Secret<String>,
    #[serde(deserialize_with = "null_as_empty_secret")]
    pub password: Secret<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_secret<'de, D>(deserializer: D) -> Result<Secret<String>, D::Error>
where
    D: Deserializer<'de>,
{
    null_as_empty(deserializer).map(Secret::new)
}

impl Default for RegistrationInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            tax_id: String::new(),
            phone: String::new(),
            email: Secret::new(String::new()),
            password: Secret::new(String::new()),
        }
    }
}

/// Checks `input` rule by rule and reports the first failure.
///
/// Rules run in a fixed order: name, tax ID, phone, email, password. Nothing is checked
/// after the first failure.
pub fn validate(input: &RegistrationInput) -> Result<(), RegistrationError> {
    Customer::try_from(input).map(|_| ())
}
