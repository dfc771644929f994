use serde::{Deserialize, Serialize};

use super::RegistrationError;

/// A customer's full name: at least a given name and a surname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    pub fn parse(raw: &str) -> Result<Self, RegistrationError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(RegistrationError::NameInvalid);
        }
        Ok(Self(tokens.join(" ")))
    }

    pub fn first_name(&self) -> &str {
        self.0.split(' ').next().unwrap_or_default()
    }

    pub fn surname(&self) -> &str {
        self.0.rsplit(' ').next().unwrap_or_default()
    }
}

impl TryFrom<String> for CustomerName {
    type Error = RegistrationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CustomerName> for String {
    fn from(value: CustomerName) -> Self {
        value.0
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
