use serde::{Deserialize, Serialize};

use super::{RegistrationError, ascii_digits};

/// A Brazilian phone number with area code: 10 digits for landlines, 11 for mobiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, RegistrationError> {
        let digits: String = ascii_digits(raw).map(|d| char::from(b'0' + d)).collect();
        match digits.len() {
            10 | 11 => Ok(Self(digits)),
            _ => Err(RegistrationError::PhoneInvalid),
        }
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Mobile numbers carry the extra leading 9 after the area code.
    pub fn is_mobile(&self) -> bool {
        self.0.len() == 11
    }
}

/// Returns true when `phone` has 10 or 11 digits once punctuation is removed.
pub fn is_valid_phone(phone: &str) -> bool {
    Phone::parse(phone).is_ok()
}

impl TryFrom<String> for Phone {
    type Error = RegistrationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_formatted_mobile_and_landline() {
        assert!(is_valid_phone("(11) 91234-5678"));
        assert!(is_valid_phone("(11) 3456-7890"));
        assert!(is_valid_phone("11 9123-4567"));
    }

    #[test]
    fn rejects_too_few_or_too_many_digits() {
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("(11) 1234-567"));
        assert!(!is_valid_phone("+55 (11) 91234-5678"));
    }

    #[test]
    fn keeps_only_digits() {
        let mobile = Phone::parse("(11) 91234-5678").unwrap();
        assert_eq!(mobile.digits(), "11912345678");
        assert!(mobile.is_mobile());

        let landline = Phone::parse("11 3456 7890").unwrap();
        assert!(!landline.is_mobile());
    }
}
