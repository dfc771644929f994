use std::fmt;

use serde::{Deserialize, Serialize};

use super::{RegistrationError, ascii_digits};

const CPF_LEN: usize = 11;

/// A Brazilian individual taxpayer number (CPF) whose two check digits are consistent.
///
/// Only the format and checksum are verified. A `Cpf` says nothing about whether the number
/// was actually issued by the Receita Federal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Parses a CPF, ignoring any punctuation such as `111.444.777-35`.
    pub fn parse(raw: &str) -> Result<Self, RegistrationError> {
        let digits: Vec<u8> = ascii_digits(raw).collect();
        let digits: [u8; CPF_LEN] = digits
            .try_into()
            .map_err(|_| RegistrationError::TaxIdInvalid)?;

        if digits.iter().all(|d| *d == digits[0]) {
            return Err(RegistrationError::TaxIdInvalid);
        }

        if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
            return Err(RegistrationError::TaxIdInvalid);
        }

        Ok(Self(digits))
    }

    /// The bare eleven digits, without punctuation.
    pub fn digits(&self) -> String {
        self.0.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

/// Computes the check digit that follows `prefix`.
///
/// Weights run from `prefix.len() + 1` down to 2. A remainder of 10 folds to 0.
fn check_digit(prefix: &[u8]) -> u8 {
    let top_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (top_weight - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        r => r as u8,
    }
}

/// Returns true when `tax_id` holds a checksum-consistent CPF once punctuation is removed.
pub fn is_valid_tax_id(tax_id: &str) -> bool {
    Cpf::parse(tax_id).is_ok()
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.digits();
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl TryFrom<String> for Cpf {
    type Error = RegistrationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.digits()
    }
}
