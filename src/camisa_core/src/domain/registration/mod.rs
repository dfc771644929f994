//! Registration form validation.
//!
//! Each field of a [`RegistrationInput`] has a value type that can only be built through
//! its validation rule. [`validate`] runs the rules in a fixed order and stops at the first
//! failure, so the caller always gets a single [`RegistrationError`] to show the user.

pub mod email;
pub mod error;
pub mod input;
pub mod name;
pub mod password;
pub mod phone;
pub mod tax_id;

pub use email::{Email, is_valid_email};
pub use error::RegistrationError;
pub use input::{RegistrationInput, validate};
pub use name::CustomerName;
pub use password::Password;
pub use phone::{Phone, is_valid_phone};
pub use tax_id::{Cpf, is_valid_tax_id};

/// Keeps only the ASCII decimal digits of `raw`, dropping any formatting punctuation.
pub(crate) fn ascii_digits(raw: &str) -> impl Iterator<Item = u8> + '_ {
    raw.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0')
}
