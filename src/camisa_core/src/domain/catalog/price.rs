use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price must be a non-negative amount, got {0}")]
    Negative(String),
    #[error("price has more than two decimal places: {0}")]
    TooPrecise(String),
    #[error("not a price: {0}")]
    Malformed(String),
}

/// An amount in Brazilian reais, stored as whole centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PriceRepr", into = "f64")]
pub struct Price(u64);

/// Catalog files carry prices either as JSON numbers or as decimal strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(f64),
    Text(String),
}

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    pub fn centavos(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Parses `149.90`, `149,90` or `149`.
    pub fn parse(raw: &str) -> Result<Self, PriceError> {
        let trimmed = raw.trim();
        if trimmed.starts_with('-') {
            return Err(PriceError::Negative(raw.to_string()));
        }

        let (whole, fraction) = match trimmed.split_once(['.', ',']) {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) {
            return Err(PriceError::Malformed(raw.to_string()));
        }
        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise(raw.to_string()));
        }

        let reais: u64 = whole
            .parse()
            .map_err(|_| PriceError::Malformed(raw.to_string()))?;
        let centavos = match fraction.len() {
            0 => 0,
            1 => u64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction
                .parse()
                .map_err(|_| PriceError::Malformed(raw.to_string()))?,
        };

        reais
            .checked_mul(100)
            .and_then(|c| c.checked_add(centavos))
            .map(Self)
            .ok_or_else(|| PriceError::Malformed(raw.to_string()))
    }
}

impl TryFrom<PriceRepr> for Price {
    type Error = PriceError;

    fn try_from(value: PriceRepr) -> Result<Self, Self::Error> {
        match value {
            PriceRepr::Text(text) => Self::parse(&text),
            PriceRepr::Number(n) if !n.is_finite() => Err(PriceError::Malformed(n.to_string())),
            // Shortest round-trip decimal form, so numbers and strings share one set of rules.
            PriceRepr::Number(n) => Self::parse(&n.to_string()),
        }
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0 as f64 / 100.0
    }
}

impl Add for Price {
    type Output = Price;

    /// Saturates at the largest representable amount.
    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}.{:02}", self.0 / 100, self.0 % 100)
    }
}
