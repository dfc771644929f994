use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    cart::Cart,
    customer::Customer,
    registration::{Cpf, Email},
};

// CustomerStore port trait and errors
#[derive(Debug, Error)]
pub enum CustomerStoreError {
    #[error("Customer already exists")]
    CustomerAlreadyExists,
    #[error("Tax ID already registered")]
    TaxIdAlreadyRegistered,
    #[error("Customer not found")]
    CustomerNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CustomerStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::CustomerAlreadyExists, Self::CustomerAlreadyExists)
                | (Self::TaxIdAlreadyRegistered, Self::TaxIdAlreadyRegistered)
                | (Self::CustomerNotFound, Self::CustomerNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn add_customer(&self, customer: Customer) -> Result<(), CustomerStoreError>;
    async fn get_customer(&self, email: &Email) -> Result<Customer, CustomerStoreError>;
    async fn contains_tax_id(&self, cpf: &Cpf) -> Result<bool, CustomerStoreError>;
}

// CartStore port trait and errors
#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Keeps one cart per browsing session.
///
/// A session with no saved cart, or whose saved cart can no longer be read, loads as empty.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn load(&self, session: &str) -> Result<Cart, CartStoreError>;
    async fn save(&self, session: &str, cart: &Cart) -> Result<(), CartStoreError>;
    async fn delete(&self, session: &str) -> Result<(), CartStoreError>;
}
