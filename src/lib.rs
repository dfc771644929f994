//! # Camisa - jersey storefront domain library
//!
//! This is a facade crate that re-exports all public APIs from the storefront components.
//! Use this crate to get access to registration validation, the catalog and the cart in
//! one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `RegistrationInput`, `Cpf`, `Email`, `Catalog`, `Cart`, etc.
//! - **Repository traits**: `CustomerStore`, `CartStore`
//! - **Use cases**: `RegisterUseCase`, `CartUseCase`
//! - **Adapters**: `HashMapCustomerStore`, `HashMapCartStore`, catalog loading, settings

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use camisa_core::*;
}

// Re-export most commonly used core types at the root level
pub use camisa_core::{
    Cart, CartError, CartItem, Catalog, CategoryFilter, Cpf, Customer, CustomerName, Email,
    LEAGUES, League, Password, Phone, Price, Product, RegistrationError, RegistrationInput,
    is_valid_email, is_valid_phone, is_valid_tax_id, validate,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use camisa_core::{CartStore, CartStoreError, CustomerStore, CustomerStoreError};
}

pub use camisa_core::{CartStore, CartStoreError, CustomerStore, CustomerStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use camisa_application::*;
}

pub use camisa_application::{
    CartSummary, CartUseCase, CartUseCaseError, RegisterError, RegisterUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// In-memory persistence implementations
    pub mod persistence {
        pub use camisa_adapters::persistence::*;
    }

    /// Catalog file loading
    pub mod catalog {
        pub use camisa_adapters::catalog::*;
    }

    /// Configuration
    pub mod config {
        pub use camisa_adapters::config::*;
    }

    /// Tracing subscriber setup
    pub mod telemetry {
        pub use camisa_adapters::telemetry::*;
    }
}

pub use camisa_adapters::persistence::{HashMapCartStore, HashMapCustomerStore};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
