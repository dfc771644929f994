pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    cart::{Cart, CartError, CartItem},
    catalog::{
        Catalog, CategoryFilter, LEAGUES, League, LeagueListing, Price, PriceError, Product,
        category_label, league_display_name,
    },
    customer::Customer,
    registration::{
        Cpf, CustomerName, Email, Password, Phone, RegistrationError, RegistrationInput,
        is_valid_email, is_valid_phone, is_valid_tax_id, validate,
    },
};

pub use ports::repositories::{CartStore, CartStoreError, CustomerStore, CustomerStoreError};
