pub mod cart;
pub mod catalog;
pub mod customer;
pub mod registration;
