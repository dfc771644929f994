pub mod cart;
pub mod register;
