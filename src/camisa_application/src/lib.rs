pub mod use_cases;

pub use use_cases::{
    cart::{CartSummary, CartUseCase, CartUseCaseError},
    register::{RegisterError, RegisterUseCase},
};
