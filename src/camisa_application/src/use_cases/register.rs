use camisa_core::{
    Customer, CustomerStore, CustomerStoreError, RegistrationError, RegistrationInput,
};

/// Error types for register use case
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegisterError {
    #[error(transparent)]
    Invalid(#[from] RegistrationError),
    #[error("Customer store error: {0}")]
    CustomerStoreError(#[from] CustomerStoreError),
}

/// Register use case - validates a registration form and stores the new customer
pub struct RegisterUseCase<'a, C>
where
    C: CustomerStore,
{
    customer_store: &'a C,
}

impl<'a, C> RegisterUseCase<'a, C>
where
    C: CustomerStore,
{
    pub fn new(customer_store: &'a C) -> Self {
        Self { customer_store }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `input` - The registration form exactly as submitted
    ///
    /// # Returns
    /// The stored customer, the first broken form rule, or a CustomerStoreError if the
    /// email (checked first) or CPF is already registered
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, input: RegistrationInput) -> Result<Customer, RegisterError> {
        let customer = Customer::try_from(&input).inspect_err(|e| {
            tracing::info!(rule = e.code(), "registration form rejected");
        })?;

        self.customer_store.add_customer(customer.clone()).await?;
        tracing::debug!("customer registered");

        Ok(customer)
    }
}
