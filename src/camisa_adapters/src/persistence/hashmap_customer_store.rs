use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use camisa_core::{Cpf, Customer, CustomerStore, CustomerStoreError, Email};

#[derive(Default, Clone)]
pub struct HashMapCustomerStore {
    customers: Arc<RwLock<HashMap<Email, Customer>>>,
}

impl HashMapCustomerStore {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl CustomerStore for HashMapCustomerStore {
    async fn add_customer(&self, customer: Customer) -> Result<(), CustomerStoreError> {
        let mut customers = self.customers.write().await;
        if customers.contains_key(customer.email()) {
            return Err(CustomerStoreError::CustomerAlreadyExists);
        }
        if customers.values().any(|c| c.cpf() == customer.cpf()) {
            return Err(CustomerStoreError::TaxIdAlreadyRegistered);
        }
        customers.insert(customer.email().clone(), customer);
        Ok(())
    }

    async fn get_customer(&self, email: &Email) -> Result<Customer, CustomerStoreError> {
        let customers = self.customers.read().await;
        customers
            .get(email)
            .cloned()
            .ok_or(CustomerStoreError::CustomerNotFound)
    }

    async fn contains_tax_id(&self, cpf: &Cpf) -> Result<bool, CustomerStoreError> {
        let customers = self.customers.read().await;
        Ok(customers.values().any(|c| c.cpf() == cpf))
    }
}
