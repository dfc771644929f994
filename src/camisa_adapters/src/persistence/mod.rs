pub mod hashmap_cart_store;
pub mod hashmap_customer_store;

pub use hashmap_cart_store::HashMapCartStore;
pub use hashmap_customer_store::HashMapCustomerStore;
