use camisa_core::{Cart, CartError, CartStore, CartStoreError, Price, Product};
use uuid::Uuid;

/// Error types for cart use case
#[derive(Debug, thiserror::Error)]
pub enum CartUseCaseError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("Cart store error: {0}")]
    CartStoreError(#[from] CartStoreError),
}

/// What the cart badge and checkout summary show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub quantity: usize,
    pub total: Price,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            quantity: cart.quantity(),
            total: cart.total(),
        }
    }
}

/// Cart use case - every change is written back to the store so the cart outlives the page
pub struct CartUseCase<S>
where
    S: CartStore,
{
    cart_store: S,
}

impl<S> CartUseCase<S>
where
    S: CartStore,
{
    pub fn new(cart_store: S) -> Self {
        Self { cart_store }
    }

    #[tracing::instrument(
        name = "CartUseCase::add_item",
        skip(self, product),
        fields(product_id = %product.id)
    )]
    pub async fn add_item(
        &self,
        session: &str,
        product: &Product,
        size: &str,
    ) -> Result<Uuid, CartUseCaseError> {
        let mut cart = self.cart_store.load(session).await?;
        let cart_id = cart.add(product, size)?;
        self.cart_store.save(session, &cart).await?;

        Ok(cart_id)
    }

    /// Removes a line item. Returns false when the session's cart did not contain it.
    #[tracing::instrument(name = "CartUseCase::remove_item", skip(self))]
    pub async fn remove_item(
        &self,
        session: &str,
        cart_id: Uuid,
    ) -> Result<bool, CartUseCaseError> {
        let mut cart = self.cart_store.load(session).await?;
        if !cart.remove(cart_id) {
            return Ok(false);
        }
        self.cart_store.save(session, &cart).await?;

        Ok(true)
    }

    #[tracing::instrument(name = "CartUseCase::clear", skip(self))]
    pub async fn clear(&self, session: &str) -> Result<(), CartUseCaseError> {
        self.cart_store.delete(session).await?;
        Ok(())
    }

    pub async fn cart(&self, session: &str) -> Result<Cart, CartUseCaseError> {
        Ok(self.cart_store.load(session).await?)
    }

    pub async fn summary(&self, session: &str) -> Result<CartSummary, CartUseCaseError> {
        let cart = self.cart_store.load(session).await?;
        Ok(CartSummary::from(&cart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camisa_core::domain::catalog::{Images, Prices};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Clone, Default)]
    struct MockCartStore {
        carts: Arc<RwLock<HashMap<String, Cart>>>,
    }

    #[async_trait::async_trait]
    impl CartStore for MockCartStore {
        async fn load(&self, session: &str) -> Result<Cart, CartStoreError> {
            Ok(self
                .carts
                .read()
                .await
                .get(session)
                .cloned()
                .unwrap_or_default())
        }

        async fn save(&self, session: &str, cart: &Cart) -> Result<(), CartStoreError> {
            self.carts
                .write()
                .await
                .insert(session.to_string(), cart.clone());
            Ok(())
        }

        async fn delete(&self, session: &str) -> Result<(), CartStoreError> {
            self.carts.write().await.remove(session);
            Ok(())
        }
    }

    fn jersey(id: &str, centavos: u64) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            league: "Premier League".to_string(),
            category: "Torcedor".to_string(),
            prices: Prices {
                sale: Price::from_centavos(centavos),
                promotional: None,
            },
            images: Images::default(),
            options: None,
        }
    }

    #[tokio::test]
    async fn test_add_items_persists_between_calls() {
        let store = MockCartStore::default();
        let use_case = CartUseCase::new(store.clone());

        use_case
            .add_item("s1", &jersey("arsenal", 30000), "M")
            .await
            .unwrap();
        use_case
            .add_item("s1", &jersey("chelsea", 25000), "G")
            .await
            .unwrap();

        let summary = use_case.summary("s1").await.unwrap();
        assert_eq!(
            summary,
            CartSummary {
                quantity: 2,
                total: Price::from_centavos(55000),
            }
        );

        // Other sessions are untouched
        assert_eq!(use_case.summary("s2").await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let use_case = CartUseCase::new(MockCartStore::default());

        let id = use_case
            .add_item("s1", &jersey("spurs", 20000), "P")
            .await
            .unwrap();

        assert!(use_case.remove_item("s1", id).await.unwrap());
        assert!(!use_case.remove_item("s1", id).await.unwrap());
        assert!(use_case.cart("s1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_size_is_rejected_and_not_saved() {
        let store = MockCartStore::default();
        let use_case = CartUseCase::new(store.clone());

        let result = use_case.add_item("s1", &jersey("city", 30000), "XXG").await;
        assert!(matches!(
            result,
            Err(CartUseCaseError::Cart(CartError::UnknownSize { .. }))
        ));
        assert!(store.carts.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let use_case = CartUseCase::new(MockCartStore::default());
        use_case
            .add_item("s1", &jersey("united", 28000), "GG")
            .await
            .unwrap();

        use_case.clear("s1").await.unwrap();
        assert_eq!(use_case.summary("s1").await.unwrap().total, Price::ZERO);
    }
}
