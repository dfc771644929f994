use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use camisa_core::{Cart, CartStore, CartStoreError};

/// Cart store that keeps each session's cart as serialized JSON text.
///
/// Snapshots that no longer parse are discarded and the session starts over with an empty
/// cart.
#[derive(Default, Clone)]
pub struct HashMapCartStore {
    snapshots: Arc<RwLock<HashMap<String, String>>>,
}

impl HashMapCartStore {
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Replaces the raw snapshot of `session`, as a browser restoring saved state would.
    pub async fn restore_snapshot(&self, session: &str, snapshot: String) {
        self.snapshots
            .write()
            .await
            .insert(session.to_string(), snapshot);
    }
}

#[async_trait::async_trait]
impl CartStore for HashMapCartStore {
    async fn load(&self, session: &str) -> Result<Cart, CartStoreError> {
        let snapshots = self.snapshots.read().await;
        let Some(snapshot) = snapshots.get(session) else {
            return Ok(Cart::new());
        };

        match serde_json::from_str(snapshot) {
            Ok(cart) => Ok(cart),
            Err(e) => {
                tracing::warn!(session, error = %e, "discarding unreadable cart snapshot");
                Ok(Cart::new())
            }
        }
    }

    async fn save(&self, session: &str, cart: &Cart) -> Result<(), CartStoreError> {
        let snapshot = serde_json::to_string(cart)
            .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?;
        self.snapshots
            .write()
            .await
            .insert(session.to_string(), snapshot);
        Ok(())
    }

    async fn delete(&self, session: &str) -> Result<(), CartStoreError> {
        self.snapshots.write().await.remove(session);
        Ok(())
    }
}
