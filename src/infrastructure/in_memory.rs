use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::{ReceiptError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Ledger {
    next_id: u64,
    receipts: HashMap<ReceiptId, Receipt>,
}

/// A thread-safe in-memory receipt store.
///
/// The id counter and the map live behind the same `RwLock`, so id
/// assignment and insertion happen under one write guard. Ids start at 0 and
/// are never reused. Contents last as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    ledger: Arc<RwLock<Ledger>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of receipts stored so far.
    pub async fn len(&self) -> usize {
        self.ledger.read().await.receipts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, receipt: Receipt) -> Result<ReceiptId> {
        let mut ledger = self.ledger.write().await;
        let id = ReceiptId(ledger.next_id);
        ledger.next_id = ledger
            .next_id
            .checked_add(1)
            .ok_or_else(|| ReceiptError::Store("receipt id space exhausted".to_string()))?;
        ledger.receipts.insert(id, receipt);
        Ok(id)
    }

    async fn get(&self, id: ReceiptId) -> Result<Option<Receipt>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.receipts.get(&id).cloned())
    }
}
