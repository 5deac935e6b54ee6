use crate::domain::points::calculate_points;
use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::{ReceiptError, Result};

/// The main entry point for receipt processing.
///
/// `ReceiptEngine` owns the storage backend. Receipts go in through
/// `process_receipt`; points are computed on demand from the stored receipt.
pub struct ReceiptEngine {
    store: ReceiptStoreBox,
}

impl ReceiptEngine {
    /// Creates a new `ReceiptEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - The store that keeps accepted receipts.
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Stores a validated receipt and returns the id assigned to it.
    pub async fn process_receipt(&self, receipt: Receipt) -> Result<ReceiptId> {
        let item_count = receipt.items.len();
        let id = self.store.put(receipt).await?;
        tracing::info!(%id, item_count, "receipt stored");
        Ok(id)
    }

    /// Looks up a stored receipt and scores it.
    pub async fn points(&self, id: ReceiptId) -> Result<i64> {
        let receipt = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))?;

        let points = calculate_points(&receipt);
        tracing::debug!(%id, points, "receipt scored");
        Ok(points)
    }
}
