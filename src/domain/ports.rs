use super::receipt::{Receipt, ReceiptId};
use crate::error::Result;
use async_trait::async_trait;

/// Storage for accepted receipts.
///
/// `put` must assign the id and record the receipt as one step: two
/// concurrent calls never observe the same id.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    async fn put(&self, receipt: Receipt) -> Result<ReceiptId>;
    async fn get(&self, id: ReceiptId) -> Result<Option<Receipt>>;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
