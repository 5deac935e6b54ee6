use crate::domain::receipt::ReceiptId;
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsResponse {
    pub points: i64,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
