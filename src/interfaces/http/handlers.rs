use super::dto::{PointsResponse, ProcessReceiptResponse};
use crate::application::engine::ReceiptEngine;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::Result;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

/// `POST /receipts/process`
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that a missing or unusual content type still gets a parse attempt, and
/// every failure maps to the same response.
pub async fn process_receipt(
    State(engine): State<Arc<ReceiptEngine>>,
    body: Bytes,
) -> Result<(StatusCode, Json<ProcessReceiptResponse>)> {
    let receipt = Receipt::from_json(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected receipt");
    })?;

    let id = engine.process_receipt(receipt).await?;
    Ok((StatusCode::CREATED, Json(ProcessReceiptResponse { id })))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(engine): State<Arc<ReceiptEngine>>,
    Path(raw_id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let id = raw_id.parse::<ReceiptId>().inspect_err(|_| {
        tracing::debug!(id = %raw_id, "receipt id is not an integer");
    })?;
    let points = engine.points(id).await.inspect_err(|e| {
        tracing::debug!(%id, error = %e, "points lookup failed");
    })?;

    Ok(Json(PointsResponse { points }))
}
