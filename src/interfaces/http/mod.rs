//! JSON over HTTP: `POST /receipts/process` and `GET /receipts/{id}/points`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use router::build_router;
pub use server::ReceiptServer;
