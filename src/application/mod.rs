//! Application layer orchestrating storage and scoring.
//!
//! This module defines the `ReceiptEngine`, the single entry point the HTTP
//! layer talks to. It holds no state of its own beyond the injected store.

pub mod engine;
