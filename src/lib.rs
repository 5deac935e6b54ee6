//! Receipt processing service.
//!
//! Receipts are submitted over HTTP, kept in memory under sequential ids and
//! scored on demand with a fixed set of reward point rules.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
