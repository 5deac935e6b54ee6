//! Receipt data model, the scoring rules and the storage port.

pub mod points;
pub mod ports;
pub mod receipt;
