//! Adapters exposing the application to the outside world.

pub mod http;
