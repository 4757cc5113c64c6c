//! Fetch a value from the producer and double it on every `GET /process`.
pub mod config;
pub mod handlers;
