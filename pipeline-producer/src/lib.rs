//! Emit a random value in 1..=100 on every `GET /data`.
pub mod config;
pub mod handlers;
