//! Shared building blocks for the producer, processor and consumer services.
//!
//! Every service in the pipeline is a small axum server that talks JSON over
//! HTTP to at most one upstream. This crate holds the pieces they have in common:
//! the upstream HTTP client, the wire types, env parsing helpers, the health
//! reporter, Prometheus metrics, tracing setup and graceful shutdown.

pub mod config;
pub mod health;
pub mod logging;
pub mod metrics;
pub mod shutdown;
pub mod types;
pub mod upstream;
