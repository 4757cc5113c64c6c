//! Poll the processor in the background, and let callers trigger the same fetch on demand.
//!
//! The [`poller::Poller`] and the `/consume` handler are independent callers of the same
//! [`fetch::FetchClient`]. They share nothing but read-only configuration, so neither can
//! hold up the other.
pub mod config;
pub mod fetch;
pub mod handlers;
pub mod poller;
