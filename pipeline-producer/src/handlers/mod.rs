mod app;
pub mod data;

pub use app::{app, SERVICE_NAME};
