mod app;
pub mod consume;

pub use app::{app, SERVICE_NAME};
