mod app;
pub mod process;

pub use app::{app, SERVICE_NAME};
