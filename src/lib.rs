pub mod app;
pub mod config;
pub mod error;
pub mod predict;
pub mod server;

pub use error::{Error, Result};
