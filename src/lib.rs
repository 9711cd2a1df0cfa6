pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod lessons;

pub use config::SessionConfig;
pub use error::{BindFailure, Error, Result};
