pub mod cli;
pub mod config;
pub mod error;
pub mod sink;
pub mod ui;
pub mod validator;
pub mod version;

pub use error::{BumpCheckError, Result};
