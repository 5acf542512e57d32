pub mod bot;
pub mod config;
pub mod error;
pub mod grammar;
pub mod llm;

pub use error::{Error, Result};
