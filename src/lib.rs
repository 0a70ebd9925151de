pub mod cli;
pub mod compose;
pub mod config;
pub mod constants;
pub mod service;
pub mod target;

pub use anyhow::Result;
