//! Service layer for rewrite orchestration
//!
//! Ties manifest I/O to the pure rewrite in `compose`, keeping main.rs thin.

pub mod rewrite;

pub use rewrite::{RewriteConfig, RewriteResult, RewriteService};
