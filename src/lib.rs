pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{engine::RewriteEngine, pipeline::HeaderPipeline, rewriter::rewrite};
pub use utils::error::{Result, RewriteError};
