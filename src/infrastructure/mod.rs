//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod repository;

pub use config::{StoreConfig, CONFIG_FILE, ROOT_ENV};
pub use repository::{JsonFileRepository, PostRepository};
