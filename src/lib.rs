//! poststore - Blog post data access for static site builds
//!
//! Reads a JSON array of posts, lists them ordered by title with
//! locale-aware collation, lists route params for every post id, and looks
//! posts up by id with a placeholder for misses.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::PostStore;
pub use error::PostStoreError;
pub use infrastructure::StoreConfig;
