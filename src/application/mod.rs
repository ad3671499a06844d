//! Application layer - Use cases and orchestration

pub mod post_store;

pub use post_store::PostStore;
