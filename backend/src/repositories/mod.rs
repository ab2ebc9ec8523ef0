//! Persistence interfaces and their SQL adapters.
//!
//! Each repository is a trait the orchestrators consume behind `Arc<dyn …>`,
//! plus a SQLite implementation. The traits are the seam for swapping the
//! backing store and for the mock implementations used in service tests.

pub mod token_repository;
pub mod user_repository;
