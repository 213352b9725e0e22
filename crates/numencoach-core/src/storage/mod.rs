//! # Storage
//!
//! Durable local state. The engine itself is stateless; this module only
//! keeps the last calculated profile between runs.

pub mod redb_cache;

pub use redb_cache::ProfileCache;
