//! # Formats
//!
//! Binary encodings for data the engine hands to storage.

pub mod persistence;

pub use persistence::{
    MAX_SNAPSHOT_PAYLOAD_SIZE, SnapshotHeader, snapshot_from_bytes, snapshot_to_bytes,
};
