//! # Snapshot Format
//!
//! Binary serialization for [`ProfileSnapshot`].
//!
//! Format: Header (5 bytes) + postcard-serialized snapshot.
//! - 4 bytes: Magic ("NUMC")
//! - 1 byte: Version
//!
//! Size and header are validated before the payload is parsed.
//! File and database I/O live in the `storage` module.

use crate::{NumerologyError, ProfileSnapshot, primitives};

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum accepted snapshot size in bytes, header included.
///
/// A snapshot is one profile and one bundle; anything near this is corrupt.
pub const MAX_SNAPSHOT_PAYLOAD_SIZE: usize = 1024 * 1024; // 1 MB

const HEADER_SIZE: usize = 5;

// =============================================================================
// HEADER
// =============================================================================

/// The header precedes every encoded snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u8,
}

impl SnapshotHeader {
    /// Header for the current format version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            magic: *primitives::MAGIC_BYTES,
            version: primitives::FORMAT_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), NumerologyError> {
        if &self.magic != primitives::MAGIC_BYTES {
            return Err(NumerologyError::DeserializationError(
                "Invalid magic bytes".to_string(),
            ));
        }
        if self.version != primitives::FORMAT_VERSION {
            return Err(NumerologyError::DeserializationError(format!(
                "Unsupported snapshot version: {} (expected {})",
                self.version,
                primitives::FORMAT_VERSION
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NumerologyError> {
        let Some(header) = bytes.get(..HEADER_SIZE) else {
            return Err(NumerologyError::DeserializationError(
                "Header too short".to_string(),
            ));
        };
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&header[0..4]);
        Ok(Self {
            magic,
            version: header[4],
        })
    }
}

impl Default for SnapshotHeader {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ENCODE / DECODE
// =============================================================================

/// Encode a snapshot (header + payload).
pub fn snapshot_to_bytes(snapshot: &ProfileSnapshot) -> Result<Vec<u8>, NumerologyError> {
    let payload = postcard::to_stdvec(snapshot)
        .map_err(|e| NumerologyError::SerializationError(e.to_string()))?;

    let mut result = Vec::with_capacity(HEADER_SIZE + payload.len());
    result.extend_from_slice(&SnapshotHeader::new().to_bytes());
    result.extend_from_slice(&payload);
    Ok(result)
}

/// Decode a snapshot produced by [`snapshot_to_bytes`].
pub fn snapshot_from_bytes(bytes: &[u8]) -> Result<ProfileSnapshot, NumerologyError> {
    if bytes.len() > MAX_SNAPSHOT_PAYLOAD_SIZE {
        return Err(NumerologyError::DeserializationError(format!(
            "Snapshot size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_SNAPSHOT_PAYLOAD_SIZE
        )));
    }

    let header = SnapshotHeader::from_bytes(bytes)?;
    header.validate()?;

    postcard::from_bytes(&bytes[HEADER_SIZE..]).map_err(|e| {
        NumerologyError::DeserializationError(format!("Failed to decode snapshot: {e}"))
    })
}

// =============================================================================
// TESTS
// =============================================================================
