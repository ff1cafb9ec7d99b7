//! Common utilities

use std::fs::Metadata;
use std::time::SystemTime;
use xxhash_rust::xxh3::xxh3_64;

use crate::core::model::Meta;

/// Compute the XXH3 hash of bytes as 16 hex digits
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Modification time in milliseconds since epoch
pub fn mtime_ms(metadata: &Metadata) -> std::io::Result<i64> {
    let mtime = metadata.modified()?;
    let duration = mtime
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    Ok(duration.as_millis() as i64)
}

/// Build result metadata from the handle's metadata and the raw bytes read
pub fn file_meta(metadata: &Metadata, bytes: &[u8]) -> Meta {
    Meta {
        mtime_ms: mtime_ms(metadata).ok(),
        size: Some(metadata.len()),
        hash: Some(hash_bytes(bytes)),
    }
}
