//! BLAKE3 file hashing (streaming).
//!
//! # Overview
//!
//! [`Hasher`] computes a whole-file content digest by streaming the file
//! through a fixed-size buffer, so files of any size hash in bounded
//! memory. Two files are treated as identical content iff their digests
//! are equal.
//!
//! Read failures are fatal for the run: a candidate that cannot be
//! hashed leaves the duplicate analysis incomplete, so no per-file
//! recovery is attempted.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::trace;

use super::HashError;

/// Content digest of a file's full byte content.
pub type Hash = [u8; 32];

/// Buffer size for streaming reads.
const READ_BUFFER_SIZE: usize = 8192;

/// Streaming BLAKE3 hasher for whole-file digests.
///
/// # Example
///
/// ```no_run
/// use dupescan::scanner::{hash_to_hex, Hasher};
/// use std::path::Path;
///
/// let hasher = Hasher::new();
/// let hash = hasher.hash_file(Path::new("a.txt")).unwrap();
/// println!("Hash: {}", hash_to_hex(&hash));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher;

impl Hasher {
    /// Create a new hasher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash the full content of the file at `path`.
    ///
    /// The file is read in [`READ_BUFFER_SIZE`] chunks; memory use does
    /// not depend on the file size.
    pub fn hash_file(&self, path: &Path) -> Result<Hash, HashError> {
        let mut file = File::open(path).map_err(|err| map_read_error(err, path))?;
        let mut hasher = blake3::Hasher::new();
        let mut buffer = [0u8; READ_BUFFER_SIZE];

        loop {
            let read = file
                .read(&mut buffer)
                .map_err(|err| map_read_error(err, path))?;
            if read == 0 {
                break;
            }
            hasher.update(&buffer[..read]);
        }

        let hash = *hasher.finalize().as_bytes();
        trace!("hashed {} -> {}", path.display(), hash_to_hex(&hash));
        Ok(hash)
    }
}

/// Render a digest as the lowercase hex string shown to the user.
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    blake3::Hash::from_bytes(*hash).to_hex().to_string()
}

/// Convert an I/O error into a [`HashError`], preserving the path.
fn map_read_error(err: io::Error, path: &Path) -> HashError {
    match err.kind() {
        io::ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}
