// Word of the Day - platform/fs.rs
//
// Filesystem helpers for files the user picks through native dialogs.

use std::io::{self, Read};
use std::path::Path;

/// Read a whole file, refusing anything larger than `max_bytes`.
///
/// Guards the import dialog against a mistakenly chosen huge file being
/// pulled into memory before it is even parsed.
pub fn read_capped(path: &Path, max_bytes: u64) -> io::Result<Vec<u8>> {
    let file = std::fs::File::open(path)?;
    let len = file.metadata()?.len();
    if len > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("file is {len} bytes, exceeds maximum of {max_bytes} bytes"),
        ));
    }

    let mut buf = Vec::with_capacity(len as usize);
    file.take(max_bytes).read_to_end(&mut buf)?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "File read");
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_small_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.csv");
        std::fs::write(&path, b"date,word,submitter\n").unwrap();
        assert_eq!(read_capped(&path, 1024).unwrap(), b"date,word,submitter\n");
    }

    #[test]
    fn test_rejects_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.csv");
        std::fs::write(&path, vec![b'x'; 64]).unwrap();
        let err = read_capped(&path, 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_capped(&dir.path().join("none.csv"), 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
