use std::{
    fs,
    path::{Path, PathBuf},
};

use super::error::SessionError;

/// Heuristically determine if the given data is a binary or a text file's
/// content.
fn is_binary(data: &[u8]) -> bool {
    if data.contains(&0) {
        // Even though the NUL character is valid in UTF-8, it's highly suspicious in
        // human-readable text.
        return true;
    }

    std::str::from_utf8(data).is_err()
}

/// Reads a backing store fully into memory, rejecting binary content.
pub fn read_store(path: &Path) -> Result<String, SessionError> {
    let bytes = fs::read(path).map_err(|source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_binary(&bytes) {
        return Err(SessionError::Decode {
            path: path.to_path_buf(),
        });
    }

    String::from_utf8(bytes).map_err(|_| SessionError::Decode {
        path: path.to_path_buf(),
    })
}

/// Overwrites a backing store with `content`.
///
/// The content is written to a sibling temporary file which is then renamed
/// over the original, so a crash mid-write cannot leave a truncated store
/// behind.
pub fn write_store(path: &Path, content: &str) -> Result<(), SessionError> {
    let io_error = |source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut staged = path.as_os_str().to_owned();
    staged.push(".staged");
    let staged = PathBuf::from(staged);

    fs::write(&staged, content).map_err(io_error)?;
    fs::rename(&staged, path).map_err(io_error)
}
