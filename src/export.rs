use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// `wordlist_<unix-timestamp>.txt`
pub fn default_file_name(timestamp: i64) -> String {
    format!("wordlist_{}.txt", timestamp)
}

/// Directories receive a timestamped default file name; anything else is
/// used as given.
pub fn resolve_destination(destination: &Path, timestamp: i64) -> PathBuf {
    if destination.is_dir() {
        destination.join(default_file_name(timestamp))
    } else {
        destination.to_path_buf()
    }
}

/// Writes one word per line and returns the absolute path written.
pub fn export<S: AsRef<str>>(words: &[S], destination: &Path) -> Result<PathBuf> {
    let io_err = |source| Error::Io {
        path: destination.to_path_buf(),
        source,
    };

    let file = File::create(destination).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writer.write_all(word.as_ref().as_bytes()).map_err(io_err)?;
        writer.write_all(b"\n").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    let written = std::path::absolute(destination).map_err(io_err)?;
    info!(path = %written.display(), count = words.len(), "wordlist exported");
    Ok(written)
}
