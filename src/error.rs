use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Analysis was requested without a password.
    #[error("No password provided")]
    EmptyPassword,

    /// Generation was requested without a single usable seed.
    #[error("Please provide at least one seed (names, favorites, dates or password)")]
    NoSeeds,

    #[error("Failed to write wordlist to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Input errors are recoverable and meant to be shown to the user as-is.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyPassword | Self::NoSeeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_recoverable() {
        assert!(Error::EmptyPassword.is_input_error());
        assert!(Error::NoSeeds.is_input_error());

        let io = Error::Io {
            path: PathBuf::from("/nonexistent/out.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!io.is_input_error());
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = Error::Io {
            path: PathBuf::from("/nonexistent/out.txt"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/nonexistent/out.txt"));
    }
}
