use std::path::PathBuf;

use crate::logging::LoggingError;

/// Top-level failure of one run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),
}

impl Error {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => 2,
            _ => 1,
        }
    }
}

/// Rejected run parameters. Raised before any generation work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid password length {0}: must be positive")]
    NonPositive(i64),

    #[error("invalid password length {requested}: exceeds cap of {cap} (info tokens + special characters)")]
    ExceedsCap { requested: i64, cap: usize },

    #[error("special character set is empty")]
    EmptySpecials,
}

/// Failure reading the info source.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("info file '{}' does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("cannot decode info file '{}' as UTF-8", path.display())]
    Decode { path: PathBuf },

    #[error("I/O error reading info file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected error reading info file '{}': {source}", path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    /// Classify an I/O failure on `path`.
    ///
    /// Anything the OS reported with an error code is a read failure the run
    /// can skip past; only errors with no OS code and no known kind are
    /// unexpected.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::InvalidFilename => {
                ReadError::Missing { path }
            }
            ErrorKind::InvalidData => ReadError::Decode { path },
            ErrorKind::PermissionDenied
            | ErrorKind::IsADirectory
            | ErrorKind::Interrupted
            | ErrorKind::UnexpectedEof
            | ErrorKind::OutOfMemory
            | ErrorKind::InvalidInput
            | ErrorKind::ResourceBusy
            | ErrorKind::StaleNetworkFileHandle
            | ErrorKind::WouldBlock
            | ErrorKind::TimedOut => ReadError::Io { path, source },
            _ if source.raw_os_error().is_some() => ReadError::Io { path, source },
            _ => ReadError::Unexpected { path, source },
        }
    }

    /// Whether the run can go on with an empty info list.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ReadError::Unexpected { .. })
    }
}

/// Failure writing the dictionary.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("cannot create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open dictionary file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing dictionary '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn classify(kind: io::ErrorKind) -> ReadError {
        ReadError::from_io(PathBuf::from("info.txt"), io::Error::from(kind))
    }

    #[test]
    fn classified_read_errors_are_recoverable() {
        assert!(matches!(classify(io::ErrorKind::NotFound), ReadError::Missing { .. }));
        assert!(matches!(classify(io::ErrorKind::InvalidData), ReadError::Decode { .. }));
        assert!(matches!(classify(io::ErrorKind::PermissionDenied), ReadError::Io { .. }));
        assert!(classify(io::ErrorKind::NotFound).is_recoverable());
        assert!(classify(io::ErrorKind::PermissionDenied).is_recoverable());
    }

    #[test]
    fn bad_path_components_count_as_missing() {
        assert!(matches!(classify(io::ErrorKind::NotADirectory), ReadError::Missing { .. }));
        assert!(matches!(classify(io::ErrorKind::InvalidFilename), ReadError::Missing { .. }));
    }

    #[test]
    fn os_errors_are_recoverable() {
        // ELOOP has no dedicated ErrorKind
        let err = ReadError::from_io(
            PathBuf::from("info.txt"),
            io::Error::from_raw_os_error(libc::ELOOP),
        );
        assert!(matches!(err, ReadError::Io { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn unclassified_read_errors_propagate() {
        let err = classify(io::ErrorKind::Other);
        assert!(matches!(err, ReadError::Unexpected { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn config_errors_exit_with_two() {
        let err = Error::from(ConfigError::NonPositive(0));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "invalid password length 0: must be positive");
    }
}
