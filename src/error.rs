//! Error types for hormiga-tsp operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for TSP operations
pub type TspResult<T> = std::result::Result<T, TspError>;

/// Error type for instance loading and solver initialization.
///
/// The optimization loop itself cannot fail once a solver has been
/// initialized; every variant here aborts a run before or during setup.
#[derive(Error, Debug)]
pub enum TspError {
    /// Instance file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Instance has zero cities
    #[error("Empty instance: no cities")]
    EmptyInstance,

    /// Initial pheromone scale cannot be computed (no row of the
    /// distance matrix has a finite minimum; only possible for n <= 1)
    #[error("Degenerate instance: no finite nearest-neighbor distance")]
    DegenerateInstance,

    /// Malformed instance file content
    #[error("Parse error in {file}{}: {cause}", .line.map_or(String::new(), |l| format!(" (line {l})")))]
    ParseError {
        /// File being parsed
        file: PathBuf,
        /// 1-based line number, when attributable to a single line
        line: Option<usize>,
        /// Error description
        cause: String,
    },

    /// Tour is not a permutation of the instance's cities
    #[error("Invalid tour: {cause}")]
    InvalidTour {
        /// Error description
        cause: String,
    },

    /// Configuration value outside its valid domain
    #[error("Invalid parameter {param} = {value}: {constraint}")]
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_with_line() {
        let err = TspError::ParseError {
            file: PathBuf::from("cities.tsp"),
            line: Some(7),
            cause: "invalid x coordinate: abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cities.tsp"));
        assert!(msg.contains("line 7"));
        assert!(msg.contains("invalid x coordinate"));
    }

    #[test]
    fn test_parse_error_without_line() {
        let err = TspError::ParseError {
            file: PathBuf::from("cities.tsp"),
            line: None,
            cause: "truncated file".into(),
        };
        assert!(!err.to_string().contains("line"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TspError = io.into();
        assert!(matches!(err, TspError::Io(_)));
    }
}
