//! Error types and context management for catalog construction and search setup

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// An edge token does not split into a symbol kind and a half label
    MalformedSymbol {
        /// The raw token as it appeared in the input
        token: String,
        /// What is wrong with the token
        reason: &'static str,
    },

    /// A tile was defined without any edges
    DegenerateTile {
        /// Display id of the offending tile
        tile: usize,
    },

    /// Tiles in one catalog disagree on their number of sides
    MismatchedSides {
        /// Display id of the first tile that disagrees
        tile: usize,
        /// Side count established by the first tile
        expected: usize,
        /// Side count of the offending tile
        found: usize,
    },

    /// The side count cannot be laid out on a square grid
    ///
    /// Grid search needs a positive multiple of four so that the top, right,
    /// bottom and left facings all exist.
    UnsupportedSideCount {
        /// Number of sides per tile in the catalog
        sides: usize,
    },

    /// Requested cell count cannot be searched
    InvalidTargetSize {
        /// Requested number of placed tiles
        target: usize,
        /// Explanation of why the target is rejected
        reason: String,
    },

    /// A textual placement label could not be resolved against a catalog
    InvalidPlacement {
        /// The label as given
        label: String,
        /// Explanation of why the label is rejected
        reason: String,
    },

    /// A catalog error annotated with where it was found
    Catalog {
        /// Catalog file, if the catalog came from disk
        path: Option<PathBuf>,
        /// One-based line number within the catalog text
        line: Option<usize>,
        /// The underlying catalog error
        source: Box<PuzzleError>,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered solution to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSymbol { token, reason } => {
                write!(f, "Malformed edge symbol '{token}': {reason}")
            }
            Self::DegenerateTile { tile } => {
                write!(f, "Tile {tile} has no edges")
            }
            Self::MismatchedSides {
                tile,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {tile} has {found} sides but the catalog uses {expected}"
                )
            }
            Self::UnsupportedSideCount { sides } => {
                write!(
                    f,
                    "Tiles with {sides} sides cannot be laid out on a square grid"
                )
            }
            Self::InvalidTargetSize { target, reason } => {
                write!(f, "Invalid target size {target}: {reason}")
            }
            Self::InvalidPlacement { label, reason } => {
                write!(f, "Invalid placement '{label}': {reason}")
            }
            Self::Catalog { path, line, source } => {
                write!(f, "Invalid tile catalog")?;
                match (path, line) {
                    (Some(path), Some(line)) => write!(f, " at {}:{line}", path.display())?,
                    (Some(path), None) => write!(f, " in {}", path.display())?,
                    (None, Some(line)) => write!(f, " at line {line}")?,
                    (None, None) => {}
                }
                write!(f, ": {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog { source, .. } => Some(source.as_ref()),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Location information to enrich catalog error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Catalog file being read
    pub path: Option<PathBuf>,
    /// One-based line within the catalog text
    pub line: Option<usize>,
}

/// Enriches catalog errors with the location they were found at
pub trait WithContext<T> {
    /// Attach location context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in `PuzzleError::Catalog`
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Attach just a line number
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in `PuzzleError::Catalog`
    fn with_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PuzzleError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| match e.into() {
            // Merge rather than nest so a file path can be added to a line-annotated error
            PuzzleError::Catalog { path, line, source } => PuzzleError::Catalog {
                path: context.path.or(path),
                line: context.line.or(line),
                source,
            },
            other => PuzzleError::Catalog {
                path: context.path,
                line: context.line,
                source: Box::new(other),
            },
        })
    }

    fn with_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext {
            line: Some(line),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid target size error
pub fn invalid_target(target: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidTargetSize {
        target,
        reason: reason.to_string(),
    }
}

/// Create an invalid placement label error
pub fn invalid_placement(label: &str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidPlacement {
        label: label.to_string(),
        reason: reason.to_string(),
    }
}
