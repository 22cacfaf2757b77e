//! Error types for transform validation, sampling and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine and front end operations
#[derive(Debug)]
pub enum IfsError {
    /// A parameter lies outside its configured bounds
    ///
    /// Raised for transform coefficients as well as for iteration counts
    /// and the transform count ceiling. No geometry is produced.
    Range {
        /// Index of the offending transform, if the parameter belongs to one
        transform: Option<usize>,
        /// Name of the parameter (`a`..`f`, `iterations`, `transforms`)
        parameter: &'static str,
        /// Provided value that failed validation
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Transform weights do not sum to one under the strict policy
    Probability {
        /// Observed sum of all weights
        sum: f64,
    },

    /// A weight is negative or not finite under the strict policy
    NegativeWeight {
        /// Index of the offending transform
        transform: usize,
        /// The weight that cannot be used as a probability
        weight: f64,
    },

    /// Caller input could not be interpreted
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The categorical distribution over transforms could not be built
    Sampling {
        /// Description of the failure
        reason: String,
    },

    /// Failed to save rendered image to disk
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

impl fmt::Display for IfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range {
                transform,
                parameter,
                value,
                min,
                max,
            } => {
                if let Some(index) = transform {
                    write!(
                        f,
                        "Transformation {index}: parameter '{parameter}' = {value} is outside [{min}, {max}]"
                    )
                } else {
                    write!(
                        f,
                        "Parameter '{parameter}' = {value} is outside [{min}, {max}]"
                    )
                }
            }
            Self::Probability { sum } => {
                write!(f, "Probabilities do not add up to one (sum = {sum})")
            }
            Self::NegativeWeight { transform, weight } => {
                write!(
                    f,
                    "Transformation {transform}: weight {weight} is not a valid probability"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Sampling { reason } => {
                write!(f, "Cannot sample transformations: {reason}")
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

impl std::error::Error for IfsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl IfsError {
    /// Attach the index of the transform a range error belongs to
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_transform(self, index: usize) -> Self {
        match self {
            Self::Range {
                parameter,
                value,
                min,
                max,
                ..
            } => Self::Range {
                transform: Some(index),
                parameter,
                value,
                min,
                max,
            },
            other => other,
        }
    }

    /// Whether this error was raised by parameter or weight validation
    ///
    /// Validation failures are user-correctable; the presentation layer
    /// shows them as messages rather than aborting.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Range { .. } | Self::Probability { .. } | Self::NegativeWeight { .. }
        )
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, IfsError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> IfsError {
    IfsError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a range error for a parameter that does not belong to a transform
pub const fn range_error(parameter: &'static str, value: f64, min: f64, max: f64) -> IfsError {
    IfsError::Range {
        transform: None,
        parameter,
        value,
        min,
        max,
    }
}
