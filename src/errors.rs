//! Centralized error handling for RuDiCy
//!
//! This module provides structured error types to replace the generic `Box<dyn Error>`
//! used throughout the codebase, enabling better error context and type safety.

use std::fmt;

/// Main error type for RuDiCy operations
#[derive(Debug)]
pub enum RuDiCyError {
    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// Time coordinate samples are not evenly spaced
    NonUniformSampling(String),

    /// Invalid sampling resolution (non-positive, fractional, or not inferable)
    InvalidResolution { message: String },

    /// I/O operation errors
    IoError(std::io::Error),

    /// Variable not found in NetCDF file
    VariableNotFound { var: String },

    /// Dimension not found in variable
    DimensionNotFound { var: String, dim: String },

    /// Coordinate length does not match the corresponding dimension
    CoordinateMismatch { dim: String, message: String },

    /// Number of dimension names does not match the data array rank
    RankMismatch { var: String, names: usize, rank: usize },

    /// Failure decoding a time coordinate from its units attribute
    TimeDecodeError(String),

    /// Invalid histogram arguments (bin-edge count, axis label)
    InvalidHistogram { message: String },

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for backward compatibility
    Generic(String),
}

impl fmt::Display for RuDiCyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuDiCyError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            RuDiCyError::NonUniformSampling(msg) => write!(f, "Non-uniform sampling: {}", msg),
            RuDiCyError::InvalidResolution { message } => {
                write!(f, "Invalid sampling resolution: {}", message)
            }
            RuDiCyError::IoError(e) => write!(f, "I/O error: {}", e),
            RuDiCyError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
            RuDiCyError::DimensionNotFound { var, dim } => {
                write!(f, "Dimension '{}' not found in variable '{}'", dim, var)
            }
            RuDiCyError::CoordinateMismatch { dim, message } => {
                write!(f, "Coordinate mismatch on dimension '{}': {}", dim, message)
            }
            RuDiCyError::RankMismatch { var, names, rank } => {
                write!(
                    f,
                    "Variable '{}' has {} dimension names but data rank {}",
                    var, names, rank
                )
            }
            RuDiCyError::TimeDecodeError(msg) => write!(f, "Time decoding error: {}", msg),
            RuDiCyError::InvalidHistogram { message } => {
                write!(f, "Invalid histogram arguments: {}", message)
            }
            RuDiCyError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            RuDiCyError::ArrayError(e) => write!(f, "Array error: {}", e),
            RuDiCyError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RuDiCyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuDiCyError::NetCDFError(e) => Some(e),
            RuDiCyError::IoError(e) => Some(e),
            RuDiCyError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for RuDiCyError {
    fn from(error: netcdf::Error) -> Self {
        RuDiCyError::NetCDFError(error)
    }
}

impl From<std::io::Error> for RuDiCyError {
    fn from(error: std::io::Error) -> Self {
        RuDiCyError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for RuDiCyError {
    fn from(error: ndarray::ShapeError) -> Self {
        RuDiCyError::ArrayError(error)
    }
}

impl From<String> for RuDiCyError {
    fn from(error: String) -> Self {
        RuDiCyError::Generic(error)
    }
}

impl From<&str> for RuDiCyError {
    fn from(error: &str) -> Self {
        RuDiCyError::Generic(error.to_string())
    }
}

/// Result type alias for RuDiCy operations
pub type Result<T> = std::result::Result<T, RuDiCyError>;
