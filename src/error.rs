//! Error types for Sandhi.

use thiserror::Error;

/// Sandhi error type
#[derive(Error, Debug)]
pub enum SandhiError {
    #[error("invalid threshold {0}: must be at least 1")]
    InvalidThreshold(u32),

    #[error("invalid separation factor {0}: must be positive and finite")]
    InvalidSeparation(f32),

    #[error("empty grid: {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid error: {0}")]
    Grid(String),
}

pub type Result<T> = std::result::Result<T, SandhiError>;
