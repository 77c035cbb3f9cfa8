//! Error types for autoplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for autoplot operations.
pub type Result<T> = std::result::Result<T, AutoPlotError>;

/// Errors that can occur while assembling or rendering a figure.
#[derive(Debug, Error)]
pub enum AutoPlotError {
    /// More than two independent axes were given; auto-plotting rejects this.
    #[error("Cannot plot more than two axes (given: {})", .axes.join(", "))]
    TooManyAxes { axes: Vec<String> },

    /// A dependent references an axis that is not present in the dataset.
    #[error("Dependent '{dependent}' references unknown axis '{axis}'")]
    UnknownAxis { dependent: String, axis: String },

    /// A field was looked up by a name the dataset does not contain.
    #[error("No field named '{name}' in dataset")]
    UnknownField { name: String },

    /// Fields of a gridded dataset must all share one shape; columnar fields
    /// must all share one length.
    #[error("Field '{field}' has shape {got:?}, expected {expected:?}")]
    ShapeMismatch {
        field: String,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A dependent's rank does not match the number of axes it names.
    #[error("Dependent '{dependent}' names {naxes} axes but its values have rank {rank}")]
    RankMismatch {
        dependent: String,
        naxes: usize,
        rank: usize,
    },

    /// More panels were requested than the subplot grid can hold.
    #[error("Number of panels ({panels}) larger than rows ({rows}) x columns ({cols})")]
    GridOverflow {
        panels: usize,
        rows: usize,
        cols: usize,
    },

    /// A center grid was too small or too broken to convert to bin edges.
    #[error("Cannot compute mesh edges for a {rows}x{cols} grid")]
    DegenerateMesh { rows: usize, cols: usize },
}

impl AutoPlotError {
    /// Create an UnknownField error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create an UnknownAxis error.
    pub fn unknown_axis(dependent: impl Into<String>, axis: impl Into<String>) -> Self {
        Self::UnknownAxis {
            dependent: dependent.into(),
            axis: axis.into(),
        }
    }
}
