//! Error types.
//!
//! Deciding that pieces do not fit is not an error: that answer is reported as
//! [`Verdict::Infeasible`](crate::Verdict::Infeasible). Errors are reserved
//! for a failing SAT backend and for malformed puzzle text.

use std::num::ParseIntError;

/// Errors returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The SAT backend failed without deciding the formula.
    #[error("SAT backend failed: {0}")]
    Backend(String),

    /// Puzzle text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors produced while parsing puzzle text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A shape header was not followed by any stencil rows.
    #[error("line {line}: shape \"{name}\" has no stencil rows")]
    MissingShapeRows {
        /// Line number of the shape header, counting from 1.
        line: usize,
        /// Name given in the shape header.
        name: String,
    },

    /// A stencil row contained a character other than `#` or `.`.
    #[error("line {line}: invalid stencil character '{found}' (expected '#' or '.')")]
    InvalidShapeChar {
        /// Line number of the stencil row, counting from 1.
        line: usize,
        /// The offending character.
        found: char,
    },

    /// A stencil had no occupied cells.
    #[error("line {line}: shape \"{name}\" has no occupied cells")]
    EmptyShape {
        /// Line number of the shape header, counting from 1.
        line: usize,
        /// Name given in the shape header.
        name: String,
    },

    /// A region line was not of the form `<W>x<H>: <counts>`.
    #[error("line {line}: invalid region \"{input}\" (expected \"<W>x<H>: <counts>\")")]
    InvalidRegion {
        /// Line number of the region, counting from 1.
        line: usize,
        /// The offending line.
        input: String,
    },

    /// A number could not be parsed.
    #[error("line {line}: {source}")]
    InvalidInt {
        /// Line number, counting from 1.
        line: usize,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A region listed a different number of counts than there are shapes.
    #[error("line {line}: region lists {found} counts but {expected} shapes are defined")]
    CountMismatch {
        /// Line number of the region, counting from 1.
        line: usize,
        /// Number of shapes defined.
        expected: usize,
        /// Number of counts given.
        found: usize,
    },
}
