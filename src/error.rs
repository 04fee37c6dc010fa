//! # Error Module
//!
//! Unified error handling for the pagecat crate.
//! Every fatal failure of a transfer maps onto one variant here; size-query
//! failures are recovered locally with fallback values and never surface.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Central error type for pagecat operations.
#[derive(Debug, Error)]
pub enum PagecatError {
    /// Input file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The underlying allocator could not provide the padded backing storage
    #[error("failed to allocate {size} byte aligned buffer")]
    Allocation { size: usize },

    /// Error during a read from the input file
    #[error("read error: {0}")]
    Read(#[source] io::Error),

    /// Error during a write to the output stream
    #[error("write error: {0}")]
    Write(#[source] io::Error),

    /// Output accepted a different number of bytes than requested
    #[error("short write: wrote {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },

    /// Closing the input file failed
    #[error("failed to close input: {0}")]
    Close(#[source] io::Error),
}

/// Result type alias using PagecatError
pub type Result<T> = std::result::Result<T, PagecatError>;
