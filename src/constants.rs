//! # Constants Module
//!
//! Centralized constants used throughout the pagecat crate.
//! This avoids magic numbers scattered across the codebase.

/// Page size assumed when the platform query fails (4 KiB)
pub const FALLBACK_PAGE_SIZE: usize = 4096;

/// Chunk size used by the fixed experimental sizing policy (2 MiB)
pub const FIXED_CHUNK_SIZE: usize = 2 * 1024 * 1024;
