//! # Sizing Module
//!
//! Chunk size selection for the transfer loop. Aligned, page-sized-or-larger
//! transfers interact better with virtual memory, so the page size is the
//! floor for every adaptive policy.

use std::fs::File;

use tracing::warn;

use crate::constants::FIXED_CHUNK_SIZE;
use crate::platform;

/// Strategy for choosing the per-cycle transfer size.
///
/// The binary compiles exactly one variant in (see [`BUILD_POLICY`]); the full
/// set stays available to library users and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingPolicy {
    /// Use the memory page size alone
    PageOnly,
    /// Prefer the filesystem's reported block size, floored at the page size
    PageAndFsHint,
    /// Fixed 2 MiB chunks, tuned for large sequential transfers
    FixedExperimental,
}

/// Policy baked into the `pagecat` binary, selected via cargo features.
#[cfg(feature = "fixed-sizing")]
pub const BUILD_POLICY: SizingPolicy = SizingPolicy::FixedExperimental;
#[cfg(all(feature = "fs-hint-sizing", not(feature = "fixed-sizing")))]
pub const BUILD_POLICY: SizingPolicy = SizingPolicy::PageAndFsHint;
#[cfg(not(any(feature = "fs-hint-sizing", feature = "fixed-sizing")))]
pub const BUILD_POLICY: SizingPolicy = SizingPolicy::PageOnly;

impl SizingPolicy {
    /// Decide the chunk size for one file's transfer.
    ///
    /// Never fails: query failures degrade to the page size, which itself
    /// degrades to a 4096 byte fallback.
    pub fn chunk_size(&self, file: Option<&File>) -> usize {
        match self {
            SizingPolicy::PageOnly => platform::page_size(),
            SizingPolicy::PageAndFsHint => {
                let page_size = platform::page_size();
                match file.and_then(platform::fs_block_hint) {
                    // Sub-page hints would forfeit the alignment benefits.
                    Some(hint) => hint.max(page_size),
                    None => {
                        warn!("no usable filesystem block size, using page size");
                        page_size
                    }
                }
            }
            SizingPolicy::FixedExperimental => FIXED_CHUNK_SIZE,
        }
    }
}
