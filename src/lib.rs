//! # pagecat
//!
//! Stream a file to standard output through a page-aligned buffer whose size
//! is advised per file: the memory page size, the filesystem's preferred
//! block size, or a fixed experimentally tuned constant.

pub mod buffer;
pub mod cli;
pub mod constants;
pub mod copy;
pub mod error;
pub mod logging;
pub mod platform;
pub mod sizing;
