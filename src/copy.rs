//! # Copy Module
//!
//! The transfer driver: streams an input file to a writer through one aligned
//! buffer, sized once per file by the active policy.
//!
//! Resource order is open input, size buffer, allocate buffer, transfer loop,
//! close input, release buffer; failure paths release whatever was acquired
//! before returning.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::buffer::AlignedBuffer;
use crate::error::{PagecatError, Result};
use crate::platform;
use crate::sizing::SizingPolicy;

/// Counters reported after a completed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub bytes_copied: u64,
    pub chunks: u64,
    pub chunk_size: usize,
}

/// Pump `reader` into `writer` one buffer at a time until end-of-input.
///
/// Each cycle issues a single write for exactly the bytes the read returned;
/// a write that reports any other count is fatal and is not retried.
pub fn copy_stream<R, W>(
    reader: &mut R,
    buffer: &mut AlignedBuffer,
    writer: &mut W,
) -> Result<(u64, u64)>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut bytes_copied = 0u64;
    let mut chunks = 0u64;

    loop {
        let read = reader
            .read(buffer.as_mut_slice())
            .map_err(PagecatError::Read)?;
        if read == 0 {
            return Ok((bytes_copied, chunks));
        }

        let written = writer
            .write(&buffer.as_slice()[..read])
            .map_err(PagecatError::Write)?;
        if written != read {
            return Err(PagecatError::ShortWrite {
                expected: read,
                written,
            });
        }

        bytes_copied += read as u64;
        chunks += 1;
    }
}

/// Run one full transfer of `path` into `writer`.
pub fn run_to_writer<W>(path: &Path, policy: SizingPolicy, writer: &mut W) -> Result<CopyStats>
where
    W: Write + ?Sized,
{
    let mut file = File::open(path).map_err(|source| PagecatError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    match platform::advise_sequential(&file) {
        Ok(()) => debug!("advised sequential access for {}", path.display()),
        Err(err) => warn!("sequential access advisory failed: {err}"),
    }

    let chunk_size = policy.chunk_size(Some(&file));
    info!("using {chunk_size} byte chunks for {}", path.display());

    let mut buffer = AlignedBuffer::new(chunk_size)?;
    let (bytes_copied, chunks) = copy_stream(&mut file, &mut buffer, writer)?;
    writer.flush().map_err(PagecatError::Write)?;

    platform::close(file).map_err(PagecatError::Close)?;

    let stats = CopyStats {
        bytes_copied,
        chunks,
        chunk_size,
    };
    info!(
        "copy_summary bytes_copied={} chunks={} chunk_size={}",
        stats.bytes_copied, stats.chunks, stats.chunk_size
    );
    Ok(stats)
}

/// Transfer `path` to standard output.
pub fn run(path: &Path, policy: SizingPolicy) -> Result<CopyStats> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to_writer(path, policy, &mut out)
}
