//! # Platform Module
//!
//! Host-environment queries backing buffer sizing and transfer hints: the
//! memory page size, the filesystem's preferred block size for an open file,
//! a sequential-access advisory, and explicit close.

use std::fs::File;
use std::io;
use std::sync::OnceLock;

use tracing::warn;

use crate::constants::FALLBACK_PAGE_SIZE;

static PAGE_SIZE: OnceLock<usize> = OnceLock::new();

/// Native memory page size, queried once per process.
///
/// Falls back to [`FALLBACK_PAGE_SIZE`] when the platform refuses to answer;
/// a power of two on all supported platforms.
pub fn page_size() -> usize {
    *PAGE_SIZE.get_or_init(query_page_size)
}

#[cfg(unix)]
fn query_page_size() -> usize {
    let ret = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if ret <= 0 {
        warn!("could not query system page size, assuming {FALLBACK_PAGE_SIZE} bytes");
        return FALLBACK_PAGE_SIZE;
    }
    ret as usize
}

#[cfg(not(unix))]
fn query_page_size() -> usize {
    FALLBACK_PAGE_SIZE
}

/// Preferred I/O block size the filesystem reports for an open file.
///
/// `None` when the metadata query fails or the filesystem reports zero.
#[cfg(unix)]
pub fn fs_block_hint(file: &File) -> Option<usize> {
    use std::os::unix::fs::MetadataExt;

    let meta = file.metadata().ok()?;
    let blksize = meta.blksize();
    (blksize > 0).then(|| blksize as usize)
}

#[cfg(not(unix))]
pub fn fs_block_hint(_file: &File) -> Option<usize> {
    None
}

/// Tell the kernel the file will be read sequentially. Best-effort; callers
/// log a failure and carry on.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn advise_sequential(file: &File) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    // posix_fadvise returns the error number directly instead of setting errno.
    let ret =
        unsafe { libc::posix_fadvise(file.as_raw_fd(), 0, 0, libc::POSIX_FADV_SEQUENTIAL) };
    if ret != 0 {
        return Err(io::Error::from_raw_os_error(ret));
    }
    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn advise_sequential(_file: &File) -> io::Result<()> {
    Ok(())
}

/// Close `file`, surfacing the error that an implicit drop would swallow.
#[cfg(unix)]
pub fn close(file: File) -> io::Result<()> {
    use std::os::unix::io::IntoRawFd;

    let fd = file.into_raw_fd();
    if unsafe { libc::close(fd) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn close(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}
