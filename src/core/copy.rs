use crate::utils::error::{DdError, Result};
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Copies bytes from `src` into `dest`, starting `offset` bytes into the
/// source and stopping after `limit` bytes (0 = until end of source).
///
/// Returns the number of bytes written.
pub fn copy_range<R, W>(src: &mut R, dest: &mut W, offset: u64, limit: u64) -> Result<u64>
where
    R: Read + Seek + ?Sized,
    W: Write + ?Sized,
{
    if offset > 0 {
        src.seek(SeekFrom::Start(offset))
            .map_err(|source| DdError::SeekError { offset, source })?;
        tracing::debug!("Seeked source to offset {}", offset);
    }

    let copied = if limit > 0 {
        io::copy(&mut src.take(limit), dest)
    } else {
        io::copy(src, dest)
    };
    let written = copied.map_err(|source| DdError::TransferError { source })?;

    tracing::debug!("Transferred {} bytes", written);
    Ok(written)
}
