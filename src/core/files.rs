use crate::core::copy::copy_range;
use crate::domain::model::CopyParams;
use crate::utils::error::{DdError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Opens `params.from` and `params.to` and copies the requested byte range.
///
/// The source is opened first, so a missing source leaves the destination
/// untouched. The destination is truncated, or created when absent.
pub fn copy_files(params: &CopyParams) -> Result<u64> {
    let mut source = File::open(&params.from).map_err(|source| DdError::SourceOpenError {
        path: params.from.clone(),
        source,
    })?;
    let is_file = source.metadata().map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        return Err(DdError::SourceOpenError {
            path: params.from.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }
    tracing::debug!("Opened source {}", params.from.display());

    let mut dest = open_destination(&params.to).map_err(|source| {
        DdError::DestinationOpenError {
            path: params.to.clone(),
            source,
        }
    })?;
    tracing::debug!("Opened destination {}", params.to.display());

    let written = copy_range(&mut source, &mut dest, params.offset, params.limit)?;
    dest.flush()?;

    Ok(written)
}

fn open_destination(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}
