use crate::domain::model::{CopyParams, CopyPlan};
use crate::utils::error::{DdError, Result};
use std::fs;
use std::io;

/// Works out how many bytes a copy would transfer without opening the destination.
pub fn plan_copy(params: &CopyParams) -> Result<CopyPlan> {
    let metadata = fs::metadata(&params.from).map_err(|source| DdError::SourceOpenError {
        path: params.from.clone(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(DdError::SourceOpenError {
            path: params.from.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    let source_len = metadata.len();
    let remaining = source_len.saturating_sub(params.offset);
    let bytes_to_copy = if params.is_bounded() {
        remaining.min(params.limit)
    } else {
        remaining
    };

    Ok(CopyPlan {
        params: params.clone(),
        source_len,
        bytes_to_copy,
    })
}
