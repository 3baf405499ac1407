use std::fmt;
use std::path::PathBuf;

/// Validated parameters for one copy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyParams {
    pub from: PathBuf,
    pub to: PathBuf,
    /// Byte position in the source to start reading from.
    pub offset: u64,
    /// Maximum number of bytes to transfer, 0 means unbounded.
    pub limit: u64,
}

impl CopyParams {
    pub fn new(from: impl Into<PathBuf>, to: impl Into<PathBuf>, offset: u64, limit: u64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            offset,
            limit,
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.limit > 0
    }
}

impl fmt::Display for CopyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (offset {}, limit {})",
            self.from.display(),
            self.to.display(),
            self.offset,
            if self.is_bounded() {
                self.limit.to_string()
            } else {
                "none".to_string()
            }
        )
    }
}

/// Preview of a copy, computed from source metadata only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    pub params: CopyParams,
    pub source_len: u64,
    pub bytes_to_copy: u64,
}
