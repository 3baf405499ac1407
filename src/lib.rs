pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{resolve_params, toml_config::TomlConfig, LayeredConfig};
pub use crate::core::{copy::copy_range, files::copy_files, plan::plan_copy};
pub use domain::model::{CopyParams, CopyPlan};
pub use utils::error::{DdError, Result};
