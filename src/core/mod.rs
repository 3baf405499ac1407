pub mod copy;
pub mod files;
pub mod plan;

pub use crate::domain::model::{CopyParams, CopyPlan};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
