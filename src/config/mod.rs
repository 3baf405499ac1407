#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::model::CopyParams;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, validate_path, validate_required_field};

/// Two config sources stacked: values from `primary` win, `fallback` fills the gaps.
pub struct LayeredConfig<'a> {
    primary: &'a dyn ConfigProvider,
    fallback: Option<&'a dyn ConfigProvider>,
}

impl<'a> LayeredConfig<'a> {
    pub fn new(primary: &'a dyn ConfigProvider, fallback: Option<&'a dyn ConfigProvider>) -> Self {
        Self { primary, fallback }
    }
}

impl ConfigProvider for LayeredConfig<'_> {
    fn from_path(&self) -> Option<&str> {
        self.primary
            .from_path()
            .or_else(|| self.fallback.and_then(|f| f.from_path()))
    }

    fn to_path(&self) -> Option<&str> {
        self.primary
            .to_path()
            .or_else(|| self.fallback.and_then(|f| f.to_path()))
    }

    fn offset(&self) -> Option<i64> {
        self.primary
            .offset()
            .or_else(|| self.fallback.and_then(|f| f.offset()))
    }

    fn limit(&self) -> Option<i64> {
        self.primary
            .limit()
            .or_else(|| self.fallback.and_then(|f| f.limit()))
    }
}

/// Validates raw settings into [`CopyParams`].
///
/// Checks run in the order from, to, limit, offset; the first failure is returned.
pub fn resolve_params<P: ConfigProvider + ?Sized>(provider: &P) -> Result<CopyParams> {
    let from = validate_required_field("from", provider.from_path())?;
    validate_path("from", from)?;
    let to = validate_required_field("to", provider.to_path())?;
    validate_path("to", to)?;

    let limit = validate_non_negative("limit", provider.limit().unwrap_or(0))?;
    let offset = validate_non_negative("offset", provider.offset().unwrap_or(0))?;

    Ok(CopyParams::new(from, to, offset, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DdError;

    #[derive(Default)]
    struct StaticConfig {
        from: Option<String>,
        to: Option<String>,
        offset: Option<i64>,
        limit: Option<i64>,
    }

    impl ConfigProvider for StaticConfig {
        fn from_path(&self) -> Option<&str> {
            self.from.as_deref()
        }

        fn to_path(&self) -> Option<&str> {
            self.to.as_deref()
        }

        fn offset(&self) -> Option<i64> {
            self.offset
        }

        fn limit(&self) -> Option<i64> {
            self.limit
        }
    }

    fn paths(from: &str, to: &str) -> StaticConfig {
        StaticConfig {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_defaults_to_whole_file() {
        let params = resolve_params(&paths("a.txt", "b.txt")).unwrap();

        assert_eq!(params, CopyParams::new("a.txt", "b.txt", 0, 0));
    }

    #[test]
    fn test_resolve_reports_missing_from_first() {
        let err = resolve_params(&StaticConfig::default()).unwrap_err();

        assert!(matches!(err, DdError::MissingConfigError { field } if field == "from"));
    }

    #[test]
    fn test_resolve_reports_missing_to() {
        let config = StaticConfig {
            from: Some("a.txt".to_string()),
            ..Default::default()
        };

        let err = resolve_params(&config).unwrap_err();

        assert!(matches!(err, DdError::MissingConfigError { field } if field == "to"));
    }

    #[test]
    fn test_resolve_checks_limit_before_offset() {
        let config = StaticConfig {
            offset: Some(-3),
            limit: Some(-1),
            ..paths("a.txt", "b.txt")
        };

        let err = resolve_params(&config).unwrap_err();

        assert!(
            matches!(err, DdError::InvalidConfigValueError { ref field, .. } if field == "limit")
        );
    }

    #[test]
    fn test_resolve_rejects_negative_offset() {
        let config = StaticConfig {
            offset: Some(-3),
            ..paths("a.txt", "b.txt")
        };

        let err = resolve_params(&config).unwrap_err();

        assert_eq!(err.user_friendly_message(), "Offset should be not negative");
    }

    #[test]
    fn test_layered_config_prefers_primary() {
        let primary = StaticConfig {
            to: Some("override.txt".to_string()),
            limit: Some(4),
            ..Default::default()
        };
        let fallback = StaticConfig {
            offset: Some(2),
            limit: Some(100),
            ..paths("file-src.txt", "file-dst.txt")
        };

        let layered = LayeredConfig::new(&primary, Some(&fallback));
        let params = resolve_params(&layered).unwrap();

        assert_eq!(params, CopyParams::new("file-src.txt", "override.txt", 2, 4));
    }

    #[test]
    fn test_layered_config_without_fallback() {
        let primary = paths("a.txt", "b.txt");
        let layered = LayeredConfig::new(&primary, None);

        assert_eq!(layered.from_path(), Some("a.txt"));
        assert_eq!(layered.offset(), None);
    }
}
