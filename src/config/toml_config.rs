use crate::core::ConfigProvider;
use crate::utils::error::{DdError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Copy job loaded from a TOML file.
///
/// ```toml
/// [copy]
/// from = "./files/source.txt"
/// to = "./files/dest.txt"
/// offset = 13
/// limit = 9
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub copy: CopySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopySection {
    pub from: Option<String>,
    pub to: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| DdError::ConfigValidationError {
                field: "config".to_string(),
                message: format!(
                    "Failed to load config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DdError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DdError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn from_path(&self) -> Option<&str> {
        self.copy.from.as_deref()
    }

    fn to_path(&self) -> Option<&str> {
        self.copy.to.as_deref()
    }

    fn offset(&self) -> Option<i64> {
        self.copy.offset
    }

    fn limit(&self) -> Option<i64> {
        self.copy.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_copy_table() {
        let toml_content = r#"
[copy]
from = "./files/source.txt"
to = "./files/dest.txt"
offset = 13
limit = 9
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.from_path(), Some("./files/source.txt"));
        assert_eq!(config.to_path(), Some("./files/dest.txt"));
        assert_eq!(config.offset(), Some(13));
        assert_eq!(config.limit(), Some(9));
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.from_path(), None);
        assert_eq!(config.offset(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MINIDD_TEST_DATA_DIR", "/srv/data");

        let toml_content = r#"
[copy]
from = "${MINIDD_TEST_DATA_DIR}/in.bin"
to = "${MINIDD_TEST_UNSET_VAR}/out.bin"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.from_path(), Some("/srv/data/in.bin"));
        assert_eq!(config.to_path(), Some("${MINIDD_TEST_UNSET_VAR}/out.bin"));

        std::env::remove_var("MINIDD_TEST_DATA_DIR");
    }

    #[test]
    fn test_negative_values_are_kept_for_later_validation() {
        let config = TomlConfig::from_toml_str("[copy]\noffset = -4\n").unwrap();

        assert_eq!(config.offset(), Some(-4));
    }

    #[test]
    fn test_missing_config_file() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();

        assert!(matches!(err, DdError::ConfigValidationError { ref field, .. } if field == "config"));
        assert_eq!(err.severity().exit_code(), 1);
        assert!(err
            .user_friendly_message()
            .starts_with("Failed to load config file '/definitely/not/here.toml'"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[copy\nfrom = ").unwrap_err();

        assert!(matches!(err, DdError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[copy]\nfrom = \"a.txt\"\nlimit = 0\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.from_path(), Some("a.txt"));
        assert_eq!(config.limit(), Some(0));
    }
}
