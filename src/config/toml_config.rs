use crate::utils::error::{ContactError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub path: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    pub tag_hint_delay_ms: Option<u64>,
    pub field_hint_delay_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContactError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContactError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACTS_API_URL})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContactError::ConfigError {
            message: format!("Invalid env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[api]
base_url = "https://contacts.example.com"
path = "v2/contacts"
timeout_seconds = 10

[ui]
tag_hint_delay_ms = 800
field_hint_delay_ms = 2500
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url.as_deref(), Some("https://contacts.example.com"));
        assert_eq!(config.api.path.as_deref(), Some("v2/contacts"));
        assert_eq!(config.api.timeout_seconds, Some(10));
        assert_eq!(config.ui.tag_hint_delay_ms, Some(800));
        assert_eq!(config.ui.field_hint_delay_ms, Some(2500));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.ui.tag_hint_delay_ms.is_none());

        let config = TomlConfig::from_toml_str("[ui]\ntag_hint_delay_ms = 0\n").unwrap();
        assert_eq!(config.ui.tag_hint_delay_ms, Some(0));
        assert!(config.api.path.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONTACT_MANAGER_TEST_BASE_URL", "https://test.contacts.com");

        let toml_content = r#"
[api]
base_url = "${CONTACT_MANAGER_TEST_BASE_URL}"
path = "${CONTACT_MANAGER_TEST_UNSET_PATH}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://test.contacts.com"));
        assert_eq!(
            config.api.path.as_deref(),
            Some("${CONTACT_MANAGER_TEST_UNSET_PATH}")
        );

        std::env::remove_var("CONTACT_MANAGER_TEST_BASE_URL");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"http://localhost:4000\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:4000"));

        assert!(matches!(
            TomlConfig::from_file("/definitely/not/here.toml"),
            Err(ContactError::IoError(_))
        ));
    }
}
