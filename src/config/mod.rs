pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_PATH: &str = "api/contacts";
pub const DEFAULT_TAG_HINT_DELAY_MS: u64 = 1200;
pub const DEFAULT_FIELD_HINT_DELAY_MS: u64 = 3000;

const MAX_HINT_DELAY_MS: u64 = 60_000;
const MAX_TIMEOUT_SECONDS: u64 = 300;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "contact-manager")]
#[command(about = "Manage contacts stored behind a REST API from the terminal")]
pub struct CliConfig {
    #[arg(long, help = "Backend base URL [default: http://localhost:3000]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Contacts collection path [default: api/contacts]")]
    pub api_path: Option<String>,

    #[arg(long, help = "TOML config file")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "HTTP request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Delay before the tag filter hint appears [default: 1200]")]
    pub tag_hint_delay_ms: Option<u64>,

    #[arg(long, help = "Delay before a form field hint appears [default: 3000]")]
    pub field_hint_delay_ms: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            base_url: self.base_url.clone(),
            api_path: self.api_path.clone(),
            timeout_seconds: self.timeout_seconds,
            tag_hint_delay_ms: self.tag_hint_delay_ms,
            field_hint_delay_ms: self.field_hint_delay_ms,
        }
    }

    /// 讀取 --config 指定的檔案，再套用命令列參數
    pub fn load_settings(&self) -> Result<Settings> {
        let file = self
            .config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()?;
        Settings::resolve(file.as_ref(), &self.overrides())
    }
}

/// 命令列上明確指定的值，優先於 TOML 檔
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub api_path: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub tag_hint_delay_ms: Option<u64>,
    pub field_hint_delay_ms: Option<u64>,
}

/// 合併後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub api_path: String,
    pub timeout_seconds: Option<u64>,
    pub tag_hint_delay_ms: u64,
    pub field_hint_delay_ms: u64,
    contacts_url: String,
}

impl Settings {
    /// 優先順序：命令列 > TOML > 預設值
    pub fn resolve(file: Option<&TomlConfig>, overrides: &SettingsOverrides) -> Result<Self> {
        let api = file.map(|f| &f.api);
        let ui = file.map(|f| &f.ui);

        let base_url = overrides
            .base_url
            .clone()
            .or_else(|| api.and_then(|a| a.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_path = overrides
            .api_path
            .clone()
            .or_else(|| api.and_then(|a| a.path.clone()))
            .unwrap_or_else(|| DEFAULT_API_PATH.to_string());

        let settings = Self {
            contacts_url: join_contacts_url(&base_url, &api_path),
            base_url,
            api_path,
            timeout_seconds: overrides
                .timeout_seconds
                .or_else(|| api.and_then(|a| a.timeout_seconds)),
            tag_hint_delay_ms: overrides
                .tag_hint_delay_ms
                .or_else(|| ui.and_then(|u| u.tag_hint_delay_ms))
                .unwrap_or(DEFAULT_TAG_HINT_DELAY_MS),
            field_hint_delay_ms: overrides
                .field_hint_delay_ms
                .or_else(|| ui.and_then(|u| u.field_hint_delay_ms))
                .unwrap_or(DEFAULT_FIELD_HINT_DELAY_MS),
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            timeout_seconds: None,
            tag_hint_delay_ms: DEFAULT_TAG_HINT_DELAY_MS,
            field_hint_delay_ms: DEFAULT_FIELD_HINT_DELAY_MS,
            contacts_url: join_contacts_url(DEFAULT_BASE_URL, DEFAULT_API_PATH),
        }
    }
}

fn join_contacts_url(base_url: &str, api_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        api_path.trim_matches('/')
    )
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_non_empty_string("api.path", self.api_path.trim_matches('/'))?;
        Url::parse(&self.contacts_url)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("api.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        validate_range("ui.tag_hint_delay_ms", self.tag_hint_delay_ms, 0, MAX_HINT_DELAY_MS)?;
        validate_range("ui.field_hint_delay_ms", self.field_hint_delay_ms, 0, MAX_HINT_DELAY_MS)?;

        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn contacts_url(&self) -> &str {
        &self.contacts_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn tag_hint_delay(&self) -> Duration {
        Duration::from_millis(self.tag_hint_delay_ms)
    }

    fn field_hint_delay(&self) -> Duration {
        Duration::from_millis(self.field_hint_delay_ms)
    }
}
