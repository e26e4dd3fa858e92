//! 配置服务
//!
//! 配置文件位于 `<config_dir>/customer-dashboard/config.toml`，缺失时使用默认值；
//! 加载后再应用环境变量覆盖。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use customer_dashboard_client::{ClientConfig, DEFAULT_REQUEST_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// 配置目录名
const APP_DIR: &str = "customer-dashboard";
/// 配置文件名
const CONFIG_FILE: &str = "config.toml";

/// 默认 API 地址
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
/// 默认每页行数
pub const DEFAULT_PAGE_SIZE: u32 = 5;

// 环境变量
pub const ENV_API_URL: &str = "CUSTOMER_DASHBOARD_API_URL";
pub const ENV_PAGE_SIZE: &str = "CUSTOMER_DASHBOARD_PAGE_SIZE";
pub const ENV_LANG: &str = "CUSTOMER_DASHBOARD_LANG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub request_timeout_secs: u64,
    /// BCP 47 语言代码
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            language: Language::default().code().to_string(),
        }
    }
}

impl AppConfig {
    /// 界面语言（无法识别时回退到默认语言）
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language.code().to_string();
    }

    /// HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone())
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }

    /// 应用环境变量覆盖
    ///
    /// 无法解析的值会被忽略并记录警告。
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => self.page_size = size,
                _ => log::warn!("ignoring invalid {ENV_PAGE_SIZE}={raw}"),
            }
        }
        if let Some(code) = lookup(ENV_LANG) {
            match Language::from_code(code.trim()) {
                Some(language) => self.set_language(language),
                None => log::warn!("ignoring unsupported {ENV_LANG}={code}"),
            }
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 基于 TOML 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 平台配置目录下的默认位置
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取文件，不应用环境变量
    fn read_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("no config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config in {}", self.path.display()))
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = self.read_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::info!("config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("customer-dashboard-test-{}-{name}", std::process::id()))
            .join(CONFIG_FILE)
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str("page_size = 10").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            (ENV_API_URL, "https://crm.example.com/api"),
            (ENV_PAGE_SIZE, "20"),
            (ENV_LANG, "pt-BR"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.api_base_url, "https://crm.example.com/api");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.language(), Language::PtBr);
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            ENV_PAGE_SIZE => Some("zero".to_string()),
            ENV_LANG => Some("xx".to_string()),
            _ => None,
        });
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn unknown_language_falls_back_to_default() {
        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::default());
    }

    #[test]
    fn save_then_read_returns_same_config() {
        let path = temp_path("roundtrip");
        let service = FileConfigService::new(&path);
        let config = AppConfig {
            page_size: 8,
            language: "pt-BR".to_string(),
            ..AppConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.read_file().unwrap(), config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let service = FileConfigService::new(temp_path("missing"));
        assert_eq!(service.read_file().unwrap(), AppConfig::default());
    }
}
