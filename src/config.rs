use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 全局配置单例
static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别（EnvFilter 语法，如 "info" 或 "pet_adoption_backend=debug"）
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
    /// 日志格式：full | compact
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        crate::logging::DEFAULT_FILTER.to_string()
    }
    fn default_format() -> String {
        "full".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: Self::default_format(),
        }
    }
}

/// 图片格式化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// 单张图片原始字节上限（0=不限制）
    #[serde(default = "FormatterConfig::default_max_image_bytes")]
    pub max_image_bytes: u64,
}

impl FormatterConfig {
    fn default_max_image_bytes() -> u64 {
        0
    }

    /// 换算为平台 usize 上限；0 或超出平台范围时视为不限制。
    pub fn image_limit(&self) -> Option<usize> {
        if self.max_image_bytes == 0 {
            return None;
        }
        usize::try_from(self.max_image_bytes).ok()
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: Self::default_max_image_bytes(),
        }
    }
}

/// 本地夹具配置（诊断工具的内存仓储数据来源）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesConfig {
    /// 动物夹具 JSON 文件路径
    #[serde(default = "FixturesConfig::default_path")]
    pub path: String,
}

impl FixturesConfig {
    fn default_path() -> String {
        "./resources/animals.json".to_string()
    }
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 图片格式化配置
    #[serde(default)]
    pub formatter: FormatterConfig,
    /// 夹具配置
    #[serde(default)]
    pub fixtures: FixturesConfig,
}

impl AppConfig {
    /// 从默认路径加载配置，支持环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::get_config_path())
    }

    /// 从指定路径加载配置；文件缺失时仅使用默认值与环境变量。
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("正在从 {:?} 加载配置文件", config_path);

        let builder = ConfigBuilder::builder()
            .add_source(File::from(config_path).required(false))
            // 支持环境变量覆盖，例如：APP_FORMATTER__MAX_IMAGE_BYTES
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = builder.try_deserialize()?;

        tracing::debug!(
            "配置加载完成: max_image_bytes = {}, fixtures = {}",
            config.formatter.max_image_bytes,
            config.fixtures.path
        );

        Ok(config)
    }

    /// 获取全局配置单例；未初始化时返回 None。
    pub fn global() -> Option<&'static AppConfig> {
        CONFIG.get()
    }

    /// 初始化全局配置
    pub fn init_global() -> Result<&'static AppConfig, ConfigError> {
        let config = Self::load()?;
        CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("配置已经被初始化".to_string()))?;
        CONFIG
            .get()
            .ok_or_else(|| ConfigError::Message("配置初始化失败".to_string()))
    }

    /// 获取配置文件路径（`APP_CONFIG_PATH` 优先）
    pub fn get_config_path() -> PathBuf {
        std::env::var_os("APP_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// 获取夹具文件路径
    pub fn fixtures_path(&self) -> PathBuf {
        PathBuf::from(&self.fixtures.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_leave_images_uncapped() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.formatter.max_image_bytes, 0);
        assert_eq!(cfg.formatter.image_limit(), None);
    }

    #[test]
    fn default_logging_level_scopes_to_this_crate() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.level, crate::logging::DEFAULT_FILTER);
        assert_eq!(cfg.logging.format, "full");
    }

    #[test]
    fn zero_limit_disables_image_cap() {
        let cfg = FormatterConfig { max_image_bytes: 0 };
        assert_eq!(cfg.image_limit(), None);
    }

    #[test]
    fn load_from_reads_partial_file_and_fills_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp config");
        writeln!(file, "[formatter]\nmax_image_bytes = 2048").expect("write config");

        let cfg = AppConfig::load_from(file.path()).expect("load config");
        assert_eq!(cfg.formatter.image_limit(), Some(2048));
        assert_eq!(cfg.logging.format, "full");
        assert_eq!(cfg.fixtures.path, "./resources/animals.json");
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml")).expect("load config");
        assert_eq!(cfg.formatter.max_image_bytes, 0);
        assert_eq!(cfg.logging.level, crate::logging::DEFAULT_FILTER);
    }
}
