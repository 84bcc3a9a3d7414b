use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用统一错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 参数校验错误
    #[error("参数校验错误: {0}")]
    Validation(String),

    /// 仓储查询错误
    #[error("仓储错误: {0}")]
    Repository(#[from] RepositoryError),

    /// 图片格式化错误
    #[error("图片格式化错误: {0}")]
    Format(#[from] FormatError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 仓储（数据访问层）错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// 数据源不可用（连接失败、已关闭等）
    #[error("数据源不可用: {0}")]
    Unavailable(String),

    /// 查询执行失败
    #[error("查询失败: {0}")]
    Query(String),

    /// 夹具文件读取或解析失败
    #[error("夹具加载失败: {0}")]
    Fixture(String),
}

/// 图片格式化错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// 单张图片超过配置的字节上限
    #[error("动物 {animal_id} 的第 {position} 张图片过大（{size} 字节，上限 {limit} 字节）")]
    ImageTooLarge {
        animal_id: String,
        /// 图片在该动物图片列表中的下标（0-based）
        position: usize,
        size: usize,
        limit: usize,
    },
}

impl AppError {
    /// 稳定的错误码，用于日志与程序化处理。
    pub fn stable_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_FAILED",
            AppError::Repository(e) => match e {
                RepositoryError::Unavailable(_) => "REPOSITORY_UNAVAILABLE",
                RepositoryError::Query(_) => "REPOSITORY_QUERY_FAILED",
                RepositoryError::Fixture(_) => "FIXTURE_INVALID",
            },
            AppError::Format(FormatError::ImageTooLarge { .. }) => "IMAGE_TOO_LARGE",
            AppError::Config(_) => "CONFIG_INVALID",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// 服务层对外暴露的失败载荷：`{ "message": string }`。
///
/// 服务的所有失败路径都会构造该类型，调用方只需处理 `Result` 的两个分支。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[schema(example = json!({"message": "仓储错误: 数据源不可用: pool closed"}))]
pub struct ServiceFailure {
    /// 人类可读的错误信息
    pub message: String,
}

impl ServiceFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceFailure {}

impl From<AppError> for ServiceFailure {
    fn from(err: AppError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_codes_distinguish_repository_failures() {
        let unavailable = AppError::from(RepositoryError::Unavailable("down".into()));
        let query = AppError::from(RepositoryError::Query("syntax".into()));
        assert_eq!(unavailable.stable_code(), "REPOSITORY_UNAVAILABLE");
        assert_eq!(query.stable_code(), "REPOSITORY_QUERY_FAILED");
    }

    #[test]
    fn stable_codes_cover_config_and_internal_failures() {
        let config = AppError::from(config::ConfigError::Message("配置已经被初始化".into()));
        let internal = AppError::Internal("schema serialization".into());
        assert_eq!(config.stable_code(), "CONFIG_INVALID");
        assert_eq!(internal.stable_code(), "INTERNAL_ERROR");
        assert!(config.to_string().starts_with("配置错误"), "{config}");
        assert_eq!(
            ServiceFailure::from(internal).message,
            "内部错误: schema serialization"
        );
    }

    #[test]
    fn service_failure_keeps_full_error_chain_in_message() {
        let err = AppError::from(FormatError::ImageTooLarge {
            animal_id: "a1".into(),
            position: 2,
            size: 2048,
            limit: 1024,
        });
        let failure = ServiceFailure::from(err);
        assert!(failure.message.contains("a1"), "{failure}");
        assert!(failure.message.contains("2048"), "{failure}");
        assert!(failure.message.starts_with("图片格式化错误"), "{failure}");
    }
}
