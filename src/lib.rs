/// 统一错误处理模块
pub mod error;

/// 配置模块
pub mod config;

/// 日志初始化
pub mod logging;

/// 功能聚合模块
pub mod features;

/// 服务聚合模块
pub mod state;

/// OpenAPI 组件文档
pub mod openapi;

// 导出常用类型供外部使用
pub use config::AppConfig;
pub use error::{AppError, FormatError, RepositoryError, ServiceFailure};
pub use state::AnimalServices;
