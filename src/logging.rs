use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// 未配置任何过滤规则时的默认指令
pub const DEFAULT_FILTER: &str = "pet_adoption_backend=info";

/// 构造日志过滤器：`RUST_LOG` 优先，其次为配置中的 level，最后回退到默认值。
pub fn build_env_filter(cfg: Option<&LoggingConfig>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    cfg.map(|c| c.level.trim())
        .filter(|level| !level.is_empty())
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// 初始化全局 tracing 订阅器。
///
/// 重复初始化（例如测试中多次调用）会被忽略。
pub fn init_tracing(cfg: Option<&LoggingConfig>) {
    let filter = build_env_filter(cfg);
    let compact = cfg.is_some_and(|c| c.format.eq_ignore_ascii_case("compact"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = if compact {
        builder.compact().try_init()
    } else {
        builder.try_init()
    };
}
