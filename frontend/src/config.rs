//! 构建期配置
//!
//! 浏览器中没有运行时环境变量，配置在编译时通过 `option_env!` 注入
//! （例如 `DROWSEWATCH_API_URL=https://api.example.com trunk build`）。

/// 这些是默认值，如果构建环境中没有定义，则使用这些值
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_HEALTH_TIMEOUT_MS: u32 = 5_000;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 后端基础 URL（不做校验，错误的值只会让健康检查失败）
    pub api_url: String,
    /// 健康检查超时（毫秒）
    pub health_timeout_ms: u32,
}

impl AppConfig {
    /// 从构建环境读取配置
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("DROWSEWATCH_API_URL"),
            option_env!("DROWSEWATCH_HEALTH_TIMEOUT_MS"),
        )
    }

    pub fn from_vars(api_url: Option<&str>, health_timeout_ms: Option<&str>) -> Self {
        Self {
            api_url: api_url
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),

            // 无法解析或为 0 时使用默认值
            health_timeout_ms: health_timeout_ms
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_HEALTH_TIMEOUT_MS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
