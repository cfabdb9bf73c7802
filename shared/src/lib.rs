//! DrowseWatch 共享核心
//!
//! 与平台无关的会话/路由守卫逻辑，前端 (wasm32) 与原生测试共用：
//! - `session`: 会话模型与持久化存储 (`SessionStore`)
//! - `route`: 路由表（领域模型）
//! - `guard`: 纯函数守卫决策
//! - `navigation`: 导航状态机（守卫决策 -> History 更新）
//! - `request` / `health`: HTTP 抽象与后端可达性检查

pub mod error;
pub mod guard;
pub mod health;
pub mod navigation;
pub mod request;
pub mod route;
pub mod session;

pub use error::{HttpError, InvalidSession, SessionError, StorageError};
pub use guard::{GuardDecision, Resolution, ViewVariant, evaluate, resolve};
pub use health::{HealthMonitor, HealthStatus, check, check_with_timeout};
pub use navigation::{HistoryUpdate, Navigation};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use route::{AppRoute, RouteSpec, Visibility};
pub use session::{KeyValueStore, MemoryStore, Role, Session, SessionStore};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化会话所用的存储键
pub const STORAGE_SESSION_KEY: &str = "drowsiness_user";

/// 登录接口路径（由登录组件使用）
pub const API_LOGIN_PATH: &str = "/api/login";

/// 注册接口路径（由注册组件使用）
pub const API_REGISTER_PATH: &str = "/api/register";

/// 健康检查路径（后端根路径）
pub const API_HEALTH_PATH: &str = "/";

/// 拼接后端基础 URL 与接口路径，去除多余的 `/`
pub fn endpoint(base_url: &str, path: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base_url, path)
    } else {
        format!("{}/{}", base_url, path)
    }
}
