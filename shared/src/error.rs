use thiserror::Error;

// =========================================================
// 存储错误
// =========================================================

/// 键值存储后端错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// 存储不可用（如浏览器禁用了 LocalStorage）
    #[error("存储不可用")]
    Unavailable,
    /// 读取失败
    #[error("读取键 `{key}` 失败: {message}")]
    Read { key: String, message: String },
    /// 写入失败（如配额已满）
    #[error("写入键 `{key}` 失败: {message}")]
    Write { key: String, message: String },
    /// 删除失败
    #[error("删除键 `{key}` 失败: {message}")]
    Remove { key: String, message: String },
}

// =========================================================
// 会话错误
// =========================================================

/// 会话持久化错误
///
/// 仅用于 `set` / `clear` 的持久化结果报告，内存中的会话始终已更新。
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("会话序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("会话持久化失败: {0}")]
    Storage(#[from] StorageError),
}

// =========================================================
// HTTP 错误
// =========================================================

/// HTTP 传输错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// 请求构建失败
    #[error("请求构建失败: {0}")]
    RequestBuild(String),
    /// 网络请求失败
    #[error("网络错误: {0}")]
    Network(String),
    /// 响应读取失败
    #[error("响应解析失败: {0}")]
    ResponseParse(String),
    /// 请求超时
    #[error("请求超时")]
    Timeout,
}

// =========================================================
// 会话校验错误
// =========================================================

/// 会话字段不完整（用户名为空）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("会话用户名不能为空")]
pub struct InvalidSession;
