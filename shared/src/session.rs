//! 会话模块
//!
//! `SessionStore` 是当前身份的唯一数据源：内存中持有会话，
//! 并同步写入注入的键值存储（浏览器中为 LocalStorage），页面刷新后可恢复。

use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::STORAGE_SESSION_KEY;
use crate::error::{InvalidSession, SessionError, StorageError};

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已认证身份
///
/// 要么完全不存在（`Option::None`），要么字段完整：用户名非空。
/// 反序列化同样经过校验，残缺的持久化数据无法构造出 `Session`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct Session {
    username: String,
    role: Role,
}

#[derive(Deserialize)]
struct RawSession {
    username: String,
    role: Role,
}

impl TryFrom<RawSession> for Session {
    type Error = InvalidSession;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        Session::new(raw.username, raw.role)
    }
}

impl Session {
    pub fn new(username: impl Into<String>, role: Role) -> Result<Self, InvalidSession> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(InvalidSession);
        }
        Ok(Self { username, role })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

// =========================================================
// 存储抽象 (Storage Abstraction)
// =========================================================

/// 抽象键值存储：负责会话槽位的持久化
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// 删除不存在的键不视为错误
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// 内存键值存储
///
/// 用于非浏览器环境与测试。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.map.insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.map.remove(key);
        Ok(())
    }
}

// =========================================================
// 会话存储 (Session Store)
// =========================================================

/// 会话存储
///
/// 唯一的变更入口为 `set` / `clear`，守卫与视图只读取 `current()`。
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    backend: S,
    current: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// 从持久化槽位加载会话
    ///
    /// 槽位缺失、读取失败或内容无法解析时，一律视为未登录，从不报错。
    pub fn load(backend: S) -> Self {
        let current = match backend.get(STORAGE_SESSION_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Session>(&raw).ok(),
            Ok(None) | Err(_) => None,
        };
        Self { backend, current }
    }

    /// 替换当前会话并写入持久化槽位
    ///
    /// 内存状态总是先更新；持久化失败通过返回值报告。
    pub fn set(&mut self, session: Session) -> Result<(), SessionError> {
        let payload = serde_json::to_string(&session);
        self.current = Some(session);
        self.backend.set(STORAGE_SESSION_KEY, &payload?)?;
        Ok(())
    }

    /// 清除当前会话并删除持久化槽位（幂等）
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.current = None;
        self.backend.remove(STORAGE_SESSION_KEY)?;
        Ok(())
    }
}

impl<S> SessionStore<S> {
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

// 测试用：检查持久化槽位、模拟重新加载
#[cfg(test)]
impl<S> SessionStore<S> {
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}

#[cfg(test)]
mod tests;
