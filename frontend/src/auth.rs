//! 认证模块
//!
//! 持有唯一的 `SessionStore`，与路由系统解耦。
//! 路由服务通过注入的会话信号来做守卫决策。

use crate::web::LocalStorage;
use drowsewatch_shared::{Session, SessionStore};
use leptos::logging::{log, warn};
use leptos::prelude::*;

/// 认证上下文
///
/// 通过 Context 在组件间共享。会话的变更入口只有 `login` / `logout`。
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<SessionStore<LocalStorage>>,
}

impl AuthContext {
    /// 从 LocalStorage 同步恢复会话
    ///
    /// 必须在挂载路由器之前调用，首次守卫评估依赖恢复后的会话。
    pub fn hydrate() -> Self {
        let store = SessionStore::load(LocalStorage);
        match store.current() {
            Some(session) => log!(
                "[Auth] Restored session for {} ({})",
                session.username(),
                session.role()
            ),
            None => log!("[Auth] No stored session"),
        }

        Self {
            store: RwSignal::new(store),
        }
    }

    /// 获取会话信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<Option<Session>> {
        let store = self.store;
        Signal::derive(move || store.with(|store| store.current().cloned()))
    }

    /// 登录成功：替换会话并持久化
    pub fn login(&self, session: Session) {
        log!("[Auth] Logged in as {}", session.username());
        self.store.update(|store| {
            if let Err(e) = store.set(session) {
                warn!("[Auth] Session kept in memory only: {}", e);
            }
        });
    }

    /// 注销并清除状态
    ///
    /// 导航将由路由服务的会话监听自动处理。
    pub fn logout(&self) {
        self.store.update(|store| {
            if let Err(e) = store.clear() {
                warn!("[Auth] Failed to remove stored session: {}", e);
            }
        });
        log!("[Auth] Logged out");
    }
}
