//! 导航状态机
//!
//! 把守卫决策绑定到一次次导航事件上，并给出需要应用到浏览器 History 的更新。
//! 重定向一律使用 replace（不产生多余的历史记录，也不刷新页面）。
//! 地址栏始终显示实际渲染路由的路径，未知路径统一显示为 `/404`。

use crate::guard::{Resolution, resolve};
use crate::route::{AppRoute, normalize_path};
use crate::session::Session;

/// 需要应用到浏览器 History 的更新
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryUpdate {
    /// 地址栏已是正确路径
    None,
    /// 新增历史记录
    Push(&'static str),
    /// 替换当前历史记录（重定向）
    Replace(&'static str),
}

/// 当前导航状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    current: Resolution,
}

impl Navigation {
    /// 首次加载：解析地址栏中的路径
    pub fn start(path: &str, session: Option<&Session>) -> (Self, HistoryUpdate) {
        let current = resolve(session, AppRoute::from_path(path));
        (Self { current }, settle(path, &current))
    }

    pub fn current(&self) -> Resolution {
        self.current
    }

    /// 用给定会话重新解析当前路由，不改变状态
    ///
    /// 渲染层用它保证视图与同一次读取到的会话一致：
    /// 登出后、`reevaluate` 执行前，得到的是登录页而不是缺少会话的受保护视图。
    pub fn view_for(&self, session: Option<&Session>) -> Resolution {
        resolve(session, self.current.route)
    }

    /// 应用内跳转（点击链接）
    pub fn navigate(&mut self, path: &str, session: Option<&Session>) -> HistoryUpdate {
        let next = resolve(session, AppRoute::from_path(path));
        let unchanged = next.route == self.current.route;
        self.current = next;

        if unchanged {
            HistoryUpdate::None
        } else {
            HistoryUpdate::Push(next.path())
        }
    }

    /// 浏览器后退/前进：地址栏已变化，只在路径与结果不符时替换
    pub fn pop(&mut self, path: &str, session: Option<&Session>) -> HistoryUpdate {
        self.current = resolve(session, AppRoute::from_path(path));
        settle(path, &self.current)
    }

    /// 会话变化（登录/登出）后重新评估当前路由
    pub fn reevaluate(&mut self, session: Option<&Session>) -> HistoryUpdate {
        let next = resolve(session, self.current.route);
        let moved = next.route != self.current.route;
        self.current = next;

        if moved {
            HistoryUpdate::Replace(next.path())
        } else {
            HistoryUpdate::None
        }
    }
}

/// 地址栏已显示 `path` 时，使其与解析结果一致
///
/// 重定向和未知路径都会替换；查询串、片段与末尾 `/` 的差异不算不一致。
fn settle(path: &str, current: &Resolution) -> HistoryUpdate {
    if current.redirected() || normalize_path(path) != current.path() {
        HistoryUpdate::Replace(current.path())
    } else {
        HistoryUpdate::None
    }
}

#[cfg(test)]
mod tests;
