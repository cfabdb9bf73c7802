//! 路由守卫 - 纯函数决策
//!
//! 输入（当前会话, 目标路由），输出唯一的守卫决策；无副作用、无 I/O。
//! 管理员/普通用户的视图变体也在此处一次性决定，渲染层不再重复检查角色。

use crate::route::AppRoute;
use crate::session::{Role, Session};

/// 受保护视图的渲染变体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewVariant {
    Standard,
    Admin,
}

impl ViewVariant {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => ViewVariant::Admin,
            Role::User => ViewVariant::Standard,
        }
    }
}

/// 守卫决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 渲染公开视图
    RenderPublic,
    /// 渲染受保护视图
    RenderProtected(ViewVariant),
    /// 重定向到目标路由
    Redirect(AppRoute),
}

/// **核心守卫逻辑**
///
/// 按以下优先级求值：
/// 1. 已登录用户访问仅限访客的路由 -> 重定向到默认落地页
/// 2. 公开路由 -> 渲染
/// 3. 未登录访问受保护路由 -> 重定向到登录页
/// 4. authenticated -> 按角色选择视图变体渲染
/// 5. admin-only：管理员渲染，其余重定向到 fallback
pub fn evaluate(session: Option<&Session>, route: AppRoute) -> GuardDecision {
    let spec = route.spec();

    if spec.guest_only && session.is_some() {
        return GuardDecision::Redirect(AppRoute::auth_success_redirect());
    }

    if !spec.visibility.requires_auth() {
        return GuardDecision::RenderPublic;
    }

    let Some(session) = session else {
        return GuardDecision::Redirect(AppRoute::auth_failure_redirect());
    };

    match spec.admin_fallback() {
        None => GuardDecision::RenderProtected(ViewVariant::for_role(session.role())),
        Some(_) if session.is_admin() => GuardDecision::RenderProtected(ViewVariant::Admin),
        Some(fallback) => GuardDecision::Redirect(fallback),
    }
}

// =========================================================
// 重定向解析
// =========================================================

/// 重定向链的最大跳数
///
/// 路由表中的重定向目标（`/login`、`/dashboard`）均在一跳内终止。
pub const MAX_REDIRECT_HOPS: usize = 2;

/// 一次导航的最终解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// 请求的路由
    pub requested: AppRoute,
    /// 最终渲染的路由
    pub route: AppRoute,
    /// 受保护视图的变体；公开视图为 `None`
    pub variant: Option<ViewVariant>,
    /// 经历的重定向次数
    pub hops: usize,
}

impl Resolution {
    pub fn redirected(&self) -> bool {
        self.hops > 0
    }

    pub fn path(&self) -> &'static str {
        self.route.to_path()
    }
}

/// 沿守卫重定向解析到可渲染的路由
pub fn resolve(session: Option<&Session>, requested: AppRoute) -> Resolution {
    let mut route = requested;

    for hops in 0..=MAX_REDIRECT_HOPS {
        let variant = match evaluate(session, route) {
            GuardDecision::RenderPublic => None,
            GuardDecision::RenderProtected(variant) => Some(variant),
            GuardDecision::Redirect(target) => {
                route = target;
                continue;
            }
        };
        return Resolution {
            requested,
            route,
            variant,
            hops,
        };
    }

    // 重定向链未终止：退回公开的 404 页面
    Resolution {
        requested,
        route: AppRoute::NotFound,
        variant: None,
        hops: MAX_REDIRECT_HOPS + 1,
    }
}

#[cfg(test)]
mod tests;
