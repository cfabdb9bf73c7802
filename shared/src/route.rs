//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其可见性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 欢迎页 (默认路由)
    #[default]
    Welcome,
    Login,
    Register,
    /// 控制面板（按角色渲染不同布局）
    Dashboard,
    Camera,
    History,
    Profile,
    AdminUsers,
    AdminConfig,
    AdminAnalytics,
    /// 页面未找到
    NotFound,
}

/// 路由可见性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// 任何人可访问
    Public,
    /// 需要登录
    Authenticated,
    /// 需要登录且角色为 admin；非管理员被重定向到 `fallback`
    AdminOnly { fallback: AppRoute },
}

impl Visibility {
    /// admin-only 是 authenticated 的严格超集
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Visibility::Public)
    }
}

/// 声明的可导航路径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub route: AppRoute,
    pub path: &'static str,
    pub visibility: Visibility,
    /// 仅限访客：已登录用户访问时重定向到默认落地页（登录/注册页）
    pub guest_only: bool,
}

impl RouteSpec {
    const fn public(route: AppRoute, path: &'static str) -> Self {
        Self {
            route,
            path,
            visibility: Visibility::Public,
            guest_only: false,
        }
    }

    const fn guest(route: AppRoute, path: &'static str) -> Self {
        Self {
            route,
            path,
            visibility: Visibility::Public,
            guest_only: true,
        }
    }

    const fn authenticated(route: AppRoute, path: &'static str) -> Self {
        Self {
            route,
            path,
            visibility: Visibility::Authenticated,
            guest_only: false,
        }
    }

    const fn admin(route: AppRoute, path: &'static str) -> Self {
        Self {
            route,
            path,
            visibility: Visibility::AdminOnly {
                fallback: AppRoute::Dashboard,
            },
            guest_only: false,
        }
    }

    /// 非管理员访问 admin-only 路由时的重定向目标
    pub fn admin_fallback(&self) -> Option<AppRoute> {
        match self.visibility {
            Visibility::AdminOnly { fallback } => Some(fallback),
            _ => None,
        }
    }
}

const NOT_FOUND: RouteSpec = RouteSpec::public(AppRoute::NotFound, "/404");

/// 路由表：每个路由恰好一条声明
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec::public(AppRoute::Welcome, "/"),
    RouteSpec::guest(AppRoute::Login, "/login"),
    RouteSpec::guest(AppRoute::Register, "/register"),
    RouteSpec::authenticated(AppRoute::Dashboard, "/dashboard"),
    RouteSpec::authenticated(AppRoute::Camera, "/camera"),
    RouteSpec::authenticated(AppRoute::History, "/history"),
    RouteSpec::authenticated(AppRoute::Profile, "/profile"),
    RouteSpec::admin(AppRoute::AdminUsers, "/admin/users"),
    RouteSpec::admin(AppRoute::AdminConfig, "/admin/config"),
    RouteSpec::admin(AppRoute::AdminAnalytics, "/admin/analytics"),
    NOT_FOUND,
];

/// 规范化 URL path：去掉查询串与片段，去除末尾 `/`
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 忽略查询串与片段，去除末尾 `/`；未声明的路径解析为 `NotFound`。
    pub fn from_path(path: &str) -> Self {
        let normalized = normalize_path(path);

        ROUTES
            .iter()
            .find(|spec| spec.path == normalized)
            .map(|spec| spec.route)
            .unwrap_or(Self::NotFound)
    }

    /// 获取路由声明
    pub fn spec(&self) -> &'static RouteSpec {
        let route = *self;
        ROUTES
            .iter()
            .find(|spec| spec.route == route)
            .unwrap_or(&NOT_FOUND)
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        self.spec().path
    }

    pub fn visibility(&self) -> Visibility {
        self.spec().visibility
    }

    /// 未认证访问受保护路由时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 已认证用户访问仅限访客路由时的重定向目标（默认落地页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 全部路由（用于遍历与测试）
    pub fn all() -> impl Iterator<Item = AppRoute> {
        ROUTES.iter().map(|spec| spec.route)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
