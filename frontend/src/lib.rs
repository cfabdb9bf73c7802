//! DrowseWatch 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `auth`: 会话状态（唯一的 `SessionStore`）
//! - `health`: 后端可达性（独立副通道）
//! - `web::router`: 路由服务（守卫决策 -> History）
//! - `components`: UI 组件层
//!
//! 守卫的决策逻辑在 `drowsewatch-shared` 中，与浏览器无关。

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod login;
    pub mod navbar;
    pub mod pages;
}
pub mod config;
mod health;
pub(crate) mod web;

use crate::auth::AuthContext;
use crate::components::dashboard::{AdminDashboardPage, DashboardPage};
use crate::components::login::{LoginPage, RegisterPage};
use crate::components::navbar::{Footer, Navbar};
use crate::components::pages::{
    AdminPage, CameraPage, HistoryPage, NotFoundPage, ProfilePage, WelcomePage,
};
use crate::config::AppConfig;
use crate::health::HealthContext;
use drowsewatch_shared::{AppRoute, Resolution, Session, ViewVariant};
use leptos::prelude::*;
use web::router::{Router, RouterOutlet, ViewContext};

/// 公开视图
fn public_view(route: AppRoute, ctx: ViewContext) -> AnyView {
    match route {
        AppRoute::Welcome => view! { <WelcomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage on_login_success=ctx.login /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        _ => view! { <NotFoundPage /> }.into_any(),
    }
}

/// 受保护视图
///
/// 变体已由守卫决定，这里不再检查角色。
fn protected_view(
    route: AppRoute,
    variant: ViewVariant,
    user: Session,
    logout: Callback<()>,
) -> AnyView {
    match (route, variant) {
        (AppRoute::Dashboard, ViewVariant::Admin) => {
            view! { <AdminDashboardPage user=user on_logout=logout /> }.into_any()
        }
        (AppRoute::Dashboard, ViewVariant::Standard) => {
            view! { <DashboardPage user=user /> }.into_any()
        }
        (AppRoute::Camera, _) => view! { <CameraPage user=user /> }.into_any(),
        (AppRoute::History, _) => view! { <HistoryPage user=user /> }.into_any(),
        (AppRoute::Profile, _) => view! { <ProfilePage user=user /> }.into_any(),
        (AppRoute::AdminUsers, _) => view! {
            <AdminPage title="User management" section="user-management" user=user on_logout=logout />
        }
        .into_any(),
        (AppRoute::AdminConfig, _) => view! {
            <AdminPage title="System configuration" section="system-config" user=user on_logout=logout />
        }
        .into_any(),
        (AppRoute::AdminAnalytics, _) => view! {
            <AdminPage title="Analytics" section="admin-analytics" user=user on_logout=logout />
        }
        .into_any(),
        _ => view! { <NotFoundPage /> }.into_any(),
    }
}

/// 路由匹配函数
///
/// 根据守卫的解析结果返回对应的视图组件。
/// `resolution` 与 `ctx.user` 由同一次会话读取解析得到。
fn route_matcher(resolution: Resolution, ctx: ViewContext) -> AnyView {
    match (resolution.variant, ctx.user.clone()) {
        (Some(variant), Some(user)) => protected_view(resolution.route, variant, user, ctx.logout),
        (None, _) => public_view(resolution.route, ctx),
        // 守卫不会对空会话给出受保护变体
        (Some(_), None) => public_view(AppRoute::auth_failure_redirect(), ctx),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    provide_context(config.clone());

    // 1. 从 LocalStorage 恢复会话（先于首次守卫评估）
    let auth_ctx = AuthContext::hydrate();
    provide_context(auth_ctx);

    // 2. 后端健康检查：独立运行，只影响导航栏文字
    let health_ctx = HealthContext::new();
    provide_context(health_ctx);
    health_ctx.start(&config);
    on_cleanup(move || health_ctx.cancel());

    // 3. 会话信号注入路由服务（解耦！）
    let session = auth_ctx.session_signal();
    let login = Callback::new(move |session: Session| auth_ctx.login(session));
    let logout = Callback::new(move |_: ()| auth_ctx.logout());

    view! {
        <Router session=session>
            <div class="flex flex-col min-h-screen bg-slate-50 font-sans text-slate-900">
                <Navbar user=session on_logout=logout />
                <main class="flex-1 w-full max-w-7xl mx-auto p-4 sm:p-6 lg:p-8">
                    <RouterOutlet matcher=route_matcher login=login logout=logout />
                </main>
                <Footer />
            </div>
        </Router>
    }
}
