//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 守卫决策来自共享核心的 `Navigation` 状态机，这里只负责把结果应用到浏览器。

use drowsewatch_shared::{HistoryUpdate, Navigation, Resolution, Session};
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 应用 History 更新（客户端导航，不刷新页面）
fn apply_history(update: HistoryUpdate) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };

    let _ = match update {
        HistoryUpdate::None => return,
        HistoryUpdate::Push(path) => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryUpdate::Replace(path) => {
            history.replace_state_with_url(&JsValue::NULL, "", Some(path))
        }
    };
}

/// 执行一次导航状态转换
///
/// 在副本上求值，仅当状态真正变化时才写入信号，避免多余的重新渲染。
fn transition<F>(navigation: RwSignal<Navigation>, session: Signal<Option<Session>>, step: F)
where
    F: FnOnce(&mut Navigation, Option<&Session>) -> HistoryUpdate,
{
    let previous = navigation.get_untracked();
    let mut next = previous;
    let update = session.with_untracked(|session| step(&mut next, session.as_ref()));

    apply_history(update);

    let resolution = next.current();
    if resolution.redirected() && next != previous {
        log!(
            "[Router] Redirect {} -> {}",
            resolution.requested,
            resolution.route
        );
    }

    if next != previous {
        navigation.set(next);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入会话信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    navigation: RwSignal<Navigation>,
    /// 当前会话（注入的信号，实现解耦）
    session: Signal<Option<Session>>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 会话此时已从持久化存储加载完毕，首次守卫评估使用的是恢复后的身份。
    fn new(session: Signal<Option<Session>>) -> Self {
        let path = current_path();
        let (navigation, update) =
            session.with_untracked(|session| Navigation::start(&path, session.as_ref()));

        apply_history(update);
        let resolution = navigation.current();
        if resolution.redirected() {
            log!(
                "[Router] Initial redirect {} -> {}",
                resolution.requested,
                resolution.route
            );
        }

        Self {
            navigation: RwSignal::new(navigation),
            session,
        }
    }

    /// 按给定会话解析当前应渲染的视图
    ///
    /// 会话与路由在同一次求值中读取，会话变化而 `reevaluate`
    /// 尚未执行时也不会出现受保护视图缺少会话的错配。
    pub fn view(&self) -> Signal<(Resolution, Option<Session>)> {
        let navigation = self.navigation;
        let session = self.session;
        Signal::derive(move || {
            let user = session.get();
            let resolution = navigation.with(|nav| nav.view_for(user.as_ref()));
            (resolution, user)
        })
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        transition(self.navigation, self.session, |nav, session| {
            nav.navigate(path, session)
        });
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let navigation = self.navigation;
        let session = self.session;

        // popstate 时也执行守卫逻辑
        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            transition(navigation, session, |nav, session| nav.pop(&path, session));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话变化（登录/登出）时重新评估当前路由
    fn setup_auth_redirect(&self) {
        let navigation = self.navigation;
        let session = self.session;

        Effect::new(move |_| {
            session.track();
            transition(navigation, session, |nav, session| nav.reevaluate(session));
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: Signal<Option<Session>>) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 传递给视图的上下文：当前身份与登录/登出能力
///
/// 视图不能直接修改会话，只能通过这里的回调请求 `SessionStore` 替换或清除。
#[derive(Clone)]
pub struct ViewContext {
    pub user: Option<Session>,
    pub login: Callback<Session>,
    pub logout: Callback<()>,
}

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 当前会话信号
    session: Signal<Option<Session>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件
///
/// 根据当前解析结果渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收解析结果与视图上下文，返回对应视图
    matcher: fn(Resolution, ViewContext) -> AnyView,
    login: Callback<Session>,
    logout: Callback<()>,
) -> impl IntoView {
    let view = use_router().view();

    move || {
        let (resolution, user) = view.get();
        matcher(resolution, ViewContext { user, login, logout })
    }
}

/// 是否由路由服务接管点击
///
/// 只接管未按修饰键的主键点击；中键、Ctrl/⌘/Shift/Alt 点击交给浏览器
/// （新标签页、新窗口、下载）。
fn is_plain_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// 应用内链接
///
/// 拦截普通点击，经由路由服务导航（不刷新页面）。
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !is_plain_click(ev.button(), ev.ctrl_key(), ev.meta_key(), ev.shift_key(), ev.alt_key())
        {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
