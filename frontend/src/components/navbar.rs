use crate::health::use_health;
use crate::web::router::Link;
use drowsewatch_shared::Session;
use leptos::prelude::*;

/// 顶部导航栏
///
/// 显示后端状态、当前用户与按角色可见的链接。
#[component]
pub fn Navbar(user: Signal<Option<Session>>, on_logout: Callback<()>) -> impl IntoView {
    let health = use_health().status();

    let status_label = move || health.with(|s| s.label().to_string());
    let status_dot = move || {
        health.with(|s| {
            if s.is_reachable() {
                "h-2 w-2 rounded-full bg-emerald-500"
            } else if s.is_pending() {
                "h-2 w-2 rounded-full bg-amber-400 animate-pulse"
            } else {
                "h-2 w-2 rounded-full bg-rose-500"
            }
        })
    };

    view! {
        <nav class="bg-white border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between gap-4">
                <Link to="/" class="text-lg font-bold text-slate-900">
                    "DrowseWatch"
                </Link>

                <div class="hidden sm:flex items-center gap-2 text-xs text-slate-500">
                    <span class=status_dot></span>
                    <span>{status_label}</span>
                </div>

                {move || match user.get() {
                    None => view! {
                        <div class="flex items-center gap-3 text-sm">
                            <Link to="/login" class="text-slate-700 hover:text-slate-900">"Login"</Link>
                            <Link to="/register" class="px-3 py-1.5 rounded-lg bg-slate-900 text-white">
                                "Register"
                            </Link>
                        </div>
                    }
                    .into_any(),
                    Some(session) => {
                        let is_admin = session.is_admin();
                        view! {
                            <div class="flex items-center gap-3 text-sm">
                                <Link to="/dashboard">"Dashboard"</Link>
                                <Link to="/camera">"Camera"</Link>
                                <Link to="/history">"History"</Link>
                                <Show when=move || is_admin>
                                    <Link to="/admin/users">"Users"</Link>
                                    <Link to="/admin/config">"Config"</Link>
                                    <Link to="/admin/analytics">"Analytics"</Link>
                                </Show>
                                <Link to="/profile" class="font-semibold text-slate-700">
                                    {session.username().to_string()}
                                </Link>
                                <button
                                    class="px-3 py-1.5 rounded-lg border border-slate-300"
                                    on:click=move |_| on_logout.run(())
                                >
                                    "Logout"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 py-4 text-center text-xs text-slate-400">
            "DrowseWatch · webcam drowsiness monitoring"
        </footer>
    }
}
