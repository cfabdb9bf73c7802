//! 其余页面
//!
//! 摄像头分析、历史记录与管理后台的具体内容由各自的组件负责，
//! 这里只承接路由传入的身份信息。

use crate::web::router::Link;
use drowsewatch_shared::Session;
use leptos::prelude::*;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <section class="text-center py-16 space-y-4">
            <h1 class="text-4xl font-bold">"Stay awake on the road"</h1>
            <p class="text-slate-500">"Real-time drowsiness detection from your webcam."</p>
            <Link to="/login" class="inline-block px-5 py-2 rounded-lg bg-slate-900 text-white">
                "Get started"
            </Link>
        </section>
    }
}

#[component]
pub fn CameraPage(user: Session) -> impl IntoView {
    view! {
        <div class="bg-white p-6 md:p-8 rounded-2xl shadow-sm border border-slate-200 text-center w-full max-w-5xl mx-auto">
            <h2 class="text-2xl font-bold text-slate-900 mb-2">"Face analysis camera"</h2>
            <p class="text-slate-500 mb-8">
                "User: " <span class="font-semibold text-slate-700">{user.username().to_string()}</span>
            </p>
            <div class="flex justify-center w-full">
                <div id="webcam-capture" data-username=user.username().to_string()></div>
            </div>
        </div>
    }
}

#[component]
pub fn HistoryPage(user: Session) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h1 class="text-2xl font-bold">"Detection history"</h1>
            <div id="history" data-username=user.username().to_string()></div>
        </section>
    }
}

#[component]
pub fn ProfilePage(user: Session) -> impl IntoView {
    view! {
        <section class="max-w-md bg-white p-6 rounded-2xl border border-slate-200 space-y-2">
            <h1 class="text-2xl font-bold">"Profile"</h1>
            <p>"Username: " <span class="font-semibold">{user.username().to_string()}</span></p>
            <p>"Role: " <span class="font-semibold">{user.role().to_string()}</span></p>
        </section>
    }
}

/// 管理后台页面的公共外框
#[component]
pub fn AdminPage(
    title: &'static str,
    user: Session,
    on_logout: Callback<()>,
    section: &'static str,
) -> impl IntoView {
    view! {
        <section class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{title}</h1>
                <div class="flex items-center gap-3 text-sm text-slate-500">
                    <span>{user.username().to_string()}</span>
                    <button
                        class="px-3 py-1.5 rounded-lg border border-slate-300"
                        on:click=move |_| on_logout.run(())
                    >
                        "Logout"
                    </button>
                </div>
            </div>
            <div id=section></div>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-rose-500">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        </div>
    }
}
