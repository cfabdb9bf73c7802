use crate::web::router::Link;
use drowsewatch_shared::Session;
use leptos::prelude::*;

/// 普通用户控制面板
#[component]
pub fn DashboardPage(user: Session) -> impl IntoView {
    view! {
        <section class="space-y-6">
            <h1 class="text-2xl font-bold">"Welcome back, " {user.username().to_string()}</h1>
            <div class="grid gap-4 sm:grid-cols-3">
                <DashboardCard to="/camera" title="Start monitoring" detail="Open the camera and begin a session" />
                <DashboardCard to="/history" title="History" detail="Review past drowsiness alerts" />
                <DashboardCard to="/profile" title="Profile" detail="Account details" />
            </div>
        </section>
    }
}

/// 管理员控制面板
#[component]
pub fn AdminDashboardPage(user: Session, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <section class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">"Admin console"</h1>
                <button
                    class="px-3 py-1.5 rounded-lg border border-slate-300 text-sm"
                    on:click=move |_| on_logout.run(())
                >
                    "Logout"
                </button>
            </div>
            <p class="text-slate-500">"Signed in as " {user.username().to_string()}</p>
            <div class="grid gap-4 sm:grid-cols-3">
                <DashboardCard to="/admin/users" title="Users" detail="Manage accounts and roles" />
                <DashboardCard to="/admin/config" title="System config" detail="Detection thresholds" />
                <DashboardCard to="/admin/analytics" title="Analytics" detail="Alerts across all users" />
            </div>
        </section>
    }
}

#[component]
fn DashboardCard(to: &'static str, title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <Link to=to class="block bg-white p-6 rounded-2xl border border-slate-200 hover:shadow-sm">
            <h2 class="font-semibold text-slate-900">{title}</h2>
            <p class="text-sm text-slate-500 mt-1">{detail}</p>
        </Link>
    }
}
