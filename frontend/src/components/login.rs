use crate::api;
use crate::config::AppConfig;
use crate::web::router::Link;
use drowsewatch_shared::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页
///
/// 成功后通过 `on_login_success` 交出会话，由 `SessionStore` 负责保存；
/// 之后的跳转由路由服务的会话监听完成。
#[component]
pub fn LoginPage(on_login_success: Callback<Session>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api_url = config.api_url.clone();
        spawn_local(async move {
            match api::login(&api_url, &username.get_untracked(), &password.get_untracked()).await
            {
                Ok(session) => on_login_success.run(session),
                Err(e) => set_error_msg.set(Some(format!("Login failed: {}", e))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-white p-8 rounded-2xl shadow-sm border border-slate-200">
            <h1 class="text-2xl font-bold text-center mb-6">"Sign in"</h1>
            <form class="space-y-4" on:submit=on_submit>
                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="rounded-lg bg-rose-50 text-rose-700 text-sm px-3 py-2">
                        {move || error_msg.get().unwrap_or_default()}
                    </div>
                </Show>
                <input
                    type="text"
                    placeholder="Username"
                    class="w-full rounded-lg border border-slate-300 px-3 py-2"
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    prop:value=username
                />
                <input
                    type="password"
                    placeholder="Password"
                    class="w-full rounded-lg border border-slate-300 px-3 py-2"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=password
                />
                <button
                    class="w-full rounded-lg bg-slate-900 text-white py-2"
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="text-sm text-center text-slate-500 mt-4">
                "No account? " <Link to="/register" class="text-slate-900 underline">"Register"</Link>
            </p>
        </div>
    }
}

/// 注册页
#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let router = crate::web::router::use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        let api_url = config.api_url.clone();
        spawn_local(async move {
            match api::register(&api_url, &username.get_untracked(), &password.get_untracked())
                .await
            {
                Ok(()) => router.navigate("/login"),
                Err(e) => set_error_msg.set(Some(format!("Registration failed: {}", e))),
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-white p-8 rounded-2xl shadow-sm border border-slate-200">
            <h1 class="text-2xl font-bold text-center mb-6">"Create account"</h1>
            <form class="space-y-4" on:submit=on_submit>
                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="rounded-lg bg-rose-50 text-rose-700 text-sm px-3 py-2">
                        {move || error_msg.get().unwrap_or_default()}
                    </div>
                </Show>
                <input
                    type="text"
                    placeholder="Username"
                    class="w-full rounded-lg border border-slate-300 px-3 py-2"
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    prop:value=username
                />
                <input
                    type="password"
                    placeholder="Password"
                    class="w-full rounded-lg border border-slate-300 px-3 py-2"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=password
                />
                <button class="w-full rounded-lg bg-slate-900 text-white py-2">"Register"</button>
            </form>
        </div>
    }
}
