use super::*;
use crate::guard::ViewVariant;
use crate::session::{MemoryStore, Role, SessionStore};
use crate::STORAGE_SESSION_KEY;

fn alice() -> Session {
    Session::new("alice", Role::User).unwrap()
}

fn bob() -> Session {
    Session::new("bob", Role::Admin).unwrap()
}

// =========================================================
// start 测试
// =========================================================

#[test]
fn test_start_without_redirect_keeps_address_bar() {
    let (nav, update) = Navigation::start("/", None);
    assert_eq!(update, HistoryUpdate::None);
    assert_eq!(nav.current().route, AppRoute::Welcome);
}

#[test]
fn test_start_with_redirect_replaces() {
    let (nav, update) = Navigation::start("/dashboard", None);
    assert_eq!(update, HistoryUpdate::Replace("/login"));
    assert_eq!(nav.current().route, AppRoute::Login);
}

#[test]
fn test_start_from_persisted_session() {
    let backend = MemoryStore::new().with_entry(
        STORAGE_SESSION_KEY,
        r#"{"username":"alice","role":"user"}"#,
    );
    let store = SessionStore::load(backend);

    let (nav, update) = Navigation::start("/admin/users", store.current());
    assert_eq!(update, HistoryUpdate::Replace("/dashboard"));
    assert_eq!(nav.current().route, AppRoute::Dashboard);
    assert_eq!(nav.current().variant, Some(ViewVariant::Standard));
}

#[test]
fn test_start_unknown_path_shows_not_found_path() {
    let (nav, update) = Navigation::start("/nowhere", None);
    assert_eq!(update, HistoryUpdate::Replace("/404"));
    assert_eq!(nav.current().route, AppRoute::NotFound);
    assert!(!nav.current().redirected());

    let (_, update) = Navigation::start("/404", None);
    assert_eq!(update, HistoryUpdate::None);
}

#[test]
fn test_start_keeps_query_and_trailing_slash() {
    let alice = alice();
    let (_, update) = Navigation::start("/camera?device=1", Some(&alice));
    assert_eq!(update, HistoryUpdate::None);

    let (_, update) = Navigation::start("/dashboard/", Some(&alice));
    assert_eq!(update, HistoryUpdate::None);
}

// =========================================================
// navigate / pop 测试
// =========================================================

#[test]
fn test_navigate_pushes_final_path() {
    let bob = bob();
    let (mut nav, _) = Navigation::start("/dashboard", Some(&bob));

    assert_eq!(
        nav.navigate("/admin/config", Some(&bob)),
        HistoryUpdate::Push("/admin/config")
    );
    assert_eq!(nav.current().route, AppRoute::AdminConfig);
}

#[test]
fn test_navigate_to_guarded_route_pushes_redirect_target() {
    let (mut nav, _) = Navigation::start("/", None);
    assert_eq!(nav.navigate("/history", None), HistoryUpdate::Push("/login"));
    assert_eq!(nav.current().requested, AppRoute::History);
    assert_eq!(nav.current().route, AppRoute::Login);
}

#[test]
fn test_navigate_to_current_route_is_noop() {
    let alice = alice();
    let (mut nav, _) = Navigation::start("/dashboard", Some(&alice));
    assert_eq!(nav.navigate("/admin/users", Some(&alice)), HistoryUpdate::None);
    assert_eq!(nav.current().route, AppRoute::Dashboard);
}

#[test]
fn test_unknown_path_same_address_on_load_click_and_back() {
    let (_, on_load) = Navigation::start("/nowhere", None);

    let (mut nav, _) = Navigation::start("/", None);
    let on_click = nav.navigate("/nowhere", None);
    let on_back = nav.pop("/nowhere", None);

    assert_eq!(on_load, HistoryUpdate::Replace("/404"));
    assert_eq!(on_click, HistoryUpdate::Push("/404"));
    assert_eq!(on_back, HistoryUpdate::Replace("/404"));
    assert_eq!(nav.current().route, AppRoute::NotFound);
}

#[test]
fn test_pop_to_guarded_route_replaces() {
    let (mut nav, _) = Navigation::start("/", None);
    assert_eq!(nav.pop("/profile", None), HistoryUpdate::Replace("/login"));

    let alice = alice();
    assert_eq!(nav.pop("/profile", Some(&alice)), HistoryUpdate::None);
    assert_eq!(nav.current().route, AppRoute::Profile);
}

// =========================================================
// reevaluate 测试（登录/登出）
// =========================================================

#[test]
fn test_logout_on_camera_redirects_to_login() {
    let mut store = SessionStore::load(MemoryStore::new());
    store.set(alice()).unwrap();

    let (mut nav, update) = Navigation::start("/camera", store.current());
    assert_eq!(update, HistoryUpdate::None);
    assert_eq!(nav.current().route, AppRoute::Camera);

    // logout 能力：清除会话并强制重新评估当前路径
    store.clear().unwrap();
    assert_eq!(nav.reevaluate(store.current()), HistoryUpdate::Replace("/login"));
    assert_eq!(nav.current().route, AppRoute::Login);

    // 之后再次访问 /camera 仍被拦截
    assert_eq!(nav.navigate("/camera", store.current()), HistoryUpdate::None);
    assert_eq!(nav.current().route, AppRoute::Login);
    assert_eq!(nav.current().requested, AppRoute::Camera);
}

#[test]
fn test_view_after_logout_never_pairs_protected_variant_with_no_session() {
    let mut store = SessionStore::load(MemoryStore::new());
    store.set(alice()).unwrap();
    let (nav, _) = Navigation::start("/camera", store.current());

    // 会话已清除，但 reevaluate 尚未执行
    store.clear().unwrap();
    let view = nav.view_for(store.current());

    assert_eq!(nav.current().route, AppRoute::Camera);
    assert_eq!(view.route, AppRoute::Login);
    assert_eq!(view.variant, None);
}

#[test]
fn test_view_for_matches_current_when_session_unchanged() {
    let bob = bob();
    let (nav, _) = Navigation::start("/admin/users", Some(&bob));
    assert_eq!(nav.view_for(Some(&bob)), nav.current());

    let (nav, _) = Navigation::start("/history", None);
    assert_eq!(nav.view_for(None).route, AppRoute::Login);
}

#[test]
fn test_login_on_login_page_moves_to_dashboard() {
    let mut store = SessionStore::load(MemoryStore::new());
    let (mut nav, _) = Navigation::start("/login", store.current());
    assert_eq!(nav.current().route, AppRoute::Login);

    store.set(bob()).unwrap();
    assert_eq!(nav.reevaluate(store.current()), HistoryUpdate::Replace("/dashboard"));
    assert_eq!(nav.current().variant, Some(ViewVariant::Admin));
}

#[test]
fn test_reevaluate_on_public_route_is_noop() {
    let alice = alice();
    let (mut nav, _) = Navigation::start("/", Some(&alice));
    assert_eq!(nav.reevaluate(None), HistoryUpdate::None);
    assert_eq!(nav.current().route, AppRoute::Welcome);
}
