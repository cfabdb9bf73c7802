use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn user(name: &str) -> Session {
    Session::new(name, Role::User).unwrap()
}

fn admin(name: &str) -> Session {
    Session::new(name, Role::Admin).unwrap()
}

const AUTHENTICATED_ROUTES: [AppRoute; 4] = [
    AppRoute::Dashboard,
    AppRoute::Camera,
    AppRoute::History,
    AppRoute::Profile,
];

const ADMIN_ROUTES: [AppRoute; 3] = [
    AppRoute::AdminUsers,
    AppRoute::AdminConfig,
    AppRoute::AdminAnalytics,
];

// =========================================================
// 决策表测试
// =========================================================

#[test]
fn test_public_routes_render_for_everyone() {
    let alice = user("alice");
    let bob = admin("bob");
    for session in [None, Some(&alice), Some(&bob)] {
        assert_eq!(evaluate(session, AppRoute::Welcome), GuardDecision::RenderPublic);
        assert_eq!(evaluate(session, AppRoute::NotFound), GuardDecision::RenderPublic);
    }
}

#[test]
fn test_guest_routes_render_when_logged_out() {
    assert_eq!(evaluate(None, AppRoute::Login), GuardDecision::RenderPublic);
    assert_eq!(evaluate(None, AppRoute::Register), GuardDecision::RenderPublic);
}

#[test]
fn test_guest_routes_redirect_to_dashboard_when_logged_in() {
    let alice = user("alice");
    let bob = admin("bob");
    for session in [&alice, &bob] {
        for route in [AppRoute::Login, AppRoute::Register] {
            assert_eq!(
                evaluate(Some(session), route),
                GuardDecision::Redirect(AppRoute::Dashboard)
            );
        }
    }
}

#[test]
fn test_authenticated_routes_redirect_to_login_without_session() {
    for route in AUTHENTICATED_ROUTES {
        assert_eq!(
            evaluate(None, route),
            GuardDecision::Redirect(AppRoute::Login),
            "{route} should require login"
        );
    }
}

#[test]
fn test_admin_routes_redirect_to_login_without_session() {
    for route in ADMIN_ROUTES {
        assert_eq!(evaluate(None, route), GuardDecision::Redirect(AppRoute::Login));
    }
}

#[test]
fn test_authenticated_routes_pick_variant_by_role() {
    let alice = user("alice");
    let bob = admin("bob");
    for route in AUTHENTICATED_ROUTES {
        assert_eq!(
            evaluate(Some(&alice), route),
            GuardDecision::RenderProtected(ViewVariant::Standard)
        );
        assert_eq!(
            evaluate(Some(&bob), route),
            GuardDecision::RenderProtected(ViewVariant::Admin)
        );
    }
}

#[test]
fn test_admin_routes_by_role() {
    let alice = user("alice");
    let bob = admin("bob");
    for route in ADMIN_ROUTES {
        let fallback = route.spec().admin_fallback().unwrap();
        assert_eq!(evaluate(Some(&alice), route), GuardDecision::Redirect(fallback));
        assert_eq!(
            evaluate(Some(&bob), route),
            GuardDecision::RenderProtected(ViewVariant::Admin)
        );
    }
}

#[test]
fn test_decision_table_is_total_and_terminates() {
    let alice = user("alice");
    let bob = admin("bob");
    for session in [None, Some(&alice), Some(&bob)] {
        for route in AppRoute::all() {
            let resolution = resolve(session, route);
            assert!(resolution.hops <= 1, "{route} took {} hops", resolution.hops);
            assert!(!matches!(
                evaluate(session, resolution.route),
                GuardDecision::Redirect(_)
            ));
        }
    }
}

// =========================================================
// resolve 测试
// =========================================================

#[test]
fn test_resolve_without_redirect() {
    let bob = admin("bob");
    let resolution = resolve(Some(&bob), AppRoute::AdminUsers);
    assert_eq!(resolution.route, AppRoute::AdminUsers);
    assert_eq!(resolution.variant, Some(ViewVariant::Admin));
    assert!(!resolution.redirected());
}

#[test]
fn test_resolve_public_has_no_variant() {
    let resolution = resolve(None, AppRoute::Welcome);
    assert_eq!(resolution.variant, None);
    assert_eq!(resolution.path(), "/");
}

// =========================================================
// 场景测试
// =========================================================

#[test]
fn test_scenario_no_session_dashboard_goes_to_login() {
    let resolution = resolve(None, AppRoute::from_path("/dashboard"));
    assert_eq!(resolution.requested, AppRoute::Dashboard);
    assert_eq!(resolution.route, AppRoute::Login);
    assert!(resolution.redirected());
    assert_eq!(resolution.path(), "/login");
}

#[test]
fn test_scenario_user_on_admin_users_goes_to_dashboard() {
    let alice = user("alice");
    let resolution = resolve(Some(&alice), AppRoute::from_path("/admin/users"));
    assert_eq!(resolution.path(), "/dashboard");
    assert_eq!(resolution.variant, Some(ViewVariant::Standard));
}

#[test]
fn test_scenario_admin_sees_analytics() {
    let bob = admin("bob");
    let resolution = resolve(Some(&bob), AppRoute::from_path("/admin/analytics"));
    assert_eq!(resolution.route, AppRoute::AdminAnalytics);
    assert_eq!(resolution.variant, Some(ViewVariant::Admin));
    assert!(!resolution.redirected());
}

#[test]
fn test_scenario_logged_in_login_goes_to_dashboard() {
    let alice = user("alice");
    let resolution = resolve(Some(&alice), AppRoute::from_path("/login"));
    assert_eq!(resolution.route, AppRoute::Dashboard);
    assert_eq!(resolution.hops, 1);
}
