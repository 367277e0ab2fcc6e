use super::*;

// =============================================================
// guard
// =============================================================

#[test]
fn guard_redirects_anonymous_session_to_login() {
    let outcome = guard(&Session::default(), "dashboard");
    assert_eq!(outcome, Guarded::Redirect("/login"));
}

#[test]
fn guard_renders_for_authenticated_session() {
    let outcome = guard(&Session::new("tok", "u1", false), "dashboard");
    assert_eq!(outcome, Guarded::Render("dashboard"));
}

#[test]
fn guard_ignores_user_id_without_token() {
    let outcome = guard(&Session::new("", "u1", true), 42);
    assert_eq!(outcome.redirect_target(), Some(LOGIN_PATH));
}

#[test]
fn guard_does_not_require_super_user() {
    assert!(matches!(guard(&Session::new("tok", "u1", false), ()), Guarded::Render(())));
}

// =============================================================
// Guarded
// =============================================================

#[test]
fn redirect_target_none_when_rendering() {
    assert_eq!(Guarded::Render("x").redirect_target(), None);
}
