//! Routed content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolves the current location through `router::resolve` against the live
//! auth context, renders the mapped page, and turns guard redirects into
//! navigations. Because it tracks the context rather than storage, a logout
//! anywhere on the page redirects a guarded view immediately.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{
    approve_leave::ApproveLeavePage, dashboard::DashboardPage, edit_employee::EditEmployeePage,
    leave_request::LeaveRequestPage, leaves::AllLeavesPage, login::LoginPage, not_found::NotFoundPage,
    profile::ProfilePage, signup::SignupPage,
};
use crate::router::{Resolution, RouteMatch, ViewKind, resolve};
use crate::state::auth::AuthContext;
use crate::util::auth::{Guarded, install_guard_redirect};

/// Renders exactly one page for the current path.
///
/// Nothing is rendered while the session is being restored, which also keeps
/// the server-rendered markup identical to the first client render.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| -> Option<Resolution> {
        let path = location.pathname.get();
        if auth.is_loading() {
            return None;
        }
        auth.with(|state| Some(resolve(&path, &state.session)))
    });

    install_guard_redirect(outcome, navigate);

    move || match outcome.get() {
        Some(Guarded::Render(route)) => render_route(route),
        Some(Guarded::Redirect(_)) | None => ().into_any(),
    }
}

fn render_route(route: RouteMatch) -> AnyView {
    match route.view {
        ViewKind::Login => view! { <LoginPage/> }.into_any(),
        ViewKind::Signup => view! { <SignupPage/> }.into_any(),
        ViewKind::Dashboard => view! { <DashboardPage/> }.into_any(),
        ViewKind::AllLeaves => view! { <AllLeavesPage/> }.into_any(),
        ViewKind::LeaveRequest => view! { <LeaveRequestPage user_id=route.user_id()/> }.into_any(),
        ViewKind::EditEmployee => view! { <EditEmployeePage user_id=route.user_id()/> }.into_any(),
        ViewKind::Profile => view! { <ProfilePage user_id=route.user_id()/> }.into_any(),
        ViewKind::ApproveLeave => view! { <ApproveLeavePage/> }.into_any(),
        ViewKind::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
