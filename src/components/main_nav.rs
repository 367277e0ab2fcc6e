//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Links depend on the session: anonymous users
//! see login/signup, employees see their leave screens, and super users also
//! get the approval queue. Logout only clears the session; the outlet's
//! guard performs the redirect.

use leptos::prelude::*;

use crate::router::{ask_for_leave_path, profile_path};
use crate::state::auth::AuthContext;

#[component]
pub fn MainNav() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <nav class="main-nav">
            <a href="/" class="main-nav__brand">"Leave Portal"</a>
            <span class="main-nav__spacer"></span>
            <Show
                when=move || auth.is_logged_in()
                fallback=|| {
                    view! {
                        <a href="/login" class="main-nav__link">"Login"</a>
                        <a href="/signup" class="main-nav__link">"Sign up"</a>
                    }
                }
            >
                <a href="/leave-page" class="main-nav__link">"All leaves"</a>
                <a href=move || ask_for_leave_path(&auth.user_id()) class="main-nav__link">
                    "Ask for leave"
                </a>
                <Show when=move || auth.is_super_user()>
                    <a href="/approve-leave" class="main-nav__link">"Approve leave"</a>
                </Show>
                <a href=move || profile_path(&auth.user_id()) class="main-nav__user">
                    {move || auth.display_name()}
                </a>
                <button class="btn main-nav__logout" on:click=move |_| auth.logout()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
