//! Dashboard: landing page for a signed-in employee.

use leptos::prelude::*;

use crate::router::{ask_for_leave_path, profile_path};
use crate::state::auth::AuthContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", auth.display_name())}</h1>
                <button class="btn" on:click=move |_| auth.get_user_data() title="Reload profile">
                    "Refresh"
                </button>
            </header>
            <ul class="dashboard-page__links">
                <li><a href=move || ask_for_leave_path(&auth.user_id())>"Request leave"</a></li>
                <li><a href="/leave-page">"Browse all leaves"</a></li>
                <li><a href=move || profile_path(&auth.user_id())>"View my profile"</a></li>
                <Show when=move || auth.is_super_user()>
                    <li><a href="/approve-leave">"Review pending requests"</a></li>
                </Show>
            </ul>
        </div>
    }
}
