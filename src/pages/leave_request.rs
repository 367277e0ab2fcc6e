//! Leave request form for one employee.

use leptos::prelude::*;

#[component]
pub fn LeaveRequestPage(user_id: String) -> impl IntoView {
    view! {
        <div class="leave-request-page">
            <h1>"Ask for leave"</h1>
            <p class="page__note">"Request on behalf of employee " <code>{user_id}</code></p>
        </div>
    }
}
