//! Edit-employee screen.

use leptos::prelude::*;

#[component]
pub fn EditEmployeePage(user_id: String) -> impl IntoView {
    view! {
        <div class="edit-employee-page">
            <h1>"Edit employee"</h1>
            <p class="page__note">"Editing employee " <code>{user_id}</code></p>
        </div>
    }
}
