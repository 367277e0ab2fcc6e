//! All-leaves list.

use leptos::prelude::*;

#[component]
pub fn AllLeavesPage() -> impl IntoView {
    view! {
        <div class="leaves-page">
            <h1>"All leaves"</h1>
            <p class="page__note">"Leave records are listed by the leave service."</p>
        </div>
    }
}
