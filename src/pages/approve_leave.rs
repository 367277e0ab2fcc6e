//! Approval queue.
//!
//! Reachable by any signed-in user; the API decides who may approve.

use leptos::prelude::*;

use crate::state::auth::AuthContext;

#[component]
pub fn ApproveLeavePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <div class="approve-leave-page">
            <h1>"Approve leave"</h1>
            <Show
                when=move || auth.is_super_user()
                fallback=|| view! { <p class="page__note">"Only administrators can act on requests."</p> }
            >
                <p class="page__note">"Pending requests are listed by the leave service."</p>
            </Show>
        </div>
    }
}
