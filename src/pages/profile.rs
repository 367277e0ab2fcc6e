//! Profile page.
//!
//! Shows the fetched record when the route targets the signed-in user;
//! other employees' profiles are left to the API-backed view.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::UserRecord;
use crate::router::edit_path;
use crate::state::auth::AuthContext;

/// Top-level scalar fields of a user record, as `(label, value)` rows.
fn profile_fields(user: &UserRecord) -> Vec<(String, String)> {
    let Some(object) = user.as_object() else {
        return Vec::new();
    };
    object
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), text))
        })
        .collect()
}

#[component]
pub fn ProfilePage(user_id: String) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let edit_href = edit_path(&user_id);
    let target = user_id.clone();
    let is_self = move || auth.user_id() == target;

    let rows = move || {
        auth.current_user()
            .map(|user| profile_fields(&user))
            .unwrap_or_default()
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p class="page__note">"Employee " <code>{user_id}</code></p>
            <Show
                when=is_self
                fallback=|| view! { <p class="page__note">"Profile details are loaded by the employee view."</p> }
            >
                <dl class="profile-page__fields">{rows}</dl>
            </Show>
            <a href=edit_href class="btn">"Edit"</a>
        </div>
    }
}
