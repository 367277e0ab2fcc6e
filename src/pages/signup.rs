//! Signup page: registers an employee and starts a session for them.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[cfg(feature = "hydrate")]
use crate::net::types::SignupRequest;
use crate::state::auth::AuthContext;

#[derive(Debug, PartialEq, Eq)]
struct SignupInput {
    name: String,
    email: String,
    password: String,
}

fn validate_signup(name: &str, email: &str, password: &str) -> Result<SignupInput, &'static str> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email, and password.");
    }
    Ok(SignupInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup(&name.get(), &email.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = SignupRequest {
                    name: &input.name,
                    email: &input.email,
                    password: &input.password,
                };
                let result = crate::net::api::signup(auth.config(), &request).await;
                busy.set(false);
                match result {
                    Ok(resp) => {
                        info.set(String::new());
                        auth.login(resp.token, resp.user_id, resp.is_super_user);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("Signup failed: {e}")),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, input);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Leave Portal"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
