//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{main_nav::MainNav, route_outlet::RouteOutlet};
use crate::config::ClientConfig;
use crate::state::auth::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, restores the persisted session once mounted,
/// and refreshes the profile whenever the session token changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::provide(ClientConfig::from_build_env());

    // Effects only run in the browser, where the storage slot exists.
    Effect::new(move || auth.restore());

    let token = Memo::new(move |_| auth.token());
    Effect::new(move || {
        token.track();
        auth.get_user_data();
    });

    // Mirrors `router::ROUTES`. Each route renders the outlet, which applies
    // the guard and picks the page.
    view! {
        <Stylesheet id="leptos" href="/pkg/leave-client.css"/>
        <Title text="Leave Portal"/>

        <Router>
            <MainNav/>
            <main class="app-main">
                <Routes fallback=|| view! { <RouteOutlet/> }>
                    <Route path=StaticSegment("login") view=RouteOutlet/>
                    <Route path=StaticSegment("signup") view=RouteOutlet/>
                    <Route path=StaticSegment("") view=RouteOutlet/>
                    <Route path=StaticSegment("leave-page") view=RouteOutlet/>
                    <Route path=(StaticSegment("ask-for-leave"), ParamSegment("userId")) view=RouteOutlet/>
                    <Route path=(StaticSegment("edit"), ParamSegment("userId")) view=RouteOutlet/>
                    <Route path=(StaticSegment("profile"), ParamSegment("userId")) view=RouteOutlet/>
                    <Route path=StaticSegment("approve-leave") view=RouteOutlet/>
                </Routes>
            </main>
        </Router>
    }
}
