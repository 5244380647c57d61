//! Top bar for the public catalog and sign-in routes.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn PublicHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <header class="public-header">
            <a class="public-header__brand" href="/">"Edubox"</a>
            <nav class="public-header__nav">
                <a href="/courses">"Courses"</a>
                <Show
                    when=move || auth.get().is_signed_in()
                    fallback=|| view! {
                        <a href="/auth/signin">"Sign in"</a>
                        <a class="btn btn--primary" href="/auth/signup">"Get started"</a>
                    }
                >
                    <a class="btn btn--primary" href="/dashboard">"My dashboard"</a>
                </Show>
            </nav>
        </header>
    }
}
