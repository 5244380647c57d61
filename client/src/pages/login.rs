//! Sign-in and sign-up pages backed by the managed auth service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::public_header::PublicHeader;
use crate::net::supabase::{self, SignUp};
use crate::state::auth::AuthState;
use crate::util::{auth as auth_util, nav, remote};

/// Shortest password the auth service accepts.
const MIN_PASSWORD_LEN: usize = 6;

/// Check the form before any request is made.
fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !valid_email {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        remote::spawn(async move {
            match supabase::sign_in(&email_value, &password_value).await {
                Ok(session) => {
                    auth_util::establish(auth, session).await;
                    nav::redirect("/dashboard");
                }
                Err(e) => {
                    log::warn!("sign-in failed: {e}");
                    info.set(format!("Sign-in failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <PublicHeader/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Sign in to continue learning"</p>
                <form class="login-form" on:submit=on_submit>
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
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__switch">
                    "New here? "
                    <a href="/auth/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = full_name.get();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if name_value.trim().is_empty() {
            info.set("Enter your full name.".to_owned());
            return;
        }
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating your account...".to_owned());

        remote::spawn(async move {
            match supabase::sign_up(&email_value, &password_value, &name_value).await {
                Ok(SignUp::SignedIn(session)) => {
                    auth_util::establish(auth, session).await;
                    nav::redirect("/dashboard");
                }
                Ok(SignUp::ConfirmEmail) => {
                    info.set("Check your email to confirm your account, then sign in.".to_owned());
                }
                Err(e) => {
                    log::warn!("sign-up failed: {e}");
                    info.set(format!("Sign-up failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <PublicHeader/>
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <p class="login-card__subtitle">"Start learning with Edubox"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
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
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__switch">
                    "Already have an account? "
                    <a href="/auth/signin">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
