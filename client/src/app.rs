//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public pages (landing, catalog, course detail, sign-in/up) render for
//! everyone. Everything under `/dashboard` sits inside [`DashboardLayout`],
//! which redirects to sign-in once auth has settled without a user.
//!
//! Auth starts in the restoring state on both server and browser so the
//! hydrated markup matches; the stored session is only read after mount.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::public_header::PublicHeader;
use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::pages::{
    achievements::AchievementsPage,
    admin::AdminPage,
    ai::AiAssistantPage,
    cart::CartPage,
    catalog::CatalogPage,
    certificates::CertificatesPage,
    course_detail::CourseDetailPage,
    dashboard::DashboardPage,
    forums::{ForumPage, ThreadPage},
    home::HomePage,
    learn::LearnPage,
    live::LiveSessionsPage,
    login::{SignInPage, SignUpPage},
    profile::ProfilePage,
    purchases::PurchasesPage,
    quiz::QuizPage,
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::{auth as auth_util, dark_mode, remote};

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    Effect::new(move || auth_util::restore_session(auth));
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/edubox.css"/>
        <Title text="Edubox"/>

        <Router>
            <Routes fallback=|| view! { <p class="page-status">"Page not found."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("courses") view=CatalogPage/>
                <Route path=(StaticSegment("courses"), ParamSegment("id")) view=CourseDetailPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=(StaticSegment("learn"), ParamSegment("course_id")) view=LearnPage/>
                    <Route path=StaticSegment("quizzes") view=QuizPage/>
                    <Route path=(StaticSegment("forums"), StaticSegment("thread"), ParamSegment("id")) view=ThreadPage/>
                    <Route path=(StaticSegment("forums"), ParamSegment("course_id")) view=ForumPage/>
                    <Route path=StaticSegment("achievements") view=AchievementsPage/>
                    <Route path=StaticSegment("live") view=LiveSessionsPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("purchases") view=PurchasesPage/>
                    <Route path=StaticSegment("certificates") view=CertificatesPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("ai") view=AiAssistantPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Sidebar shell around every signed-in route.
#[component]
fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    auth_util::install_unauth_redirect(auth, use_navigate());

    // Seed the sidebar cart badge once per signed-in user.
    let user_id = Memo::new(move |_| auth.with(AuthState::user_id));
    Effect::new(move || {
        let Some(user_id) = user_id.get() else {
            return;
        };
        remote::spawn(async move {
            match api::cart(&user_id).await {
                Ok(items) => ui.update(|u| u.cart_count = items.len()),
                Err(e) => log::warn!("cart count unavailable: {e}"),
            }
        });
    });

    view! {
        <Show
            when=move || auth.with(AuthState::is_signed_in)
            fallback=|| {
                view! {
                    <PublicHeader/>
                    <p class="page-status">"Checking your session..."</p>
                }
            }
        >
            <div class="dashboard-shell">
                <Sidebar/>
                <main class="dashboard-shell__main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
