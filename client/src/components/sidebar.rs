//! Dashboard navigation sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the dashboard layout around every signed-in route. Highlights
//! the entry for the current path, hides course management from students,
//! and owns the theme toggle and sign-out control.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{auth as auth_util, dark_mode, nav};

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub managers_only: bool,
}

const fn item(href: &'static str, label: &'static str) -> NavItem {
    NavItem {
        href,
        label,
        managers_only: false,
    }
}

pub const NAV_ITEMS: [NavItem; 11] = [
    item("/dashboard", "Dashboard"),
    item("/courses", "Browse Courses"),
    item("/dashboard/quizzes", "Quizzes"),
    item("/dashboard/live", "Live Sessions"),
    item("/dashboard/achievements", "Achievements"),
    item("/dashboard/ai", "AI Studio"),
    item("/dashboard/certificates", "Certificates"),
    item("/dashboard/cart", "Cart"),
    item("/dashboard/purchases", "Purchases"),
    item("/dashboard/profile", "Profile"),
    NavItem {
        href: "/dashboard/admin",
        label: "Admin",
        managers_only: true,
    },
];

/// Items visible to a user with or without course-management rights.
pub fn visible_items(can_manage: bool) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| can_manage || !item.managers_only)
        .copied()
        .collect()
}

/// Whether `href` is the active entry for `path`.
///
/// The dashboard root only matches exactly; other entries also match their
/// sub-routes.
pub fn is_active(path: &str, href: &str) -> bool {
    let path = path.trim_end_matches('/');
    if href == "/dashboard" {
        return path == href;
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_toggle_collapse = move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);
    let on_sign_out = move |_| {
        auth_util::sign_out(auth);
        nav::redirect("/auth/signin");
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || ui.get().sidebar_collapsed>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"Edubox"</span>
                <button class="btn btn--icon" title="Collapse" on:click=on_toggle_collapse>"☰"</button>
            </div>
            <nav class="sidebar__nav">
                {move || {
                    let path = location.pathname.get();
                    let cart_count = ui.get().cart_count;
                    visible_items(auth.get().can_manage_courses())
                        .into_iter()
                        .map(|item| {
                            let badge = (item.href == "/dashboard/cart" && cart_count > 0).then(|| cart_count.to_string());
                            view! {
                                <a
                                    class="sidebar__link"
                                    class:sidebar__link--active=is_active(&path, item.href)
                                    href=item.href
                                >
                                    <span>{item.label}</span>
                                    {badge.map(|count| view! { <span class="sidebar__badge">{count}</span> })}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__user">{move || auth.get().display_name()}</span>
                <button class="btn btn--ghost" on:click=on_toggle_theme>
                    {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                </button>
                <button class="btn btn--ghost" on:click=on_sign_out>"Sign out"</button>
            </div>
        </aside>
    }
}
