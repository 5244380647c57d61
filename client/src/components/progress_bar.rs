//! Horizontal progress bar for enrollments and badge completion.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

/// CSS width for a percentage, clamped to 0..=100.
fn width_style(percent: u8) -> String {
    format!("width: {}%", percent.min(100))
}

#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u8>, #[prop(optional)] label: bool) -> impl IntoView {
    view! {
        <div
            class="progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || percent.get().min(100).to_string()
        >
            <div class="progress__fill" style=move || width_style(percent.get())></div>
            <Show when=move || label>
                <span class="progress__label">{move || format!("{}%", percent.get().min(100))}</span>
            </Show>
        </div>
    }
}
