//! Completion certificates.

#[cfg(test)]
#[path = "certificates_test.rs"]
mod certificates_test;

use courseware::enrollment::{Certificate, certificate_code};
use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::remote::{self, Remote, status_text};
use crate::util::time;

/// Identifier printed on a certificate card.
fn display_code(cert: &Certificate) -> String {
    cert.certificate_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map_or_else(|| certificate_code(&cert.enrollment_id), str::to_owned)
}

#[component]
pub fn CertificatesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let certs = RwSignal::new(Remote::<Vec<Certificate>>::Loading);

    Effect::new(move || {
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        remote::load(certs, "certificates", async move { api::certificates(&user_id).await });
    });

    view! {
        <div class="certificates-page">
            <header class="page-header">
                <h1>"Certificates"</h1>
            </header>
            {move || certs.with(|c| status_text(c, "certificates")).map(|text| view! { <p class="page-status">{text}</p> })}
            <Show when=move || certs.with(|c| c.ready().is_some_and(Vec::is_empty))>
                <p class="empty">"Finish a course to earn your first certificate."</p>
            </Show>
            <div class="certificate-grid">
                {move || {
                    certs
                        .with(|c| c.ready_or(Vec::new()))
                        .into_iter()
                        .map(|cert| {
                            let download = api::certificate_download_url(&cert.enrollment_id);
                            view! {
                                <article class="certificate">
                                    <span class="certificate__seal">"🎓"</span>
                                    <h3>{cert.title().to_owned()}</h3>
                                    <p class="muted">
                                        {format!("Completed {}", time::date_or(cert.completed_at.as_deref(), "-"))}
                                    </p>
                                    <p class="certificate__code">{format!("Certificate #{}", display_code(&cert))}</p>
                                    <a class="btn btn--primary" href=download target="_blank" rel="noopener">
                                        "Download PDF"
                                    </a>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
