//! Purchase history: owned courses, invoices, and raw payments.

#[cfg(test)]
#[path = "purchases_test.rs"]
mod purchases_test;

use courseware::checkout::{format_inr, format_usd, usd_to_inr};
use courseware::commerce::{Invoice, Payment, Purchase};
use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::remote::{self, Remote, status_text};
use crate::util::time;

/// `₹4,149 ($49.99)`.
fn dual_price(usd: f64) -> String {
    format!("{} ({})", format_inr(usd_to_inr(usd)), format_usd(usd))
}

/// Sum of every invoice total, in USD.
fn lifetime_spend(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(|inv| inv.total).sum()
}

fn purchase_title(purchase: &Purchase) -> String {
    purchase
        .course
        .as_ref()
        .map_or_else(|| purchase.course_id.clone(), |course| course.title.clone())
}

#[component]
pub fn PurchasesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let purchases = RwSignal::new(Remote::<Vec<Purchase>>::Loading);
    let invoices = RwSignal::new(Remote::<Vec<Invoice>>::Loading);
    let payments = RwSignal::new(Remote::<Vec<Payment>>::Loading);

    Effect::new(move || {
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        let (for_invoices, for_payments) = (user_id.clone(), user_id.clone());
        remote::load(purchases, "purchases", async move { api::purchases(&user_id).await });
        remote::load(invoices, "invoices", async move { api::invoices(&for_invoices).await });
        remote::load(payments, "payment history", async move { api::payment_history(&for_payments).await });
    });

    view! {
        <div class="purchases-page">
            <header class="page-header">
                <h1>"Purchases"</h1>
                <p class="muted">
                    {move || invoices.with(|i| i.ready().map(|list| format!("Lifetime spend: {}", dual_price(lifetime_spend(list)))))}
                </p>
            </header>

            <section>
                <h2>"Your courses"</h2>
                {move || purchases.with(|p| status_text(p, "purchases")).map(|text| view! { <p class="page-status">{text}</p> })}
                <div class="course-grid">
                    {move || {
                        purchases
                            .with(|p| p.ready_or(Vec::new()))
                            .into_iter()
                            .map(|purchase| {
                                let href = format!("/dashboard/learn/{}", purchase.course_id);
                                let thumb = purchase.course.as_ref().and_then(|c| c.thumbnail_url.clone());
                                view! {
                                    <a class="course-card" href=href>
                                        {thumb.map(|src| view! { <img class="course-card__thumb" src=src alt=""/> })}
                                        <h3>{purchase_title(&purchase)}</h3>
                                        <p class="muted">
                                            {format!(
                                                "Paid {} on {}",
                                                dual_price(purchase.price_paid),
                                                time::date_or(purchase.access_granted_at.as_deref(), "-"),
                                            )}
                                        </p>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <section>
                <h2>"Invoices"</h2>
                {move || invoices.with(|i| status_text(i, "invoices")).map(|text| view! { <p class="page-status">{text}</p> })}
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Number"</th>
                            <th>"Issued"</th>
                            <th>"Amount"</th>
                            <th>"Tax"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            invoices
                                .with(|i| i.ready_or(Vec::new()))
                                .into_iter()
                                .map(|inv| view! {
                                    <tr>
                                        <td>{inv.invoice_number.clone()}</td>
                                        <td>{time::date_or(inv.issued_at.as_deref(), "-")}</td>
                                        <td>{format_usd(inv.amount)}</td>
                                        <td>{format_usd(inv.tax)}</td>
                                        <td>{dual_price(inv.total)}</td>
                                        <td>{inv.status.clone()}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>

            <section>
                <h2>"Payments"</h2>
                {move || payments.with(|p| status_text(p, "payment history")).map(|text| view! { <p class="page-status">{text}</p> })}
                <ul class="payment-list">
                    {move || {
                        payments
                            .with(|p| p.ready_or(Vec::new()))
                            .into_iter()
                            .map(|payment| view! {
                                <li>
                                    <span>{time::date_or(payment.created_at.as_deref(), "-")}</span>
                                    <span>{format_usd(payment.amount)}</span>
                                    <span class=format!("status status--{}", payment.status)>{payment.status.clone()}</span>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}
