//! Shopping cart and checkout.
//!
//! Checkout creates a payment intent for every course in the cart, confirms
//! it, then empties the cart and shows the invoice. Backends without a
//! payment processor answer with a mock intent, which confirms the same way.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use courseware::checkout::{CheckoutTotals, convert_and_format_price, format_inr, format_usd, usd_to_inr};
use courseware::commerce::{CartItem, Invoice, PaymentConfirmation, PaymentIntentRequest};
use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiError;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::notify::alert;
use crate::util::remote::{self, Remote, status_text};
use crate::util::time;

/// Totals for the lines currently in the cart.
fn cart_totals(items: &[CartItem]) -> CheckoutTotals {
    CheckoutTotals::from_prices(items.iter().map(CartItem::price))
}

/// Course ids to pay for, in cart order.
fn checkout_request(user_id: &str, items: &[CartItem]) -> PaymentIntentRequest {
    PaymentIntentRequest {
        user_id: user_id.to_owned(),
        course_ids: items.iter().map(|item| item.course_id.clone()).collect(),
    }
}

/// Banner shown after a confirmed payment.
fn confirmation_note(confirmation: &PaymentConfirmation) -> String {
    let base = confirmation
        .message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Payment successful. Your courses are ready.".to_owned());
    if confirmation.mock {
        format!("{base} (test mode, no charge was made)")
    } else {
        base
    }
}

/// Create and confirm a payment for `items`, emptying the cart once the
/// payment succeeds.
async fn pay(user_id: String, items: Vec<CartItem>) -> Result<PaymentConfirmation, ApiError> {
    let intent = api::create_payment_intent(&checkout_request(&user_id, &items)).await?;
    log::info!("payment intent created (mock: {})", intent.mock);
    let confirmation = api::confirm_payment(&intent.confirmation_id()).await?;
    if confirmation.success {
        if let Err(e) = api::clear_cart(&user_id).await {
            log::warn!("cart clear after checkout failed: {e}");
        }
    }
    Ok(confirmation)
}

#[component]
pub fn CartPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let items = RwSignal::new(Remote::<Vec<CartItem>>::Loading);
    let reload = RwSignal::new(0_u32);
    let paying = RwSignal::new(false);
    let receipt = RwSignal::new(None::<(String, Option<Invoice>)>);

    Effect::new(move || {
        reload.track();
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        remote::spawn(async move {
            let next = Remote::from_result(api::cart(&user_id).await, "cart");
            if let Some(list) = next.ready() {
                let count = list.len();
                ui.update(|u| u.cart_count = count);
            }
            items.set(next);
        });
    });

    let remove = move |course_id: String| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        remote::spawn(async move {
            if let Err(e) = api::remove_from_cart(&user_id, &course_id).await {
                alert(&format!("Could not remove the course: {e}"));
            }
            reload.update(|n| *n = n.wrapping_add(1));
        });
    };

    let clear = move |_| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        remote::spawn(async move {
            if let Err(e) = api::clear_cart(&user_id).await {
                alert(&format!("Could not clear the cart: {e}"));
            }
            reload.update(|n| *n = n.wrapping_add(1));
        });
    };

    let checkout = move |_| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let lines = items.with_untracked(|i| i.ready_or(Vec::new()));
        if lines.is_empty() {
            return;
        }
        paying.set(true);
        remote::spawn(async move {
            match pay(user_id, lines).await {
                Ok(confirmation) if !confirmation.success => {
                    let reason = confirmation.message.unwrap_or_else(|| "payment was declined".to_owned());
                    alert(&format!("Checkout failed: {reason}"));
                }
                Ok(confirmation) => {
                    receipt.set(Some((confirmation_note(&confirmation), confirmation.invoice)));
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => alert(&format!("Checkout failed: {e}")),
            }
            paying.set(false);
        });
    };

    let totals = move || items.with(|i| i.ready().map(|list| cart_totals(list)).unwrap_or_default());

    view! {
        <div class="cart-page">
            <header class="page-header">
                <h1>"Your cart"</h1>
            </header>
            {move || {
                receipt
                    .get()
                    .map(|(note, invoice)| {
                        view! {
                            <section class="receipt">
                                <p class="notice notice--success">{note}</p>
                                {invoice.map(|inv| view! {
                                    <dl class="invoice">
                                        <dt>"Invoice"</dt>
                                        <dd>{inv.invoice_number.clone()}</dd>
                                        <dt>"Issued"</dt>
                                        <dd>{time::date_or(inv.issued_at.as_deref(), "-")}</dd>
                                        <dt>"Total"</dt>
                                        <dd>{format!("{} ({})", format_inr(usd_to_inr(inv.total)), format_usd(inv.total))}</dd>
                                    </dl>
                                })}
                                <a class="btn" href="/dashboard/purchases">"View purchases"</a>
                            </section>
                        }
                    })
            }}
            {move || items.with(|i| status_text(i, "cart")).map(|text| view! { <p class="page-status">{text}</p> })}
            <Show
                when=move || items.with(|i| i.ready().is_some_and(|list| !list.is_empty()))
                fallback=move || {
                    view! {
                        <Show when=move || items.with(|i| i.ready().is_some())>
                            <p class="empty">
                                "Your cart is empty. " <a href="/courses">"Browse courses"</a>
                            </p>
                        </Show>
                    }
                }
            >
                <ul class="cart-lines">
                    {move || {
                        items
                            .with(|i| i.ready_or(Vec::new()))
                            .into_iter()
                            .map(|item| {
                                let course_id = item.course_id.clone();
                                view! {
                                    <li class="cart-line">
                                        <span class="cart-line__title">{item.title().to_owned()}</span>
                                        <span class="cart-line__price">{convert_and_format_price(item.price())}</span>
                                        <button class="btn btn--link" on:click=move |_| remove(course_id.clone())>
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <dl class="totals">
                    <dt>"Subtotal"</dt>
                    <dd>{move || convert_and_format_price(totals().subtotal)}</dd>
                    <dt>"Tax"</dt>
                    <dd>{move || convert_and_format_price(totals().tax)}</dd>
                    <dt>"Total"</dt>
                    <dd>
                        {move || format_inr(totals().total_inr())}
                        <span class="muted">{move || format!(" ({})", format_usd(totals().total))}</span>
                    </dd>
                </dl>
                <div class="cart-actions">
                    <button class="btn" on:click=clear disabled=move || paying.get()>
                        "Clear cart"
                    </button>
                    <button class="btn btn--primary" on:click=checkout disabled=move || paying.get()>
                        {move || if paying.get() { "Processing..." } else { "Checkout" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
