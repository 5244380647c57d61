//! Cart, payment, purchase, and invoice records.

#[cfg(test)]
#[path = "commerce_test.rs"]
mod commerce_test;

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::numbers;

/// A course staged in the shopping cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub course_id: String,
    #[serde(default)]
    pub added_at: Option<String>,
    /// Embedded course row (`courses(*)`).
    #[serde(default, alias = "courses")]
    pub course: Option<Course>,
}

impl CartItem {
    /// Line price in USD; 0 when the course row is missing.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.course.as_ref().map_or(0.0, |course| course.price)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.course.as_ref().map_or("Unknown course", |course| course.title.as_str())
    }
}

/// Body of `POST /api/cart/add`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub user_id: String,
    pub course_id: String,
}

/// Body of `POST /api/payments/create-intent`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentIntentRequest {
    pub user_id: String,
    pub course_ids: Vec<String>,
}

/// Response of `POST /api/payments/create-intent`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Set when the backend has no payment processor configured.
    #[serde(default)]
    pub mock: bool,
}

impl PaymentIntent {
    /// Identifier to confirm, falling back to a mock id when the backend runs
    /// without a payment processor.
    #[must_use]
    pub fn confirmation_id(&self) -> String {
        self.payment_intent_id
            .clone()
            .unwrap_or_else(|| "mock_payment_intent".to_owned())
    }
}

/// Response of `POST /api/payments/confirm`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub mock: bool,
    #[serde(default)]
    pub invoice: Option<Invoice>,
}

/// A recorded payment (history page).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Post-payment durable access record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub course_id: String,
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub price_paid: f64,
    #[serde(default)]
    pub access_granted_at: Option<String>,
    #[serde(default, alias = "courses")]
    pub course: Option<PurchasedCourse>,
}

/// Course columns embedded in a purchase row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasedCourse {
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Response of `GET /api/purchases/check/{user}/{course}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseCheck {
    pub has_purchased: bool,
}

/// Billing document derived from a confirmed payment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub invoice_number: String,
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub amount: f64,
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub tax: f64,
    #[serde(default, deserialize_with = "numbers::f64_or_zero")]
    pub total: f64,
    #[serde(default, deserialize_with = "numbers::string_or_empty")]
    pub status: String,
    #[serde(default)]
    pub issued_at: Option<String>,
}
