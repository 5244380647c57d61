//! Cart totals and price display.
//!
//! Prices are stored in USD. The storefront displays them in INR using a
//! fixed conversion rate; tax is a flat rate on the subtotal.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

/// Flat tax rate applied at checkout.
pub const TAX_RATE: f64 = 0.18;

/// Static USD to INR display rate.
pub const USD_TO_INR: f64 = 83.0;

/// Subtotal, tax, and total of a cart, in USD.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CheckoutTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl CheckoutTotals {
    /// Sum line prices and apply [`TAX_RATE`].
    pub fn from_prices<I>(prices: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let subtotal: f64 = prices.into_iter().sum();
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Total converted to whole rupees.
    #[must_use]
    pub fn total_inr(&self) -> i64 {
        usd_to_inr(self.total)
    }
}

/// Convert USD to whole rupees, rounding half away from zero.
#[must_use]
pub fn usd_to_inr(usd: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let rupees = (usd * USD_TO_INR).round() as i64;
    rupees
}

/// Convert a USD price and format it for display, e.g. `₹4,149`.
#[must_use]
pub fn convert_and_format_price(usd: f64) -> String {
    format_inr(usd_to_inr(usd))
}

/// Format whole rupees with Indian digit grouping: `₹12,34,567`.
#[must_use]
pub fn format_inr(rupees: i64) -> String {
    let digits = rupees.unsigned_abs().to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{tail}", groups.join(","))
    };
    if rupees < 0 { format!("-₹{grouped}") } else { format!("₹{grouped}") }
}

/// Format a USD amount with two decimals: `$49.00`.
#[must_use]
pub fn format_usd(usd: f64) -> String {
    if usd < 0.0 {
        format!("-${:.2}", -usd)
    } else {
        format!("${usd:.2}")
    }
}
