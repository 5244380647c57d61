use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_cart_totals_are_zero() {
    let totals = CheckoutTotals::from_prices(Vec::new());
    assert_eq!(totals, CheckoutTotals::default());
    assert_eq!(totals.total_inr(), 0);
}

#[test]
fn totals_apply_flat_tax() {
    for subtotal in [0.0, 1.0, 19.99, 49.5, 100.0, 1234.56] {
        let totals = CheckoutTotals::from_prices([subtotal]);
        assert!(close(totals.subtotal, subtotal));
        assert!(close(totals.tax, 0.18 * subtotal));
        assert!(close(totals.total, 1.18 * subtotal));
    }
}

#[test]
fn totals_sum_line_items() {
    let totals = CheckoutTotals::from_prices([10.0, 20.0, 30.0]);
    assert!(close(totals.subtotal, 60.0));
    assert!(close(totals.tax, 10.8));
    assert!(close(totals.total, 70.8));
    assert_eq!(totals.total_inr(), 5876);
}

#[test]
fn usd_to_inr_rounds_to_whole_rupees() {
    assert_eq!(usd_to_inr(1.0), 83);
    assert_eq!(usd_to_inr(0.5), 42);
    assert_eq!(usd_to_inr(49.99), 4149);
}

#[test]
fn format_inr_groups_indian_style() {
    assert_eq!(format_inr(0), "₹0");
    assert_eq!(format_inr(999), "₹999");
    assert_eq!(format_inr(1000), "₹1,000");
    assert_eq!(format_inr(100_000), "₹1,00,000");
    assert_eq!(format_inr(1_234_567), "₹12,34,567");
    assert_eq!(format_inr(123_456_789), "₹12,34,56,789");
    assert_eq!(format_inr(-4150), "-₹4,150");
}

#[test]
fn convert_and_format_price_is_prefixed_and_monotonic() {
    let mut last = i64::MIN;
    for cents in 0..5000 {
        let usd = f64::from(cents) / 100.0;
        let formatted = convert_and_format_price(usd);
        assert!(formatted.starts_with('₹'), "{formatted}");
        let value: i64 = formatted.trim_start_matches('₹').replace(',', "").parse().unwrap();
        assert!(value >= last);
        last = value;
    }
}

#[test]
fn format_usd_uses_two_decimals() {
    assert_eq!(format_usd(49.0), "$49.00");
    assert_eq!(format_usd(0.5), "$0.50");
    assert_eq!(format_usd(-3.25), "-$3.25");
}
