use super::*;

fn invoice(total: f64) -> Invoice {
    serde_json::from_value(serde_json::json!({"invoice_number": "INV-1", "total": total})).unwrap()
}

#[test]
fn dual_price_shows_rupees_then_dollars() {
    assert_eq!(dual_price(49.99), "₹4,149 ($49.99)");
}

#[test]
fn lifetime_spend_sums_invoice_totals() {
    let spend = lifetime_spend(&[invoice(11.8), invoice(23.6)]);
    assert!((spend - 35.4).abs() < 1e-9);
    assert!(lifetime_spend(&[]).abs() < f64::EPSILON);
}

#[test]
fn purchase_title_falls_back_to_course_id() {
    let mut purchase: Purchase = serde_json::from_value(serde_json::json!({
        "user_id": "u-1",
        "course_id": "c-9",
        "courses": {"title": "Rust 101"}
    }))
    .unwrap();
    assert_eq!(purchase_title(&purchase), "Rust 101");
    purchase.course = None;
    assert_eq!(purchase_title(&purchase), "c-9");
}
