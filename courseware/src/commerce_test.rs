use super::*;

#[test]
fn cart_item_reads_embedded_course_price() {
    let item: CartItem = serde_json::from_value(serde_json::json!({
        "user_id": "u-1",
        "course_id": "c-1",
        "courses": {"id": "c-1", "title": "Rust 101", "price": 19.99}
    }))
    .unwrap();
    assert!((item.price() - 19.99).abs() < 1e-9);
    assert_eq!(item.title(), "Rust 101");
}

#[test]
fn cart_item_without_course_is_free_and_unnamed() {
    let item: CartItem = serde_json::from_value(serde_json::json!({"user_id": "u", "course_id": "c"})).unwrap();
    assert_eq!(item.price(), 0.0);
    assert_eq!(item.title(), "Unknown course");
}

#[test]
fn mock_payment_intent_decodes_and_falls_back_to_mock_id() {
    let intent: PaymentIntent = serde_json::from_value(serde_json::json!({
        "client_secret": "mock_client_secret",
        "amount": 0,
        "currency": "usd",
        "status": "requires_payment_method",
        "mock": true
    }))
    .unwrap();
    assert!(intent.mock);
    assert_eq!(intent.confirmation_id(), "mock_payment_intent");
}

#[test]
fn real_payment_intent_uses_backend_id() {
    let intent: PaymentIntent =
        serde_json::from_value(serde_json::json!({"amount": 59.0, "payment_intent_id": "pi_123"})).unwrap();
    assert_eq!(intent.confirmation_id(), "pi_123");
    assert!(!intent.mock);
}

#[test]
fn confirmation_carries_optional_invoice() {
    let confirmation: PaymentConfirmation = serde_json::from_value(serde_json::json!({
        "success": true,
        "message": "Payment confirmed and courses unlocked",
        "invoice": {"invoice_number": "INV-20261016-abcd", "amount": 100, "tax": 18, "total": 118, "status": "paid"}
    }))
    .unwrap();
    let invoice = confirmation.invoice.unwrap();
    assert_eq!(invoice.invoice_number, "INV-20261016-abcd");
    assert!((invoice.total - 118.0).abs() < f64::EPSILON);
}

#[test]
fn payment_intent_request_serializes_course_ids() {
    let body = PaymentIntentRequest {
        user_id: "u".to_owned(),
        course_ids: vec!["a".to_owned(), "b".to_owned()],
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"user_id": "u", "course_ids": ["a", "b"]})
    );
}
