use ig_alert_bridge::utils::id::deal_reference;

#[test]
fn deal_reference_has_broker_safe_shape() {
    let reference = deal_reference();
    assert_eq!(reference.len(), 30);
    assert!(
        reference
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );
}

#[test]
fn deal_references_are_unique() {
    let a = deal_reference();
    let b = deal_reference();
    assert_ne!(a, b);
}
