use crate::constants::DEAL_REFERENCE_LEN;

/// Generates a client-side deal reference for an order submission.
///
/// IG accepts references of up to 30 characters from `[A-Za-z0-9_-]`;
/// uppercase letters and digits keep them readable in the platform's
/// activity log. Stamping a reference before submission keeps the deal
/// correlatable even when the response body is lost.
pub fn deal_reference() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(DEAL_REFERENCE_LEN, &alphabet)
}
