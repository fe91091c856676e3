//! Grant Token
//!
//! The signed cookie value that carries "this visitor redeemed a code for
//! this email" across the redirect to registration. Format is
//! `<base64url(email)>.<base64url(hmac_sha256(secret, base64url(email)))>`.
//! Anyone can read the email; nobody without the server secret can mint or
//! alter a token.

use platform::crypto::{constant_time_eq, from_base64url, hmac_sha256, to_base64url};

use crate::domain::value_object::email::Email;

/// Build a signed grant token for a redeemed email.
pub fn build_grant_token(email: &Email, secret: &[u8; 32]) -> String {
    let payload = to_base64url(email.as_str().as_bytes());
    let signature = hmac_sha256(secret, payload.as_bytes());
    format!("{}.{}", payload, to_base64url(&signature))
}

/// Parse and verify a grant token, returning the granted email.
///
/// Returns `None` for any malformed or tampered token.
pub fn parse_grant_token(token: &str, secret: &[u8; 32]) -> Option<String> {
    let (payload, signature_b64) = token.split_once('.')?;

    let signature = from_base64url(signature_b64).ok()?;
    let expected = hmac_sha256(secret, payload.as_bytes());

    if !constant_time_eq(&signature, &expected) {
        return None;
    }

    let email_bytes = from_base64url(payload).ok()?;
    String::from_utf8(email_bytes).ok()
}
