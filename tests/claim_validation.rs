//! Temporal claim validation through the decode path.

use hstoken::{decode, decode_at, encode, validate_claims, Claims};

const KEY: &[u8] = b"secret";

fn temporal_claims(iat: i64, nbf: i64, exp: i64) -> Claims {
    Claims::new().issued_at(iat).not_before(nbf).expires_at(exp)
}

#[test]
fn worked_example_inside_and_past_the_window() {
    let token = encode(&temporal_claims(1000, 1000, 2000), KEY, "HS256").unwrap();

    let inside = decode_at(&token, KEY, "HS256", 1500);
    assert!(inside.is_verified);
    assert_eq!(inside.errors, None);

    // Past expiry the signature is still valid; only the claims fail.
    let past = decode_at(&token, KEY, "HS256", 2500);
    assert!(past.is_verified);
    assert_eq!(past.errors.as_deref(), Some("token expired"));
    assert_eq!(past.payload, Some(temporal_claims(1000, 1000, 2000)));
}

#[test]
fn expiry_boundary() {
    let token = encode(&Claims::new().expires_at(2000), KEY, "HS256").unwrap();
    assert_eq!(
        decode_at(&token, KEY, "HS256", 2000).errors.as_deref(),
        Some("token expired")
    );
    assert_eq!(decode_at(&token, KEY, "HS256", 1999).errors, None);
}

#[test]
fn not_before_boundary() {
    let token = encode(&Claims::new().not_before(2000), KEY, "HS256").unwrap();
    assert_eq!(decode_at(&token, KEY, "HS256", 2000).errors, None);
    assert_eq!(
        decode_at(&token, KEY, "HS256", 1999).errors.as_deref(),
        Some("token not yet valid")
    );
}

#[test]
fn issued_in_the_future_is_rejected() {
    let token = encode(&Claims::new().issued_at(3000), KEY, "HS256").unwrap();
    assert_eq!(
        decode_at(&token, KEY, "HS256", 2999).errors.as_deref(),
        Some("token issued in the future")
    );
    assert_eq!(decode_at(&token, KEY, "HS256", 3000).errors, None);
}

#[test]
fn all_temporal_claims_are_optional() {
    let token = encode(&Claims::new().claim("sub", "anyone"), KEY, "HS256").unwrap();
    let result = decode_at(&token, KEY, "HS256", 0);
    assert!(result.is_verified);
    assert_eq!(result.errors, None);
}

#[test]
fn claim_validation_runs_even_when_the_signature_fails() {
    let token = encode(&temporal_claims(1000, 1000, 2000), KEY, "HS256").unwrap();
    let result = decode_at(&token, b"a-different-key", "HS256", 2500);
    assert!(!result.is_verified);
    assert_eq!(result.errors.as_deref(), Some("token expired"));
    assert!(result.payload.is_some());
}

#[test]
fn first_failing_check_short_circuits() {
    // iat, nbf and exp all fail at now=500; the iat message wins.
    let claims = temporal_claims(600, 700, 400);
    assert_eq!(
        validate_claims(&claims, 500).as_deref(),
        Some("token issued in the future")
    );
}

#[test]
fn system_clock_decode_accepts_a_live_token() {
    let claims = Claims::new().expires_at(i64::MAX);
    let token = encode(&claims, KEY, "HS256").unwrap();
    let result = decode(&token, KEY, "HS256");
    assert!(result.is_verified);
    assert_eq!(result.errors, None);
}
