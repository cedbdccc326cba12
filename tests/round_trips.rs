//! Write-then-read round trips through the public API

use hsjwt::*;
use serde_json::json;

const NOW: i64 = 1_700_000_000;

fn reader(secret: &[u8]) -> TokenReader {
    TokenReader::new(secret).clock(FixedClock(NOW)).build()
}

#[test]
fn test_issuer_round_trip() {
    let mut claims = ClaimSet::new();
    claims.set_issuer(Some("example.com"));

    let token = write(&claims, "test");
    let read_back = read(&token, "test").expect("token should validate");

    assert_eq!(read_back.issuer(), Some("example.com"));
    assert_eq!(read_back, claims);
}

#[test]
fn test_all_registered_claims_round_trip() {
    let mut claims = ClaimSet::new();
    claims
        .set_issuer(Some("https://issuer.example.com"))
        .set_subject(Some("user-12345"))
        .set_audiences(["api", "admin"])
        .set_expiration(NOW + 3600)
        .set_not_before(NOW - 60)
        .set_issued_at(NOW - 60)
        .set_jwt_id(Some("3f1c6a5e"));

    let read_back = reader(b"secret").read(&write(&claims, b"secret")).unwrap();

    assert_eq!(read_back.issuer(), Some("https://issuer.example.com"));
    assert_eq!(read_back.subject(), Some("user-12345"));
    assert_eq!(read_back.audience(), None);
    assert_eq!(read_back.audiences(), vec!["api", "admin"]);
    assert_eq!(read_back.expiration(), Some(NOW + 3600));
    assert_eq!(read_back.not_before(), Some(NOW - 60));
    assert_eq!(read_back.issued_at(), Some(NOW - 60));
    assert_eq!(read_back.jwt_id(), Some("3f1c6a5e"));
    assert_eq!(read_back, claims);
}

#[test]
fn test_custom_claims_round_trip() {
    let mut claims = ClaimSet::new();
    claims
        .set_audience(Some("api"))
        .set_custom("roles", json!(["reader", "writer"]))
        .set_custom("profile", json!({ "name": "Jane", "age": 41, "verified": true }))
        .set_custom("ratio", 0.25)
        .set_custom("nothing", serde_json::Value::Null)
        .set_custom("greeting", "héllo ✓");

    let read_back = reader(b"k").read(&write(&claims, b"k")).unwrap();

    assert_eq!(read_back.audience(), Some("api"));
    assert!(read_back.audiences().is_empty());
    assert_eq!(read_back.get("roles"), Some(&json!(["reader", "writer"])));
    assert_eq!(read_back.get("nothing"), Some(&serde_json::Value::Null));
    assert_eq!(read_back, claims);
}

#[test]
fn test_empty_claims_and_empty_secret() {
    let token = write(&ClaimSet::new(), b"");

    let read_back = read(&token, b"").unwrap();
    assert!(read_back.is_empty());
    assert_eq!(read(&token, b"x"), Err(Error::SignatureInvalid));
}

#[test]
fn test_wrong_secret_is_verification_error() {
    let mut claims = ClaimSet::new();
    claims.set_subject(Some("user"));
    let token = write(&claims, b"secret-one");

    let err = read(&token, b"secret-two").unwrap_err();
    assert_eq!(err, Error::SignatureInvalid);
    assert_eq!(err.kind(), ErrorKind::Verification);
}

#[test]
fn test_expiration_boundary() {
    let mut claims = ClaimSet::new();

    claims.set_expiration(NOW);
    let err = reader(b"s").read(&write(&claims, b"s")).unwrap_err();
    assert_eq!(
        err,
        Error::TokenExpired {
            expired_at: NOW,
            now: NOW,
            skew: 0
        }
    );
    assert_eq!(err.kind(), ErrorKind::Expired);

    claims.set_expiration(NOW + 1);
    assert!(reader(b"s").read(&write(&claims, b"s")).is_ok());
}

#[test]
fn test_not_before_boundary() {
    let mut claims = ClaimSet::new();

    claims.set_not_before(NOW);
    assert!(reader(b"s").read(&write(&claims, b"s")).is_ok());

    claims.set_not_before(NOW + 1);
    let err = reader(b"s").read(&write(&claims, b"s")).unwrap_err();
    assert_eq!(
        err,
        Error::TokenNotYetValid {
            not_before: NOW + 1,
            now: NOW,
            skew: 0
        }
    );
    assert_eq!(err.kind(), ErrorKind::NotYetValid);
}

#[test]
fn test_bad_signature_wins_over_expiration() {
    let mut claims = ClaimSet::new();
    claims.set_expiration(NOW - 3600).set_not_before(NOW + 3600);
    let token = write(&claims, b"right");

    assert_eq!(reader(b"wrong").read(&token), Err(Error::SignatureInvalid));
}

#[test]
fn test_zero_timestamps_are_not_checked() {
    let mut claims = ClaimSet::new();
    claims.set_custom("exp", 0).set_custom("nbf", -5);

    let read_back = reader(b"s").read(&write(&claims, b"s")).unwrap();
    assert_eq!(read_back.expiration(), None);
    assert_eq!(read_back.not_before(), None);
    assert_eq!(read_back.get("exp"), Some(&json!(0)));
}

#[test]
fn test_typed_claims_round_trip() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Session {
        sub: String,
        exp: i64,
        tenant: String,
    }

    let session = Session {
        sub: "user".into(),
        exp: NOW + 60,
        tenant: "acme".into(),
    };

    let token = write(&ClaimSet::from_claims(&session).unwrap(), b"s");
    let read_back = reader(b"s").read(&token).unwrap();

    assert_eq!(read_back.expiration(), Some(NOW + 60));
    assert_eq!(read_back.deserialize_into::<Session>().unwrap(), session);
}

#[test]
fn test_reader_is_reusable_across_threads() {
    let reader = reader(b"shared");
    let tokens: Vec<String> = (0..4u64)
        .map(|i| {
            let mut claims = ClaimSet::new();
            claims.set_custom("n", i);
            write(&claims, b"shared")
        })
        .collect();

    std::thread::scope(|scope| {
        for (i, token) in tokens.iter().enumerate() {
            let reader = reader.clone();
            scope.spawn(move || {
                let claims = reader.read(token).unwrap();
                assert_eq!(claims.get("n"), Some(&json!(i)));
            });
        }
    });
}

/// Claims holding a single `blob` string of `len` bytes
///
/// The token is 81 bytes of header, dots and signature plus the base64url
/// length of `{"blob":"..."}`.
fn blob_claims(len: usize) -> ClaimSet {
    let mut claims = ClaimSet::new();
    claims.set_custom("blob", "x".repeat(len));
    claims
}

#[test]
fn test_largest_token_round_trips() {
    let claims = blob_claims(49_080);
    let token = write(&claims, "secret");
    assert_eq!(token.len(), MAX_TOKEN_LENGTH);

    assert_eq!(read(&token, "secret").unwrap(), claims);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "exceeds MAX_TOKEN_LENGTH")]
fn test_oversized_claims_rejected_by_writer() {
    write(&blob_claims(50_000), "secret");
}

#[test]
#[cfg(not(debug_assertions))]
fn test_oversized_token_rejected_by_reader() {
    let token = write(&blob_claims(49_081), "secret");
    assert_eq!(token.len(), MAX_TOKEN_LENGTH + 1);
    assert!(matches!(
        read(&token, "secret"),
        Err(Error::Format(FormatError::TokenTooLarge { .. }))
    ));
}
