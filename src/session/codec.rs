use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::SelectionSession;

type HmacSha256 = Hmac<Sha256>;

/// Serialize and sign a selection session for cookie storage
///
/// The session is JSON-encoded, base64url-encoded, then signed with
/// HMAC-SHA256. The result has the form `payload.signature`.
///
/// # Errors
///
/// Returns an error string if serialization or HMAC initialization fails.
pub fn encode_session(session: &SelectionSession, secret_key: &str) -> Result<String, String> {
    let json = serde_json::to_string(session).map_err(|e| format!("Serialization error: {}", e))?;
    let payload = URL_SAFE_NO_PAD.encode(json);

    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| format!("HMAC initialization error: {}", e))?;
    mac.update(payload.as_bytes());
    let signature = mac.finalize().into_bytes();

    let signature_b64 = URL_SAFE_NO_PAD.encode(signature);

    Ok(format!("{}.{}", payload, signature_b64))
}

/// Verify and deserialize a session cookie value
///
/// Returns `None` for a missing, malformed, tampered, or wrongly-signed
/// value; callers fall back to a fresh empty session. Signature comparison
/// is constant-time via `verify_slice`.
pub fn decode_session(value: Option<&str>, secret_key: &str) -> Option<SelectionSession> {
    let value = value?;

    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() != 2 {
        return None;
    }

    let payload = parts[0];
    let signature_b64 = parts[1];

    let provided_signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes()).ok()?;
    mac.update(payload.as_bytes());
    mac.verify_slice(&provided_signature).ok()?;

    let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> SelectionSession {
        let mut session = SelectionSession::new();
        session
            .record_selection("Tom Hanks".to_string(), "http://img/1".to_string(), "27205")
            .unwrap();
        session.set_movie_details("Inception".to_string(), Some("/poster.jpg".to_string()));
        session
    }

    #[test]
    fn test_round_trip() {
        let secret = "test_secret_key_12345";
        let session = sample_session();

        let token = encode_session(&session, secret).unwrap();
        assert!(token.contains('.'));

        let decoded = decode_session(Some(&token), secret).unwrap();
        assert_eq!(decoded, session);
    }

    #[test]
    fn test_empty_session_round_trip() {
        let secret = "test_secret_key";
        let session = SelectionSession::new();

        let token = encode_session(&session, secret).unwrap();
        let decoded = decode_session(Some(&token), secret).unwrap();

        assert_eq!(decoded, SelectionSession::default());
    }

    #[test]
    fn test_decode_none_value() {
        assert!(decode_session(None, "secret").is_none());
    }

    #[test]
    fn test_decode_malformed_value() {
        let secret = "test_secret_key";

        assert!(decode_session(Some(""), secret).is_none());
        assert!(decode_session(Some("not-a-token"), secret).is_none());
        assert!(decode_session(Some("too.many.parts"), secret).is_none());
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let session = sample_session();

        let token = encode_session(&session, "correct_secret").unwrap();

        assert!(decode_session(Some(&token), "wrong_secret").is_none());
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let secret = "test_secret_key";
        let session = sample_session();

        let token = encode_session(&session, secret).unwrap();

        // Re-encode a different session under the original signature
        let other = SelectionSession::new();
        let other_token = encode_session(&other, secret).unwrap();
        let forged = format!(
            "{}.{}",
            other_token.split('.').next().unwrap(),
            token.split('.').nth(1).unwrap()
        );

        assert!(decode_session(Some(&forged), secret).is_none());
    }
}
