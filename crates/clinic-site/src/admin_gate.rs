/// Access gate for the debug field listing.
///
/// The listing exposes every raw field of the clinic record, including ones
/// not meant for publication, so it is off unless a token is configured.
use axum::http::{header, HeaderMap};
use sha2::{Digest, Sha256};

use crate::error::AppError;

#[derive(Clone, Default)]
pub struct AdminGate {
    token_digest: Option<Vec<u8>>,
}

impl AdminGate {
    pub fn new(token: Option<&str>) -> Self {
        let token_digest = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(digest);
        Self { token_digest }
    }

    pub fn is_enabled(&self) -> bool {
        self.token_digest.is_some()
    }

    /// Requires `Authorization: Bearer <token>` matching the configured token.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let Some(expected) = &self.token_digest else {
            return Err(AppError::AdminDisabled);
        };

        let provided = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AppError::Unauthorized)?;

        // Digests have equal length whatever the input.
        if digest(provided) == *expected {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Token of a `Bearer` credential. The scheme name is case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn digest(token: &str) -> Vec<u8> {
    Sha256::digest(token.as_bytes()).to_vec()
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn disabled_without_token() {
        let gate = AdminGate::new(None);
        assert!(!gate.is_enabled());
        assert!(matches!(gate.check(&bearer("x")), Err(AppError::AdminDisabled)));

        assert!(!AdminGate::new(Some("  ")).is_enabled());
    }

    #[test]
    fn accepts_matching_token() {
        let gate = AdminGate::new(Some("s3cret"));
        assert!(gate.check(&bearer("s3cret")).is_ok());
    }

    #[test]
    fn scheme_name_is_case_insensitive() {
        let gate = AdminGate::new(Some("s3cret"));
        for value in ["bearer s3cret", "BEARER s3cret", "Bearer   s3cret "] {
            let mut headers = HeaderMap::new();
            headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
            assert!(gate.check(&headers).is_ok(), "{value}");
        }
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer  "), None);
        assert_eq!(bearer_token("Token s3cret"), None);
    }

    #[test]
    fn rejects_wrong_or_missing_token() {
        let gate = AdminGate::new(Some("s3cret"));
        assert!(matches!(gate.check(&bearer("guess")), Err(AppError::Unauthorized)));
        assert!(matches!(gate.check(&HeaderMap::new()), Err(AppError::Unauthorized)));

        let mut basic = HeaderMap::new();
        basic.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic czNjcmV0"));
        assert!(matches!(gate.check(&basic), Err(AppError::Unauthorized)));
    }
}
