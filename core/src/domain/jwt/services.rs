use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, jwt::entities::JwtClaim};

pub fn sign_token(secret: &str, user_id: Uuid, expiration_days: i64) -> Result<String, CoreError> {
    let now = Utc::now();
    let claim = JwtClaim {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::days(expiration_days)).timestamp(),
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| CoreError::InternalServerError)
}

pub fn verify_token(secret: &str, token: &str) -> Result<JwtClaim, CoreError> {
    decode::<JwtClaim>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => CoreError::TokenExpired,
        _ => CoreError::InvalidToken,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let user_id = Uuid::now_v7();
        let token = sign_token(SECRET, user_id, 90).unwrap();
        let claim = verify_token(SECRET, &token).unwrap();

        assert_eq!(claim.sub, user_id);
        assert!(claim.exp > claim.iat);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = sign_token(SECRET, Uuid::now_v7(), 90).unwrap();
        let result = verify_token("another-secret", &token);

        assert_eq!(result, Err(CoreError::InvalidToken));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let result = verify_token(SECRET, "not-a-jwt");

        assert_eq!(result, Err(CoreError::InvalidToken));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let token = sign_token(SECRET, Uuid::now_v7(), -1).unwrap();
        let result = verify_token(SECRET, &token);

        assert_eq!(result, Err(CoreError::TokenExpired));
    }
}
