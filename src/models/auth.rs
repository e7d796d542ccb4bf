use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::common::errors::TokenError;

/// Claims carried by the bearer token. Decoded without verification - the
/// client holds no secret; the server re-validates every request anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Who is logged in, derived from the token's `tipo` claim.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UserRole {
    Admin,
    ClientePf,
    ClientePj,
}

impl UserRole {
    /// Customer tokens carry `tipo`; the admin token endpoint emits none, so
    /// any other value (including absence) maps to admin.
    pub fn from_tipo(tipo: Option<&str>) -> Self {
        match tipo {
            Some("pessoa_fisica") => Self::ClientePf,
            Some("pessoa_juridica") => Self::ClientePj,
            _ => Self::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_company(&self) -> bool {
        matches!(self, Self::ClientePj)
    }
}

/// The session's view of the logged-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub is_authenticated: bool,
}

impl SessionUser {
    pub fn from_claims(claims: TokenClaims) -> Self {
        let role = UserRole::from_tipo(claims.tipo.as_deref());
        let email = claims.email.unwrap_or_else(|| claims.sub.clone());
        Self {
            id: claims.sub,
            email,
            role,
            is_authenticated: true,
        }
    }
}

/// Response of the token endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Reads the claims out of a JWT's payload segment. Signature and expiry are
/// not checked here; an expired token lives until the server rejects a call.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if !payload.is_empty() => payload,
        _ => return Err(TokenError::Malformed),
    };
    if segments.next().is_some() {
        return Err(TokenError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::InvalidPayload)
}
