//! Wire types for the managed auth service (Supabase GoTrue).
//! The frontend only ever exchanges these; token issuance and validation
//! are entirely the backend's concern.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Password-grant sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGrant {
    pub email: String,
    pub password: String,
}

/// Refresh-grant request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshGrant {
    pub refresh_token: String,
}

/// Sign-up request body. Creates the auth identity only; the linked
/// client record is a separate insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

/// Authenticated identity as returned by `/auth/v1/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Token response of the password and refresh grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: AuthUser,
}

/// Sign-up response: the created identity (session may be absent when
/// e-mail confirmation is enabled on the project).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user: AuthUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_parses_password_grant_response() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": { "id": "b3f9d1a0-1111-4222-8333-444455556666", "email": "x@y.com", "role": "authenticated" }
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.token_type, "bearer");
        assert_eq!(session.user.email.as_deref(), Some("x@y.com"));
    }
}
