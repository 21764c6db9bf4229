use contracts::system::auth::{
    AuthSession, AuthUser, PasswordGrant, RefreshGrant, SignUpRequest, SignUpResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{anon_key, auth_url};

/// Sign in with email and password (GoTrue password grant)
pub async fn sign_in(email: String, password: String) -> Result<AuthSession, String> {
    let request = PasswordGrant { email, password };

    let response = Request::post(&auth_url("/token?grant_type=password"))
        .header("apikey", anon_key())
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<AuthSession>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Exchange a refresh token for a fresh session
pub async fn refresh_session(refresh_token: String) -> Result<AuthSession, String> {
    let request = RefreshGrant { refresh_token };

    let response = Request::post(&auth_url("/token?grant_type=refresh_token"))
        .header("apikey", anon_key())
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }

    response
        .json::<AuthSession>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new auth identity. Does NOT touch the caller's session; the
/// admin stays signed in while provisioning client accounts.
pub async fn sign_up(email: String, password: String) -> Result<SignUpResponse, String> {
    let request = SignUpRequest { email, password };

    let response = Request::post(&auth_url("/signup"))
        .header("apikey", anon_key())
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-up failed: {}", response.status()));
    }

    response
        .json::<SignUpResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoke the session server-side
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let response = Request::post(&auth_url("/logout"))
        .header("apikey", anon_key())
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

/// Validate a token by fetching the identity behind it
pub async fn get_user(access_token: &str) -> Result<AuthUser, String> {
    let response = Request::get(&auth_url("/user"))
        .header("apikey", anon_key())
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<AuthUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
