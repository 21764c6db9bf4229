use contracts::domain::a001_client::{Client, ClientInsert, CreateClientRequest};
use contracts::shared::errors::CreateClientError;
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::{anon_key, rest_url};
use crate::system::auth::{api as auth_api, storage};

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// PostgREST error bodies carry a human-readable `message` field; fall
/// back to the bare status when the body is not JSON.
async fn error_detail(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .map(|m| format!("{} (HTTP {})", m, status))
            .unwrap_or_else(|| format!("HTTP {}", status)),
        Err(_) => format!("HTTP {}", status),
    }
}

/// Fetch the client record linked to an auth identity.
/// `Ok(None)` means the user genuinely has no client row, as opposed to a
/// transport failure.
pub async fn fetch_client_for_user(user_id: Uuid) -> Result<Option<Client>, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let url = format!(
        "{}?user_id=eq.{}&select=*&limit=1",
        rest_url("/clients"),
        user_id
    );
    let response = Request::get(&url)
        .header("apikey", anon_key())
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    let mut rows: Vec<Client> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(if rows.is_empty() {
        None
    } else {
        Some(rows.remove(0))
    })
}

/// Fetch all client records visible to the operator, newest first
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let url = format!("{}?select=*&order=created_at.desc", rest_url("/clients"));
    let response = Request::get(&url)
        .header("apikey", anon_key())
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json::<Vec<Client>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a client account: first the auth identity, then the linked
/// client record. The second step can fail after the first succeeded; in
/// that case the identity is left orphaned and the error names it, so the
/// operator can follow up. No automatic rollback.
pub async fn create_client_account(request: CreateClientRequest) -> Result<Client, CreateClientError> {
    // Step 1: auth identity
    let signup = auth_api::sign_up(request.email.clone(), request.password.clone())
        .await
        .map_err(CreateClientError::SignUp)?;

    let user_id = signup.user.id;

    // Step 2: linked client record
    let insert = ClientInsert {
        user_id,
        name: request.name,
        email: request.email,
        business_type: request.business_type,
    };

    insert_client_row(&insert)
        .await
        .map_err(|message| CreateClientError::ProfileInsertFailed { user_id, message })
}

async fn insert_client_row(insert: &ClientInsert) -> Result<Client, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&rest_url("/clients"))
        .header("apikey", anon_key())
        .header("Authorization", &auth_header)
        .header("Prefer", "return=representation")
        .json(insert)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    // PostgREST returns the inserted rows as an array
    let mut rows: Vec<Client> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if rows.is_empty() {
        return Err("Insert returned no row".to_string());
    }
    Ok(rows.remove(0))
}
