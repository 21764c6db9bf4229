use contracts::domain::a001_client::ClientId;
use contracts::domain::a002_campaign_data::CampaignRow;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

use crate::shared::api_utils::{anon_key, rest_url};
use crate::system::auth::storage;

/// Fetch the full row collection for one client, oldest day first.
/// Row-level security on the backend restricts what the session can see;
/// the client filter just keeps the payload scoped.
pub async fn list_campaign_rows(client_id: ClientId) -> Result<Vec<CampaignRow>, String> {
    let auth_header = storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or("Not authenticated")?;

    let url = format!(
        "{}?client_id=eq.{}&select=*&order=date.asc",
        rest_url("/campaign_data"),
        client_id.as_string()
    );

    let response = Request::get(&url)
        .header("apikey", anon_key())
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch campaign data: {}", response.status()));
    }

    response
        .json::<Vec<CampaignRow>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
