//! URL builders for the two backend surfaces the app consumes:
//! GoTrue (`/auth/v1`) and PostgREST (`/rest/v1`).

use super::config::config;

/// Build a GoTrue URL, e.g. `auth_url("/token?grant_type=password")`
pub fn auth_url(path: &str) -> String {
    format!("{}/auth/v1{}", config().supabase_url, path)
}

/// Build a PostgREST URL, e.g. `rest_url("/clients")`
pub fn rest_url(path: &str) -> String {
    format!("{}/rest/v1{}", config().supabase_url, path)
}

/// Publishable key sent as the `apikey` header on every request
pub fn anon_key() -> &'static str {
    &config().supabase_anon_key
}
