//! Runtime configuration for the managed backend project.
//!
//! The project URL and publishable key are read once from
//! `window.APP_CONFIG` (set by a small script in `index.html`), with a
//! compile-time fallback so local builds can bake them in instead.

use once_cell::sync::Lazy;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Project base URL, e.g. "https://xyzcompany.supabase.co"
    pub supabase_url: String,
    /// Publishable (anon) API key; row access is enforced server-side
    pub supabase_anon_key: String,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| AppConfig {
    supabase_url: read_window_config("supabaseUrl")
        .or_else(|| option_env!("SUPABASE_URL").map(str::to_string))
        .unwrap_or_default(),
    supabase_anon_key: read_window_config("supabaseAnonKey")
        .or_else(|| option_env!("SUPABASE_ANON_KEY").map(str::to_string))
        .unwrap_or_default(),
});

fn read_window_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let global: JsValue = window.into();
    let cfg = js_sys::Reflect::get(&global, &JsValue::from_str("APP_CONFIG")).ok()?;
    if cfg.is_undefined() || cfg.is_null() {
        return None;
    }
    js_sys::Reflect::get(&cfg, &JsValue::from_str(key))
        .ok()?
        .as_string()
        .filter(|s| !s.is_empty())
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}
