use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "backendUrl", alias = "backend_url", default)]
    pub backend_url: Option<String>,
}

static BACKEND_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global(object: &str, keys: &[&str]) -> Option<String> {
    // Optional globals: window.__HRMS_ENV (env.js) and window.__HRMS_CONFIG
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &object.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&any, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_object: &str, _keys: &[&str]) -> Option<String> {
    None
}

fn snapshot_from_globals() -> Option<String> {
    read_global("__HRMS_ENV", &["BACKEND_URL", "backendUrl"])
        .or_else(|| read_global("__HRMS_CONFIG", &["backendUrl", "BACKEND_URL"]))
        .and_then(|url| normalize_base_url(&url))
}

fn cache_backend_url(value: String) -> String {
    BACKEND_URL.get_or_init(|| value).clone()
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.backend_url else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"backendUrl".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__HRMS_CONFIG".into(), &obj);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_window_config(_cfg: &RuntimeConfig) {}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Resolves the backend base URL once and caches it for the rest of the session.
pub async fn await_backend_url() -> String {
    if let Some(cached) = BACKEND_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_backend_url(existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.backend_url.as_deref().and_then(normalize_base_url) {
            return cache_backend_url(url);
        }
    }
    log::info!(
        "backendUrl not configured, falling back to {}",
        DEFAULT_BACKEND_URL
    );
    cache_backend_url(DEFAULT_BACKEND_URL.to_string())
}

/// Current backend URL for display. Before `init` finishes this reflects the
/// globals or the default.
pub fn backend_url() -> String {
    BACKEND_URL
        .get()
        .cloned()
        .or_else(snapshot_from_globals)
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

pub async fn init() {
    let url = await_backend_url().await;
    log::info!("Backend URL resolved to {}", url);
}
