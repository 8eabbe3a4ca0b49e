//! Frontend Configuration
//!
//! Values are baked in at compile time; `build.rs` forwards them from `.env`.

use food_dashboard_core::DeletePolicy;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the foods API, without trailing slash
    pub api_base_url: String,
    pub delete_policy: DeletePolicy,
    /// How long an error notice stays on screen
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("FOOD_API_URL"),
            option_env!("FOOD_DELETE_POLICY"),
            option_env!("FOOD_NOTICE_TIMEOUT_MS"),
        )
    }
}

impl AppConfig {
    /// Build from raw settings, falling back to defaults for missing or bad values
    pub fn from_values(
        api_base_url: Option<&str>,
        delete_policy: Option<&str>,
        notice_timeout_ms: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let delete_policy = match delete_policy {
            Some(raw) => DeletePolicy::parse(raw).unwrap_or_else(|| {
                log::warn!("[CONFIG] Unknown delete policy '{}', using default", raw);
                DeletePolicy::default()
            }),
            None => DeletePolicy::default(),
        };

        let notice_timeout_ms = notice_timeout_ms
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_NOTICE_TIMEOUT_MS);

        Self {
            api_base_url,
            delete_policy,
            notice_timeout_ms,
        }
    }

    /// Join `path` onto the API base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
