//! Build-time configuration for the API endpoint and session cookie with an
//! optional runtime override. The runtime config is read from
//! `window.HIREBOARD_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

/// API base used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Canonical session cookie name.
pub const DEFAULT_SESSION_COOKIE: &str = "token";
/// Session lifetime in days.
pub const DEFAULT_SESSION_TTL_DAYS: u32 = 7;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_cookie: String,
    pub session_ttl_days: u32,
    pub cookie_secure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            session_ttl_days: DEFAULT_SESSION_TTL_DAYS,
            cookie_secure: true,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        let build = RuntimeConfig {
            api_base_url: option_env!("HIREBOARD_API_BASE_URL").and_then(normalize_runtime_value),
            session_cookie: option_env!("HIREBOARD_SESSION_COOKIE")
                .and_then(normalize_runtime_value),
            session_ttl_days: option_env!("HIREBOARD_SESSION_TTL_DAYS")
                .and_then(normalize_runtime_value),
            cookie_secure: option_env!("HIREBOARD_COOKIE_SECURE").and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Session lifetime expressed as a cookie `Max-Age`.
    pub fn session_max_age_secs(&self) -> u64 {
        u64::from(self.session_ttl_days) * 24 * 60 * 60
    }

    /// Builds an absolute URL for an API path.
    pub fn api_url(&self, path: &str) -> String {
        resolve_url(&self.api_base_url, path)
    }
}

/// Joins a base URL and a path without doubling or dropping the slash.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    session_cookie: Option<String>,
    session_ttl_days: Option<String>,
    cookie_secure: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.session_cookie {
        config.session_cookie = value;
    }
    match runtime.session_ttl_days.map(|value| value.parse::<u32>()) {
        Some(Ok(days)) if days > 0 => config.session_ttl_days = days,
        Some(_) => log::warn!("ignoring invalid session_ttl_days override"),
        None => {}
    }
    if let Some(value) = runtime.cookie_secure {
        match parse_flag(&value) {
            Some(flag) => config.cookie_secure = flag,
            None => log::warn!("ignoring invalid cookie_secure override: {value}"),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("HIREBOARD_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        session_cookie: read_runtime_value(&object, "session_cookie"),
        session_ttl_days: read_runtime_value(&object, "session_ttl_days"),
        cookie_secure: read_runtime_value(&object, "cookie_secure"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

// Numbers and booleans are accepted as well as strings.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))
        .or_else(|| value.as_bool().map(|flag| flag.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value, parse_flag,
        resolve_url,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.hireboard.dev "),
            Some("https://api.hireboard.dev".to_string())
        );
    }

    #[test]
    fn defaults_match_observed_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.session_cookie, "token");
        assert_eq!(config.session_ttl_days, 7);
        assert_eq!(config.session_max_age_secs(), 604_800);
        assert!(config.cookie_secure);
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            session_cookie: normalize_runtime_value("  "),
            session_ttl_days: normalize_runtime_value(""),
            cookie_secure: normalize_runtime_value(" "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            session_cookie: normalize_runtime_value("hb_session"),
            session_ttl_days: normalize_runtime_value("30"),
            cookie_secure: normalize_runtime_value("false"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.session_cookie, "hb_session");
        assert_eq!(config.session_ttl_days, 30);
        assert!(!config.cookie_secure);
    }

    #[test]
    fn apply_runtime_overrides_rejects_bad_numbers_and_flags() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            session_ttl_days: Some("0".to_string()),
            cookie_secure: Some("maybe".to_string()),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.session_ttl_days, 7);
        assert!(config.cookie_secure);
    }

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("2"), None);
    }

    #[test]
    fn resolve_url_joins_with_single_slash() {
        assert_eq!(
            resolve_url("http://localhost:5000/", "/jobs"),
            "http://localhost:5000/jobs"
        );
        assert_eq!(
            resolve_url("http://localhost:5000", "jobs/1"),
            "http://localhost:5000/jobs/1"
        );
        assert_eq!(resolve_url("  ", "/jobs"), "/jobs");
    }
}
