//! `document.cookie` string handling for the session cookie.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

/// Finds a cookie value in a `name=value; name2=value2` string.
pub(crate) fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Serializes a session cookie assignment.
pub(crate) fn session_cookie(name: &str, value: &str, max_age_secs: u64, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Max-Age={max_age_secs}; Path=/; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Serializes an assignment that makes the browser drop the cookie.
pub(crate) fn expired_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; SameSite=Lax")
}
