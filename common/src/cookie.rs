//! Cookie文字列の読み書き

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

/// `document.cookie` 形式の文字列から値を取り出す
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// `document.cookie` に代入する文字列を組み立てる
///
/// `max_age` が `None` ならセッションCookie。
pub fn cookie_assignment(name: &str, value: &str, max_age: Option<u64>) -> String {
    let mut cookie = format!(
        "{}={}; path=/; SameSite=Lax",
        name,
        utf8_percent_encode(value, NON_ALPHANUMERIC)
    );
    if let Some(seconds) = max_age {
        cookie.push_str(&format!("; max-age={}", seconds));
    }
    cookie
}
