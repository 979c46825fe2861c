//! クエリ文字列コーデック
//!
//! `?topic=css,javascript&search=hello+world` 形式のURLクエリと
//! [`FilterState`] を相互変換する。

use crate::state::FilterState;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// encodeURIComponent と同じくエスケープしない記号を除いた集合
///
/// `+` もそのまま残す。状態の中の `+` はフォームGET送信由来の空白で、
/// `%2B` にするとフォーム形式のデコードで意味が変わる。
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'+')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// クエリ文字列をパース
///
/// 先頭の `?` は省略可。値は `,` で複数値に分割され、同じキーが
/// 繰り返された場合は値を後ろに追加する。`=` を持たないセグメントと
/// 空の値は捨てる。`+` はそのまま残す（[`decode_spaces`] 参照）。
///
/// # Examples
/// ```
/// use devportal_widgets_common::parse_query;
///
/// let state = parse_query("?topic=css&topic=javascript");
/// assert_eq!(state.values("topic"), ["css", "javascript"]);
/// ```
pub fn parse_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::new();

    for segment in query.split('&') {
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        let key = decode(key);
        state.extend(&key, value.split(',').map(decode));
    }

    state
}

/// [`FilterState`] をクエリ文字列（`?` なし）に変換
///
/// 空の状態は空文字列になる。
pub fn serialize_query(state: &FilterState) -> String {
    state
        .iter()
        .map(|(key, values)| {
            let joined = values
                .iter()
                .map(|v| encode(v))
                .collect::<Vec<_>>()
                .join(",");
            format!("{}={}", encode(key), joined)
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// history.replaceState に渡すURL
///
/// クエリが空なら `.`（現在のパスのみ）を返す。
pub fn history_url(state: &FilterState) -> String {
    let query = serialize_query(state);
    if query.is_empty() {
        ".".to_string()
    } else {
        format!("?{}", query)
    }
}

/// フォームGET送信由来の `+` を空白に戻す
///
/// パーセントエンコード（`%20` など）は触らない。
pub fn decode_spaces(value: &str) -> String {
    value.replace('+', " ")
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}
