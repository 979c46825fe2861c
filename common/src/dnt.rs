//! Do Not Track 判定
//!
//! ブラウザの doNotTrack 値をそのまま信じられないケースを除外する。
//! - Firefox 31以前は値が不正確（bug 887703）
//! - Windows 7/8/8.1 のIEは既定でオンになっており意思表示にならない

use regex::Regex;

/// DNTが標準どおりに実装されていないWindowsバージョン
const ANOMALOUS_WIN_VERSIONS: [&str; 3] = ["Windows NT 6.1", "Windows NT 6.2", "Windows NT 6.3"];

lazy_static::lazy_static! {
    static ref FIREFOX_RE: Regex = Regex::new(r"Firefox/(\d+)").expect("Firefox pattern");
    static ref IE_RE: Regex = Regex::new(r"(?i)MSIE|Trident").expect("IE pattern");
    // "Windows" から最初の ";" の手前まで
    static ref PLATFORM_RE: Regex = Regex::new(r"Windows[^;]+;").expect("platform pattern");
}

/// DNT の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DntStatus {
    Enabled,
    Disabled,
    Unspecified,
}

/// DNT の状態を判定
///
/// # Arguments
/// * `dnt` - navigator.doNotTrack などの値（"1" / "0" / 未設定）
/// * `user_agent` - UA文字列
pub fn dnt_status(dnt: Option<&str>, user_agent: &str) -> DntStatus {
    let old_firefox = FIREFOX_RE
        .captures(user_agent)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .is_some_and(|version| version < 32);
    if old_firefox {
        return DntStatus::Unspecified;
    }

    if IE_RE.is_match(user_agent) {
        let platform = PLATFORM_RE
            .find_iter(user_agent)
            .map(|m| m.as_str().trim_end_matches(';'))
            .collect::<Vec<_>>()
            .join(",");
        if ANOMALOUS_WIN_VERSIONS.contains(&platform.as_str()) {
            return DntStatus::Unspecified;
        }
    }

    match dnt {
        Some("1") => DntStatus::Enabled,
        Some("0") => DntStatus::Disabled,
        _ => DntStatus::Unspecified,
    }
}

/// 候補のうち最初に値が入っているもの
///
/// ブラウザによって `navigator.doNotTrack` / `window.doNotTrack` /
/// `navigator.msDoNotTrack` のどれに値があるかが違う。
pub fn first_dnt_value<I, S>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: Into<String>,
{
    candidates
        .into_iter()
        .flatten()
        .map(Into::into)
        .find(|value| !value.is_empty())
}

/// DNT が有効か
pub fn dnt_enabled(dnt: Option<&str>, user_agent: &str) -> bool {
    dnt_status(dnt, user_agent) == DntStatus::Enabled
}
