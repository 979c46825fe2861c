//! ニュースレター購読
//!
//! フォームの内容を `application/x-www-form-urlencoded` でPOSTし、
//! JSONレスポンス `{ "success": bool, "errors": [...] }` を解釈する。

use crate::error::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

/// 購読エンドポイント
pub const NEWSLETTER_SUBSCRIBE_URL: &str = "https://www.mozilla.org/en-US/newsletter/";

/// 送信失敗時のメッセージ
pub const RETRY_MESSAGE: &str = "There was a problem subscribing you. Please try again.";

/// URLSearchParams と同じくエスケープしない記号を除いた集合
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

/// 購読APIのレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubscribeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// レスポンスの解釈結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// 成功：フォーム欄を完了メッセージに置き換える
    Subscribed,
    /// 失敗：エラー内容を利用者に伝える
    Rejected(Vec<String>),
    /// 失敗だがエラー詳細なし：何もしない
    Ignored,
}

impl SubscribeResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Parse(format!("newsletter response: {}", e)))
    }

    pub fn outcome(self) -> SubscribeOutcome {
        if self.success {
            SubscribeOutcome::Subscribed
        } else if !self.errors.is_empty() {
            SubscribeOutcome::Rejected(self.errors)
        } else {
            SubscribeOutcome::Ignored
        }
    }
}

/// 拒否時のアラート文言
pub fn rejection_message(errors: &[String]) -> String {
    format!("There was a problem subscribing you: {}", errors.join(","))
}

/// フォーム項目を URL エンコードされた本文にする
///
/// 空白は `+` になる。
///
/// # Examples
/// ```
/// use devportal_widgets_common::newsletter::encode_form;
///
/// let fields = vec![("email".to_string(), "test@example.com".to_string())];
/// assert_eq!(encode_form(&fields), "email=test%40example.com");
/// ```
pub fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_VALUE).to_string().replace(' ', "+")
}
