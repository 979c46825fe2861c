//! エラー型定義

use thiserror::Error;
use wasm_bindgen::JsValue;

/// ウィジェット初期化・イベント処理のエラー
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error(transparent)]
    Common(#[from] devportal_widgets_common::Error),

    /// JS側で投げられた例外（文字列化したもの）
    #[error("JS error: {0}")]
    Js(String),

    #[error("{0} is not available")]
    Unavailable(&'static str),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(message)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, WidgetError>;
