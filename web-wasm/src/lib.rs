//! Developer Portal Widgets (WASM)
//!
//! サーバー描画されたページに振る舞いを追加する。各ウィジェットは
//! DOM構築完了後に [`registry::init_widgets`] でまとめて初期化される。

pub mod bindings;
pub mod components;
pub mod error;
pub mod page;
pub mod registry;

pub use error::{Result, WidgetError};
pub use page::BrowserPage;

use devportal_widgets_common::dnt;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    page::on_dom_ready(registry::init_widgets);
}

/// Do Not Track が有効か（解析スクリプトの読み込み判定用）
///
/// `dnt` / `ua` を渡すとブラウザの値の代わりに使う。
#[wasm_bindgen(js_name = dntEnabled)]
pub fn dnt_enabled(dnt: Option<String>, ua: Option<String>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let status = dnt::first_dnt_value([
        dnt,
        property(&navigator, "doNotTrack"),
        property(&window, "doNotTrack"),
        property(&navigator, "msDoNotTrack"),
    ]);
    let user_agent = ua.unwrap_or_else(|| navigator.user_agent().unwrap_or_default());
    dnt::dnt_enabled(status.as_deref(), &user_agent)
}

/// 文字列のプロパティ（未定義・null・文字列以外は `None`）
fn property(target: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}
