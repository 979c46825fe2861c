//! `.js-task-completion-survey`（タスク完了アンケートの案内）
//!
//! 表示割合は `window.DevPortal.TaskCompletionSurvey.displayPercentage`
//! （未定義なら0）。抽選結果はCookieに保存し、閉じたら `false` にする。

use crate::error::Result;
use crate::page::{query_all_in, set_hidden, BrowserPage};
use devportal_widgets_common::cookie::{cookie_assignment, get_cookie};
use devportal_widgets_common::survey::{
    decide, dismissed_value, SURVEY_COOKIE, SURVEY_COOKIE_MAX_AGE,
};
use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Element;

const PROMPT_SELECTOR: &str = ".js-task-completion-survey";
const DISMISS_SELECTOR: &str = ".mzp-js-notification-trigger";

/// グローバル設定から表示割合を読む
fn display_percentage(page: &BrowserPage) -> f64 {
    ["DevPortal", "TaskCompletionSurvey", "displayPercentage"]
        .iter()
        .try_fold(JsValue::from(page.window().clone()), |object, key| {
            if object.is_undefined() || object.is_null() {
                return None;
            }
            Reflect::get(&object, &JsValue::from_str(key)).ok()
        })
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

fn store(page: &BrowserPage, value: &str) {
    let assignment = cookie_assignment(SURVEY_COOKIE, value, Some(SURVEY_COOKIE_MAX_AGE));
    if let Err(err) = page.set_cookie(&assignment) {
        gloo::console::warn!("failed to store survey cookie", err.to_string());
    }
}

/// ページ全体（`<html>`）を受け取り、初回なら抽選してCookieに保存する
pub fn init(page: &BrowserPage, document_element: Element) -> Result<()> {
    // プロンプトの無いページでも抽選する
    let existing = get_cookie(&page.cookies(), SURVEY_COOKIE);
    let decision = decide(
        existing.as_deref(),
        js_sys::Math::random(),
        display_percentage(page),
    );

    if let Some(show) = decision.persist {
        store(page, if show { "true" } else { "false" });
    }
    if !decision.show {
        return Ok(());
    }

    for prompt in &query_all_in(&document_element, PROMPT_SELECTOR)? {
        set_hidden(prompt, false);
        for trigger in query_all_in(prompt, DISMISS_SELECTOR)? {
            let page = page.clone();
            EventListener::new(&trigger, "click", move |_| {
                store(&page, dismissed_value());
            })
            .forget();
        }
    }
    Ok(())
}
