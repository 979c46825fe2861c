//! ウィジェット（1ファイル1種類）
//!
//! 各モジュールの `init` がルート要素1つにつきコントローラを1つ作る。

pub mod filter_form;
pub mod filter_list;
pub mod header;
pub mod map_embed;
pub mod modal;
pub mod newsletter;
pub mod newsletter_signup;
pub mod notification_bar;
pub mod survey_prompt;
pub mod tabbed_panels;
pub mod toggle;

use crate::error::Result;
use crate::page::{query_all_in, set_hidden};
use devportal_widgets_common::{ClearTarget, FilterConfig, FormControl};
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Element, Event, HtmlInputElement};

/// `data-and-filters` などの属性で上書きしたフィルタ設定
pub(crate) fn config_from_attributes(root: &Element) -> Result<FilterConfig> {
    let config = FilterConfig::default().with_overrides(
        root.get_attribute("data-and-filters").as_deref(),
        root.get_attribute("data-or-filters").as_deref(),
        root.get_attribute("data-initial-resources").as_deref(),
        root.get_attribute("data-resources-per-page").as_deref(),
    )?;
    Ok(config)
}

/// input 要素を [`FormControl`] として読む
///
/// チェックボックスとテキスト系のみ。name の無いものは無視する。
pub(crate) fn form_control(input: &HtmlInputElement) -> Option<FormControl> {
    let name = input.name();
    if name.is_empty() {
        return None;
    }
    match input.type_().as_str() {
        "checkbox" => Some(FormControl::checkbox(&name, &input.value(), input.checked())),
        "text" | "search" => Some(FormControl::text(&name, &input.value())),
        _ => None,
    }
}

/// name/value が一致するチェックボックスの状態を設定
pub(crate) fn set_checkbox(inputs: &[HtmlInputElement], name: &str, value: &str, checked: bool) {
    inputs
        .iter()
        .filter(|input| {
            input.type_() == "checkbox" && input.name() == name && input.value() == value
        })
        .for_each(|input| input.set_checked(checked));
}

/// セクション単位のクリアボタンが制御するキー（重複なし、DOM順）
pub(crate) fn clear_sections(form: &Element) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for button in query_all_in(form, ".js-filter-clear[data-controls]").unwrap_or_default() {
        if let Some(key) = button.get_attribute("data-controls") {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

/// クリアボタン（セクション単位は `data-controls` 一致、全体はラッパー）の表示切替
pub(crate) fn set_clear_hidden(form: &Element, target: &ClearTarget, hidden: bool) {
    let elements: Vec<Element> = match target {
        ClearTarget::Section(key) => query_all_in(form, ".js-filter-clear[data-controls]")
            .unwrap_or_default()
            .into_iter()
            .filter(|el| el.get_attribute("data-controls").as_deref() == Some(key.as_str()))
            .collect(),
        ClearTarget::All => query_all_in(form, ".js-filter-form-clear-section").unwrap_or_default(),
    };
    for element in &elements {
        set_hidden(element, hidden);
    }
}

/// preventDefault するクリックハンドラを登録（ページが生きている間保持）
pub(crate) fn on_click_prevent<F>(target: &Element, mut handler: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            handler(event);
        },
    )
    .forget();
}
