//! `#newsletter-form`（ニュースレター購読）
//!
//! submit を止めてフォーム内容を購読APIにPOSTし、結果に応じて
//! 完了メッセージ表示・アラートを出す。

use crate::error::{Result, WidgetError};
use crate::page::{query_all_in, BrowserPage};
use devportal_widgets_common::newsletter::{
    encode_form, rejection_message, SubscribeOutcome, SubscribeResponse,
    NEWSLETTER_SUBSCRIBE_URL, RETRY_MESSAGE,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement,
    Request, RequestInit, RequestMode, Response,
};

/// 送信対象の項目（FormData 相当、文書順）
///
/// チェックされていないチェックボックス/ラジオ、無効な項目、
/// ボタン類とファイルは含めない。複数選択の select は選択肢ごとに並べる。
pub fn form_fields(form: &Element) -> Vec<(String, String)> {
    let controls = query_all_in(form, "input, select, textarea").unwrap_or_default();
    let mut fields = Vec::new();
    for control in controls {
        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            let submitted = match input.type_().as_str() {
                "checkbox" | "radio" => input.checked(),
                "submit" | "button" | "reset" | "image" | "file" => false,
                _ => true,
            };
            if submitted && !input.disabled() && !input.name().is_empty() {
                fields.push((input.name(), input.value()));
            }
        } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
            if select.disabled() || select.name().is_empty() {
                continue;
            }
            let options = select.selected_options();
            for option in (0..options.length()).filter_map(|i| options.item(i)) {
                if let Some(option) = option.dyn_ref::<HtmlOptionElement>() {
                    fields.push((select.name(), option.value()));
                }
            }
        } else if let Some(textarea) = control.dyn_ref::<HtmlTextAreaElement>() {
            if !textarea.disabled() && !textarea.name().is_empty() {
                fields.push((textarea.name(), textarea.value()));
            }
        }
    }
    fields
}

/// 購読APIにPOSTしてレスポンスを返す
async fn submit_subscription(body: String) -> Result<SubscribeResponse> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(NEWSLETTER_SUBSCRIBE_URL, &opts)?;
    request.headers().set("X-Requested-With", "XMLHttpRequest")?;
    request
        .headers()
        .set("Content-type", "application/x-www-form-urlencoded")?;

    let window = web_sys::window().ok_or(WidgetError::Unavailable("window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| WidgetError::Js(e.to_string()))
}

fn show_success(form: &Element) {
    let Some(fields) = form
        .get_elements_by_class_name("js-newsletter-fields")
        .item(0)
    else {
        gloo::console::warn!("newsletter: .js-newsletter-fields not found");
        return;
    };
    let message = fields.get_attribute("data-success-message").unwrap_or_default();
    fields.set_inner_html(&message);
}

pub fn init(page: &BrowserPage, form: Element) -> Result<()> {
    let page = page.clone();
    let target = form.clone();
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let body = encode_form(&form_fields(&target));
            let page = page.clone();
            let form = target.clone();
            spawn_local(async move {
                match submit_subscription(body).await {
                    Ok(response) => match response.outcome() {
                        SubscribeOutcome::Subscribed => show_success(&form),
                        SubscribeOutcome::Rejected(errors) => {
                            page.alert(&rejection_message(&errors))
                        }
                        SubscribeOutcome::Ignored => {}
                    },
                    Err(err) => {
                        gloo::console::error!("newsletter subscription failed", err.to_string());
                        page.alert(RETRY_MESSAGE);
                    }
                }
            });
        },
    )
    .forget();
    Ok(())
}
