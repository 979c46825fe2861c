//! `.js-toggle`
//!
//! クリックで `data-controls` のセレクタに一致する要素の `hidden` を反転する。
//! `data-hide` があればトグル自身も隠す。

use super::on_click_prevent;
use crate::error::Result;
use crate::page::{query_document, set_hidden, BrowserPage};
use web_sys::{Document, Element};

pub fn init(page: &BrowserPage, toggle: Element) -> Result<()> {
    let document = page.document().clone();
    let target = toggle.clone();
    on_click_prevent(&toggle, move |_| on_toggle_click(&document, &target));
    Ok(())
}

fn on_toggle_click(document: &Document, toggle: &Element) {
    let Some(controls) = toggle.get_attribute("data-controls") else {
        gloo::console::warn!("toggle without data-controls");
        return;
    };

    match query_document(document, &controls) {
        Ok(elements) => {
            for element in &elements {
                set_hidden(element, !element.has_attribute("hidden"));
            }
        }
        Err(err) => gloo::console::warn!("invalid toggle selector", controls, err.to_string()),
    }

    if toggle.has_attribute("data-hide") {
        set_hidden(toggle, true);
    }
}
