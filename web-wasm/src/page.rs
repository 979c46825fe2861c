//! ブラウザのページ環境とDOMヘルパー

use crate::error::{Result, WidgetError};
use devportal_widgets_common::PageEnvironment;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlDocument, HtmlInputElement, NodeList, Window};

/// `window` / `document` を束ねた実ページ
#[derive(Clone)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(WidgetError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(WidgetError::Unavailable("document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// ドキュメント全体からセレクタに一致する要素
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        query_document(&self.document, selector)
    }

    /// `location.hash`（`#` 付き、無ければ空）
    pub fn location_hash(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    pub fn cookies(&self) -> String {
        self.document
            .dyn_ref::<HtmlDocument>()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    pub fn set_cookie(&self, assignment: &str) -> Result<()> {
        let document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or(WidgetError::Unavailable("document.cookie"))?;
        document.set_cookie(assignment)?;
        Ok(())
    }

    pub fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            gloo::console::warn!("alert failed", message.to_string());
        }
    }
}

impl PageEnvironment for BrowserPage {
    type Element = Element;

    fn query_string(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn replace_url(&self, url: &str) {
        let result = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(url)));
        if let Err(err) = result {
            gloo::console::warn!("history.replaceState failed", url.to_string(), err);
        }
    }
}

pub fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(document.query_selector_all(selector)?))
}

/// 要素の配下からセレクタに一致する要素
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(root.query_selector_all(selector)?))
}

/// 配下の input 要素
pub fn inputs_in(root: &Element) -> Result<Vec<HtmlInputElement>> {
    Ok(query_all_in(root, "input")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `hidden` 属性の付け外し
pub fn set_hidden(element: &Element, hidden: bool) {
    let result = if hidden {
        element.set_attribute("hidden", "")
    } else {
        element.remove_attribute("hidden")
    };
    if let Err(err) = result {
        gloo::console::warn!("failed to toggle hidden", err);
    }
}

/// DOM構築完了後に `f` を実行する（構築済みなら即時）
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}
