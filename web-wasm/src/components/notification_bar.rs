//! `.mzp-c-notification-bar-button`：クリックで通知バーごと取り除く

use crate::error::Result;
use crate::page::BrowserPage;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub fn init(_page: &BrowserPage, button: Element) -> Result<()> {
    EventListener::new(&button, "click", |event| {
        let bar = event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|button| button.parent_element());
        if let Some(bar) = bar {
            bar.remove();
        }
    })
    .forget();
    Ok(())
}
