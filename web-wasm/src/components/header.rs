//! `#nav-hamburger`：トピックメニューの開閉

use crate::error::Result;
use crate::page::BrowserPage;
use devportal_widgets_common::PageEnvironment;
use gloo::events::EventListener;
use web_sys::Element;

const MENU_ID: &str = "nav-topics";
const OPEN_CLASS: &str = "nav-topics-open";

pub fn init(page: &BrowserPage, button: Element) -> Result<()> {
    let menu = page.require_element(MENU_ID)?;
    EventListener::new(&button, "click", move |_| {
        if let Err(err) = menu.class_list().toggle(OPEN_CLASS) {
            gloo::console::warn!("failed to toggle menu", err);
        }
    })
    .forget();
    Ok(())
}
