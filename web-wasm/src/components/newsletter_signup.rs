//! `.js-newsletter-signup`：メール欄のクリックで残りの項目を表示する

use crate::error::Result;
use crate::page::{query_all_in, set_hidden, BrowserPage};
use devportal_widgets_common::Error;
use gloo::events::EventListener;
use web_sys::Element;

pub fn init(_page: &BrowserPage, root: Element) -> Result<()> {
    let input = root
        .query_selector("#newsletter-email")?
        .ok_or_else(|| Error::Markup("#newsletter-email が見つかりません".into()))?;

    EventListener::new(&input, "click", move |_| {
        for content in query_all_in(&root, ".js-newsletter-signup-content").unwrap_or_default() {
            set_hidden(&content, false);
        }
    })
    .forget();
    Ok(())
}
