//! `.js-modal-trigger`
//!
//! 初回クリック時に中身を組み立てて `Mzp.Modal` で開く。組み立てに
//! 失敗した場合は警告を出し、リンク本来の遷移に任せる。

use crate::bindings::create_modal;
use crate::error::{Result, WidgetError};
use crate::page::BrowserPage;
use devportal_widgets_common::modal::{
    modal_content, ModalContent, ModalOptions, VIDEO_ALLOW, VIDEO_PADDING_BOTTOM,
};
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::{Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlIFrameElement};

/// 組み立て済みのモーダル
struct BuiltModal {
    root: Element,
    content: Element,
    options: ModalOptions,
}

struct ModalTrigger {
    trigger: Element,
    document: Document,
    built: Option<BuiltModal>,
}

impl ModalTrigger {
    fn href(&self) -> String {
        self.trigger
            .dyn_ref::<HtmlAnchorElement>()
            .map(|anchor| anchor.href())
            .or_else(|| self.trigger.get_attribute("href"))
            .unwrap_or_default()
    }

    fn build(&self) -> Result<BuiltModal> {
        let kind = self.trigger.get_attribute("data-type");
        let content = match modal_content(kind.as_deref(), &self.href())? {
            ModalContent::Video { embed_url } => self.video_content(&embed_url)?,
        };
        let wrapper = self.document.create_element("div")?;
        wrapper.append_child(&content)?;

        let root = self.document.create_element("div")?;
        root.set_class_name("mzp-u-modal-content");
        root.append_child(&wrapper)?;

        let options = ModalOptions::new(
            self.trigger.get_attribute("data-class-name"),
            self.trigger.get_attribute("data-close-text"),
            self.trigger.get_attribute("data-title"),
        );
        Ok(BuiltModal {
            root,
            content: wrapper,
            options,
        })
    }

    /// 16:9 のレスポンシブな iframe
    fn video_content(&self, embed_url: &str) -> Result<Element> {
        let container: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(JsValue::from)?;
        container.set_class_name("responsive-object");
        container
            .style()
            .set_property("padding-bottom", VIDEO_PADDING_BOTTOM)?;

        let iframe: HtmlIFrameElement = self
            .document
            .create_element("iframe")?
            .dyn_into()
            .map_err(JsValue::from)?;
        iframe.set_allow_fullscreen(true);
        iframe.set_frame_border("0");
        iframe.set_src(embed_url);
        iframe.set_attribute("allow", VIDEO_ALLOW)?;
        container.append_child(&iframe)?;

        Ok(container.into())
    }

    fn open(&self, built: &BuiltModal) -> Result<()> {
        let body = self
            .document
            .body()
            .ok_or(WidgetError::Unavailable("document.body"))?;

        let options = Object::new();
        set(&options, "closeText", &JsValue::from_str(&built.options.close_text))?;
        if let Some(class_name) = &built.options.class_name {
            set(&options, "className", &JsValue::from_str(class_name))?;
        }
        if let Some(title) = &built.options.title {
            set(&options, "title", &JsValue::from_str(title))?;
        }

        // 閉じた後も動画が再生され続けないよう、開閉のたびにDOMへ出し入れする
        let (create_body, create_root) = (body.clone(), built.root.clone());
        let on_create = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = create_body.append_child(&create_root) {
                gloo::console::warn!("failed to attach modal", err);
            }
        });
        let (destroy_body, destroy_root) = (body, built.root.clone());
        let on_destroy = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = destroy_body.remove_child(&destroy_root) {
                gloo::console::warn!("failed to detach modal", err);
            }
        });
        set(&options, "onCreate", &on_create.into_js_value())?;
        set(&options, "onDestroy", &on_destroy.into_js_value())?;

        create_modal(&built.root, &built.content, &options)?;
        Ok(())
    }

    fn on_click(&mut self, event: &web_sys::Event) {
        if self.built.is_none() {
            match self.build() {
                Ok(built) => self.built = Some(built),
                Err(err) => {
                    gloo::console::warn!(format!("Error creating modal: {}", err));
                    return;
                }
            }
        }
        // モーダルが用意できたときだけ遷移を止める
        event.prevent_default();
        if let Some(built) = &self.built {
            if let Err(err) = self.open(built) {
                gloo::console::warn!(format!("Error opening modal: {}", err));
            }
        }
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value)?;
    Ok(())
}

pub fn init(page: &BrowserPage, trigger: Element) -> Result<()> {
    let modal = Rc::new(RefCell::new(ModalTrigger {
        trigger: trigger.clone(),
        document: page.document().clone(),
        built: None,
    }));

    EventListener::new_with_options(
        &trigger,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| modal.borrow_mut().on_click(event),
    )
    .forget();

    Ok(())
}
