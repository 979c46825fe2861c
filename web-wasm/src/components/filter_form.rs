//! `.js-filter-form`（サーバー描画版フィルタフォーム）

use super::{
    clear_sections, config_from_attributes, form_control, on_click_prevent, set_checkbox,
    set_clear_hidden,
};
use crate::error::Result;
use crate::page::{inputs_in, query_all_in, BrowserPage};
use devportal_widgets_common::{
    ClearTarget, FilterForm, FilterFormDom, FormControl, FormDom, Summary,
};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlInputElement};

/// フォーム1つ分のDOM
pub struct DomFilterForm {
    form: Element,
    document: Document,
    search_key: String,
}

impl DomFilterForm {
    pub fn new(form: Element, document: Document, search_key: String) -> Self {
        Self {
            form,
            document,
            search_key,
        }
    }

    fn inputs(&self) -> Vec<HtmlInputElement> {
        inputs_in(&self.form).unwrap_or_default()
    }

    fn search_inputs(&self) -> Vec<HtmlInputElement> {
        self.inputs()
            .into_iter()
            .filter(|input| input.name() == self.search_key && input.type_() != "checkbox")
            .collect()
    }
}

impl FormDom for DomFilterForm {
    fn controls(&self) -> Vec<FormControl> {
        self.inputs().iter().filter_map(form_control).collect()
    }

    fn set_checked(&mut self, name: &str, value: &str, checked: bool) {
        set_checkbox(&self.inputs(), name, value, checked);
    }

    fn clear_sections(&self) -> Vec<String> {
        clear_sections(&self.form)
    }

    fn set_clear_hidden(&mut self, target: &ClearTarget, hidden: bool) {
        set_clear_hidden(&self.form, target, hidden);
    }
}

impl FilterFormDom for DomFilterForm {
    fn set_search_value(&mut self, value: &str) {
        for input in self.search_inputs() {
            input.set_value(value);
        }
    }

    fn set_search_disabled(&mut self, disabled: bool) {
        for input in self.search_inputs() {
            input.set_disabled(disabled);
        }
    }

    fn clear_summary(&mut self, summary: Summary) {
        let selector = match summary {
            Summary::Search => ".js-filter-form-summary--search",
            Summary::Filters => ".js-filter-form-summary--filters",
        };
        if let Ok(list) = self.document.query_selector_all(selector) {
            for i in 0..list.length() {
                if let Some(node) = list.item(i) {
                    node.set_text_content(Some(""));
                }
            }
        }
    }
}

/// フォーム1つを初期化
pub fn init(page: &BrowserPage, form: Element) -> Result<()> {
    let config = config_from_attributes(&form)?;
    let dom = DomFilterForm::new(form.clone(), page.document().clone(), config.search_key.clone());
    let controller = Rc::new(RefCell::new(FilterForm::new(page, dom, config)));

    let on_submit = controller.clone();
    EventListener::new(&form, "submit", move |_| {
        on_submit.borrow_mut().on_form_submit();
    })
    .forget();

    let on_input = controller.clone();
    EventListener::new(&form, "input", move |_| {
        on_input.borrow_mut().on_input();
    })
    .forget();

    for button in query_all_in(&form, ".js-filter-clear")? {
        let key = button.get_attribute("data-controls");
        let on_clear = controller.clone();
        on_click_prevent(&button, move |_| {
            on_clear.borrow_mut().on_clear_section(key.as_deref());
        });
    }

    Ok(())
}
