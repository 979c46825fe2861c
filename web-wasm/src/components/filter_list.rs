//! `.js-filter-list-form`（クライアント側で絞り込む一覧）

use super::{
    clear_sections, config_from_attributes, form_control, on_click_prevent, set_checkbox,
    set_clear_hidden,
};
use crate::error::Result;
use crate::page::{inputs_in, query_all_in, set_hidden, BrowserPage};
use devportal_widgets_common::{
    Candidate, ClearTarget, Error, FilterList, FormControl, FormDom, ListingDom, PageEnvironment,
};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement};

const ACTIONS_ID: &str = "js-filter-list-actions";
const SEE_MORE_ID: &str = "js-filter-list-action-see-more";
const NO_RESULTS_ID: &str = "js-filter-list-no-results";

/// 一覧1つ分のDOM
pub struct DomListing {
    form: Element,
    targets: Vec<Element>,
    /// 候補から読む data属性のキー
    keys: Vec<String>,
    actions: Element,
    no_results: Element,
}

impl DomListing {
    pub fn new(
        form: Element,
        targets: Vec<Element>,
        keys: Vec<String>,
        actions: Element,
        no_results: Element,
    ) -> Self {
        Self {
            form,
            targets,
            keys,
            actions,
            no_results,
        }
    }

    fn inputs(&self) -> Vec<HtmlInputElement> {
        inputs_in(&self.form).unwrap_or_default()
    }
}

impl FormDom for DomListing {
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

impl ListingDom for DomListing {
    fn candidates(&self) -> Vec<Candidate> {
        self.targets
            .iter()
            .map(|target| {
                self.keys.iter().fold(Candidate::new(), |candidate, key| {
                    match target.get_attribute(&format!("data-{}", key)) {
                        Some(raw) => candidate.with_attribute(key, &raw),
                        None => candidate,
                    }
                })
            })
            .collect()
    }

    fn set_candidate_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(target) = self.targets.get(index) {
            set_hidden(target, hidden);
        }
    }

    fn set_actions_hidden(&mut self, hidden: bool) {
        set_hidden(&self.actions, hidden);
    }

    fn set_no_results_hidden(&mut self, hidden: bool) {
        set_hidden(&self.no_results, hidden);
    }
}

/// 一覧1つを初期化
pub fn init(page: &BrowserPage, form: Element) -> Result<()> {
    let config = config_from_attributes(&form)?;

    let controls_id = form
        .get_attribute("data-controls")
        .ok_or_else(|| Error::Markup("data-controls がありません".into()))?;
    let container = page.require_element(&controls_id)?;
    let targets = query_all_in(&container, ".js-filter-target")?;
    let actions = page.require_element(ACTIONS_ID)?;
    let see_more = page.require_element(SEE_MORE_ID)?;
    let no_results = page.require_element(NO_RESULTS_ID)?;

    let keys = config
        .and_keys
        .iter()
        .chain(&config.or_keys)
        .cloned()
        .collect();
    let dom = DomListing::new(form.clone(), targets, keys, actions, no_results);
    let controller = Rc::new(RefCell::new(FilterList::new(page.clone(), dom, config)));

    let on_input = controller.clone();
    EventListener::new(&form, "input", move |_| {
        on_input.borrow_mut().on_input();
    })
    .forget();

    let on_next = controller.clone();
    on_click_prevent(&see_more, move |_| {
        on_next.borrow_mut().next_page();
    });

    for button in query_all_in(&form, ".js-filter-clear")? {
        let key = button.get_attribute("data-controls");
        let on_clear = controller.clone();
        on_click_prevent(&button, move |_| {
            on_clear.borrow_mut().on_clear_section(key.as_deref());
        });
    }

    Ok(())
}
