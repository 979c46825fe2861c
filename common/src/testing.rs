//! テスト用のフェイクDOM・ページ環境

use crate::form_state::FormControl;
use crate::page::{ClearTarget, FilterFormDom, FormDom, ListingDom, PageEnvironment, Summary};
use crate::selector::Candidate;
use std::cell::RefCell;
use std::collections::BTreeMap;

pub struct FakePage {
    pub query: String,
    pub ids: Vec<String>,
    pub urls: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ids: Vec::new(),
            urls: RefCell::new(Vec::new()),
        }
    }

    pub fn last_url(&self) -> Option<String> {
        self.urls.borrow().last().cloned()
    }
}

impl PageEnvironment for FakePage {
    type Element = String;

    fn query_string(&self) -> String {
        self.query.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.ids.iter().find(|i| *i == id).cloned()
    }

    fn replace_url(&self, url: &str) {
        self.urls.borrow_mut().push(url.to_string());
    }
}

/// 記事一覧ページのフィルタフォーム相当
pub struct FakeForm {
    pub checkboxes: Vec<(String, String, bool)>,
    pub search: Option<String>,
    pub search_disabled: bool,
    pub sections: Vec<String>,
    pub hidden: BTreeMap<String, bool>,
    pub search_summary: String,
    pub filters_summary: String,
    pub candidates: Vec<Candidate>,
    pub candidate_hidden: Vec<bool>,
    pub actions_hidden: bool,
    pub no_results_hidden: bool,
}

impl FakeForm {
    pub fn posts() -> Self {
        let topics = [
            "av1-video",
            "browser-extensions",
            "css",
            "firefox-mobile",
            "javascript",
            "unused-test-topic",
            "voice",
            "test-topic",
        ];
        Self {
            checkboxes: topics
                .iter()
                .map(|t| ("topic".to_string(), t.to_string(), false))
                .collect(),
            search: Some(String::new()),
            search_disabled: false,
            sections: vec!["topic".into(), "search".into()],
            hidden: BTreeMap::new(),
            search_summary: "Searched for: 'test test'".into(),
            filters_summary: "Filters: 'test test'".into(),
            candidates: Vec::new(),
            candidate_hidden: Vec::new(),
            actions_hidden: false,
            no_results_hidden: false,
        }
    }

    /// クライアント側絞り込み用の一覧
    pub fn listing(items: &[(&str, &str)]) -> Self {
        let mut form = Self::posts();
        form.checkboxes = ["css", "javascript", "voice"]
            .iter()
            .map(|t| ("topics".to_string(), t.to_string(), false))
            .chain(
                ["2019-08", "2019-09"]
                    .iter()
                    .map(|m| ("month".to_string(), m.to_string(), false)),
            )
            .collect();
        form.search = None;
        form.sections = vec!["topics".into(), "month".into()];
        form.candidates = items
            .iter()
            .map(|(topics, month)| {
                Candidate::new()
                    .with_attribute("topics", topics)
                    .with_attribute("month", month)
            })
            .collect();
        form.candidate_hidden = vec![false; items.len()];
        form
    }

    pub fn checked_values(&self) -> Vec<&str> {
        self.checkboxes
            .iter()
            .filter(|(_, _, checked)| *checked)
            .map(|(_, value, _)| value.as_str())
            .collect()
    }

    pub fn search_value(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    pub fn is_clear_hidden(&self, key: &str) -> bool {
        self.hidden.get(key).copied().unwrap_or(false)
    }

    pub fn is_clear_all_hidden(&self) -> bool {
        self.hidden.get("*").copied().unwrap_or(false)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.candidate_hidden
            .iter()
            .enumerate()
            .filter(|(_, hidden)| !**hidden)
            .map(|(i, _)| i)
            .collect()
    }
}

impl FormDom for FakeForm {
    fn controls(&self) -> Vec<FormControl> {
        let mut controls: Vec<FormControl> = self
            .checkboxes
            .iter()
            .map(|(name, value, checked)| FormControl::checkbox(name, value, *checked))
            .collect();
        if let Some(search) = &self.search {
            controls.push(FormControl::text("search", search));
        }
        controls
    }

    fn set_checked(&mut self, name: &str, value: &str, checked: bool) {
        for checkbox in &mut self.checkboxes {
            if checkbox.0 == name && checkbox.1 == value {
                checkbox.2 = checked;
            }
        }
    }

    fn clear_sections(&self) -> Vec<String> {
        self.sections.clone()
    }

    fn set_clear_hidden(&mut self, target: &ClearTarget, hidden: bool) {
        let key = match target {
            ClearTarget::Section(key) => key.clone(),
            ClearTarget::All => "*".to_string(),
        };
        self.hidden.insert(key, hidden);
    }
}

impl FilterFormDom for FakeForm {
    fn set_search_value(&mut self, value: &str) {
        if let Some(search) = &mut self.search {
            *search = value.to_string();
        }
    }

    fn set_search_disabled(&mut self, disabled: bool) {
        self.search_disabled = disabled;
    }

    fn clear_summary(&mut self, summary: Summary) {
        match summary {
            Summary::Search => self.search_summary.clear(),
            Summary::Filters => self.filters_summary.clear(),
        }
    }
}

impl ListingDom for FakeForm {
    fn candidates(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }

    fn set_candidate_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(slot) = self.candidate_hidden.get_mut(index) {
            *slot = hidden;
        }
    }

    fn set_actions_hidden(&mut self, hidden: bool) {
        self.actions_hidden = hidden;
    }

    fn set_no_results_hidden(&mut self, hidden: bool) {
        self.no_results_hidden = hidden;
    }
}
