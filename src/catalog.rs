//! カード一覧（カタログ）に対するフィルタのオフライン確認
//!
//! ブラウザと同じ [`FilterList`] をメモリ上のページ/DOMで動かし、
//! あるURLでどのカードが表示されるかを求める。

use crate::error::{DevportalError, Result};
use devportal_widgets_common::{
    history_url, Candidate, ClearTarget, FilterConfig, FilterList, FilterState, FormControl,
    FormDom, ListingDom, PageEnvironment,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// カード1枚（`data-<key>` 属性に相当する値を持つ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// キー → 空白区切りのトークン
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl CatalogItem {
    pub fn candidate(&self) -> Candidate {
        self.data
            .iter()
            .fold(Candidate::new(), |candidate, (key, raw)| {
                candidate.with_attribute(key, raw)
            })
    }
}

/// JSON配列のカタログを読み込む
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>> {
    if !path.exists() {
        return Err(DevportalError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let items: Vec<CatalogItem> = serde_json::from_str(&content)?;
    if let Some(item) = items.iter().find(|item| item.title.trim().is_empty()) {
        return Err(DevportalError::InvalidCatalog(format!(
            "タイトルのないカードがあります: {}",
            item.url
        )));
    }
    Ok(items)
}

/// 固定のクエリ文字列を持つページ
struct OfflinePage {
    query: String,
    urls: RefCell<Vec<String>>,
}

impl PageEnvironment for OfflinePage {
    type Element = ();

    fn query_string(&self) -> String {
        self.query.clone()
    }

    fn element_by_id(&self, _id: &str) -> Option<()> {
        None
    }

    fn replace_url(&self, url: &str) {
        self.urls.borrow_mut().push(url.to_string());
    }
}

/// カタログから組み立てたフィルタフォームと一覧
struct CatalogDom {
    checkboxes: Vec<(String, String, bool)>,
    candidates: Vec<Candidate>,
    hidden: Vec<bool>,
    actions_hidden: bool,
}

impl CatalogDom {
    /// 分類キーごとに、カタログに現れる値のチェックボックスを作る
    fn new(items: &[CatalogItem], config: &FilterConfig) -> Self {
        let mut checkboxes = Vec::new();
        for key in config.and_keys.iter().chain(&config.or_keys) {
            let values: BTreeSet<&str> = items
                .iter()
                .filter_map(|item| item.data.get(key))
                .flat_map(|raw| raw.split_whitespace())
                .collect();
            checkboxes.extend(values.into_iter().map(|v| (key.clone(), v.to_string(), false)));
        }
        Self {
            checkboxes,
            candidates: items.iter().map(CatalogItem::candidate).collect(),
            hidden: vec![false; items.len()],
            actions_hidden: true,
        }
    }
}

impl FormDom for CatalogDom {
    fn controls(&self) -> Vec<FormControl> {
        self.checkboxes
            .iter()
            .map(|(name, value, checked)| FormControl::checkbox(name, value, *checked))
            .collect()
    }

    fn set_checked(&mut self, name: &str, value: &str, checked: bool) {
        for checkbox in &mut self.checkboxes {
            if checkbox.0 == name && checkbox.1 == value {
                checkbox.2 = checked;
            }
        }
    }

    fn clear_sections(&self) -> Vec<String> {
        Vec::new()
    }

    fn set_clear_hidden(&mut self, _target: &ClearTarget, _hidden: bool) {}
}

impl ListingDom for CatalogDom {
    fn candidates(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }

    fn set_candidate_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(slot) = self.hidden.get_mut(index) {
            *slot = hidden;
        }
    }

    fn set_actions_hidden(&mut self, hidden: bool) {
        self.actions_hidden = hidden;
    }

    fn set_no_results_hidden(&mut self, _hidden: bool) {}
}

/// 確認結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    /// カタログに存在する値だけを反映した状態
    pub state: FilterState,
    pub selector: String,
    /// 条件に一致したカード（ページング前）
    pub matches: Vec<usize>,
    /// 表示されるカード
    pub shown: Vec<usize>,
    /// 「もっと見る」が残っているか
    pub has_more: bool,
    /// 正規化したURL（クエリ部分）
    pub url: String,
}

/// `query` のURLを開き「もっと見る」を `pages - 1` 回押した状態を求める
pub fn preview(items: &[CatalogItem], query: &str, config: &FilterConfig, pages: usize) -> Preview {
    let page = OfflinePage {
        query: query.to_string(),
        urls: RefCell::new(Vec::new()),
    };
    let dom = CatalogDom::new(items, config);
    let mut list = FilterList::new(page, dom, config.clone());
    for _ in 1..pages {
        if !list.next_page() {
            break;
        }
    }

    let state = list.state();
    Preview {
        selector: list.selector().to_css(),
        matches: list.matches().to_vec(),
        shown: list
            .dom()
            .hidden
            .iter()
            .enumerate()
            .filter(|(_, hidden)| !**hidden)
            .map(|(i, _)| i)
            .collect(),
        has_more: !list.dom().actions_hidden,
        url: history_url(&state),
        state,
    }
}
