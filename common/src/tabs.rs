//! タブパネル
//!
//! `location.hash` に対応するパネルとナビ項目を選ぶ。

/// 選択結果（各要素を active にするか）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    pub items: Vec<bool>,
    pub nav: Vec<bool>,
}

/// パネルの `data-hash` とナビの `href` の一覧
#[derive(Debug, Clone, Default)]
pub struct TabSet {
    item_hashes: Vec<String>,
    nav_hrefs: Vec<String>,
}

impl TabSet {
    pub fn new(item_hashes: Vec<String>, nav_hrefs: Vec<String>) -> Self {
        Self {
            item_hashes,
            nav_hrefs,
        }
    }

    /// 初期状態：先頭以外のパネルを非アクティブにする
    pub fn initially_inactive(&self) -> impl Iterator<Item = usize> {
        1..self.item_hashes.len()
    }

    /// hash（`#` 付き）に対応する選択
    ///
    /// 空、またはどのパネルにも対応しない hash なら `None`（現状維持）。
    pub fn select(&self, hash: &str) -> Option<TabSelection> {
        if hash.is_empty() {
            return None;
        }
        let target = hash.strip_prefix('#').unwrap_or(hash);
        if !self.item_hashes.iter().any(|h| h == target) {
            return None;
        }
        Some(TabSelection {
            items: self.item_hashes.iter().map(|h| h == target).collect(),
            nav: self.nav_hrefs.iter().map(|href| href == hash).collect(),
        })
    }
}
