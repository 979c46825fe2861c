//! フィルタ設定
//!
//! どのキーがAND型・OR型かはマークアップから推測せず、設定で決める。

use crate::error::{Error, Result};
use crate::selector::FilterGroup;
use crate::state::FilterState;
use serde::{Deserialize, Serialize};

/// フィルタフォームの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// 選択値すべてに一致する必要があるキー
    pub and_keys: Vec<String>,
    /// 選択値のいずれかに一致すればよいキー
    pub or_keys: Vec<String>,
    /// フリーテキスト検索欄の name
    pub search_key: String,
    /// 最初に表示する件数
    pub initial_resources: usize,
    /// 「もっと見る」で増やす件数
    pub resources_per_page: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            and_keys: vec!["topic".into(), "topics".into()],
            or_keys: vec!["initial-group".into(), "month".into()],
            search_key: "search".into(),
            initial_resources: 12,
            resources_per_page: 12,
        }
    }
}

impl FilterConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから読み込み（wasm32以外）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// キー分類の重複と件数をチェック
    pub fn validate(&self) -> Result<()> {
        if let Some(key) = self.and_keys.iter().find(|k| self.or_keys.contains(k)) {
            return Err(Error::Config(format!(
                "キー '{}' がAND型とOR型の両方に指定されています",
                key
            )));
        }
        if self.resources_per_page == 0 {
            return Err(Error::Config("resources_per_page は1以上にしてください".into()));
        }
        Ok(())
    }

    /// data属性による上書きを適用
    ///
    /// `data-and-filters="topic,product"` のようなカンマ区切り、
    /// 件数は10進数。`per_page` が無ければ `initial` と同じ値になる。
    pub fn with_overrides(
        mut self,
        and_keys: Option<&str>,
        or_keys: Option<&str>,
        initial: Option<&str>,
        per_page: Option<&str>,
    ) -> Result<Self> {
        if let Some(keys) = and_keys {
            self.and_keys = parse_key_list(keys);
        }
        if let Some(keys) = or_keys {
            self.or_keys = parse_key_list(keys);
        }
        if let Some(initial) = initial {
            self.initial_resources = parse_count("data-initial-resources", initial)?;
            self.resources_per_page = self.initial_resources;
        }
        if let Some(per_page) = per_page {
            self.resources_per_page = parse_count("data-resources-per-page", per_page)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn is_and_key(&self, key: &str) -> bool {
        self.and_keys.iter().any(|k| k == key)
    }

    pub fn is_or_key(&self, key: &str) -> bool {
        self.or_keys.iter().any(|k| k == key)
    }

    /// 状態をAND/OR各グループに振り分け
    ///
    /// どちらにも属さないキー（検索語など）は無視する。
    pub fn groups(&self, state: &FilterState) -> (Vec<FilterGroup>, Vec<FilterGroup>) {
        let collect = |keys: &[String]| {
            keys.iter()
                .map(|key| FilterGroup::new(key, state.values(key).to_vec()))
                .filter(|group| !group.values.is_empty())
                .collect::<Vec<_>>()
        };
        (collect(&self.and_keys), collect(&self.or_keys))
    }
}

fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

fn parse_count(attr: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Markup(format!("{} の値が数値ではありません: '{}'", attr, raw)))
}
