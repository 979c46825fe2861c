//! セレクタ生成
//!
//! AND/ORグループから `[data-key~="value"]` 形式のCSSセレクタを組み立てる。
//! 同じ条件を [`Candidate`] に対して直接評価することもできる。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 1つのフィルタキーと選択値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub key: String,
    pub values: Vec<String>,
}

impl FilterGroup {
    pub fn new(key: &str, values: Vec<String>) -> Self {
        Self {
            key: key.to_string(),
            values,
        }
    }
}

/// 絞り込み対象（data属性のトークン集合）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    attributes: BTreeMap<String, Vec<String>>,
}

impl Candidate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `data-<key>` の属性値（空白区切り）を登録
    pub fn with_attribute(mut self, key: &str, raw: &str) -> Self {
        self.attributes.insert(
            key.to_string(),
            raw.split_whitespace().map(String::from).collect(),
        );
        self
    }

    /// `[data-key~="value"]` 相当の判定
    pub fn has_token(&self, key: &str, value: &str) -> bool {
        self.attributes
            .get(key)
            .map(|tokens| tokens.iter().any(|t| t == value))
            .unwrap_or(false)
    }
}

/// AND/ORグループの組み合わせ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    and: Vec<FilterGroup>,
    or: Vec<FilterGroup>,
}

impl Selector {
    pub fn new(and: Vec<FilterGroup>, or: Vec<FilterGroup>) -> Self {
        Self { and, or }
    }

    fn attr(key: &str, value: &str, append: &str) -> String {
        format!("[data-{}~=\"{}\"]{}", key, escape_value(value), append)
    }

    fn map(groups: &[FilterGroup], join: &str, append: &str) -> String {
        groups
            .iter()
            .flat_map(|group| {
                group
                    .values
                    .iter()
                    .map(move |value| Self::attr(&group.key, value, append))
            })
            .collect::<Vec<_>>()
            .join(join)
    }

    /// AND部分（属性セレクタの連結）
    pub fn and_selector(&self) -> String {
        Self::map(&self.and, "", "")
    }

    /// OR部分（`, ` 区切り、各要素の後ろに `append` を付ける）
    pub fn or_selector(&self, append: &str) -> String {
        Self::map(&self.or, ", ", append)
    }

    /// CSSセレクタ文字列
    ///
    /// 両グループが空なら空文字列になり、呼び出し側は全件一致として扱う。
    pub fn to_css(&self) -> String {
        let and = self.and_selector();
        let or = self.or_selector(&and);
        if or.is_empty() {
            and
        } else {
            or
        }
    }

    /// 制約なし（全件一致）か
    pub fn is_unconstrained(&self) -> bool {
        self.and.iter().chain(&self.or).all(|g| g.values.is_empty())
    }

    /// セレクタと同じ条件で候補を評価
    pub fn matches(&self, candidate: &Candidate) -> bool {
        let and_ok = self
            .and
            .iter()
            .all(|g| g.values.iter().all(|v| candidate.has_token(&g.key, v)));

        let or_values: Vec<(&str, &str)> = self
            .or
            .iter()
            .flat_map(|g| g.values.iter().map(move |v| (g.key.as_str(), v.as_str())))
            .collect();
        let or_ok =
            or_values.is_empty() || or_values.iter().any(|(k, v)| candidate.has_token(k, v));

        and_ok && or_ok
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// AND/ORグループからセレクタ文字列を生成
pub fn build_selector(and: &[FilterGroup], or: &[FilterGroup]) -> String {
    Selector::new(and.to_vec(), or.to_vec()).to_css()
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
