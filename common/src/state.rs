//! フィルタ状態
//!
//! フィルタキー → 選択値リストの対応。URL・フォーム・表示を同期させる
//! 唯一の状態で、キーが存在するなら値は必ず1つ以上ある。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// フィルタ状態（キー順で保持）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    entries: BTreeMap<String, Vec<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を追加（空文字は無視）
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if key.is_empty() || value.is_empty() {
            return;
        }
        self.entries.entry(key.to_string()).or_default().push(value);
    }

    /// 複数の値をまとめて追加
    pub fn extend<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.push(key, value);
        }
    }

    /// キーの値一覧（存在しなければ空）
    pub fn values(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.values(key).iter().any(|v| v == value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FilterState
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut state = Self::new();
        for (key, value) in iter {
            state.push(key.as_ref(), value);
        }
        state
    }
}
