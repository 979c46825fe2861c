//! フォーム状態の抽出
//!
//! DOMのinput要素を [`FormControl`] として読み取り、[`FilterState`] にまとめる。

use crate::state::FilterState;

/// フォームコントロールの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Checkbox { checked: bool },
    Text,
}

/// フォーム内の1つの入力要素のスナップショット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    pub name: String,
    pub value: String,
    pub kind: ControlKind,
}

impl FormControl {
    pub fn checkbox(name: &str, value: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            kind: ControlKind::Checkbox { checked },
        }
    }

    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            kind: ControlKind::Text,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.kind, ControlKind::Checkbox { checked: true })
    }
}

/// チェック済みチェックボックスを name ごとにまとめる
///
/// 値の順序はDOM順。
pub fn extract_state(controls: &[FormControl]) -> FilterState {
    controls
        .iter()
        .filter(|c| c.is_checked())
        .map(|c| (c.name.as_str(), c.value.clone()))
        .collect()
}

/// チェックボックスに加えて、空でないテキスト欄（検索語）も含める
pub fn extract_state_with_text(controls: &[FormControl], text_key: &str) -> FilterState {
    let mut state = extract_state(controls);
    for control in controls {
        if control.kind == ControlKind::Text && control.name == text_key {
            let value = control.value.trim();
            if !value.is_empty() {
                state.push(text_key, value);
            }
        }
    }
    state
}
