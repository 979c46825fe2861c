//! フィルタフォーム（サーバー描画版）
//!
//! 絞り込み結果はサーバーが描画する。クライアント側の役割は
//! URLからフォームを復元し、クリアボタンの表示を同期し、
//! 空の検索欄をGET送信から外すことだけ。

use crate::config::FilterConfig;
use crate::form_state::{extract_state_with_text, ControlKind};
use crate::page::{ClearTarget, FilterFormDom, FormDom, PageEnvironment, Summary};
use crate::query::{decode_spaces, parse_query};
use crate::state::FilterState;

/// コントローラの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// URLからフォームを復元中（生成時のみ）
    Restoring,
    /// ユーザー操作に応答する定常状態
    Interactive,
}

/// クリアボタンの表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearVisibility {
    /// (セクションキー, 表示するか)
    pub sections: Vec<(String, bool)>,
    /// 「すべてクリア」を表示するか
    pub clear_all: bool,
}

impl ClearVisibility {
    pub fn compute(state: &FilterState, sections: &[String]) -> Self {
        Self {
            sections: sections
                .iter()
                .map(|key| (key.clone(), !state.values(key).is_empty()))
                .collect(),
            clear_all: !state.is_empty(),
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.sections.iter().any(|(k, visible)| k == key && *visible)
    }
}

/// 状態からクリアボタンの表示を計算してDOMに反映
pub fn apply_clear_visibility<D: FormDom + ?Sized>(
    dom: &mut D,
    state: &FilterState,
) -> ClearVisibility {
    let visibility = ClearVisibility::compute(state, &dom.clear_sections());
    for (key, visible) in &visibility.sections {
        dom.set_clear_hidden(&ClearTarget::Section(key.clone()), !visible);
    }
    dom.set_clear_hidden(&ClearTarget::All, !visibility.clear_all);
    visibility
}

/// サーバー描画版フィルタフォームのコントローラ
pub struct FilterForm<D> {
    dom: D,
    config: FilterConfig,
    phase: Phase,
    /// URLにはあるがフォームに対応する入力が無い値
    ///
    /// サーバーはこの値で絞り込んで描画しているので、クリアボタンの
    /// 表示にも含める。入力操作かクリアで消える。
    url_only: FilterState,
}

impl<D: FilterFormDom> FilterForm<D> {
    /// URLの状態をフォームに復元して操作可能にする
    pub fn new<E: PageEnvironment>(env: &E, dom: D, config: FilterConfig) -> Self {
        let mut form = Self {
            dom,
            config,
            phase: Phase::Restoring,
            url_only: FilterState::new(),
        };
        let state = parse_query(&env.query_string());
        form.restore(&state);
        form.phase = Phase::Interactive;
        form
    }

    fn restore(&mut self, state: &FilterState) {
        let search_key = self.config.search_key.clone();
        for control in self.dom.controls() {
            match control.kind {
                ControlKind::Checkbox { .. } => {
                    let checked = state.contains(&control.name, &control.value);
                    self.dom.set_checked(&control.name, &control.value, checked);
                }
                ControlKind::Text if control.name == search_key => {
                    let value = decode_spaces(&state.values(&search_key).join(","));
                    self.dom.set_search_value(&value);
                }
                ControlKind::Text => {}
            }
        }

        let form_state = self.state();
        self.url_only = state
            .iter()
            .filter(|(key, _)| self.is_filter_key(key))
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
            .filter(|(key, value)| {
                !form_state.contains(key, value)
                    && !form_state.contains(key, &decode_spaces(value))
            })
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        self.update_clear_visibility();
    }

    fn is_filter_key(&self, key: &str) -> bool {
        self.config.is_and_key(key) || self.config.is_or_key(key) || key == self.config.search_key
    }

    /// フォームの現在の状態（検索語を含む）
    pub fn state(&self) -> FilterState {
        extract_state_with_text(&self.dom.controls(), &self.config.search_key)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// submit 直前の処理
    ///
    /// 検索欄が空なら disabled にして `search=` を送らない。
    /// 送信自体はブラウザに任せる。戻り値は検索欄を外したかどうか。
    pub fn on_form_submit(&mut self) -> bool {
        let search_empty = !self.state().contains_key(&self.config.search_key);
        self.dom.set_search_disabled(search_empty);
        search_empty
    }

    /// 入力変更時にクリアボタンの表示を追従させる
    pub fn on_input(&mut self) -> ClearVisibility {
        self.url_only = FilterState::new();
        self.update_clear_visibility()
    }

    /// 1セクション（`None` なら全セクション）の入力をクリア
    ///
    /// 再送信はしない。戻り値はクリアした入力の数。
    pub fn on_clear_section(&mut self, key: Option<&str>) -> usize {
        let search_key = self.config.search_key.clone();
        let mut cleared = 0;

        for control in self.dom.controls() {
            if key.is_some_and(|k| k != control.name) {
                continue;
            }
            match control.kind {
                ControlKind::Checkbox { checked: true } => {
                    self.dom.set_checked(&control.name, &control.value, false);
                    cleared += 1;
                }
                ControlKind::Text if control.name == search_key && !control.value.is_empty() => {
                    self.dom.set_search_value("");
                    cleared += 1;
                }
                _ => {}
            }
        }

        match key {
            Some(k) => {
                self.url_only.remove(k);
            }
            None => self.url_only = FilterState::new(),
        }

        match key {
            None => {
                self.dom.clear_summary(Summary::Search);
                self.dom.clear_summary(Summary::Filters);
            }
            Some(k) if k == search_key => self.dom.clear_summary(Summary::Search),
            Some(_) => self.dom.clear_summary(Summary::Filters),
        }

        self.update_clear_visibility();
        cleared
    }

    /// クリアボタンの表示を現在の状態（URLだけにある値を含む）に合わせる
    pub fn update_clear_visibility(&mut self) -> ClearVisibility {
        let mut state = self.state();
        for (key, values) in self.url_only.iter() {
            state.extend(key, values.iter().cloned());
        }
        apply_clear_visibility(&mut self.dom, &state)
    }
}
