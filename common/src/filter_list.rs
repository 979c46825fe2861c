//! フィルタ一覧（クライアント側絞り込み版）
//!
//! フォームの選択からセレクタを作り、一覧の項目を表示/非表示にする。
//! 表示件数はページ単位で増やし、URLは history.replaceState で書き換える。

use crate::config::FilterConfig;
use crate::filter_form::apply_clear_visibility;
use crate::form_state::{extract_state, ControlKind};
use crate::page::{ListingDom, PageEnvironment};
use crate::query::{history_url, parse_query};
use crate::selector::Selector;
use crate::state::FilterState;

/// 1回の描画で反映する表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// 候補ごとの表示フラグ（DOM順）
    pub visible: Vec<bool>,
    pub actions_hidden: bool,
    pub no_results_hidden: bool,
}

impl RenderPlan {
    /// 一致した候補のうち先頭 `on_page` 件だけを表示する
    pub fn compute(candidate_count: usize, matches: &[usize], on_page: usize) -> Self {
        let paged = &matches[..matches.len().min(on_page)];
        let mut visible = vec![false; candidate_count];
        for &index in paged {
            if let Some(slot) = visible.get_mut(index) {
                *slot = true;
            }
        }
        Self {
            visible,
            actions_hidden: matches.len() <= on_page,
            no_results_hidden: !paged.is_empty(),
        }
    }

    pub fn shown(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

/// クライアント側絞り込みのコントローラ
pub struct FilterList<E, D> {
    env: E,
    dom: D,
    config: FilterConfig,
    /// ページングに関係なく、現在の条件に一致した候補のインデックス
    matches: Vec<usize>,
    resources_on_page: usize,
}

impl<E: PageEnvironment, D: ListingDom> FilterList<E, D> {
    /// URLからチェック状態を復元して初回の絞り込みを行う
    pub fn new(env: E, dom: D, config: FilterConfig) -> Self {
        let resources_on_page = config.initial_resources;
        let mut list = Self {
            env,
            dom,
            config,
            matches: Vec::new(),
            resources_on_page,
        };

        let state = parse_query(&list.env.query_string());
        for control in list.dom.controls() {
            if let ControlKind::Checkbox { .. } = control.kind {
                let checked = state.contains(&control.name, &control.value);
                list.dom.set_checked(&control.name, &control.value, checked);
            }
        }
        list.filter();
        list
    }

    pub fn state(&self) -> FilterState {
        extract_state(&self.dom.controls())
    }

    /// 現在の状態に対応するセレクタ
    pub fn selector(&self) -> Selector {
        let (and, or) = self.config.groups(&self.state());
        Selector::new(and, or)
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn resources_on_page(&self) -> usize {
        self.resources_on_page
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// 一致集合を計算し直して描画
    pub fn filter(&mut self) -> usize {
        let selector = self.selector();
        self.matches = self
            .dom
            .candidates()
            .iter()
            .enumerate()
            .filter(|(_, candidate)| selector.matches(candidate))
            .map(|(index, _)| index)
            .collect();
        self.render();
        self.matches.len()
    }

    pub fn render(&mut self) -> RenderPlan {
        let plan = RenderPlan::compute(
            self.dom.candidates().len(),
            &self.matches,
            self.resources_on_page,
        );

        self.dom.set_actions_hidden(plan.actions_hidden);
        for (index, visible) in plan.visible.iter().enumerate() {
            self.dom.set_candidate_hidden(index, !visible);
        }
        self.dom.set_no_results_hidden(plan.no_results_hidden);

        let state = self.state();
        apply_clear_visibility(&mut self.dom, &state);
        plan
    }

    /// input イベント：絞り込み後にURLを書き換える
    pub fn on_input(&mut self) -> usize {
        let count = self.filter();
        self.env.replace_url(&history_url(&self.state()));
        count
    }

    /// 「もっと見る」：残りがあれば表示件数を増やす
    pub fn next_page(&mut self) -> bool {
        if self.matches.len() <= self.resources_on_page {
            return false;
        }
        self.resources_on_page += self.config.resources_per_page;
        self.render();
        true
    }

    /// 1セクション（`None` なら全部）のチェックを外し、変化があれば再絞り込み
    pub fn on_clear_section(&mut self, key: Option<&str>) -> usize {
        let mut cleared = 0;
        for control in self.dom.controls() {
            if key.is_some_and(|k| k != control.name) || !control.is_checked() {
                continue;
            }
            self.dom.set_checked(&control.name, &control.value, false);
            cleared += 1;
        }
        if cleared > 0 {
            self.on_input();
        }
        cleared
    }
}
