//! ページ環境とフォームDOMの抽象
//!
//! コントローラは `window` / `document` に直接触れず、ここで定義する
//! トレイト経由で操作する。ブラウザ実装は web-wasm 側、テストでは
//! フェイク実装を渡す。

use crate::error::{Error, Result};
use crate::form_state::FormControl;
use crate::selector::Candidate;

/// ページ環境（URLクエリ・要素検索・履歴）
pub trait PageEnvironment {
    type Element;

    /// `location.search`（先頭の `?` を含んでもよい）
    fn query_string(&self) -> String;

    /// id で要素を探す
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// ナビゲーションせずにURLを置き換える
    fn replace_url(&self, url: &str);

    /// 必須要素を探す。無ければマークアップエラー
    fn require_element(&self, id: &str) -> Result<Self::Element> {
        self.element_by_id(id)
            .ok_or_else(|| Error::Markup(format!("#{} が見つかりません", id)))
    }
}

/// クリアボタンの対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearTarget {
    /// `data-controls` を持つセクション単位のボタン
    Section(String),
    /// すべてクリア（ラッパー要素ごと表示切替）
    All,
}

/// フィルタ系フォームに共通する操作
pub trait FormDom {
    /// フォーム内の入力要素（DOM順）
    fn controls(&self) -> Vec<FormControl>;

    /// name/value が一致するチェックボックスのチェック状態を設定
    fn set_checked(&mut self, name: &str, value: &str, checked: bool);

    /// セクション単位のクリアボタンが制御するキー一覧
    fn clear_sections(&self) -> Vec<String>;

    fn set_clear_hidden(&mut self, target: &ClearTarget, hidden: bool);
}

/// モバイル表示用の選択内容サマリー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Search,
    Filters,
}

/// サーバー描画版フィルタフォームのDOM
pub trait FilterFormDom: FormDom {
    fn set_search_value(&mut self, value: &str);

    fn set_search_disabled(&mut self, disabled: bool);

    fn clear_summary(&mut self, summary: Summary);
}

/// クライアント側絞り込み版の一覧DOM
pub trait ListingDom: FormDom {
    /// 絞り込み対象（`.js-filter-target`）をDOM順に返す
    fn candidates(&self) -> Vec<Candidate>;

    fn set_candidate_hidden(&mut self, index: usize, hidden: bool);

    /// 「もっと見る」アクション領域
    fn set_actions_hidden(&mut self, hidden: bool);

    /// 「該当なし」メッセージ
    fn set_no_results_hidden(&mut self, hidden: bool);
}
