//! Developer Portal Widgets Common Library
//!
//! ブラウザ(WASM)とCLIで共有する、フィルタ状態・クエリ文字列・
//! セレクタ生成と各ウィジェットの判定ロジック

pub mod error;
pub mod state;
pub mod query;
pub mod form_state;
pub mod config;
pub mod selector;
pub mod page;
pub mod filter_form;
pub mod filter_list;
pub mod cookie;
pub mod survey;
pub mod modal;
pub mod newsletter;
pub mod dnt;
pub mod tabs;
pub mod map;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use state::FilterState;
pub use query::{decode_spaces, history_url, parse_query, serialize_query};
pub use form_state::{extract_state, extract_state_with_text, ControlKind, FormControl};
pub use config::FilterConfig;
pub use selector::{build_selector, Candidate, FilterGroup, Selector};
pub use page::{ClearTarget, FilterFormDom, FormDom, ListingDom, PageEnvironment, Summary};
pub use filter_form::{apply_clear_visibility, ClearVisibility, FilterForm, Phase};
pub use filter_list::{FilterList, RenderPlan};
