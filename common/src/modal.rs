//! モーダルの中身
//!
//! トリガー要素の `data-type` に応じて表示内容を決める。現状は
//! YouTube動画のみ。

use crate::error::{Error, Result};
use regex::Regex;

/// 閉じるボタンの既定テキスト
pub const DEFAULT_CLOSE_TEXT: &str = "Close modal";

/// 16:9 の埋め込み領域
pub const VIDEO_PADDING_BOTTOM: &str = "56.25%";

/// iframe の allow 属性
pub const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture";

lazy_static::lazy_static! {
    // youtube.com / youtube-nocookie.com / youtu.be の各形式から11文字のIDを取る
    static ref YOUTUBE_URL_RE: Regex = Regex::new(
        r"^https?://(?:(?:www\.)?youtube(?:-nocookie)?\.com/.*(?:/|v/|u/\w/|embed/|\?v=|&v=)|youtu\.be/)([\w-]{11})"
    )
    .expect("YouTube URL pattern");
}

/// モーダルに表示する内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    Video { embed_url: String },
}

/// Mzp.Modal に渡すオプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOptions {
    pub class_name: Option<String>,
    pub close_text: String,
    pub title: Option<String>,
}

impl ModalOptions {
    pub fn new(
        class_name: Option<String>,
        close_text: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            class_name,
            close_text: close_text.unwrap_or_else(|| DEFAULT_CLOSE_TEXT.to_string()),
            title,
        }
    }
}

/// 通常のYouTube URLを埋め込み用URLに変換
///
/// # Examples
/// ```
/// use devportal_widgets_common::modal::youtube_embed_url;
///
/// let url = youtube_embed_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// assert!(url.starts_with("https://www.youtube.com/embed/dQw4w9WgXcQ?"));
/// ```
pub fn youtube_embed_url(url: &str) -> Result<String> {
    let id = YOUTUBE_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("Failed to match YouTube ID: {}", url)))?;

    Ok(format!(
        "https://www.youtube.com/embed/{}?autoplay=1&enablejsapi=1&modestbranding=1&rel=0",
        id
    ))
}

/// `data-type` と href から表示内容を決める
pub fn modal_content(kind: Option<&str>, href: &str) -> Result<ModalContent> {
    match kind {
        Some("video") => Ok(ModalContent::Video {
            embed_url: youtube_embed_url(href)?,
        }),
        other => Err(Error::Markup(format!(
            "Unhandled type '{}'",
            other.unwrap_or("undefined")
        ))),
    }
}
