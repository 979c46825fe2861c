//! タスク完了アンケートの表示判定
//!
//! 初回訪問時に一度だけ抽選し、結果をCookieに保存する。
//! 乱数は呼び出し側から渡すので、判定自体は純粋関数。

/// 抽選結果を保存するCookie名
pub const SURVEY_COOKIE: &str = "devportal_show_task_completion_survey";

/// Cookieの保存期間（30日）
pub const SURVEY_COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 30;

/// 表示判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyDecision {
    /// アンケートを表示するか
    pub show: bool,
    /// 新しく保存すべきCookie値（既存のCookieがあれば `None`）
    pub persist: Option<bool>,
}

/// 表示するかを判定
///
/// # Arguments
/// * `existing` - 既存のCookie値
/// * `sample` - `[0, 1)` の一様乱数
/// * `percentage` - 表示割合（0〜100）
///
/// # Examples
/// ```
/// use devportal_widgets_common::survey::decide;
///
/// let decision = decide(None, 0.3, 50.0);
/// assert!(decision.show);
/// assert_eq!(decision.persist, Some(true));
/// ```
pub fn decide(existing: Option<&str>, sample: f64, percentage: f64) -> SurveyDecision {
    match existing {
        Some(value) => SurveyDecision {
            show: value.eq_ignore_ascii_case("true"),
            persist: None,
        },
        None => {
            let show = sample * 100.0 < percentage.clamp(0.0, 100.0);
            SurveyDecision {
                show,
                persist: Some(show),
            }
        }
    }
}

/// 閉じるボタンで保存する値
pub fn dismissed_value() -> &'static str {
    "false"
}
