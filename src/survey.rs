//! アンケート表示割合のシミュレーション

use devportal_widgets_common::survey::decide;

/// 訪問者ごとの抽選結果の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyReport {
    pub visitors: usize,
    pub shown: usize,
}

impl SurveyReport {
    pub fn ratio(&self) -> f64 {
        if self.visitors == 0 {
            return 0.0;
        }
        self.shown as f64 * 100.0 / self.visitors as f64
    }
}

/// `visitors` 人分を等間隔の乱数 `(i + 0.5) / visitors` で抽選する
pub fn simulate(existing: Option<&str>, percentage: f64, visitors: usize) -> SurveyReport {
    let shown = (0..visitors)
        .map(|i| (i as f64 + 0.5) / visitors as f64)
        .filter(|&sample| decide(existing, sample, percentage).show)
        .count();
    SurveyReport { visitors, shown }
}
