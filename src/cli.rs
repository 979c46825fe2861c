use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devportal-widgets")]
#[command(about = "開発者ポータルのフィルタURL・アンケート設定の確認ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// クエリ文字列を解析して正規化したURLを表示
    Parse {
        /// 例: "?topic=css&topic=javascript&search=test+test"
        #[arg(required = true)]
        query: String,
    },

    /// カタログJSONに対してフィルタURLの表示結果を確認
    Filter {
        /// カード一覧のJSONファイル
        #[arg(short, long, required = true)]
        items: PathBuf,

        /// 開いたときのクエリ文字列
        #[arg(short, long, default_value = "")]
        query: String,

        /// 表示するページ数（「もっと見る」を押した回数 + 1）
        #[arg(short, long, default_value = "1")]
        pages: usize,

        /// フィルタ設定JSON（省略時は保存済みの設定）
        #[arg(long)]
        filter_config: Option<PathBuf>,
    },

    /// アンケート表示割合をシミュレーション
    Survey {
        /// 表示割合（省略時は保存済みの設定）
        #[arg(short, long)]
        percentage: Option<f64>,

        /// 既存のCookie値
        #[arg(short, long)]
        cookie: Option<String>,

        /// 訪問者数
        #[arg(long, default_value = "1000")]
        visitors: usize,
    },

    /// 設定を管理
    Config {
        /// AND条件のキー（カンマ区切り）
        #[arg(long)]
        and: Option<String>,

        /// OR条件のキー（カンマ区切り）
        #[arg(long)]
        or: Option<String>,

        /// アンケート表示割合
        #[arg(long)]
        survey_percentage: Option<f64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
