use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevportalError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("カタログが不正: {0}")]
    InvalidCatalog(String),

    #[error(transparent)]
    Common(#[from] devportal_widgets_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DevportalError>;
