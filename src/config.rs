use crate::error::{DevportalError, Result};
use devportal_widgets_common::FilterConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// フィルタキーの分類とページング
    pub filter: FilterConfig,
    /// アンケートの表示割合（0〜100）
    pub survey_percentage: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            survey_percentage: 0.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 指定パスから読み込み（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DevportalError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home
            .join(".config")
            .join("devportal-widgets")
            .join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        self.filter.validate()?;
        if !(0.0..=100.0).contains(&self.survey_percentage) {
            return Err(DevportalError::Config(format!(
                "survey_percentage は0〜100で指定してください: {}",
                self.survey_percentage
            )));
        }
        Ok(())
    }

    /// `--and` / `--or` で渡されたカンマ区切りのキーを反映
    pub fn set_keys(&mut self, and_keys: Option<&str>, or_keys: Option<&str>) -> Result<()> {
        self.filter = self
            .filter
            .clone()
            .with_overrides(and_keys, or_keys, None, None)?;
        Ok(())
    }
}
