use crate::cli::ExportFormat;
use crate::error::{Result, SkillMatchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "スキルマッチング結果";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// グラフ・出力ファイルのタイトル
    pub title: String,
    pub default_format: ExportFormat,
    /// 起動時に初期データを読み込む
    pub seed_sample_data: bool,
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            default_format: ExportFormat::Both,
            seed_sample_data: true,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SkillMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("skill-match").join("config.json"))
    }

    /// 出力先（未指定なら設定値、それもなければカレント）
    pub fn resolve_output(&self, output: Option<PathBuf>) -> PathBuf {
        output
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
