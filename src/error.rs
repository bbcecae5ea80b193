use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力形式が不正です（\"名前=スキル1, スキル2\" の形式で指定してください）: {0}")]
    InvalidEntry(String),

    #[error("対話入力エラー: {0}")]
    Interactive(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] skill_match_common::Error),
}

pub type Result<T> = std::result::Result<T, SkillMatchError>;
