//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_export() {
        let error = Error::Export("グラフ挿入エラー".to_string());
        assert_eq!(format!("{}", error), "Export error: グラフ挿入エラー");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_kinds() {
        // 共通ライブラリはファイルIOを行わない（書き出しは呼び出し側）
        let errors = vec![
            Error::Export("a".to_string()),
            serde_json::from_str::<serde_json::Value>("{").unwrap_err().into(),
        ];
        for error in errors {
            let label = match error {
                Error::Json(_) => "json",
                Error::Export(_) => "export",
            };
            assert!(!label.is_empty());
        }
    }
}
