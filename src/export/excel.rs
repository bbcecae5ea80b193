//! Excel生成（CLI版）
//!
//! 共通ライブラリでブックを生成し、ファイルへ書き出す。

use crate::error::{Result, SkillMatchError};
use skill_match_common::export::excel_core::generate_match_workbook;
use skill_match_common::Roster;
use std::path::Path;

pub fn generate_excel(
    roster: &Roster,
    output_path: &Path,
    title: &str,
    generated_at: Option<&str>,
) -> Result<()> {
    let buffer = generate_match_workbook(roster, title, generated_at)
        .map_err(|e| SkillMatchError::ExcelGeneration(e.to_string()))?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)?;
    Ok(())
}
