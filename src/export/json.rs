//! グラフ入力JSONの出力

use crate::error::Result;
use skill_match_common::ChartSpec;
use std::path::Path;

pub fn write_chart_json(spec: &ChartSpec, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = spec.to_json()?;
    std::fs::write(output_path, json)?;
    Ok(())
}
