pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use skill_match_common::{ChartSpec, Roster};
use std::path::{Path, PathBuf};
use tracing::info;

/// タイトルをファイル名に使える形へ（パス区切りは "_" に置換）
fn file_stem_for_title(title: &str) -> String {
    title.replace(['/', '\\'], "_")
}

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", file_stem_for_title(title), extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let stem = file_stem_for_title(title);
        let json_path = output.join(format!("{}.json", stem));
        let excel_path = output.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| file_stem_for_title(title));
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 名簿の現在の内容からマッチング結果を出力
///
/// 書き出したファイルのパスを返す。
pub fn export_results(
    roster: &Roster,
    format: ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let spec = ChartSpec::from_roster(title, roster).with_generated_at(generated_at.clone());
    info!(format = %format, employees = roster.employees().len(), job_roles = roster.job_roles().len(), "エクスポート開始");

    let mut written = Vec::new();
    match format {
        ExportFormat::Json => {
            let output_path = output_path_for_format(output, title, "json");
            println!("- JSONを生成中...");
            json::write_chart_json(&spec, &output_path)?;
            println!("✔ JSON出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, title, "xlsx");
            println!("- Excelを生成中...");
            excel::generate_excel(roster, &output_path, title, Some(&generated_at))?;
            println!("✔ Excel出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output, title);

            println!("- JSONを生成中...");
            json::write_chart_json(&spec, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());

            println!("- Excelを生成中...");
            excel::generate_excel(roster, &excel_path, title, Some(&generated_at))?;
            println!("✔ Excel出力: {}", excel_path.display());

            written.push(json_path);
            written.push(excel_path);
        }
    }

    Ok(written)
}
