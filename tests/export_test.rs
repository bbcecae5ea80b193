//! JSON/Excel出力の統合テスト

use skill_match::cli::ExportFormat;
use skill_match::export::{excel, export_results, json};
use skill_match_common::{ChartSpec, Roster};
use tempfile::tempdir;

fn create_test_roster() -> Roster {
    let mut roster = Roster::with_sample_data();
    roster.add_employee("鈴木一郎", "統計学, データ分析");
    roster.add_job_role("アナリスト", "統計学, データ分析, 営業");
    roster
}

#[test]
fn test_json_export_contents() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("chart.json");

    let spec = ChartSpec::from_roster("テスト", &create_test_roster());
    json::write_chart_json(&spec, &output_path).expect("JSON出力に失敗");

    let content = std::fs::read_to_string(&output_path).expect("読み込み失敗");
    let value: serde_json::Value = serde_json::from_str(&content).expect("JSONパース失敗");

    assert_eq!(value["title"], "テスト");
    assert_eq!(value["series"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(value["data"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(value["data"][0]["name"], "山田太郎");
    assert_eq!(value["data"][0]["scores"]["プロジェクトマネージャー"], 100.0);
    assert_eq!(value["data"][2]["scores"]["データサイエンティスト"].as_f64().map(|v| v.round()), Some(67.0));
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("result.xlsx");

    let result = excel::generate_excel(&create_test_roster(), &output_path, "テスト", Some("2026-10-19 10:00"));
    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());

    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_excel_generation_empty_roster() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.xlsx");

    let result = excel::generate_excel(&Roster::new(), &output_path, "空", None);
    assert!(result.is_ok(), "空の名簿でExcel生成に失敗: {:?}", result.err());
    assert!(output_path.exists());
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");

    let written = export_results(&create_test_roster(), ExportFormat::Both, dir.path(), "結果")
        .expect("エクスポート失敗");

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("結果.json").exists());
    assert!(dir.path().join("結果.xlsx").exists());
}

#[test]
fn test_export_json_to_file_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("sub").join("report.json");

    let written = export_results(&create_test_roster(), ExportFormat::Json, &output_path, "結果")
        .expect("エクスポート失敗");

    assert_eq!(written, vec![output_path.clone()]);
    let content = std::fs::read_to_string(&output_path).expect("読み込み失敗");
    assert!(content.contains("generatedAt"));
}

#[test]
fn test_export_title_with_slash_writes_single_file() {
    let dir = tempdir().expect("Failed to create temp dir");

    let written = export_results(&create_test_roster(), ExportFormat::Json, dir.path(), "Q1/Q2")
        .expect("エクスポート失敗");

    assert_eq!(written, vec![dir.path().join("Q1_Q2.json")]);
    assert!(dir.path().join("Q1_Q2.json").is_file());
    assert!(!dir.path().join("Q1").exists(), "サブディレクトリが作られている");
}
