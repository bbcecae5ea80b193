//! 棒グラフ用データ
//!
//! 描画側（グラフライブラリ・Excel）にそのまま渡せる形へ変換する。
//! 系列の色は職種IDから固定パレットで決める。

use crate::roster::Roster;
use crate::types::MatchRow;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// 系列色パレット
pub const PALETTE: [&str; 8] = [
    "#4E79A7", "#F28E2B", "#E15759", "#76B7B2",
    "#59A14F", "#EDC948", "#B07AA1", "#FF9DA7",
];

/// 職種IDに対応する系列色
pub fn series_color(job_role_id: u32) -> &'static str {
    let index = (job_role_id.max(1) - 1) as usize % PALETTE.len();
    PALETTE[index]
}

/// 系列色を数値（0xRRGGBB）で取得
pub fn series_color_rgb(job_role_id: u32) -> u32 {
    u32::from_str_radix(series_color(job_role_id).trim_start_matches('#'), 16).unwrap_or(0)
}

/// グラフの系列（職種1件）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub job_role_id: u32,
    pub data_key: String,
    pub color: String,
}

/// グラフのデータ点（従業員1人）
///
/// `{"name": 従業員名, "scores": {職種名: マッチ率, ...}}` として出力する。
/// 系列の `dataKey` は `scores` のキーに対応する。
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataPoint {
    pub name: String,
    pub values: Vec<(String, f64)>,
}

impl From<&MatchRow> for ChartDataPoint {
    fn from(row: &MatchRow) -> Self {
        Self {
            name: row.employee_name.clone(),
            values: row
                .merged_scores()
                .into_iter()
                .map(|(title, percentage)| (title.to_string(), percentage))
                .collect(),
        }
    }
}

/// 職種名 → マッチ率のオブジェクト（登録順）
struct ScoreMap<'a>(&'a [(String, f64)]);

impl Serialize for ScoreMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (title, percentage) in self.0 {
            map.serialize_entry(title, percentage)?;
        }
        map.end()
    }
}

impl Serialize for ChartDataPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("scores", &ScoreMap(&self.values))?;
        map.end()
    }
}

/// 棒グラフ1枚分の入力
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub series: Vec<ChartSeries>,
    pub data: Vec<ChartDataPoint>,
}

impl ChartSpec {
    /// 名簿から最新のマッチング表を計算してグラフ入力を作る
    pub fn from_roster(title: &str, roster: &Roster) -> Self {
        let series = roster
            .job_roles()
            .iter()
            .map(|role| ChartSeries {
                job_role_id: role.id,
                data_key: role.title.clone(),
                color: series_color(role.id).to_string(),
            })
            .collect();

        let data = roster.match_table().iter().map(ChartDataPoint::from).collect();

        Self {
            title: title.to_string(),
            generated_at: None,
            series,
            data,
        }
    }

    pub fn with_generated_at(mut self, generated_at: impl Into<String>) -> Self {
        self.generated_at = Some(generated_at.into());
        self
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
