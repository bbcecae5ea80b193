//! 名簿とマッチング結果の型定義
//!
//! CLIとエクスポートで共有される型:
//! - Employee: 従業員（名前＋保有スキル）
//! - JobRole: 職種（職種名＋必要スキル）
//! - MatchRow: 従業員1人分のマッチング結果（職種ごとのマッチ率）

use serde::{Deserialize, Serialize};

/// 従業員
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub name: String,
    /// 入力順のまま保持（重複あり）
    pub skills: Vec<String>,
}

/// 職種
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    pub id: u32,
    pub title: String,
    pub required_skills: Vec<String>,
}

/// 職種1件分のマッチ率
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleScore {
    pub job_role_id: u32,
    pub title: String,
    /// 0〜100
    pub percentage: f64,
}

/// 従業員1人分のマッチング結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRow {
    pub employee_name: String,
    /// 職種の登録順
    pub scores: Vec<RoleScore>,
}

impl MatchRow {
    /// 職種名でマッチ率を取得
    ///
    /// 同名の職種が複数ある場合は後に登録された方を返す。
    pub fn score(&self, title: &str) -> Option<f64> {
        self.scores
            .iter()
            .rev()
            .find(|s| s.title == title)
            .map(|s| s.percentage)
    }

    /// 職種名ごとに1件へまとめたマッチ率
    ///
    /// 位置は最初に現れた職種、値は最後に現れた職種のもの。
    pub fn merged_scores(&self) -> Vec<(&str, f64)> {
        let mut merged: Vec<(&str, f64)> = Vec::with_capacity(self.scores.len());
        for score in &self.scores {
            match merged.iter_mut().find(|(title, _)| *title == score.title) {
                Some(entry) => entry.1 = score.percentage,
                None => merged.push((score.title.as_str(), score.percentage)),
            }
        }
        merged
    }
}
