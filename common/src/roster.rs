//! 名簿（従業員・職種）
//!
//! 追加のみ可能な2つのコレクションを保持する。
//! 名前/職種名またはスキル文字列が空の入力は何もせずに無視する。

use crate::matcher::parse_skill_list;
use crate::table::build_match_table;
use crate::types::{Employee, JobRole, MatchRow};
use serde::Serialize;

/// 従業員と職種の名簿
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    employees: Vec<Employee>,
    job_roles: Vec<JobRole>,
}

impl Roster {
    /// 空の名簿
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ入りの名簿
    pub fn with_sample_data() -> Self {
        let mut roster = Self::new();
        roster.add_employee("山田太郎", "プロジェクト管理, リーダーシップ, コミュニケーション");
        roster.add_employee("佐藤花子", "データ分析, プログラミング, 問題解決");
        roster.add_job_role(
            "プロジェクトマネージャー",
            "プロジェクト管理, リーダーシップ, コミュニケーション",
        );
        roster.add_job_role("データサイエンティスト", "データ分析, プログラミング, 統計学");
        roster
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn job_roles(&self) -> &[JobRole] {
        &self.job_roles
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.job_roles.is_empty()
    }

    /// 従業員を追加
    ///
    /// 名前またはスキルが空なら `None`（名簿は変化しない）。
    /// IDは現在の件数+1。
    pub fn add_employee(&mut self, name: &str, raw_skills: &str) -> Option<&Employee> {
        if name.is_empty() || raw_skills.is_empty() {
            return None;
        }

        let id = self.employees.len() as u32 + 1;
        self.employees.push(Employee {
            id,
            name: name.to_string(),
            skills: parse_skill_list(raw_skills),
        });
        self.employees.last()
    }

    /// 職種を追加
    ///
    /// 職種名またはスキルが空なら `None`（名簿は変化しない）。
    pub fn add_job_role(&mut self, title: &str, raw_skills: &str) -> Option<&JobRole> {
        if title.is_empty() || raw_skills.is_empty() {
            return None;
        }

        let id = self.job_roles.len() as u32 + 1;
        self.job_roles.push(JobRole {
            id,
            title: title.to_string(),
            required_skills: parse_skill_list(raw_skills),
        });
        self.job_roles.last()
    }

    /// 現在の名簿からマッチング表を算出
    pub fn match_table(&self) -> Vec<MatchRow> {
        build_match_table(&self.employees, &self.job_roles)
    }
}
