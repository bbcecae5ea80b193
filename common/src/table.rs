//! マッチング表の構築
//!
//! 従業員ごとに全職種のマッチ率を並べた行を作る。毎回全件を再計算する。

use crate::matcher::match_percentage;
use crate::types::{Employee, JobRole, MatchRow, RoleScore};

/// 全従業員 × 全職種のマッチング表
///
/// 行は従業員の登録順、各行のスコアは職種の登録順。
pub fn build_match_table(employees: &[Employee], job_roles: &[JobRole]) -> Vec<MatchRow> {
    employees
        .iter()
        .map(|employee| MatchRow {
            employee_name: employee.name.clone(),
            scores: job_roles
                .iter()
                .map(|role| RoleScore {
                    job_role_id: role.id,
                    title: role.title.clone(),
                    percentage: match_percentage(&employee.skills, &role.required_skills),
                })
                .collect(),
        })
        .collect()
}
