//! 端末表示
//!
//! 名簿をバッジ風に、マッチング結果を横棒グラフで描く。

use skill_match_common::{MatchRow, Roster};
use std::fmt::Write;

/// 棒グラフの最大幅（文字数）
pub const BAR_WIDTH: usize = 20;

fn badges(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| format!("[{}]", skill))
        .collect::<Vec<_>>()
        .join(" ")
}

/// マッチ率を棒で表現
pub fn render_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// 従業員・職種の一覧
pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "👥 従業員スキル");
    if roster.employees().is_empty() {
        let _ = writeln!(out, "  (未登録)");
    }
    for employee in roster.employees() {
        let _ = writeln!(out, "  {}  {}", employee.name, badges(&employee.skills));
    }

    let _ = writeln!(out, "\n📋 職種別必要スキル");
    if roster.job_roles().is_empty() {
        let _ = writeln!(out, "  (未登録)");
    }
    for role in roster.job_roles() {
        let _ = writeln!(out, "  {}  {}", role.title, badges(&role.required_skills));
    }

    out
}

/// マッチング結果の棒グラフ
pub fn render_match_table(table: &[MatchRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📊 スキルマッチング結果");

    if table.is_empty() {
        let _ = writeln!(out, "  (従業員が未登録です)");
        return out;
    }

    for row in table {
        let _ = writeln!(out, "  {}", row.employee_name);
        if row.scores.is_empty() {
            let _ = writeln!(out, "    (職種が未登録です)");
        }
        for score in &row.scores {
            let _ = writeln!(
                out,
                "    {} {:>6.2}%  {}",
                render_bar(score.percentage),
                score.percentage,
                score.title
            );
        }
    }

    out
}
