//! 名簿入力の変換
//!
//! コマンドライン・対話入力から受け取った文字列を名簿へ反映する。

use crate::cli::RosterArgs;
use crate::error::SkillMatchError;
use skill_match_common::Roster;
use tracing::debug;

/// "名前=スキル1, スキル2" 形式の入力
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryArg {
    pub label: String,
    pub skills: String,
}

impl std::str::FromStr for EntryArg {
    type Err = SkillMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // スキル側に "=" が含まれても良いよう最初の "=" で分割
        let (label, skills) = s
            .split_once('=')
            .ok_or_else(|| SkillMatchError::InvalidEntry(s.to_string()))?;

        Ok(Self {
            label: label.to_string(),
            skills: skills.to_string(),
        })
    }
}

/// 従業員を追加（前後の空白は除去してから渡す）
///
/// 空入力は名簿を変えずに `false` を返す。
pub fn add_employee(roster: &mut Roster, name: &str, skills: &str) -> bool {
    match roster.add_employee(name.trim(), skills.trim()) {
        Some(employee) => {
            debug!(id = employee.id, employee = %employee.name, skills = ?employee.skills, "従業員を追加");
            true
        }
        None => {
            debug!(input_name = name, input_skills = skills, "空の入力のため従業員を追加しない");
            false
        }
    }
}

/// 職種を追加（前後の空白は除去してから渡す）
pub fn add_job_role(roster: &mut Roster, title: &str, skills: &str) -> bool {
    match roster.add_job_role(title.trim(), skills.trim()) {
        Some(role) => {
            debug!(id = role.id, job_role = %role.title, skills = ?role.required_skills, "職種を追加");
            true
        }
        None => {
            debug!(input_title = title, input_skills = skills, "空の入力のため職種を追加しない");
            false
        }
    }
}

/// コマンドライン引数から名簿を組み立て
pub fn build_roster(args: &RosterArgs, seed_sample_data: bool) -> Roster {
    let mut roster = if seed_sample_data && !args.no_sample {
        Roster::with_sample_data()
    } else {
        Roster::new()
    };

    for entry in &args.employees {
        add_employee(&mut roster, &entry.label, &entry.skills);
    }
    for entry in &args.job_roles {
        add_job_role(&mut roster, &entry.label, &entry.skills);
    }

    debug!(
        employees = roster.employees().len(),
        job_roles = roster.job_roles().len(),
        "名簿を構築"
    );
    roster
}
