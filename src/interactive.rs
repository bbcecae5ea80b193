//! 対話式の名簿入力モジュール
//!
//! 従業員・職種をその場で追加し、マッチング結果を確認する。
//! 名簿はこのセッションの間だけ保持する。

use crate::config::Config;
use crate::display::{render_match_table, render_roster};
use crate::error::{Result, SkillMatchError};
use crate::export::export_results;
use crate::input::{add_employee, add_job_role};
use dialoguer::{Input, Select};
use skill_match_common::Roster;
use tracing::debug;

/// メニュー項目（表示順）
pub const MENU_ITEMS: [&str; 6] = [
    "従業員追加",
    "職種追加",
    "一覧表示",
    "マッチング結果",
    "エクスポート",
    "終了",
];

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddEmployee,
    AddJobRole,
    ShowRoster,
    ShowMatches,
    Export,
    Quit,
}

impl MenuAction {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(MenuAction::AddEmployee),
            1 => Some(MenuAction::AddJobRole),
            2 => Some(MenuAction::ShowRoster),
            3 => Some(MenuAction::ShowMatches),
            4 => Some(MenuAction::Export),
            5 => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

/// 対話セッションを実行
pub fn run_interactive(mut roster: Roster, config: &Config) -> Result<()> {
    println!(
        "🧩 従業員 {}名 / 職種 {}件 で開始",
        roster.employees().len(),
        roster.job_roles().len()
    );
    println!("---\n");

    loop {
        let selection = Select::new()
            .with_prompt("操作を選択")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()
            .map_err(|e| SkillMatchError::Interactive(e.to_string()))?;

        let Some(action) = MenuAction::from_index(selection) else {
            continue;
        };
        debug!(?action, "メニュー選択");

        match action {
            MenuAction::AddEmployee => {
                let name = prompt_text("名前")?;
                let skills = prompt_text("スキル（カンマ区切り）")?;
                if add_employee(&mut roster, &name, &skills) {
                    println!("  → 追加しました\n");
                } else {
                    println!();
                }
            }
            MenuAction::AddJobRole => {
                let title = prompt_text("職種名")?;
                let skills = prompt_text("必要スキル（カンマ区切り）")?;
                if add_job_role(&mut roster, &title, &skills) {
                    println!("  → 追加しました\n");
                } else {
                    println!();
                }
            }
            MenuAction::ShowRoster => {
                println!("{}", render_roster(&roster));
            }
            MenuAction::ShowMatches => {
                println!("{}", render_match_table(&roster.match_table()));
            }
            MenuAction::Export => {
                let output = config.resolve_output(None);
                export_results(&roster, config.default_format, &output, &config.title)?;
                println!();
            }
            MenuAction::Quit => {
                println!("終了します（名簿は保存されません）");
                break;
            }
        }
    }

    Ok(())
}

/// 1行入力（空入力可）
fn prompt_text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| SkillMatchError::Interactive(e.to_string()))
}
