use crate::input::EntryArg;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-match")]
#[command(about = "従業員と職種のスキルマッチングツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 名簿の入力（コマンド共通）
#[derive(Args, Clone, Debug, Default)]
pub struct RosterArgs {
    /// 従業員を追加（"名前=スキル1, スキル2"、複数指定可）
    #[arg(short = 'e', long = "employee", value_name = "名前=スキル")]
    pub employees: Vec<EntryArg>,

    /// 職種を追加（"職種名=スキル1, スキル2"、複数指定可）
    #[arg(short = 'j', long = "job", value_name = "職種名=スキル")]
    pub job_roles: Vec<EntryArg>,

    /// 初期データを読み込まない
    #[arg(long)]
    pub no_sample: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名簿とマッチング結果を表示
    Show {
        #[command(flatten)]
        roster: RosterArgs,

        /// グラフ入力JSONを出力
        #[arg(long)]
        json: bool,
    },

    /// マッチング結果をJSON/Excelに出力
    Export {
        #[command(flatten)]
        roster: RosterArgs,

        /// 出力形式 (json/excel/both)（省略時は設定値）
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// タイトル（省略時は設定値）
        #[arg(short, long)]
        title: Option<String>,
    },

    /// 対話的に従業員・職種を追加
    Interactive {
        #[command(flatten)]
        roster: RosterArgs,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// タイトルを設定
        #[arg(long)]
        set_title: Option<String>,

        /// 既定の出力形式を設定
        #[arg(long)]
        set_format: Option<ExportFormat>,

        /// 初期データの読み込み有無を設定
        #[arg(long)]
        set_sample: Option<bool>,

        /// 既定の出力先を設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
