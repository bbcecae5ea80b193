//! Skill Match Common Library
//!
//! スキル照合・名簿・マッチング表の中核ロジック。
//! CLIの表示やエクスポートはここで計算した値をそのまま使う。

pub mod types;
pub mod error;
pub mod matcher;
pub mod roster;
pub mod table;
pub mod chart;
pub mod export;

pub use types::{Employee, JobRole, MatchRow, RoleScore};
pub use error::{Error, Result};
pub use matcher::{match_percentage, parse_skill_list};
pub use roster::Roster;
pub use table::build_match_table;
pub use chart::{series_color, ChartDataPoint, ChartSeries, ChartSpec, PALETTE};
