//! 名簿入力からマッチング表までの統合テスト

use skill_match::cli::RosterArgs;
use skill_match::input::{add_employee, build_roster, EntryArg};
use skill_match_common::{build_match_table, match_percentage, Roster};

fn entry(s: &str) -> EntryArg {
    s.parse().expect("パース失敗")
}

#[test]
fn test_partial_match_scenario() {
    let employee: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let required: Vec<String> = ["b", "c", "d"].iter().map(|s| s.to_string()).collect();

    let result = match_percentage(&employee, &required);
    assert!((result - 66.67).abs() < 0.01);
}

#[test]
fn test_add_then_match_from_cli_args() {
    let args = RosterArgs {
        employees: vec![entry("Taro=a, b")],
        job_roles: vec![entry("A=a, b"), entry("B=a, c")],
        no_sample: true,
    };

    let roster = build_roster(&args, true);
    let table = roster.match_table();

    assert_eq!(table.len(), 1);
    assert_eq!(table[0].employee_name, "Taro");
    assert_eq!(table[0].score("A"), Some(100.0));
    assert_eq!(table[0].score("B"), Some(50.0));
}

#[test]
fn test_invalid_input_leaves_roster_unchanged() {
    let mut roster = Roster::with_sample_data();
    let before = roster.match_table();

    assert!(!add_employee(&mut roster, "", "a,b"));
    assert!(!add_employee(&mut roster, "X", ""));

    assert_eq!(roster.employees().len(), 2);
    assert_eq!(roster.match_table(), before);
}

#[test]
fn test_table_recomputed_after_each_addition() {
    let mut roster = Roster::new();
    roster.add_job_role("A", "x, y");
    assert!(roster.match_table().is_empty());

    roster.add_employee("一郎", "x");
    assert_eq!(roster.match_table()[0].score("A"), Some(50.0));

    roster.add_job_role("B", "x");
    let table = roster.match_table();
    assert_eq!(table[0].scores.len(), 2);
    assert_eq!(table[0].score("B"), Some(100.0));
    assert_eq!(table, build_match_table(roster.employees(), roster.job_roles()));
}
