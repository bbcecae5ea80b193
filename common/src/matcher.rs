//! スキル照合
//!
//! 従業員の保有スキルと職種の必要スキルからマッチ率（0〜100）を算出する。
//! 比較は完全一致（大文字小文字・空白を区別）。

/// カンマ区切りのスキル文字列を分割
///
/// 各要素は前後の空白を除去する。空要素（"a,,b" の中央など）もそのまま残す。
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|skill| skill.trim().to_string()).collect()
}

/// マッチ率を算出
///
/// 保有スキルのうち必要スキルに含まれる要素数 ÷ 必要スキル数 × 100。
/// 保有スキルの重複はそれぞれ1件として数える。
///
/// - 必要スキルが空の場合は 0
/// - 重複で100を超える場合は100で頭打ち
pub fn match_percentage(employee_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }

    let matched = employee_skills
        .iter()
        .filter(|skill| required_skills.contains(skill))
        .count();

    let ratio = matched as f64 / required_skills.len() as f64 * 100.0;
    ratio.min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_match() {
        let result = match_percentage(&skills(&["a", "b", "c"]), &skills(&["b", "c", "d"]));
        assert!((result - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", result), "66.67");
    }

    #[test]
    fn test_self_match_is_100() {
        let s = skills(&["プロジェクト管理", "リーダーシップ", "コミュニケーション"]);
        assert_eq!(match_percentage(&s, &s), 100.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let result = match_percentage(&skills(&["データ分析"]), &skills(&["統計学", "営業"]));
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_empty_required_is_zero() {
        assert_eq!(match_percentage(&skills(&["a"]), &[]), 0.0);
        assert_eq!(match_percentage(&[], &[]), 0.0);
    }

    #[test]
    fn test_empty_employee_skills() {
        assert_eq!(match_percentage(&[], &skills(&["a"])), 0.0);
    }

    #[test]
    fn test_case_and_whitespace_sensitive() {
        let required = skills(&["Rust"]);
        assert_eq!(match_percentage(&skills(&["rust"]), &required), 0.0);
        assert_eq!(match_percentage(&skills(&["Rust "]), &required), 0.0);
        assert_eq!(match_percentage(&skills(&["Rust"]), &required), 100.0);
    }

    #[test]
    fn test_duplicates_counted_per_element() {
        // 重複はそれぞれ数える: 2/4 = 50%
        let result = match_percentage(&skills(&["a", "a"]), &skills(&["a", "b", "c", "d"]));
        assert_eq!(result, 50.0);
    }

    #[test]
    fn test_duplicates_clamped_to_100() {
        let result = match_percentage(&skills(&["a", "a", "a"]), &skills(&["a"]));
        assert_eq!(result, 100.0);
    }

    #[test]
    fn test_range_for_various_inputs() {
        let cases = [
            (vec!["a"], vec!["a", "b"]),
            (vec!["x", "y", "z"], vec!["y"]),
            (vec![], vec!["a", "b", "c"]),
            (vec!["a", "b", "a", "b"], vec!["a", "b", "c"]),
        ];

        for (employee, required) in cases {
            let result = match_percentage(&skills(&employee), &skills(&required));
            assert!((0.0..=100.0).contains(&result), "範囲外: {}", result);
        }
    }

    #[test]
    fn test_parse_skill_list_trims() {
        assert_eq!(parse_skill_list("a, b ,  c"), skills(&["a", "b", "c"]));
    }

    #[test]
    fn test_parse_skill_list_keeps_empty_pieces() {
        assert_eq!(parse_skill_list("a,,b"), skills(&["a", "", "b"]));
        assert_eq!(parse_skill_list(" "), skills(&[""]));
    }

    #[test]
    fn test_parse_skill_list_japanese() {
        assert_eq!(
            parse_skill_list("データ分析,プログラミング, 問題解決"),
            skills(&["データ分析", "プログラミング", "問題解決"])
        );
    }
}
