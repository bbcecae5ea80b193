//! Excel生成（共通ライブラリ）
//!
//! マッチング表・棒グラフ・名簿一覧を1つのブックにまとめる。

use crate::chart::series_color_rgb;
use crate::error::{Error, Result};
use crate::roster::Roster;
use rust_xlsxwriter::*;

/// マッチング結果シート名
pub const MATCH_SHEET: &str = "Match";
/// 従業員一覧シート名
pub const EMPLOYEE_SHEET: &str = "Employees";
/// 職種一覧シート名
pub const JOB_ROLE_SHEET: &str = "JobRoles";

/// 見出し行
const HEADER_ROW: u32 = 1;
/// 表の先頭行（タイトル・見出しの下）
const DATA_START_ROW: u32 = 2;

fn excel_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Export(format!("{}: {}", context, e))
}

/// マッチング結果のExcelをバッファに生成
///
/// # Arguments
/// * `roster` - 集計対象の名簿（表は呼び出し時点の内容から再計算する）
/// * `title` - シート先頭とグラフのタイトル
/// * `generated_at` - タイトル横に出力する作成日時
pub fn generate_match_workbook(
    roster: &Roster,
    title: &str,
    generated_at: Option<&str>,
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let percent_format = Format::new()
        .set_num_format("0.00")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let table = roster.match_table();
    let job_roles = roster.job_roles();

    // マッチング結果シート
    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(MATCH_SHEET)
            .map_err(excel_err("シート名設定エラー"))?;

        worksheet
            .write_string_with_format(0, 0, title, &title_format)
            .map_err(excel_err("タイトル書き込みエラー"))?;
        if let Some(stamp) = generated_at {
            worksheet
                .write_string(0, 2, stamp)
                .map_err(excel_err("作成日時書き込みエラー"))?;
        }

        worksheet
            .set_column_width(0, 16.0)
            .map_err(excel_err("列幅設定エラー"))?;
        worksheet
            .write_string_with_format(HEADER_ROW, 0, "従業員", &header_format)
            .map_err(excel_err("見出し書き込みエラー"))?;

        for (i, role) in job_roles.iter().enumerate() {
            let col = i as u16 + 1;
            worksheet
                .set_column_width(col, 18.0)
                .map_err(excel_err("列幅設定エラー"))?;
            worksheet
                .write_string_with_format(HEADER_ROW, col, &role.title, &header_format)
                .map_err(excel_err("見出し書き込みエラー"))?;
        }

        for (i, row) in table.iter().enumerate() {
            let excel_row = DATA_START_ROW + i as u32;
            worksheet
                .write_string_with_format(excel_row, 0, &row.employee_name, &text_format)
                .map_err(excel_err("従業員名書き込みエラー"))?;

            // スコアは職種順に並んでいる
            for (j, score) in row.scores.iter().enumerate() {
                worksheet
                    .write_number_with_format(excel_row, j as u16 + 1, score.percentage, &percent_format)
                    .map_err(excel_err("マッチ率書き込みエラー"))?;
            }
        }

        // 従業員・職種のどちらかが空ならグラフは作らない
        if !table.is_empty() && !job_roles.is_empty() {
            let last_row = DATA_START_ROW + table.len() as u32 - 1;
            let mut chart = Chart::new(ChartType::Column);
            chart.title().set_name(title);
            chart.x_axis().set_name("従業員");
            chart.y_axis().set_name("マッチ率（%）");

            for (i, role) in job_roles.iter().enumerate() {
                let col = i as u16 + 1;
                chart
                    .add_series()
                    .set_name((MATCH_SHEET, HEADER_ROW, col))
                    .set_categories((MATCH_SHEET, DATA_START_ROW, 0, last_row, 0))
                    .set_values((MATCH_SHEET, DATA_START_ROW, col, last_row, col))
                    .set_format(
                        ChartFormat::new().set_solid_fill(
                            ChartSolidFill::new().set_color(Color::RGB(series_color_rgb(role.id))),
                        ),
                    );
            }

            worksheet
                .insert_chart(last_row + 2, 0, &chart)
                .map_err(excel_err("グラフ挿入エラー"))?;
        }
    }

    // 従業員一覧シート
    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(EMPLOYEE_SHEET)
            .map_err(excel_err("シート名設定エラー"))?;
        write_list_header(worksheet, &["ID", "名前", "スキル"], &header_format)?;

        for (i, employee) in roster.employees().iter().enumerate() {
            let row = i as u32 + 1;
            write_list_row(
                worksheet,
                row,
                employee.id,
                &employee.name,
                &employee.skills.join(", "),
                &text_format,
            )?;
        }
    }

    // 職種一覧シート
    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(JOB_ROLE_SHEET)
            .map_err(excel_err("シート名設定エラー"))?;
        write_list_header(worksheet, &["ID", "職種名", "必要スキル"], &header_format)?;

        for (i, role) in job_roles.iter().enumerate() {
            let row = i as u32 + 1;
            write_list_row(
                worksheet,
                row,
                role.id,
                &role.title,
                &role.required_skills.join(", "),
                &text_format,
            )?;
        }
    }

    // バッファに書き出し
    workbook.save_to_buffer().map_err(excel_err("Excel保存エラー"))
}

fn write_list_header(worksheet: &mut Worksheet, labels: &[&str], format: &Format) -> Result<()> {
    for (col, label) in labels.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *label, format)
            .map_err(excel_err("見出し書き込みエラー"))?;
    }
    worksheet
        .set_column_width(1, 20.0)
        .map_err(excel_err("列幅設定エラー"))?;
    worksheet
        .set_column_width(2, 48.0)
        .map_err(excel_err("列幅設定エラー"))?;
    Ok(())
}

fn write_list_row(
    worksheet: &mut Worksheet,
    row: u32,
    id: u32,
    label: &str,
    skills: &str,
    format: &Format,
) -> Result<()> {
    worksheet
        .write_number_with_format(row, 0, id as f64, format)
        .map_err(excel_err("ID書き込みエラー"))?;
    worksheet
        .write_string_with_format(row, 1, label, format)
        .map_err(excel_err("名前書き込みエラー"))?;
    worksheet
        .write_string_with_format(row, 2, skills, format)
        .map_err(excel_err("スキル書き込みエラー"))?;
    Ok(())
}
