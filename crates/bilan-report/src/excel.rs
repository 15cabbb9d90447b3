//! Excel workbook output.

use std::path::Path;

use bilan_ratios::RatioTable;
use polars::prelude::*;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};

use crate::Result;

/// Sheet holding the input table verbatim.
pub const RAW_DATA_SHEET: &str = "Raw Data";

/// Sheet holding the ratio table.
pub const RATIOS_SHEET: &str = "Ratios";

/// Writes the raw input and the ratio table to an `.xlsx` workbook.
///
/// Both sheets get a bold header row. Nulls and NaN are left blank, infinite
/// values are written as the strings `inf` and `-inf`.
pub fn write_workbook(raw: &DataFrame, ratios: &RatioTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(RAW_DATA_SHEET)?;
    write_frame(sheet, raw, &header)?;
    sheet.set_freeze_panes(1, 0)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(RATIOS_SHEET)?;
    write_frame(sheet, &ratios.to_dataframe()?, &header)?;
    sheet.set_freeze_panes(1, 1)?;

    workbook.save(path)?;
    Ok(())
}

fn write_frame(sheet: &mut Worksheet, frame: &DataFrame, header: &Format) -> Result<()> {
    for (col, column) in frame.get_columns().iter().enumerate() {
        let col = col as ColNum;
        sheet.write_string_with_format(0, col, column.name().as_str(), header)?;

        for row in 0..frame.height() {
            let value = column.get(row)?;
            write_any_value(sheet, row as RowNum + 1, col, &value)?;
        }
    }
    Ok(())
}

fn write_any_value(
    sheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: &AnyValue<'_>,
) -> Result<()> {
    match value {
        AnyValue::Null => {}
        AnyValue::String(s) => {
            sheet.write_string(row, col, *s)?;
        }
        AnyValue::StringOwned(s) => {
            sheet.write_string(row, col, s.as_str())?;
        }
        AnyValue::Boolean(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        other => match other.extract::<f64>() {
            Some(number) => write_float(sheet, row, col, number)?,
            None => {
                sheet.write_string(row, col, other.to_string())?;
            }
        },
    }
    Ok(())
}

fn write_float(sheet: &mut Worksheet, row: RowNum, col: ColNum, value: f64) -> Result<()> {
    if value.is_nan() {
        return Ok(());
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        sheet.write_string(row, col, text)?;
    } else {
        sheet.write_number(row, col, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilan_ratios::{RATIO_COLUMNS, RatioRecord};
    use bilan_types::Period;
    use std::io::Read;

    fn record(period: &str, roa: f64) -> RatioRecord {
        RatioRecord {
            period: Period::from(period),
            gross_margin: 0.4,
            operating_margin: 0.2,
            net_margin: 0.1,
            current_ratio: 2.0,
            quick_ratio: 1.0,
            debt_to_equity: f64::NEG_INFINITY,
            asset_turnover: 0.5,
            roa,
            roe: 0.1,
            interest_coverage: f64::INFINITY,
            revenue_growth_yoy: None,
            net_income_growth_yoy: None,
        }
    }

    /// Reads one XML part out of a saved workbook.
    fn read_part(path: &Path, name: &str) -> String {
        let file = std::fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut part = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut part)
            .unwrap();
        part
    }

    fn sample_workbook(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("report.xlsx");
        let raw = df! {
            "period" => &["2021", "2022"],
            "revenue" => &[Some(100i64), None],
            "segment" => &["retail", "wholesale"],
            "audited" => &[true, false],
        }
        .unwrap();
        let ratios = RatioTable::new(vec![record("2021", f64::NAN)]);

        write_workbook(&raw, &ratios, &path).unwrap();
        path
    }

    #[test]
    fn test_sheet_names_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = read_part(&sample_workbook(dir.path()), "xl/workbook.xml");

        let raw = workbook.find(r#"<sheet name="Raw Data""#).unwrap();
        let ratios = workbook.find(r#"<sheet name="Ratios""#).unwrap();
        assert!(raw < ratios);
    }

    #[test]
    fn test_headers_and_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let strings = read_part(&sample_workbook(dir.path()), "xl/sharedStrings.xml");

        for name in RATIO_COLUMNS {
            assert!(strings.contains(&format!("<t>{name}</t>")), "missing header {name}");
        }
        assert!(strings.contains("<t>segment</t>"));
        assert!(strings.contains("<t>audited</t>"));
        assert!(strings.contains("<t>wholesale</t>"));
    }

    #[test]
    fn test_non_finite_and_missing_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_workbook(dir.path());
        let strings = read_part(&path, "xl/sharedStrings.xml");
        let ratios = read_part(&path, "xl/worksheets/sheet2.xml");

        assert!(strings.contains("<t>inf</t>"));
        assert!(strings.contains("<t>-inf</t>"));
        // G: debt_to_equity, K: interest_coverage, both written as text.
        assert!(ratios.contains(r#"<c r="G2" t="s">"#));
        assert!(ratios.contains(r#"<c r="K2" t="s">"#));
        // I: roa is NaN, L and M: first-period growth is undefined.
        assert!(!ratios.contains(r#"r="I2""#));
        assert!(!ratios.contains(r#"r="L2""#));
        assert!(!ratios.contains(r#"r="M2""#));
        assert!(ratios.contains(r#"<c r="B2"><v>0.4</v></c>"#));
    }

    #[test]
    fn test_raw_nulls_are_blank() {
        let dir = tempfile::tempdir().unwrap();
        let raw = read_part(&sample_workbook(dir.path()), "xl/worksheets/sheet1.xml");

        assert!(raw.contains(r#"<c r="B2"><v>100</v></c>"#));
        assert!(!raw.contains(r#"r="B3""#));
        assert!(raw.contains(r#"<c r="D2" t="b"><v>1</v></c>"#));
    }

    #[test]
    fn test_write_workbook_with_empty_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        write_workbook(&DataFrame::default(), &RatioTable::default(), &path).unwrap();
        let strings = read_part(&path, "xl/sharedStrings.xml");
        assert!(strings.contains("<t>period</t>"));
    }

    #[test]
    fn test_write_workbook_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.xlsx");

        let result = write_workbook(&DataFrame::default(), &RatioTable::default(), &path);
        assert!(result.is_err());
    }
}
