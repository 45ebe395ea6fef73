//! Download encodings for the generated test cases.
//!
//! The CSV encoding wraps every field in double quotes but does not escape
//! quotes inside a field; commas in the steps column are replaced with
//! semicolons instead.

use chrono::NaiveDate;

const EXPECTED_RESULT: &str = "As per requirement";
const HEADERS: [&str; 4] = ["Test Case ID", "Description", "Steps", "Expected Result"];

/// Output encodings offered for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    /// Tab-separated text that spreadsheet applications open directly.
    Excel,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Excel, ExportFormat::Text];

    /// File extension suggested for the download.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xls",
            ExportFormat::Text => "txt",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Excel => "application/vnd.ms-excel",
            ExportFormat::Text => "text/plain",
        }
    }

    /// Button caption in the results panel.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
            ExportFormat::Text => "Text",
        }
    }

    /// Default download name, e.g. `test_cases_2025-01-31.csv`.
    pub fn default_file_name(self, date: NaiveDate) -> String {
        format!("test_cases_{}.{}", date.format("%Y-%m-%d"), self.extension())
    }
}

/// Content ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub format: ExportFormat,
    pub content: String,
}

impl ExportFile {
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }
}

/// Encodes the whole list in the requested format.
///
/// # Examples
///
/// ```
/// use casegen_core::{ExportFormat, export};
///
/// let cases = vec!["Scenario: A".to_string(), "Scenario: B".to_string()];
/// assert_eq!(export(&cases, ExportFormat::Text), "Scenario: A\n\nScenario: B");
/// ```
pub fn export(test_cases: &[String], format: ExportFormat) -> String {
    match format {
        ExportFormat::Text => test_cases.join("\n\n"),
        ExportFormat::Csv => to_csv(test_cases),
        ExportFormat::Excel => to_tab_separated(test_cases),
    }
}

/// Column values shared by the CSV and spreadsheet encodings.
struct Row<'a> {
    id: String,
    description: &'a str,
    steps: String,
}

fn rows(test_cases: &[String]) -> impl Iterator<Item = Row<'_>> {
    test_cases.iter().enumerate().map(|(index, case)| {
        let mut lines = case.split('\n');
        let description = lines.next().unwrap_or_default();
        let steps = lines.collect::<Vec<_>>().join(" ");
        Row {
            id: case_id(index),
            description,
            steps,
        }
    })
}

fn case_id(index: usize) -> String {
    format!("TC_{:03}", index + 1)
}

fn to_csv(test_cases: &[String]) -> String {
    let mut out = HEADERS.join(",");
    out.push('\n');
    for row in rows(test_cases) {
        let steps = row.steps.replace(',', ";");
        out.push_str(&format!(
            "\"{}\",\"{}\",\"{}\",\"{}\"\n",
            row.id, row.description, steps, EXPECTED_RESULT
        ));
    }
    out
}

fn to_tab_separated(test_cases: &[String]) -> String {
    let mut out = HEADERS.join("\t");
    out.push('\n');
    for row in rows(test_cases) {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            row.id, row.description, row.steps, EXPECTED_RESULT
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use rstest::rstest;

    fn cases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn text_joins_with_blank_lines() {
        assert_eq!(export(&[], ExportFormat::Text), "");
        assert_eq!(export(&cases(&["A"]), ExportFormat::Text), "A");
        assert_eq!(
            export(&cases(&["A\nB", "C"]), ExportFormat::Text),
            "A\nB\n\nC"
        );
    }

    #[test]
    fn csv_rows_follow_the_header() {
        let out = export(&cases(&["Line1\nLine2,x", "Line3"]), ExportFormat::Csv);
        assert_eq!(
            out,
            "Test Case ID,Description,Steps,Expected Result\n\
             \"TC_001\",\"Line1\",\"Line2;x\",\"As per requirement\"\n\
             \"TC_002\",\"Line3\",\"\",\"As per requirement\"\n"
        );
    }

    #[test]
    fn csv_of_empty_list_is_only_the_header() {
        assert_eq!(
            export(&[], ExportFormat::Csv),
            "Test Case ID,Description,Steps,Expected Result\n"
        );
    }

    #[test]
    fn csv_is_readable_by_a_csv_parser() -> Result<()> {
        let out = export(
            &cases(&["Scenario: login\nGiven a, b\nThen c", "Scenario: logout"]),
            ExportFormat::Csv,
        );
        let mut rdr = csv::Reader::from_reader(out.as_bytes());
        assert_eq!(
            rdr.headers()?.iter().collect::<Vec<_>>(),
            vec!["Test Case ID", "Description", "Steps", "Expected Result"]
        );
        let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "TC_001");
        assert_eq!(&records[0][1], "Scenario: login");
        assert_eq!(&records[0][2], "Given a; b Then c");
        assert_eq!(&records[1][2], "");
        Ok(())
    }

    #[test]
    fn csv_leaves_embedded_quotes_unescaped() {
        // Known gap: a quote in the description breaks the field boundary.
        let out = export(&cases(&["Scenario: say \"hi\""]), ExportFormat::Csv);
        let row = out.lines().nth(1).unwrap_or_default();
        assert_eq!(
            row,
            "\"TC_001\",\"Scenario: say \"hi\"\",\"\",\"As per requirement\""
        );
    }

    #[test]
    fn excel_keeps_commas_and_uses_tabs() {
        let out = export(&cases(&["Line1\nLine2,x\nLine3", "Solo"]), ExportFormat::Excel);
        assert_eq!(
            out,
            "Test Case ID\tDescription\tSteps\tExpected Result\n\
             TC_001\tLine1\tLine2,x Line3\tAs per requirement\n\
             TC_002\tSolo\t\tAs per requirement\n"
        );
    }

    #[test]
    fn ids_are_zero_padded_and_grow_past_three_digits() {
        let many: Vec<String> = (0..1000).map(|i| format!("Scenario {i}")).collect();
        let out = export(&many, ExportFormat::Excel);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("TC_001\t"));
        assert!(lines[999].starts_with("TC_999\t"));
        assert!(lines[1000].starts_with("TC_1000\t"));
    }

    #[test]
    fn export_does_not_touch_the_input() {
        let list = cases(&["Scenario: a\nb,c"]);
        let before = list.clone();
        for format in ExportFormat::ALL {
            let first = export(&list, format);
            assert_eq!(first, export(&list, format));
        }
        assert_eq!(list, before);
    }

    #[rstest]
    #[case(ExportFormat::Csv, "test_cases_2025-03-07.csv", "text/csv")]
    #[case(ExportFormat::Excel, "test_cases_2025-03-07.xls", "application/vnd.ms-excel")]
    #[case(ExportFormat::Text, "test_cases_2025-03-07.txt", "text/plain")]
    fn file_naming(#[case] format: ExportFormat, #[case] name: &str, #[case] mime: &str) {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format.default_file_name(date), name);
        assert_eq!(format.mime_type(), mime);
    }
}
