//! CSV reading and writing for the 7-column TestRail shape.
//!
//! Reads are strict about encoding and schema: a non-UTF-8 file or a header
//! missing required columns aborts before any per-row work. Writes always
//! quote every field and emit the canonical column order, regardless of how
//! the input was laid out.

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

use crate::columns::REQUIRED_COLUMNS;
use crate::record::TestCaseRecord;

/// UTF-8 byte order mark. TestRail exports sometimes carry one; it is
/// stripped on read so the first header cell parses as `Section`.
pub const UTF8_BOM: &str = "\u{feff}";

/// Read a case file into records. Fails on missing file, non-UTF-8 content,
/// or missing required columns.
pub fn read_case_file(path: &Path) -> Result<Vec<TestCaseRecord>> {
    let content = read_utf8(path)?;
    records_from_str(&content)
        .with_context(|| format!("failed to parse CSV: {}", path.display()))
}

/// Read a file as UTF-8, rejecting undecodable content with a clear message.
pub fn read_utf8(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))?;
    let content = String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("file is not valid UTF-8: {}", path.display()))?;
    Ok(content)
}

/// Parse CSV text into records. The header must contain all seven required
/// columns; extra columns are ignored. A leading BOM is stripped.
pub fn records_from_str(content: &str) -> Result<Vec<TestCaseRecord>> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .context("CSV file has no header row")?
        .clone();
    let present: Vec<&str> = headers.iter().collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(col))
        .copied()
        .collect();
    if !missing.is_empty() {
        anyhow::bail!("missing required column(s): {}", missing.join(", "));
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: TestCaseRecord = result.context("failed to parse CSV row")?;
        records.push(record);
    }
    Ok(records)
}

/// Write records with the canonical header, every field quoted.
pub fn write_case_file(path: &Path, records: &[TestCaseRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .context("failed to write CSV row")?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write output file: {}", path.display()))?;
    Ok(())
}

/// Output path for the new-file filter variants: `<stem>_happy<ext>` next to
/// the input.
pub fn happy_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_happy{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Section,Section Hierarchy,Title,Preconditions,Steps,Expected Result,Priority";

    #[test]
    fn parses_case_and_marker_rows() {
        let csv = format!(
            "{HEADER}\n\
             \"로그인\",\"로그인\",\"\",\"\",\"\",\"\",\"\"\n\
             \"로그인\",\"로그인\",\"로그인 성공\",\"계정 존재\",\"1. 로그인\",\"메인 페이지 이동\",\"High\"\n"
        );
        let records = records_from_str(&csv).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_section_marker());
        assert_eq!(records[1].title, "로그인 성공");
        assert_eq!(records[1].priority, "High");
    }

    #[test]
    fn missing_column_is_fatal_and_named() {
        let csv = "Section,Section Hierarchy,Title,Preconditions,Steps,Expected Result\n";
        let err = records_from_str(csv).unwrap_err();
        assert!(err.to_string().contains("Priority"), "got: {err}");
    }

    #[test]
    fn strips_leading_bom() {
        let csv = format!("\u{feff}{HEADER}\n");
        assert!(records_from_str(&csv).unwrap().is_empty());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = format!(
            "{HEADER},Notes\n\"A\",\"A\",\"제목\",\"\",\"1. 이동\",\"표시됨\",\"Low\",\"extra\"\n"
        );
        let records = records_from_str(&csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].section, "A");
    }

    #[test]
    fn happy_output_path_appends_suffix_before_extension() {
        let path = happy_output_path(Path::new("/tmp/로그인_테스트케이스.csv"));
        assert_eq!(
            path,
            Path::new("/tmp/로그인_테스트케이스_happy.csv")
        );
    }

    #[test]
    fn happy_output_path_without_extension() {
        let path = happy_output_path(Path::new("cases"));
        assert_eq!(path, Path::new("cases_happy"));
    }

    #[test]
    fn write_quotes_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let record = TestCaseRecord {
            section: "로그인".to_string(),
            title: "로그인 성공".to_string(),
            ..Default::default()
        };
        write_case_file(&path, &[record]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next().unwrap(), format!("\"{}\"", HEADER.replace(',', "\",\"")));
        assert_eq!(
            lines.next().unwrap(),
            "\"로그인\",\"\",\"로그인 성공\",\"\",\"\",\"\",\"\""
        );
    }
}
