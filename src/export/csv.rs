use crate::error::ExportError;
use crate::model::{ReportRow, SortCriterion, REPORT_COLUMNS};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "ifc_unique_";

/// Report file name for a criterion, e.g. `ifc_unique_price.csv`.
#[must_use]
pub fn report_file_name(criterion: SortCriterion) -> String {
    format!("{FILE_PREFIX}{}.csv", criterion.file_tag())
}

#[must_use]
pub fn report_path(output_dir: &Path, criterion: SortCriterion) -> PathBuf {
    output_dir.join(report_file_name(criterion))
}

/// Serializes report rows as `;`-separated CSV. The header is written even
/// when there are no rows.
pub fn write_rows<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(REPORT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

/// Writes the report to `path`.
///
/// Rows go to a temporary sibling first, renamed into place once complete, so
/// a failed export never leaves a truncated report behind.
pub fn export_csv<P: AsRef<Path>>(rows: &[ReportRow], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let tmp_path = path_ref.with_extension("csv.tmp");

    let file = File::create(&tmp_path).map_err(|source| ExportError::FileCreate {
        path: tmp_path.clone(),
        source,
    })?;

    let result = write_rows(rows, file).and_then(|()| {
        std::fs::rename(&tmp_path, path_ref).map_err(|source| ExportError::FileCreate {
            path: path_ref.to_path_buf(),
            source,
        })
    });

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(sub_type: &str, count: usize) -> ReportRow {
        ReportRow {
            classification: "23-10 Walls".to_string(),
            sub_type: sub_type.to_string(),
            name: "Basic Wall:Generic".to_string(),
            count,
            company: "Brick Co".to_string(),
            product: "Brick".to_string(),
            product_code: "B-7".to_string(),
            price: "80".to_string(),
            co2: "20".to_string(),
            lead_time: "30".to_string(),
        }
    }

    #[test]
    fn file_name_carries_criterion_tag() {
        assert_eq!(report_file_name(SortCriterion::Price), "ifc_unique_price.csv");
        assert_eq!(report_file_name(SortCriterion::Co2), "ifc_unique_co2.csv");
        assert_eq!(
            report_path(Path::new("/data"), SortCriterion::LeadTime),
            PathBuf::from("/data/ifc_unique_leadtime.csv")
        );
    }

    #[test]
    fn writes_header_and_rows_in_column_order() {
        let mut out = Vec::new();
        write_rows(&[row("Basic Wall", 2), row("Curtain; Wall", 1)], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "OmniClass;Object Type;Name;Count;Company;Product;Product Code;Price;CO2_Emissions;Lead Time",
                "23-10 Walls;Basic Wall;Basic Wall:Generic;2;Brick Co;Brick;B-7;80;20;30",
                "23-10 Walls;\"Curtain; Wall\";Basic Wall:Generic;1;Brick Co;Brick;B-7;80;20;30",
            ]
        );
    }

    #[test]
    fn empty_report_still_has_header() {
        let mut out = Vec::new();
        write_rows(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OmniClass;Object Type;Name;Count;Company;Product;Product Code;Price;CO2_Emissions;Lead Time\n"
        );
    }

    #[test]
    fn export_replaces_file_and_leaves_no_temp() {
        let dir = std::env::temp_dir().join(format!("ifc-report-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(report_file_name(SortCriterion::Price));

        export_csv(&[row("Basic Wall", 2)], &path).unwrap();
        export_csv(&[row("Curtain Wall", 1)], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Curtain Wall"));
        assert!(!text.contains("Basic Wall;"));
        assert!(!path.with_extension("csv.tmp").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let path = Path::new("/nonexistent/dir/ifc_unique_price.csv");
        let err = export_csv(&[row("Basic Wall", 1)], path).unwrap_err();
        assert!(matches!(err, ExportError::FileCreate { .. }));
    }
}
