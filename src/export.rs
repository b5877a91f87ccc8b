//! CSV export of extracted rows.

use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::models::OutputRow;

/// Write rows as CSV to any writer, header included
///
/// The header comes from the serde renames on [`OutputRow`], so an empty row
/// set still produces the six-column header line.
pub fn write_csv<W: Write>(writer: W, rows: &[OutputRow]) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        csv_writer.write_record([
            "PubmedID",
            "Title",
            "Publication Date",
            "Non-academic Author(s)",
            "Company Affiliation(s)",
            "Corresponding Author Email",
        ])?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write rows as CSV to a file path
pub fn write_csv_file(path: &Path, rows: &[OutputRow]) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    write_csv(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> OutputRow {
        OutputRow {
            pubmed_id: "12345678".to_string(),
            title: "A study of things".to_string(),
            publication_date: "2020-03-5".to_string(),
            non_academic_authors: "Doe John".to_string(),
            company_affiliations: "XYZ Pharma Inc, Boston".to_string(),
            corresponding_email: "jdoe@harvard.edu".to_string(),
        }
    }

    #[test]
    fn test_header_and_one_row() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[sample_row()]).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "PubmedID,Title,Publication Date,Non-academic Author(s),\
             Company Affiliation(s),Corresponding Author Email"
        );
        // The company field contains a comma, so it must be quoted.
        assert_eq!(
            lines.next().unwrap(),
            "12345678,A study of things,2020-03-5,Doe John,\
             \"XYZ Pharma Inc, Boston\",jdoe@harvard.edu"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_rows_still_write_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("PubmedID,"));
    }
}
