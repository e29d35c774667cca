use std::path::Path;

use crate::error::ExportError;
use crate::session::ClassificationRecord;

/// Column headers of the exported table, in order.
pub const HEADERS: [&str; 2] = ["image_path", "label"];

/// Writes classification results as a two-column CSV table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultExporter;

impl ResultExporter {
    /// Export the provided records with headers `image_path,label`, one row per
    /// record in order. Nothing in `records` is modified, so a failed export
    /// can simply be retried.
    pub fn export(
        &self,
        records: &[ClassificationRecord],
        destination: impl AsRef<Path>,
    ) -> Result<(), ExportError> {
        let path = destination.as_ref();
        write_csv(records, path).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("exported {} records to {}", records.len(), path.display());
        Ok(())
    }

    /// Read back a file written by [`ResultExporter::export`].
    pub fn read_records(
        &self,
        source: impl AsRef<Path>,
    ) -> Result<Vec<ClassificationRecord>, ExportError> {
        let path = source.as_ref();
        let wrap = |source: csv::Error| ExportError::Read {
            path: path.to_path_buf(),
            source,
        };
        let mut rdr = csv::Reader::from_path(path).map_err(wrap)?;
        let headers = rdr.headers().map_err(wrap)?.clone();
        if headers.iter().ne(HEADERS) {
            return Err(wrap(csv::Error::from(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unexpected headers: {headers:?}"),
            ))));
        }
        rdr.deserialize::<ClassificationRecord>()
            .collect::<Result<_, _>>()
            .map_err(wrap)
    }
}

fn write_csv(records: &[ClassificationRecord], path: &Path) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.write_record([
            record.image_path.to_string_lossy().as_ref(),
            record.label.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn export_writes_expected_headers_and_rows() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        let records = vec![
            ClassificationRecord {
                image_path: PathBuf::from("/data/b.jpg"),
                label: "dog".into(),
            },
            ClassificationRecord {
                image_path: PathBuf::from("/data/a, b.png"),
                label: "cat".into(),
            },
        ];

        ResultExporter.export(&records, &path)?;

        let mut rdr = csv::Reader::from_path(&path)?;
        let headers = rdr.headers()?.clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["image_path", "label"]);

        let mut recs = rdr.records();
        let r1 = recs.next().unwrap()?;
        assert_eq!(&r1[0], "/data/b.jpg");
        assert_eq!(&r1[1], "dog");
        let r2 = recs.next().unwrap()?;
        assert_eq!(&r2[0], "/data/a, b.png");
        assert_eq!(&r2[1], "cat");
        assert!(recs.next().is_none());

        assert_eq!(ResultExporter.read_records(&path)?, records);
        Ok(())
    }

    #[test]
    fn export_of_no_records_writes_only_headers() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.csv");
        ResultExporter.export(&[], &path)?;

        assert_eq!(std::fs::read_to_string(&path)?, "image_path,label\n");
        assert!(ResultExporter.read_records(&path)?.is_empty());
        Ok(())
    }

    #[test]
    fn export_into_missing_folder_fails_with_write_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nope").join("out.csv");
        let err = ResultExporter.export(&[], &path).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
        Ok(())
    }

    #[test]
    fn read_rejects_foreign_tables() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("other.csv");
        std::fs::write(&path, "file,species\na.jpg,cat\n")?;
        let err = ResultExporter.read_records(&path).unwrap_err();
        assert!(matches!(err, ExportError::Read { .. }));
        Ok(())
    }
}
