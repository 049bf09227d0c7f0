//! CSV report writer.
//!
//! Files are written straight into the save directory and overwrite whatever
//! is there. There is no temporary-file dance: a failed write can leave a
//! partial file behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use log::info;

use crate::error::{EmolexError, Result};
use crate::report::CsvRow;

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes report tables as UTF-8 CSV files into one directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
    bom: bool,
}

impl ReportWriter {
    /// Create a writer for `dir`, creating the directory (and its parents)
    /// if needed.
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if dir.exists() && !dir.is_dir() {
            return Err(EmolexError::report(format!(
                "Save path exists and is not a directory: {}",
                dir.display()
            )));
        }
        fs::create_dir_all(dir)?;

        Ok(ReportWriter {
            dir: dir.to_path_buf(),
            bom: true,
        })
    }

    /// Set whether files start with a UTF-8 byte-order mark (default: true).
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    /// Write one table. The header row is written even if `rows` is empty.
    pub fn write_table<R: CsvRow>(&self, file_name: &str, rows: &[R]) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        let mut file = File::create(&path)?;
        if self.bom {
            file.write_all(UTF8_BOM)?;
        }

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(R::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        info!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::report::{EmotionTotal, TokenFrequency};

    #[test]
    fn test_write_table() {
        let dir = TempDir::new().unwrap();
        let writer = ReportWriter::create(dir.path()).unwrap().with_bom(false);

        let rows = vec![
            EmotionTotal {
                emotion: "joy".to_string(),
                frequency: 2,
            },
            EmotionTotal {
                emotion: "trust".to_string(),
                frequency: 1,
            },
        ];
        let path = writer.write_table("emotion_totals.csv", &rows).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "emotion,frequency\njoy,2\ntrust,1\n");
    }

    #[test]
    fn test_bom_and_empty_table() {
        let dir = TempDir::new().unwrap();
        let writer = ReportWriter::create(dir.path()).unwrap();

        let rows: Vec<TokenFrequency> = Vec::new();
        let path = writer.write_table("token_frequencies.csv", &rows).unwrap();

        let bytes = fs::read(path).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
        assert_eq!(&bytes[3..], b"token,frequency\n");
    }

    #[test]
    fn test_creates_nested_directory_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("a").join("b");
        let writer = ReportWriter::create(&out).unwrap().with_bom(false);
        assert!(out.is_dir());

        let first = vec![TokenFrequency {
            token: "joy".to_string(),
            frequency: 5,
        }];
        writer.write_table("t.csv", &first).unwrap();
        let path = writer.write_table::<TokenFrequency>("t.csv", &[]).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "token,frequency\n");
    }

    #[test]
    fn test_save_path_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();

        assert!(ReportWriter::create(&file).is_err());
    }
}
