//! CSV export for resolved quote records.
//!
//! Records append to the target file across runs. A header line is written
//! whenever the field set changes from the previous section, so one file can
//! hold symbol sections and index sections back to back.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use tickergraph_core::{RecordFields, SENTINEL};

pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends the records, preceded by their header when the file does not
    /// already end in a section with the same field set. An empty slice
    /// leaves the file untouched.
    pub fn append<R: RecordFields>(&self, records: &[R]) -> io::Result<()> {
        let Some(first) = records.first() else {
            return Ok(());
        };

        let header = header_line(first);
        let needs_header = self.last_header()?.as_deref() != Some(header.as_str());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_header {
            writeln!(file, "{header}")?;
        }
        for record in records {
            writeln!(file, "{}", row_line(record))?;
        }
        Ok(())
    }

    /// Header of the final section already in the file, if any. Headers are
    /// the only lines starting with a lowercase field key.
    fn last_header(&self) -> io::Result<Option<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error),
        };

        let mut last = None;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.starts_with("symbol,") || line.starts_with("index,") {
                last = Some(line);
            }
        }
        Ok(last)
    }
}

fn header_line<R: RecordFields>(record: &R) -> String {
    record
        .field_names()
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn row_line<R: RecordFields>(record: &R) -> String {
    record
        .field_names()
        .into_iter()
        .map(|key| escape(&record.get(key).unwrap_or_else(|| SENTINEL.to_owned())))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tickergraph_core::{FieldValue, IndexQuote, MarketIndex, Symbol, SymbolQuote};

    fn symbol_record(name: &str, fullname: &str) -> SymbolQuote {
        let mut quote = SymbolQuote::unavailable(Symbol::parse(name).expect("valid symbol"));
        quote.fullname = FieldValue::Value(fullname.to_owned());
        quote
    }

    fn read(path: &std::path::Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .expect("export file")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn header_is_written_once_for_a_stable_field_set() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("quotes.csv");
        let exporter = CsvExporter::new(&path);

        exporter
            .append(&[symbol_record("AAPL", "Apple Inc.")])
            .expect("first append");
        exporter
            .append(&[symbol_record("MSFT", "Microsoft Corp.")])
            .expect("second append");

        let lines = read(&path);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("symbol,fullname,latestPrice"));
        assert!(lines[1].starts_with("AAPL,"));
        assert!(lines[2].starts_with("MSFT,"));
    }

    #[test]
    fn changing_the_field_set_starts_a_new_header_section() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("quotes.csv");
        let exporter = CsvExporter::new(&path);

        exporter
            .append(&[symbol_record("AAPL", "Apple Inc.")])
            .expect("symbol append");
        exporter
            .append(&[IndexQuote::unavailable(MarketIndex::Dow)])
            .expect("index append");

        let lines = read(&path);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("index,latestPrice"));
        assert!(lines[3].starts_with("DOW,"));
    }

    #[test]
    fn values_with_commas_are_quoted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("quotes.csv");
        let exporter = CsvExporter::new(&path);

        exporter
            .append(&[symbol_record("ACME", "Acme, Inc.")])
            .expect("append");

        let lines = read(&path);
        assert!(lines[1].contains("\"Acme, Inc.\""));
    }

    #[test]
    fn empty_slices_leave_no_file_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("quotes.csv");
        let exporter = CsvExporter::new(&path);

        let no_records: [SymbolQuote; 0] = [];
        exporter.append(&no_records).expect("append");
        assert!(!path.exists());
    }
}
