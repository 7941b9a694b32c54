/// CSV record sets: the `add_contacts` input file and prior harvest output.
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::session::PeasantError;

/// Column naming the profile slug of a record.
pub const PUBLIC_IDENTIFIER_COLUMN: &str = "public_identifier";

/// Header row plus data rows of one CSV file.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl RecordSet {
    /// Read a CSV document with a header row. Rows may differ in length.
    ///
    /// # Errors
    ///
    /// Returns the underlying `csv::Error` on malformed input or I/O failure.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    /// Read a CSV file from disk.
    ///
    /// # Errors
    ///
    /// Returns `PeasantError::Io` if the file cannot be opened and
    /// `PeasantError::Csv` if it is not valid CSV.
    pub fn load(path: &Path) -> Result<Self, PeasantError> {
        let file = std::fs::File::open(path).map_err(|source| PeasantError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(file).map_err(|source| PeasantError::Csv {
            path: path.to_owned(),
            source,
        })
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Whether the header row names `name`.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Non-empty values of one column, in row order. Empty when the column is absent.
    pub fn column(&self, name: &str) -> impl Iterator<Item = &str> {
        let index = self.headers.iter().position(|h| h == name);
        self.rows
            .iter()
            .filter_map(move |row| index.and_then(|i| row.get(i)))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Distinct profile slugs, used to skip profiles already contacted.
    #[must_use]
    pub fn public_identifiers(&self) -> BTreeSet<String> {
        self.column(PUBLIC_IDENTIFIER_COLUMN)
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE: &str = "\
first_name,last_name,public_identifier,occupation
Jane,Doe,jane-doe,Pentester
John,Roe,john-roe,
Jane,Doe,jane-doe,Pentester
Short,Row
";

    #[test]
    fn test_reads_headers_and_rows() {
        let set = RecordSet::from_reader(PEOPLE.as_bytes()).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(
            set.headers().iter().collect::<Vec<_>>(),
            ["first_name", "last_name", "public_identifier", "occupation"]
        );
        assert!(set.has_column(PUBLIC_IDENTIFIER_COLUMN));
    }

    #[test]
    fn test_public_identifiers_deduplicated() {
        let set = RecordSet::from_reader(PEOPLE.as_bytes()).unwrap();
        let ids: Vec<_> = set.public_identifiers().into_iter().collect();
        assert_eq!(ids, ["jane-doe", "john-roe"]);
    }

    #[test]
    fn test_column_skips_blank_and_short_rows() {
        let set = RecordSet::from_reader(PEOPLE.as_bytes()).unwrap();
        let occupations: Vec<_> = set.column("occupation").collect();
        assert_eq!(occupations, ["Pentester", "Pentester"]);
    }

    #[test]
    fn test_missing_column_is_empty() {
        let set = RecordSet::from_reader(PEOPLE.as_bytes()).unwrap();
        assert_eq!(set.column("industry").count(), 0);
        assert!(!set.has_column("industry"));
    }

    #[test]
    fn test_empty_input() {
        let set = RecordSet::from_reader("".as_bytes()).unwrap();
        assert!(set.is_empty());
        assert!(set.headers().is_empty());
        assert!(set.public_identifiers().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = RecordSet::load(Path::new("/nonexistent/peasant/people.csv"));
        assert!(matches!(result, Err(PeasantError::Io { .. })));
    }
}
