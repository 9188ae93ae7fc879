use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write dataset '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("column '{column}' not found, available columns: {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("row {row} has {found} fields but the header has {expected}")]
    TooManyFields {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("column '{column}' has {found} values for {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// An in-memory CSV table: one header row and its records, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Dataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let dataset = Self::from_csv_reader(reader)?;
        crate::info!(
            "Loaded {} rows with {} columns from {}",
            dataset.len(),
            dataset.headers.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: std::io::Read>(rdr: R) -> Result<Self, DatasetError> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);
        Self::from_csv_reader(reader)
    }

    fn from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let headers = reader.headers()?.clone();
        let mut records = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(DatasetError::TooManyFields {
                    row: row + 1,
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            records.push(record);
        }
        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize, DatasetError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DatasetError::MissingColumn {
                column: column.to_string(),
                available: self.headers.iter().map(str::to_string).collect(),
            })
    }

    /// Values of `column` in row order. A row too short to reach the column yields `None`.
    pub fn column(&self, column: &str) -> Result<Vec<Option<&str>>, DatasetError> {
        let index = self.column_index(column)?;
        Ok(self.records.iter().map(|r| r.get(index)).collect())
    }

    /// Stores `values` under `column`, one per row and aligned by position.
    ///
    /// An existing column with the same name is overwritten in place; otherwise the
    /// column is appended. Short rows are padded with empty fields first so every
    /// value lands under its header.
    pub fn set_column<S: AsRef<str>>(
        &mut self,
        column: &str,
        values: &[S],
    ) -> Result<(), DatasetError> {
        if values.len() != self.records.len() {
            return Err(DatasetError::ColumnLength {
                column: column.to_string(),
                expected: self.records.len(),
                found: values.len(),
            });
        }

        let index = match self.column_index(column) {
            Ok(index) => index,
            Err(_) => {
                self.headers.push_field(column);
                self.headers.len() - 1
            }
        };

        for (record, value) in self.records.iter_mut().zip(values) {
            let mut fields: Vec<&str> = record.iter().collect();
            fields.resize(self.headers.len().max(fields.len()), "");
            fields[index] = value.as_ref();
            *record = StringRecord::from(fields);
        }
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DatasetError> {
        let path = path.as_ref();
        let writer = WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| DatasetError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        self.write_csv(writer)?;
        crate::info!("Wrote {} rows to {}", self.len(), path.display());
        Ok(())
    }

    pub fn write_to_writer<W: std::io::Write>(&self, wtr: W) -> Result<(), DatasetError> {
        self.write_csv(WriterBuilder::new().flexible(true).from_writer(wtr))
    }

    fn write_csv<W: std::io::Write>(&self, mut writer: csv::Writer<W>) -> Result<(), DatasetError> {
        writer.write_record(&self.headers)?;
        for record in &self.records {
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
